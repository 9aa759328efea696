mod cli;

use cli::Cli;
use mars_photos::error::Error;
use mars_photos::service::{MarsPhotoService, PhotoLoader};
use mars_photos::viewer::ImageViewer;

use clap::Parser;
use reqwest::Client;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let Cli {
    earth_date,
    camera,
    key,
    output_dir,
    show,
    api_url,
    viewer,
  } = Cli::parse();

  let service = MarsPhotoService {
    api_url,
    viewer: viewer.as_deref().map(ImageViewer::with_program).unwrap_or_default(),
    ..MarsPhotoService::new(Client::new())
  };

  match service
    .download_mars_photos(&earth_date, &camera, &key, &output_dir, show)
    .await
  {
    Ok(files) => {
      log::info!("Downloaded {count} photos", count = files.len());
      Ok(())
    }
    Err(error) if error.is_reported() => {
      println!("{error}");
      Ok(())
    }
    Err(error) => Err(error),
  }
}
