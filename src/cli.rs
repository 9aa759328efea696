use std::path::PathBuf;

use clap::Parser;

use mars_photos::service::NASA_API_URL;

/// Download Mars rover photos taken on a given earth date by a given camera from the NASA
/// Mars Rover Photos API.
#[derive(Parser)]
pub(crate) struct Cli {
  /// Earth date the photos were taken on, formatted as `YYYYMMDD` (e.g. `20150618`).
  #[clap(long)]
  pub(crate) earth_date: String,
  /// Camera the photos were taken with (e.g. `FHAZ`, `RHAZ`, `NAVCAM`). Passed to the API as is.
  #[clap(long)]
  pub(crate) camera: String,
  /// Your NASA API key (get one at `api.nasa.gov`, or use `DEMO_KEY`).
  #[clap(long, env = "NASA_API_KEY", hide_env_values = true)]
  pub(crate) key: String,
  /// Directory the photos are saved to. Each query gets its own sub directory named
  /// `<earth date>_<rover>_<camera>`.
  #[clap(long, default_value = "Mars_Photos")]
  pub(crate) output_dir: PathBuf,
  /// Open every photo in an image viewer after it has been downloaded.
  #[clap(long)]
  pub(crate) show: bool,
  /// Photo listing endpoint of the rover to query.
  #[clap(long, env = "MARS_PHOTOS_API_URL", default_value = NASA_API_URL)]
  pub(crate) api_url: String,
  /// Program used to show photos with `--show`. Defaults to the platform's file opener.
  #[clap(long, env = "MARS_PHOTOS_VIEWER")]
  pub(crate) viewer: Option<String>,
}
