use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use indicatif::ProgressBar;
use reqwest::{Client, StatusCode};

use crate::date::normalize_earth_date;
use crate::error::Error;
use crate::folder::{photo_file_name, resolve_folder};
use crate::model::{Photo, PhotoListing, PhotoQuery};
use crate::progress::{DownloadBarHelper, SpinnerHelper};
use crate::viewer::ImageViewer;

pub const NASA_API_URL: &str = "https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity/photos";

#[async_trait]
pub trait PhotoLoader {
    /// Fetches the photo listing for `earth_date` (`YYYYMMDD`) and `camera` and stores every
    /// photo under `<output_dir>/<earth_date>_<rover>_<camera>/`. Returns the written files
    /// in API order.
    async fn download_mars_photos(
        &self,
        earth_date: &str,
        camera: &str,
        api_key: &str,
        output_dir: &Path,
        show: bool,
    ) -> Result<Vec<PathBuf>, Error>;
}

pub struct MarsPhotoService {
    pub client: Client,
    pub api_url: String,
    pub viewer: ImageViewer,
}

impl MarsPhotoService {
    pub fn new(client: Client) -> Self {
        MarsPhotoService {
            client,
            api_url: String::from(NASA_API_URL),
            viewer: ImageViewer::default(),
        }
    }
}

#[async_trait]
impl PhotoLoader for MarsPhotoService {
    async fn download_mars_photos(
        &self,
        earth_date: &str,
        camera: &str,
        api_key: &str,
        output_dir: &Path,
        show: bool,
    ) -> Result<Vec<PathBuf>, Error> {
        let date = normalize_earth_date(earth_date)?;

        let fetch_spinner =
            SpinnerHelper::create(format!("Fetch {camera} photos taken on {date}"))?;
        let photos = self.fetch_photos(&date, camera, api_key).await;
        fetch_spinner.finish_and_clear();
        let photos = photos?;

        let rover_name = photos
            .first()
            .and_then(|photo| photo.rover.as_ref())
            .map(|rover| rover.name.as_str())
            .ok_or_else(|| Error::MissingRover("First photo in the listing has no rover".to_string()))?;
        let folder = resolve_folder(output_dir, earth_date, rover_name, camera)?;

        let download_bar = DownloadBarHelper::create(photos.len() as u64)?;
        let files = self
            .download_photos(&photos, &folder, show, &download_bar)
            .await?;
        download_bar.finish_and_clear();

        Ok(files)
    }
}

impl MarsPhotoService {
    async fn fetch_photos(
        &self,
        earth_date: &str,
        camera: &str,
        api_key: &str,
    ) -> Result<Vec<Photo>, Error> {
        log::debug!("Requesting photo listing from {url}", url = self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .query(&PhotoQuery::from(earth_date, camera, api_key))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let response_body = response.text().await?;
                let photos = serde_json::from_str::<PhotoListing>(&response_body)?
                    .photos
                    .unwrap_or_default();
                log::info!("Photo listing for {earth_date} and {camera} has {} entries", photos.len());

                if photos.is_empty() {
                    Err(Error::NoPhotos(
                        "No photos found for the specified date and camera.".to_string(),
                    ))
                } else {
                    Ok(photos)
                }
            }
            status => {
                log::warn!(
                    "Photo listing request failed with {status}: {body}",
                    body = response.text().await.unwrap_or_default()
                );
                Err(Error::Connectivity(format!(
                    "Failed to connect to NASA API. Status code: {status}"
                )))
            }
        }
    }

    async fn download_photos(
        &self,
        photos: &[Photo],
        folder: &Path,
        show: bool,
        progress: &ProgressBar,
    ) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::with_capacity(photos.len());

        for (index, photo) in photos.iter().enumerate() {
            let bytes = self.download_photo(&photo.img_src).await?;

            let file_name = folder.join(photo_file_name(index + 1));
            let mut slice: &[u8] = &bytes;
            let mut out = File::create(&file_name)?;
            io::copy(&mut slice, &mut out)?;

            progress.suspend(|| println!("Downloaded {}", file_name.display()));
            progress.inc(1);

            if show {
                self.viewer.show(&file_name, &bytes)?;
            }
            files.push(file_name);
        }

        Ok(files)
    }

    async fn download_photo(&self, img_src: &str) -> Result<Vec<u8>, Error> {
        log::debug!("Downloading {img_src}");
        let response = self.client.get(img_src).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.bytes().await?.to_vec()),
            status => Err(Error::Download(format!(
                "Something went wrong downloading {img_src}. Status code: {status}"
            ))),
        }
    }
}
