use serde::{Deserialize, Serialize};

/// Query string sent to the photo listing endpoint.
#[derive(Debug, Serialize)]
pub struct PhotoQuery<'a> {
    pub(crate) earth_date: &'a str,
    pub(crate) camera: &'a str,
    pub(crate) api_key: &'a str,
}

impl PhotoQuery<'_> {
    pub(crate) fn from<'a>(earth_date: &'a str, camera: &'a str, api_key: &'a str) -> PhotoQuery<'a> {
        PhotoQuery { earth_date, camera, api_key }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PhotoListing {
    /// `null` and a missing key both mean no photos.
    #[serde(default)]
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub sol: Option<u32>,
    #[serde(default)]
    pub earth_date: Option<String>,
    #[serde(default)]
    pub camera: Option<Camera>,
    pub img_src: String,
    /// Only the first photo's rover is read, to name the output folder.
    #[serde(default)]
    pub rover: Option<Rover>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rover {
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}
