use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub fn folder_name(earth_date: &str, rover_name: &str, camera: &str) -> String {
    format!("{earth_date}_{rover_name}_{camera}")
}

/// 1-based, in the order the API returned the photos.
pub fn photo_file_name(index: usize) -> String {
    format!("photo_{index}.jpg")
}

/// Creates `<output_dir>/<earth_date>_<rover_name>_<camera>` (and the output root) if missing.
/// `earth_date` is the raw input, not the normalized one.
pub fn resolve_folder(
    output_dir: &Path,
    earth_date: &str,
    rover_name: &str,
    camera: &str,
) -> Result<PathBuf, Error> {
    fs::create_dir_all(output_dir)?;

    let folder = output_dir.join(folder_name(earth_date, rover_name, camera));
    fs::create_dir_all(&folder)?;
    log::debug!("Resolved output folder {}", folder.display());

    Ok(folder)
}
