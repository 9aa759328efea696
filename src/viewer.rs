use std::path::Path;
use std::process::Command;

use crate::error::Error;

#[cfg(target_os = "windows")]
const DEFAULT_VIEWER: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(target_os = "macos")]
const DEFAULT_VIEWER: &[&str] = &["open"];
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_VIEWER: &[&str] = &["xdg-open"];

/// Opens downloaded photos in an external image viewer.
pub struct ImageViewer {
    program: Vec<String>,
}

impl Default for ImageViewer {
    fn default() -> Self {
        ImageViewer { program: DEFAULT_VIEWER.iter().map(|s| s.to_string()).collect() }
    }
}

impl ImageViewer {
    pub fn with_program(program: &str) -> Self {
        ImageViewer { program: vec![program.to_string()] }
    }

    /// Decodes `bytes` first so a broken download fails the run instead of opening an empty
    /// viewer, then hands `path` to the viewer without waiting for it to exit.
    pub fn show(&self, path: &Path, bytes: &[u8]) -> Result<(), Error> {
        let image = image::load_from_memory(bytes)?;
        log::debug!(
            "Showing {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        let (program, args) = self
            .program
            .split_first()
            .ok_or_else(|| Error::Viewer("No image viewer configured".to_string()))?;
        Command::new(program).args(args).arg(path).spawn()?;
        Ok(())
    }
}
