use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Error;

pub struct SpinnerHelper;

impl SpinnerHelper {
  pub fn create(message: String) -> Result<ProgressBar, Error> {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_style(
      ProgressStyle::default_spinner()
        // For more spinners check out the cli-spinners project:
        // https://github.com/sindresorhus/cli-spinners/blob/master/spinners.json
        .tick_strings(&["◐", "◓", "◑", "◒", "●"])
        .template("{spinner:.red} {msg}")?,
    );
    spinner.set_message(message);
    Ok(spinner)
  }
}

pub struct DownloadBarHelper;

impl DownloadBarHelper {
  pub fn create(photo_count: u64) -> Result<ProgressBar, Error> {
    let bar = ProgressBar::new(photo_count);
    bar.set_style(
      ProgressStyle::default_bar()
        .template("{bar:30.red/white} {pos}/{len} photos {msg}")?
        .progress_chars("=> "),
    );
    Ok(bar)
  }
}
