use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
  ReqwestError(reqwest::Error),
  JsonError(serde_json::Error),
  IoError(std::io::Error),
  ImageError(image::ImageError),
  TemplateError(indicatif::style::TemplateError),
  InvalidDate(String),
  Connectivity(String),
  NoPhotos(String),
  Download(String),
  MissingRover(String),
  Viewer(String),
}

impl Error {
  /// Failures the pipeline reports to the user and then exits cleanly from: a bad date,
  /// a non-success answer from the metadata endpoint, or an empty result. Everything
  /// else aborts the run.
  pub fn is_reported(&self) -> bool {
    matches!(self, Error::InvalidDate(_) | Error::Connectivity(_) | Error::NoPhotos(_))
  }
}

impl std::error::Error for Error {}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::ReqwestError(e) => std::fmt::Display::fmt(e, f),
      Error::JsonError(e) => std::fmt::Display::fmt(e, f),
      Error::IoError(e) => std::fmt::Display::fmt(e, f),
      Error::ImageError(e) => std::fmt::Display::fmt(e, f),
      Error::TemplateError(e) => std::fmt::Display::fmt(e, f),
      Error::InvalidDate(e) => std::fmt::Display::fmt(e, f),
      Error::Connectivity(e) => std::fmt::Display::fmt(e, f),
      Error::NoPhotos(e) => std::fmt::Display::fmt(e, f),
      Error::Download(e) => std::fmt::Display::fmt(e, f),
      Error::MissingRover(e) => std::fmt::Display::fmt(e, f),
      Error::Viewer(e) => std::fmt::Display::fmt(e, f),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::ReqwestError(reqwest_error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(serde_json_error: serde_json::Error) -> Self {
    Error::JsonError(serde_json_error)
  }
}

impl From<std::io::Error> for Error {
  fn from(io_error: std::io::Error) -> Self {
    Error::IoError(io_error)
  }
}

impl From<image::ImageError> for Error {
  fn from(image_error: image::ImageError) -> Self {
    Error::ImageError(image_error)
  }
}

impl From<indicatif::style::TemplateError> for Error {
  fn from(template_error: indicatif::style::TemplateError) -> Self {
    Error::TemplateError(template_error)
  }
}
