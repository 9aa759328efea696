//! Downloads Mars rover photos for a given earth date and camera from the NASA Mars Rover
//! Photos API into `<output_dir>/<earth_date>_<rover>_<camera>/photo_<n>.jpg`.

pub mod date;
pub mod error;
pub mod folder;
pub mod model;
pub mod progress;
pub mod service;
pub mod viewer;
