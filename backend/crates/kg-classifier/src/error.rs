use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Image could not be decoded: {source} {location}")]
    Decode {
        #[source]
        source: image::ImageError,
        location: ErrorLocation,
    },

    #[error("Classifier backend '{model}' failed: {message} {location}")]
    Backend {
        model: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Classifier '{model}' returned unexpected output: {message} {location}")]
    UnexpectedOutput {
        model: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Classifier setup failed: {message} {location}")]
    Setup {
        message: String,
        location: ErrorLocation,
    },
}

pub type ClassifierResult<T> = StdResult<T, ClassifierError>;
