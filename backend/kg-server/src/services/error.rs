use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("Missing required fields: {fields:?} {location}")]
    MissingFields {
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    #[error("Failed to store upload at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Classification failed: {source} {location}")]
    Classifier {
        #[source]
        source: kg_classifier::ClassifierError,
        location: ErrorLocation,
    },

    #[error("Failed to record prediction: {source} {location}")]
    Database {
        #[source]
        source: kg_db::DbError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, PredictionError>;
