use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username already exists: {username} {location}")]
    DuplicateUser {
        username: String,
        location: ErrorLocation,
    },

    /// Deliberately does not say whether the username or the password was wrong
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid registration: {source} {location}")]
    Validation {
        #[source]
        source: kg_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store error: {source} {location}")]
    Database {
        #[source]
        source: kg_db::DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUser { .. } => "DUPLICATE_USER",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Hashing { .. } => "INTERNAL_ERROR",
            Self::Database { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
