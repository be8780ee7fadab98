//! HTTP error type
//!
//! Every failure leaves the server as `{status: "fail", code, message}` with
//! a matching status code. Internal details are logged, never returned.

use crate::PredictionError;

use kg_auth::AuthError;
use kg_classifier::ClassifierError;
use kg_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const FAIL_STATUS: &str = "fail";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Always "fail"
    pub status: &'static str,
    /// Machine-readable error code (e.g., "MISSING_FIELDS")
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Offending field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Username taken (400)
    #[error("Duplicate user: {username} {location}")]
    DuplicateUser {
        username: String,
        location: ErrorLocation,
    },

    /// Unknown username or wrong password (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Submission without image, model or username (400)
    #[error("Missing required fields: {fields:?} {location}")]
    MissingFields {
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    /// Route exists but not for this method (405)
    #[error("Unsupported method {location}")]
    UnsupportedMethod { location: ErrorLocation },

    /// Registration payload rejected (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed body or undecodable image (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials { .. } => StatusCode::UNAUTHORIZED,
            Self::UnsupportedMethod { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DuplicateUser { .. }
            | Self::MissingFields { .. }
            | Self::Validation { .. }
            | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUser { .. } => "DUPLICATE_USER",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::MissingFields { .. } => "MISSING_FIELDS",
            Self::UnsupportedMethod { .. } => "UNSUPPORTED_METHOD",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (message, field) = match self {
            ApiError::DuplicateUser { .. } => ("Username already exists".to_string(), None),
            ApiError::InvalidCredentials { .. } => ("Invalid credentials".to_string(), None),
            ApiError::MissingFields { fields, .. } => (
                format!("Missing required data: {}", fields.join(", ")),
                None,
            ),
            ApiError::UnsupportedMethod { .. } => (
                "Invalid request method. Please submit the form correctly.".to_string(),
                None,
            ),
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::BadRequest { message, .. } => (message, None),
            ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            status: FAIL_STATUS,
            code,
            message,
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::DuplicateUser { username, .. } => ApiError::DuplicateUser { username, location },
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials { location },
            AuthError::Validation { source, .. } => ApiError::Validation {
                message: source.to_string(),
                field: None,
                location,
            },
            AuthError::Hashing { .. } | AuthError::Database { .. } => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: "Authentication service unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClassifierError> for ApiError {
    #[track_caller]
    fn from(e: ClassifierError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ClassifierError::Decode { source, .. } => ApiError::BadRequest {
                message: format!("Uploaded file is not a readable image: {}", source),
                location,
            },
            _ => {
                log::error!("Classifier error: {}", e);
                ApiError::Internal {
                    message: "Prediction failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<PredictionError> for ApiError {
    #[track_caller]
    fn from(e: PredictionError) -> Self {
        match e {
            PredictionError::MissingFields { fields, .. } => ApiError::MissingFields {
                fields,
                location: ErrorLocation::from(Location::caller()),
            },
            PredictionError::Storage { .. } => {
                log::error!("Upload storage error: {}", e);
                ApiError::Internal {
                    message: "Failed to store uploaded image".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            PredictionError::Classifier { source, .. } => source.into(),
            PredictionError::Database { source, .. } => source.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::BadRequest {
            message: format!("Malformed form data: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
