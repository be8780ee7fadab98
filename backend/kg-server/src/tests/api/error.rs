use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_duplicate_user_returns_400_without_echoing_username() {
    let (status, json) = body_json(ApiError::DuplicateUser {
        username: "alice".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["code"], "DUPLICATE_USER");
    assert_eq!(json["message"], "Username already exists");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401() {
    let (status, json) = body_json(ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "fail");
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_missing_fields_lists_each_field() {
    let (status, json) = body_json(ApiError::MissingFields {
        fields: vec!["my_image", "username"],
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_FIELDS");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("my_image"));
    assert!(message.contains("username"));
    assert!(!message.contains("model"));
}

#[tokio::test]
async fn test_unsupported_method_returns_405() {
    let (status, json) = body_json(ApiError::UnsupportedMethod {
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "UNSUPPORTED_METHOD");
}

#[tokio::test]
async fn test_validation_error_includes_field() {
    let (status, json) = body_json(ApiError::Validation {
        message: "username cannot be empty".into(),
        field: Some("uname".into()),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "uname");
}

#[tokio::test]
async fn test_internal_error_omits_field() {
    let (status, json) = body_json(ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json.get("field").is_none());
}

#[test]
fn test_db_error_maps_to_internal() {
    let db_error = kg_db::DbError::Initialization {
        message: "bad row".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_undecodable_image_maps_to_bad_request() {
    let source = image::load_from_memory(b"not an image").unwrap_err();
    let classifier_error = kg_classifier::ClassifierError::Decode {
        source,
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = classifier_error.into();

    assert_eq!(api_error.error_code(), "BAD_REQUEST");
}

#[test]
fn test_backend_failure_maps_to_internal() {
    let classifier_error = kg_classifier::ClassifierError::Backend {
        model: "knee_vgg16".into(),
        message: "connection refused".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = classifier_error.into();

    assert_eq!(api_error.error_code(), "INTERNAL_ERROR");
}
