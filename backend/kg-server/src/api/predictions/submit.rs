use crate::{ApiError, ApiResult, AppState, PredictionService, SubmitForm, pages};

use std::panic::Location;

use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Html,
};
use error_location::ErrorLocation;
use log::debug;

/// POST /submit
///
/// Renders the result page. A body that is not multipart at all is treated
/// as a form with every field missing.
pub async fn submit(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Html<String>> {
    let form = match multipart {
        Ok(multipart) => SubmitForm::from_multipart(multipart).await?,
        Err(rejection) => {
            debug!("Submission without multipart body: {}", rejection.body_text());
            SubmitForm::default()
        }
    };

    let service = PredictionService::new(
        state.pool.clone(),
        state.classifier.clone(),
        state.upload_dir.clone(),
    );
    let outcome = service
        .submit(form.image, form.model, form.username)
        .await?;

    Ok(pages::result(&outcome))
}

/// Any method other than POST on /submit
pub async fn unsupported_method() -> ApiError {
    ApiError::UnsupportedMethod {
        location: ErrorLocation::from(Location::caller()),
    }
}
