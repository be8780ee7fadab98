pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        login::login,
        login_request::LoginRequest,
        login_response::LoginResponse,
        register::register,
        register_request::RegisterRequest,
        status_response::{SUCCESS_STATUS, StatusResponse},
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    history::{
        history::get_prediction_history, prediction_history_dto::PredictionHistoryDto,
    },
    predictions::{
        submit::{submit, unsupported_method},
        submit_form::SubmitForm,
    },
};
pub use app_state::AppState;
pub use routes::{UPLOAD_ROUTE, build_router};
pub use services::{
    error::PredictionError,
    history_service::HistoryService,
    prediction_service::{
        PredictionOutcome, PredictionService, UploadedImage, sanitize_filename, upload_url,
    },
};
