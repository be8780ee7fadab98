use crate::{
    AppState, get_prediction_history, health, login, pages, register, submit, unsupported_method,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// URL prefix uploaded images are served under
pub const UPLOAD_ROUTE: &str = "/static/tests";

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.upload_dir);

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/first", get(pages::first))
        .route("/profile", get(pages::profile))
        .route("/chart", get(pages::chart))
        .route("/performance", get(pages::performance))
        .route("/index", get(pages::index).post(pages::index))
        // Auth
        .route("/login", get(pages::login).post(login))
        .route("/register", get(pages::register).post(register))
        // Predictions; X-ray uploads routinely exceed the default body limit
        .route(
            "/submit",
            post(submit)
                .fallback(unsupported_method)
                .layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/get_prediction_history/{username}",
            get(get_prediction_history),
        )
        .nest_service(UPLOAD_ROUTE, uploads)
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
