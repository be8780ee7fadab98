use crate::{ApiResult, AppState, RegisterRequest, StatusResponse};

use kg_auth::AuthService;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let Json(req) = payload?;

    let service = AuthService::new(state.pool.clone());
    service.register(req.into()).await?;

    Ok(Json(StatusResponse::success("Registered successfully")))
}
