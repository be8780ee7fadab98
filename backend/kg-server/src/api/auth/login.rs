use crate::{ApiResult, AppState, LoginRequest, LoginResponse, SUCCESS_STATUS};

use kg_auth::AuthService;

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /login
///
/// Unknown username and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;

    let service = AuthService::new(state.pool.clone());
    let profile = service.login(&req.uname, &req.pwd).await?;

    Ok(Json(LoginResponse {
        status: SUCCESS_STATUS,
        message: "Login successful",
        user: profile.into(),
    }))
}
