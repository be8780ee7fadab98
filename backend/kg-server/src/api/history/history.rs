use crate::{ApiResult, AppState, HistoryService, PredictionHistoryDto};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /get_prediction_history/{username}
///
/// Bare JSON array, newest first. An unknown user simply has no history.
pub async fn get_prediction_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<PredictionHistoryDto>>> {
    let service = HistoryService::new(state.pool.clone());
    let records = service.history(&username).await?;

    Ok(Json(
        records.into_iter().map(PredictionHistoryDto::from).collect(),
    ))
}
