use axum::Json;
use axum::extract::State;

use super::body::JsonBody;
use crate::errors::AppError;
use crate::types::{AppState, SearchPositionRequest, SearchPositionResponse};

pub(super) async fn search_position(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SearchPositionRequest>,
) -> Result<Json<SearchPositionResponse>, AppError> {
    let response = state.services.position.locate(payload).await?;
    Ok(Json(response))
}
