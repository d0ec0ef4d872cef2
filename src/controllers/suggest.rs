use axum::Json;
use axum::extract::State;

use super::body::JsonBody;
use crate::errors::AppError;
use crate::types::{AppState, SuggestRequest, SuggestResponse};

pub(super) async fn suggest(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let response = state.services.suggest.suggest(payload).await?;
    Ok(Json(response))
}
