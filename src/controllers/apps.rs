use axum::Json;
use axum::extract::State;

use super::body::JsonBody;
use crate::errors::AppError;
use crate::types::{AppState, SearchAppRequest, SearchAppResponse};

pub(super) async fn search_app(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SearchAppRequest>,
) -> Result<Json<SearchAppResponse>, AppError> {
    let response = state.services.apps.lookup(payload).await?;
    Ok(Json(response))
}
