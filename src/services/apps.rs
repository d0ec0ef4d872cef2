use std::sync::Arc;

use tracing::info;

use super::params::{Field, required_integer};
use crate::errors::AppError;
use crate::provider::DEFAULT_COUNTRY;
use crate::types::{Dependencies, SearchAppRequest, SearchAppResponse};

const APP_ID: Field = Field {
    name: "app_id",
    message: "You must provide an app_id in request body",
};

#[derive(Clone)]
pub struct AppLookupService {
    deps: Arc<Dependencies>,
}

impl AppLookupService {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self { deps }
    }

    pub async fn lookup(&self, payload: SearchAppRequest) -> Result<SearchAppResponse, AppError> {
        let app_id = required_integer(payload.app_id.as_ref(), &APP_ID)?;
        info!("app lookup request received: app_id={}", app_id);

        let app = self.deps.app_store.app(app_id, DEFAULT_COUNTRY).await?;

        info!(
            "app lookup completed: app_id={} title={:?}",
            app_id, app.title
        );
        Ok(SearchAppResponse { search_results: app })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::services::fake::{FakeStore, app};

    #[tokio::test]
    async fn returns_full_record() {
        let store = Arc::new(FakeStore {
            ranked: vec![app(42, "Notes", "Acme")],
            ..FakeStore::default()
        });
        let response = AppLookupService::new(store.deps())
            .lookup(SearchAppRequest {
                app_id: Some(json!("42")),
            })
            .await
            .unwrap();

        assert_eq!(response.search_results.title.as_deref(), Some("Notes"));
        assert_eq!(
            response.search_results.description.as_deref(),
            Some("Notes description")
        );
    }

    #[tokio::test]
    async fn missing_app_id_is_rejected() {
        let err = AppLookupService::new(Arc::new(FakeStore::default()).deps())
            .lookup(SearchAppRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error(), "Param app_id is required");
    }

    #[tokio::test]
    async fn unknown_app_is_an_internal_error() {
        let err = AppLookupService::new(Arc::new(FakeStore::default()).deps())
            .lookup(SearchAppRequest {
                app_id: Some(json!(7)),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "App not found (404)");
    }
}
