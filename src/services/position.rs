use std::sync::Arc;

use tracing::info;

use super::params::{Field, positive_integer, required_integer, required_text};
use crate::errors::AppError;
use crate::provider::{ListedApp, SearchQuery};
use crate::types::{Dependencies, SearchPositionRequest, SearchPositionResponse};

const KEYWORD: Field = Field {
    name: "keyword",
    message: "You must provide a keyword in request body",
};
const COUNTRY: Field = Field {
    name: "country",
    message: "You must provide a country code in request body",
};
const APP_ID: Field = Field {
    name: "appId",
    message: "You must provide an app id in request body",
};
const NUM: Field = Field {
    name: "num",
    message: "",
};
const PAGE: Field = Field {
    name: "page",
    message: "",
};

#[derive(Clone)]
pub struct PositionService {
    deps: Arc<Dependencies>,
}

impl PositionService {
    pub const DEFAULT_NUM: u32 = 1000;
    pub const DEFAULT_PAGE: u32 = 1;

    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self { deps }
    }

    /// Rank of `appId` for `keyword` within a single fetched page.
    ///
    /// Only the requested page is scanned; an app ranked on another page is
    /// reported as not found.
    pub async fn locate(
        &self,
        payload: SearchPositionRequest,
    ) -> Result<SearchPositionResponse, AppError> {
        let keyword = required_text(payload.keyword, &KEYWORD)?;
        let country = required_text(payload.country, &COUNTRY)?;
        let app_id = required_integer(payload.app_id.as_ref(), &APP_ID)?;
        let num = positive_integer(payload.num.as_ref(), Self::DEFAULT_NUM, &NUM)?;
        let page = positive_integer(payload.page.as_ref(), Self::DEFAULT_PAGE, &PAGE)?;
        info!(
            "position request received: keyword='{}' country={} app_id={} num={} page={}",
            keyword, country, app_id, num, page
        );

        let query = SearchQuery {
            term: &keyword,
            country: &country,
            num,
            page,
        };
        let offset = query.offset();
        let apps = self.deps.app_store.search(query).await?;
        let search_results = apps.iter().map(ListedApp::from).collect::<Vec<_>>();
        let total_results = apps.len();

        let Some(index) = apps.iter().position(|app| app.id == Some(app_id)) else {
            info!(
                "position completed: keyword='{}' app_id={} found=false total={}",
                keyword, app_id, total_results
            );
            return Ok(SearchPositionResponse {
                found: false,
                position: None,
                keyword,
                app_id,
                app_name: None,
                developer: None,
                app_info: None,
                total_results,
                search_results,
            });
        };

        let position = offset + index + 1;
        let app = apps[index].clone();
        info!(
            "position completed: keyword='{}' app_id={} found=true position={}",
            keyword, app_id, position
        );
        Ok(SearchPositionResponse {
            found: true,
            position: Some(position),
            keyword,
            app_id,
            app_name: app.title.clone(),
            developer: app.developer.clone(),
            app_info: Some(app),
            total_results,
            search_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::services::fake::{FakeStore, app};

    fn ranked(count: i64) -> Vec<crate::provider::App> {
        (1..=count)
            .map(|id| app(id * 100, &format!("App {}", id), "Dev"))
            .collect()
    }

    fn request(app_id: serde_json::Value) -> SearchPositionRequest {
        SearchPositionRequest {
            keyword: Some("puzzle".into()),
            country: Some("us".into()),
            app_id: Some(app_id),
            ..SearchPositionRequest::default()
        }
    }

    #[tokio::test]
    async fn reports_one_based_position_on_first_page() {
        let store = Arc::new(FakeStore {
            ranked: ranked(5),
            ..FakeStore::default()
        });
        let response = PositionService::new(store.deps())
            .locate(request(json!(300)))
            .await
            .unwrap();

        assert!(response.found);
        assert_eq!(response.position, Some(3));
        assert_eq!(response.app_name.as_deref(), Some("App 3"));
        assert_eq!(response.developer.as_deref(), Some("Dev"));
        assert_eq!(response.app_info.as_ref().and_then(|a| a.id), Some(300));
        assert_eq!(response.total_results, 5);
        assert_eq!(response.search_results.len(), 5);

        let searches = store.searches.lock().unwrap();
        assert_eq!(
            searches.as_slice(),
            &[("puzzle".to_string(), "us".to_string(), 1000, 1)]
        );
    }

    #[tokio::test]
    async fn position_accounts_for_earlier_pages() {
        let store = Arc::new(FakeStore {
            ranked: ranked(25),
            ..FakeStore::default()
        });
        let mut payload = request(json!("2300"));
        payload.num = Some(json!(10));
        payload.page = Some(json!("3"));

        let response = PositionService::new(store.deps())
            .locate(payload)
            .await
            .unwrap();

        // id 2300 is the 23rd ranked app: index 2 on page 3 of size 10.
        assert!(response.found);
        assert_eq!(response.position, Some(23));
        assert_eq!(response.total_results, 5);
    }

    #[tokio::test]
    async fn absent_from_page_is_not_found() {
        let store = Arc::new(FakeStore {
            ranked: ranked(25),
            ..FakeStore::default()
        });
        let mut payload = request(json!(2300));
        payload.num = Some(json!(10));

        let response = PositionService::new(store.deps())
            .locate(payload)
            .await
            .unwrap();

        assert!(!response.found);
        assert_eq!(response.position, None);
        assert_eq!(response.app_info, None);
        assert_eq!(response.total_results, 10);
        assert_eq!(response.app_id, 2300);
    }

    #[tokio::test]
    async fn non_numeric_app_id_is_rejected_before_searching() {
        let store = Arc::new(FakeStore {
            ranked: ranked(3),
            ..FakeStore::default()
        });
        let err = PositionService::new(store.deps())
            .locate(request(json!("com.example.app")))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error(), "Param appId is invalid");
        assert!(store.searches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn required_fields_are_checked_in_order() {
        let service = PositionService::new(Arc::new(FakeStore::default()).deps());

        let err = service
            .locate(SearchPositionRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.error(), "Param keyword is required");

        let mut payload = request(json!(1));
        payload.country = Some("".into());
        let err = service.locate(payload).await.unwrap_err();
        assert_eq!(err.error(), "Param country is required");

        let mut payload = request(json!(1));
        payload.app_id = None;
        let err = service.locate(payload).await.unwrap_err();
        assert_eq!(err.error(), "Param appId is required");
        assert_eq!(err.message(), "You must provide an app id in request body");
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let service = PositionService::new(Arc::new(FakeStore::default()).deps());
        let mut payload = request(json!(1));
        payload.page = Some(json!(0));

        let err = service.locate(payload).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error(), "Param page is invalid");
    }
}
