use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::{App, AppStore, ListedApp};
use crate::services::Services;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
}

impl AppState {
    pub fn new(app_store: Arc<dyn AppStore>) -> Self {
        let deps = Arc::new(Dependencies { app_store });
        Self {
            services: Services::new(deps),
        }
    }
}

pub struct Dependencies {
    pub app_store: Arc<dyn AppStore>,
}

#[derive(Default, Deserialize)]
pub struct SuggestRequest {
    pub term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// `appId` may arrive as a number or a numeric string, under either
/// spelling; `num` and `page` likewise accept both forms.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPositionRequest {
    pub keyword: Option<String>,
    pub country: Option<String>,
    #[serde(alias = "app_id")]
    pub app_id: Option<Value>,
    pub num: Option<Value>,
    pub page: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPositionResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub keyword: String,
    pub app_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_info: Option<App>,
    pub total_results: usize,
    pub search_results: Vec<ListedApp>,
}

#[derive(Default, Deserialize)]
pub struct SearchAppRequest {
    #[serde(alias = "appId")]
    pub app_id: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchAppResponse {
    pub search_results: App,
}
