use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::provider::{App, AppStore, ProviderError, RawApp, SearchQuery};
use crate::types::Dependencies;

pub(crate) fn app(id: i64, title: &str, developer: &str) -> App {
    App::from(RawApp {
        track_id: Some(id),
        track_name: Some(title.to_string()),
        artist_name: Some(developer.to_string()),
        description: Some(format!("{} description", title)),
        price: Some(0.0),
        supported_devices: vec!["iPhone15-iPhone15".to_string()],
        ..RawApp::default()
    })
}

/// In-memory store: `ranked` is the full search ranking, sliced per page.
#[derive(Default)]
pub(crate) struct FakeStore {
    pub suggestions: Vec<String>,
    pub ranked: Vec<App>,
    pub fail: bool,
    pub searches: Mutex<Vec<(String, String, u32, u32)>>,
}

impl FakeStore {
    pub fn deps(self: &Arc<Self>) -> Arc<Dependencies> {
        Arc::new(Dependencies {
            app_store: self.clone(),
        })
    }

    fn outage(&self) -> Result<(), ProviderError> {
        if self.fail {
            return Err(ProviderError::Status {
                endpoint: "search".to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl AppStore for FakeStore {
    async fn suggest(&self, _term: &str, _country: &str) -> Result<Vec<String>, ProviderError> {
        self.outage()?;
        Ok(self.suggestions.clone())
    }

    async fn search(&self, query: SearchQuery<'_>) -> Result<Vec<App>, ProviderError> {
        self.outage()?;
        self.searches.lock().unwrap().push((
            query.term.to_string(),
            query.country.to_string(),
            query.num,
            query.page,
        ));
        Ok(self
            .ranked
            .iter()
            .skip(query.offset())
            .take(query.num as usize)
            .cloned()
            .collect())
    }

    async fn app(&self, id: i64, _country: &str) -> Result<App, ProviderError> {
        self.outage()?;
        self.ranked
            .iter()
            .find(|app| app.id == Some(id))
            .cloned()
            .ok_or_else(|| ProviderError::NotFound("App not found (404)".to_string()))
    }
}
