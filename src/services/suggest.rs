use std::sync::Arc;

use tracing::info;

use super::params::{Field, required_text};
use crate::errors::AppError;
use crate::provider::DEFAULT_COUNTRY;
use crate::types::{Dependencies, SuggestRequest, SuggestResponse};

const TERM: Field = Field {
    name: "term",
    message: "You must provide a search term in request body",
};

#[derive(Clone)]
pub struct SuggestService {
    deps: Arc<Dependencies>,
}

impl SuggestService {
    pub fn new(deps: Arc<Dependencies>) -> Self {
        Self { deps }
    }

    pub async fn suggest(&self, payload: SuggestRequest) -> Result<SuggestResponse, AppError> {
        let term = required_text(payload.term, &TERM)?;
        info!("suggest request received: term='{}'", term);

        let suggestions = self.deps.app_store.suggest(&term, DEFAULT_COUNTRY).await?;

        info!(
            "suggest completed: term='{}' returned={}",
            term,
            suggestions.len()
        );
        Ok(SuggestResponse { suggestions })
    }
}
