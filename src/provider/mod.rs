//! Access to the App Store search, hint and lookup endpoints.

mod hints;
mod itunes;
mod markets;
mod model;

pub use itunes::{ItunesClient, ItunesEndpoints};
pub use model::{App, ListedApp};

#[cfg(test)]
pub(crate) use model::RawApp;

use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_COUNTRY: &str = "us";
pub const DEFAULT_LANGUAGE: &str = "en-us";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider responded with status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("unexpected provider payload: {0}")]
    Decode(String),

    #[error("{0}")]
    NotFound(String),

    #[error("unsupported country code: {0}")]
    UnsupportedCountry(String),
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct SearchQuery<'a> {
    pub term: &'a str,
    pub country: &'a str,
    pub num: u32,
    pub page: u32,
}

impl SearchQuery<'_> {
    /// Zero-based offset of the first result on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.num as usize
    }
}

#[async_trait]
pub trait AppStore: Send + Sync {
    /// Search hint terms for `term`, in provider order.
    async fn suggest(&self, term: &str, country: &str) -> Result<Vec<String>, ProviderError>;

    /// Fully resolved apps on one page of the ranked search results.
    async fn search(&self, query: SearchQuery<'_>) -> Result<Vec<App>, ProviderError>;

    /// Full record for a single app id.
    async fn app(&self, id: i64, country: &str) -> Result<App, ProviderError>;
}
