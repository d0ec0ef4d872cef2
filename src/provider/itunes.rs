use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use serde::Deserialize;
use tracing::info;
use url::Url;

use super::hints::parse_hint_terms;
use super::markets::storefront;
use super::model::RawApp;
use super::{App, AppStore, DEFAULT_LANGUAGE, ProviderError, SearchQuery};

const STORE_FRONT_HEADER: &str = "X-Apple-Store-Front";
const SEARCH_URL: &str = "https://search.itunes.apple.com/WebObjects/MZStore.woa/wa/search";
const HINTS_URL: &str = "https://search.itunes.apple.com/WebObjects/MZSearchHints.woa/wa/hints";
const LOOKUP_URL: &str = "https://itunes.apple.com/lookup";

#[derive(Debug, Clone)]
pub struct ItunesEndpoints {
    pub search: Url,
    pub hints: Url,
    pub lookup: Url,
}

impl Default for ItunesEndpoints {
    fn default() -> Self {
        Self {
            search: Url::parse(SEARCH_URL).expect("valid search url"),
            hints: Url::parse(HINTS_URL).expect("valid hints url"),
            lookup: Url::parse(LOOKUP_URL).expect("valid lookup url"),
        }
    }
}

#[derive(Deserialize)]
struct SearchPayload {
    #[serde(default)]
    bubbles: Vec<Bubble>,
}

#[derive(Deserialize)]
struct Bubble {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: HitId,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HitId {
    Number(i64),
    Text(String),
}

impl HitId {
    fn parse(&self) -> Option<i64> {
        match self {
            HitId::Number(id) => Some(*id),
            HitId::Text(id) => id.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct LookupPayload {
    #[serde(default)]
    results: Vec<RawApp>,
}

/// [`AppStore`] backed by the public iTunes endpoints.
#[derive(Clone)]
pub struct ItunesClient {
    http: reqwest::Client,
    endpoints: ItunesEndpoints,
}

impl ItunesClient {
    pub fn new(http: reqwest::Client, endpoints: ItunesEndpoints) -> Self {
        Self { http, endpoints }
    }

    fn store_id(country: &str) -> Result<u32, ProviderError> {
        storefront(country).ok_or_else(|| ProviderError::UnsupportedCountry(country.to_string()))
    }

    /// Resolve ids through the lookup endpoint, keeping software entries only.
    async fn lookup(&self, ids: &[i64], country: &str) -> Result<Vec<App>, ProviderError> {
        let joined = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let country = country.trim().to_ascii_lowercase();

        let response = self
            .http
            .get(self.endpoints.lookup.clone())
            .query(&[
                ("id", joined.as_str()),
                ("country", country.as_str()),
                ("entity", "software"),
            ])
            .send()
            .await?;
        let payload: LookupPayload = ensure_success(response, "lookup")?
            .json()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))?;

        Ok(payload
            .results
            .into_iter()
            .filter(RawApp::is_software)
            .map(App::from)
            .collect())
    }
}

#[async_trait]
impl AppStore for ItunesClient {
    async fn suggest(&self, term: &str, country: &str) -> Result<Vec<String>, ProviderError> {
        let store_id = Self::store_id(country)?;
        let response = self
            .http
            .get(self.endpoints.hints.clone())
            .query(&[("clientApplication", "Software"), ("term", term)])
            .header(STORE_FRONT_HEADER, format!("{},29", store_id))
            .send()
            .await?;
        let body = ensure_success(response, "hints")?.text().await?;
        let terms = parse_hint_terms(&body)?;

        info!("provider hints: term='{}' returned={}", term, terms.len());
        Ok(terms)
    }

    async fn search(&self, query: SearchQuery<'_>) -> Result<Vec<App>, ProviderError> {
        let store_id = Self::store_id(query.country)?;
        let response = self
            .http
            .get(self.endpoints.search.clone())
            .query(&[
                ("clientApplication", "Software"),
                ("media", "software"),
                ("term", query.term),
            ])
            .header(STORE_FRONT_HEADER, format!("{},24 t:native", store_id))
            .header(ACCEPT_LANGUAGE, DEFAULT_LANGUAGE)
            .send()
            .await?;
        let payload: SearchPayload = ensure_success(response, "search")?
            .json()
            .await
            .map_err(|err| ProviderError::Decode(err.to_string()))?;

        let ranked = payload
            .bubbles
            .into_iter()
            .next()
            .map(|bubble| bubble.results)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|hit| hit.id.parse())
            .collect::<Vec<_>>();

        let start = query.offset().min(ranked.len());
        let end = (start + query.num as usize).min(ranked.len());
        let page_ids = &ranked[start..end];
        info!(
            "provider search: term='{}' ranked={} page={} page_ids={}",
            query.term,
            ranked.len(),
            query.page,
            page_ids.len()
        );
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut resolved = self
            .lookup(page_ids, query.country)
            .await?
            .into_iter()
            .filter_map(|app| app.id.map(|id| (id, app)))
            .collect::<HashMap<_, _>>();

        Ok(page_ids
            .iter()
            .filter_map(|id| resolved.remove(id))
            .collect())
    }

    async fn app(&self, id: i64, country: &str) -> Result<App, ProviderError> {
        Self::store_id(country)?;
        self.lookup(&[id], country)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound("App not found (404)".to_string()))
    }
}

fn ensure_success(
    response: reqwest::Response,
    endpoint: &str,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}
