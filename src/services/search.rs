//! Client for the third-party restaurant search provider (Yelp Fusion).
//!
//! The provider's response is relayed to callers as-is, so this module never
//! models its schema beyond `serde_json::Value`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::SearchConfig;

/// Query string accepted by `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid search provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError>;
}

/// `GET {base}/businesses/search` with the API key as a bearer token
#[derive(Debug, Clone)]
pub struct YelpClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl YelpClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: Self::endpoint(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(base_url: &str) -> Result<Url, SearchError> {
        let url = Url::parse(&format!("{}/businesses/search", base_url.trim_end_matches('/')))?;
        Ok(url)
    }

    fn params(query: &SearchQuery) -> Vec<(&'static str, &str)> {
        let mut params = Vec::with_capacity(2);
        if let Some(term) = query.term.as_deref() {
            params.push(("term", term));
        }
        if let Some(location) = query.location.as_deref() {
            params.push(("location", location));
        }
        params
    }
}

#[async_trait]
impl SearchClient for YelpClient {
    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        tracing::debug!("Searching provider: term={:?} location={:?}", query.term, query.location);

        let response = self
            .http
            .get(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .query(&Self::params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
