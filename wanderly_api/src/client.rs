//! HTTP client for the Wanderly deals API.

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, SearchFilters},
    types::{Deal, Response},
    Error,
};

const DEALS_PATH: &str = "/api/v1/deals";

const USER_AGENT: &str = concat!("wanderly/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Wanderly deals API.
///
/// Holds nothing but the base URL. Each request builds a fresh
/// `reqwest::Client` with the platform default timeouts, so concurrent
/// calls share no state.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `http://127.0.0.1:8000`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at a locally running deals server.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://127.0.0.1:8000".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(format!("{}: {}", self.base_api_url, e))
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        if let Some(query) = query {
            query.validate()?;
        }
        let url = self.get_url(path, query)?;
        tracing::debug!("Requesting URL: {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e.to_string())
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                if e.is_builder() {
                    Error::InvalidUrl(e.to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Returns the full request URL `fetch_deals` would send for `filters`.
    pub fn deals_url(&self, filters: &SearchFilters) -> Result<Url, Error> {
        filters.validate()?;
        self.get_url(DEALS_PATH, Some(filters))
    }

    /// Fetches every deal matching the given filters, in server order.
    ///
    /// The call either returns the complete result list or fails; it never
    /// retries and never yields partial results. A single record breaking
    /// [`Deal::validate`] fails the whole call with [`Error::Decode`].
    pub async fn fetch_deals(&self, filters: &SearchFilters) -> Result<Vec<Deal>, Error> {
        let resp = self
            .get::<Response<Vec<Deal>>, SearchFilters>(DEALS_PATH, Some(filters))
            .await?;
        for deal in &resp.data {
            deal.validate().map_err(|e| {
                tracing::error!("Rejecting response: {}", e);
                e
            })?;
        }
        Ok(resp.data)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
