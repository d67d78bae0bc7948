//! Cancellable wrapper around the API client.

use std::future::Future;

use wanderly_api::types::Deal;
use wanderly_api::{Client, SearchFilters};

use crate::config::Config;
use crate::error::WanderlyError;

/// API client wrapper used by front ends.
///
/// Adds logging and cooperative cancellation on top of
/// [`wanderly_api::Client`]. There is no caching or retrying: every call
/// is one request.
#[derive(Clone, Debug, Default)]
pub struct DealClient {
    inner: Client,
}

impl DealClient {
    /// Creates a client using the default local API URL.
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Creates a client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Fetches deals for `filters` in server order.
    pub async fn fetch_deals(&self, filters: &SearchFilters) -> Result<Vec<Deal>, WanderlyError> {
        let deals = self.inner.fetch_deals(filters).await?;
        tracing::info!(
            "Found {} deals from {}",
            deals.len(),
            filters.origin_airport_codes.join(",")
        );
        Ok(deals)
    }

    /// Fetches deals unless `cancel` resolves first.
    ///
    /// On cancellation the in-flight request is dropped and the call fails
    /// with [`WanderlyError::Cancelled`].
    pub async fn fetch_deals_until<F>(
        &self,
        filters: &SearchFilters,
        cancel: F,
    ) -> Result<Vec<Deal>, WanderlyError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.fetch_deals(filters) => result,
            _ = cancel => {
                tracing::warn!("Deal search cancelled before completion");
                Err(WanderlyError::Cancelled)
            }
        }
    }
}
