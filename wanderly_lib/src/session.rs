//! Search session store: the single owner of UI state.
//!
//! A front end keeps one [`SearchSession`], mutates filters through it and
//! re-renders whenever an event arrives on a [`SearchSession::subscribe`]
//! receiver.

use std::future::Future;

use tokio::sync::broadcast;
use wanderly_api::types::Deal;
use wanderly_api::SearchFilters;

use crate::catalog;
use crate::client::DealClient;
use crate::config::Config;
use crate::error::WanderlyError;

/// Change notifications delivered to subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    FiltersChanged,
    SearchStarted,
    SearchFinished { count: usize },
    SearchFailed { message: String },
    SearchCancelled,
}

const EVENT_CAPACITY: usize = 64;

pub struct SearchSession {
    filters: SearchFilters,
    results: Vec<Deal>,
    is_loading: bool,
    last_error: Option<String>,
    events: broadcast::Sender<SessionEvent>,
}

/// Clears the loading flag when a search ends. If the search future is
/// dropped before the fetch completes, subscribers get `SearchCancelled`.
struct InFlight<'a> {
    is_loading: &'a mut bool,
    events: &'a broadcast::Sender<SessionEvent>,
    completed: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.is_loading = false;
        if !self.completed {
            self.events.send(SessionEvent::SearchCancelled).ok();
        }
    }
}

impl SearchSession {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            results: Vec::new(),
            is_loading: false,
            last_error: None,
            events: broadcast::channel(EVENT_CAPACITY).0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.defaults.to_filters())
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Deals from the last successful search, in server order.
    pub fn results(&self) -> &[Deal] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns a receiver for every state change from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: SessionEvent) {
        // No subscribers is fine.
        self.events.send(event).ok();
    }

    pub fn toggle_origin(&mut self, code: &str) -> bool {
        let selected = self.filters.toggle_origin(code);
        self.notify(SessionEvent::FiltersChanged);
        selected
    }

    /// Selects every airport in the departure catalog.
    pub fn select_all_origins(&mut self) {
        self.filters.origin_airport_codes = catalog::all_departure_codes();
        self.notify(SessionEvent::FiltersChanged);
    }

    pub fn clear_origins(&mut self) {
        self.filters.origin_airport_codes.clear();
        self.notify(SessionEvent::FiltersChanged);
    }

    pub fn toggle_duration(&mut self, days: u32) -> bool {
        let selected = self.filters.toggle_duration(days);
        self.notify(SessionEvent::FiltersChanged);
        selected
    }

    pub fn set_horizon_days(&mut self, days: u32) {
        self.filters.horizon_days = days;
        self.notify(SessionEvent::FiltersChanged);
    }

    pub fn set_max_price(&mut self, price: f64) {
        self.filters.max_price = price;
        self.notify(SessionEvent::FiltersChanged);
    }

    /// A search may start only when none is running and an origin is selected.
    pub fn can_search(&self) -> bool {
        !self.is_loading && !self.filters.origin_airport_codes.is_empty()
    }

    /// Runs one search with the current filters.
    ///
    /// On success the previous results are replaced. On failure they are
    /// kept and the error is recorded.
    pub async fn search(&mut self, client: &DealClient) -> Result<usize, WanderlyError> {
        self.search_until(client, std::future::pending()).await
    }

    /// Like [`search`](Self::search), but gives up when `cancel` resolves.
    /// A cancelled search leaves the results untouched, and so does
    /// dropping the returned future.
    pub async fn search_until<F>(
        &mut self,
        client: &DealClient,
        cancel: F,
    ) -> Result<usize, WanderlyError>
    where
        F: Future<Output = ()>,
    {
        if !self.can_search() {
            return Err(WanderlyError::InvalidInput(
                "select at least one departure airport".to_string(),
            ));
        }

        self.is_loading = true;
        self.notify(SessionEvent::SearchStarted);
        let outcome = {
            let mut in_flight = InFlight {
                is_loading: &mut self.is_loading,
                events: &self.events,
                completed: false,
            };
            let outcome = client.fetch_deals_until(&self.filters, cancel).await;
            in_flight.completed = true;
            outcome
        };

        match outcome {
            Ok(deals) => {
                let count = deals.len();
                self.results = deals;
                self.last_error = None;
                self.notify(SessionEvent::SearchFinished { count });
                Ok(count)
            }
            Err(WanderlyError::Cancelled) => {
                self.notify(SessionEvent::SearchCancelled);
                Err(WanderlyError::Cancelled)
            }
            Err(e) => {
                tracing::error!("Error fetching deals: {}", e);
                let message = e.to_string();
                self.last_error = Some(message.clone());
                self.notify(SessionEvent::SearchFailed { message });
                Err(e)
            }
        }
    }
}
