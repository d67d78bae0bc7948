use url::Url;

use crate::Error;

use super::Query;

/// User-selected search filters for the `/api/v1/deals` endpoint.
///
/// Airport codes and durations behave as insertion-ordered sets: adding a
/// value that is already present is a no-op, and the query string lists
/// values in the order they were selected.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchFilters {
    /// IATA codes of the departure airports. Must be non-empty to search.
    pub origin_airport_codes: Vec<String>,
    /// Accepted trip lengths in days. Must be non-empty to search.
    pub allowed_durations_days: Vec<u32>,
    /// How many days ahead of today departures may be.
    pub horizon_days: u32,
    /// Upper bound on the total round-trip price.
    pub max_price: f64,
}

impl Default for SearchFilters {
    fn default() -> SearchFilters {
        SearchFilters {
            origin_airport_codes: Vec::new(),
            allowed_durations_days: Vec::new(),
            horizon_days: 90,
            max_price: 150.0,
        }
    }
}

impl Query for SearchFilters {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for code in self.origin_airport_codes.iter() {
            url.query_pairs_mut()
                .append_pair("from_locations", code.as_str());
        }
        // Digits and commas only; written by hand so the commas stay literal.
        let query = format!(
            "{}&durations={}",
            url.query().unwrap_or_default(),
            self.durations_param()
        );
        url.set_query(Some(query.trim_start_matches('&')));
        url.query_pairs_mut()
            .append_pair("horizon_days", &self.horizon_days.to_string());
        url.query_pairs_mut()
            .append_pair("max_price", &self.max_price.to_string());
        url
    }

    fn validate(&self) -> Result<(), Error> {
        if self.origin_airport_codes.is_empty() {
            return Err(Error::InvalidFilters(
                "at least one departure airport is required".to_string(),
            ));
        }
        if self.allowed_durations_days.is_empty() {
            return Err(Error::InvalidFilters(
                "at least one trip duration is required".to_string(),
            ));
        }
        if self.allowed_durations_days.contains(&0) {
            return Err(Error::InvalidFilters(
                "trip durations must be positive".to_string(),
            ));
        }
        if self.horizon_days == 0 {
            return Err(Error::InvalidFilters(
                "horizon must be at least one day".to_string(),
            ));
        }
        if !(self.max_price.is_finite() && self.max_price > 0.0) {
            return Err(Error::InvalidFilters(format!(
                "max price must be a positive number, got {}",
                self.max_price
            )));
        }
        Ok(())
    }
}

impl SearchFilters {
    pub fn with_origin(mut self, code: &str) -> Self {
        self.add_origin(code);
        self
    }
    pub fn with_origins(mut self, codes: &[String]) -> Self {
        for code in codes {
            self.add_origin(code);
        }
        self
    }

    pub fn with_duration(mut self, days: u32) -> Self {
        self.add_duration(days);
        self
    }
    pub fn with_durations(mut self, durations: &[u32]) -> Self {
        for days in durations {
            self.add_duration(*days);
        }
        self
    }

    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    fn add_origin(&mut self, code: &str) {
        if !self.origin_airport_codes.iter().any(|c| c == code) {
            self.origin_airport_codes.push(code.to_string());
        }
    }

    fn add_duration(&mut self, days: u32) {
        if !self.allowed_durations_days.contains(&days) {
            self.allowed_durations_days.push(days);
        }
    }

    /// Selects `code` if absent, deselects it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_origin(&mut self, code: &str) -> bool {
        match self.origin_airport_codes.iter().position(|c| c == code) {
            Some(index) => {
                self.origin_airport_codes.remove(index);
                false
            }
            None => {
                self.origin_airport_codes.push(code.to_string());
                true
            }
        }
    }

    /// Selects `days` if absent, deselects it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_duration(&mut self, days: u32) -> bool {
        match self.allowed_durations_days.iter().position(|d| *d == days) {
            Some(index) => {
                self.allowed_durations_days.remove(index);
                false
            }
            None => {
                self.allowed_durations_days.push(days);
                true
            }
        }
    }

    /// The `durations` parameter value: selected durations joined with commas.
    pub fn durations_param(&self) -> String {
        self.allowed_durations_days
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
