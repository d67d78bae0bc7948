//! Library layer for Wanderly: validated, cancellable deal client, airport
//! catalog, display helpers, configuration and the search session store.
//!
//! Wraps the `wanderly_api` crate; front ends depend on this crate only.

pub mod catalog;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod session;
pub mod validation;

pub use wanderly_api;
pub use wanderly_api::types;
pub use wanderly_api::{Query, SearchFilters};

pub use client::DealClient;
pub use config::{Config, SearchDefaults};
pub use error::WanderlyError;
pub use session::{SearchSession, SessionEvent};
