//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation, configuration and cancellation failures.
#[derive(Debug)]
pub enum WanderlyError {
    /// An error from the underlying API client.
    Api(wanderly_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The configuration file could not be read or parsed.
    Config(String),
    /// The caller cancelled the search before it completed.
    Cancelled,
}

impl fmt::Display for WanderlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(msg) => write!(f, "Config error: {}", msg),
            Self::Cancelled => write!(f, "Search cancelled"),
        }
    }
}

impl std::error::Error for WanderlyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wanderly_api::Error> for WanderlyError {
    fn from(e: wanderly_api::Error) -> Self {
        Self::Api(e)
    }
}
