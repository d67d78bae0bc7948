//! Error types for the API client.

/// Errors that can occur when fetching deals.
///
/// Transport failures, non-success statuses and undecodable bodies are
/// separate variants so callers can tell them apart.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or the request built from it could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The search filters break an input constraint. No request was sent.
    #[error("Invalid search filters: {0}")]
    InvalidFilters(String),
    /// The request could not complete (connection refused, DNS, reset, ...).
    #[error("Network error: {0}")]
    Network(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
