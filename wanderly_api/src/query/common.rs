//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

use crate::Error;

/// Trait implemented by query builders. Provides URL serialization and an
/// optional pre-flight check run before any request is sent.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Checks the query's input constraints. The default accepts everything.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
