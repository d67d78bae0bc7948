use serde::{Deserialize, Serialize};

/// Envelope wrapping every API payload under a `data` key.
#[derive(Serialize, Deserialize, Debug)]
pub struct Response<T> {
    pub data: T,
}
