//! Generic JSON encode/decode helpers.
//!
//! Thin wrappers over `serde_json` so callers only deal with [`JsonError`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure while converting a value to or from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be serialized.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input was not valid JSON for the requested type.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize `value` to a compact JSON string.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if `value`'s `Serialize` impl fails
/// (for example a map with non-string keys).
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Parse a JSON string into a `T`.
///
/// # Errors
///
/// Returns [`JsonError::Decode`] if `json` is malformed or does not
/// describe a `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, JsonError> {
    serde_json::from_str(json).map_err(JsonError::Decode)
}
