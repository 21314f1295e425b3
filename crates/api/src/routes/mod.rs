//! Route handlers, grouped per resource.

pub mod cart;
pub mod health;
pub mod menu;
pub mod metrics;
pub mod orders;
pub mod saved;
pub mod users;

use common::EntityKey;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Parses a path segment into a typed id, reporting the route's own
/// 400 message on failure.
pub(crate) fn parse_id<K: EntityKey>(raw: &str, message: &str) -> Result<K, ApiError> {
    raw.parse::<i64>()
        .map(K::from_raw)
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}

/// Deserializes a JSON body into its payload type, reporting the
/// route's own 400 message on schema failure.
pub(crate) fn parse_body<T: DeserializeOwned>(
    value: serde_json::Value,
    message: &str,
) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::BadRequest(message.to_string()))
}
