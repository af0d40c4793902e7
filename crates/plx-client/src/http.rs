//! Shared HTTP helpers for the backend endpoints.
//!
//! Centralizes status-code checks, GET query flattening, and response
//! decoding so the endpoint modules stay focused on paths and types.

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the body is logged
/// and returned as [`ApiError::Status`] along with the status code and its
/// canonical reason phrase.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let status_text = status.canonical_reason().unwrap_or("Unknown Status").to_string();
    let body = resp.text().await.unwrap_or_default();
    tracing::error!(status = status.as_u16(), %body, "API request failed");
    Err(ApiError::Status {
        status: status.as_u16(),
        status_text,
        body,
    })
}

/// Decode a JSON response body.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Append each top-level key of `body` to `url` as a query parameter.
///
/// Anything other than a JSON object has no key/value pairs to flatten and
/// is dropped.
pub fn append_query(url: &mut Url, body: &Value) {
    let Value::Object(map) = body else {
        tracing::warn!(url = %url, "dropping non-object GET body");
        return;
    };
    if map.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in map {
        pairs.append_pair(key, &query_value(value));
    }
}

/// Textual form of one query parameter value.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}
