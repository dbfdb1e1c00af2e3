//! Response-shape probing.
//!
//! The API wraps payloads inconsistently: a list may arrive as
//! `{"agents": [...]}`, `{"data": [...]}`, or a bare array, and a single
//! record as `{"agent": {...}}` or the bare object. These helpers peel the
//! wrapper off before the record decoders run.

use serde_json::Value;
use xskynet_types::{Result, SdkError};

/// Extract list items from a response body.
///
/// For an object body, the first of `keys` that is present wins; `null`
/// under that key is an empty list. An object with none of the keys, an
/// empty response, or any scalar body yields an empty list.
pub(crate) fn list(body: Option<Value>, keys: &[&str]) -> Result<Vec<Value>> {
    match body {
        Some(Value::Array(items)) => Ok(items),
        Some(Value::Object(mut obj)) => {
            let Some(key) = keys.iter().find(|key| obj.contains_key(**key)) else {
                return Ok(Vec::new());
            };
            match obj.remove(*key) {
                Some(Value::Array(items)) => Ok(items),
                Some(Value::Null) | None => Ok(Vec::new()),
                Some(_) => Err(SdkError::Shape(format!("'{key}' in response is not an array"))),
            }
        }
        _ => Ok(Vec::new()),
    }
}

/// Extract a single record from a response body: the value under `key`
/// when the body is an object containing it, otherwise the body itself.
pub(crate) fn record(body: Option<Value>, key: &str) -> Result<Value> {
    match body {
        None => Err(SdkError::Shape(format!(
            "expected a '{key}' record, got an empty response"
        ))),
        Some(Value::Object(mut obj)) => match obj.remove(key) {
            Some(inner) => Ok(inner),
            None => Ok(Value::Object(obj)),
        },
        Some(other) => Ok(other),
    }
}

/// Decode every item with `decode`, keeping order.
pub(crate) fn decode_all<T>(items: Vec<Value>, decode: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    items.iter().map(decode).collect()
}
