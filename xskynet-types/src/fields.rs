//! Field lookup helpers shared by the record decoders.
//!
//! The API renamed several fields from snake_case to camelCase over time and
//! still emits both. Each record lists the keys a field may arrive under, in
//! priority order, and resolves them with these helpers.

use serde_json::{Map, Value};

use crate::error::{Result, SdkError};

/// Accepted keys for one field, highest priority first.
pub(crate) type Keys = &'static [&'static str];

/// A known field: its keys, and which values its decoder consumes.
///
/// A non-null value the decoder would reject is not consumed, so
/// [`extra`] keeps it instead of losing it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    keys: Keys,
    accepts: fn(&Value) -> bool,
}

impl Field {
    /// Decoded with [`string`].
    pub(crate) const fn text(keys: Keys) -> Self {
        Self {
            keys,
            accepts: Value::is_string,
        }
    }

    /// Decoded with [`scalar`].
    pub(crate) const fn scalar(keys: Keys) -> Self {
        Self {
            keys,
            accepts: is_scalar,
        }
    }

    /// Decoded from any value (lists, free-form results).
    pub(crate) const fn any(keys: Keys) -> Self {
        Self {
            keys,
            accepts: any_value,
        }
    }

    fn consumes(&self, key: &str, value: &Value) -> bool {
        self.keys.contains(&key) && (value.is_null() || (self.accepts)(value))
    }
}

/// Borrow `value` as an object, or fail with a shape error naming `entity`.
pub(crate) fn object<'a>(value: &'a Value, entity: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        SdkError::Shape(format!(
            "{entity} must be a JSON object, got {}",
            describe(value)
        ))
    })
}

/// First key in `keys` that is present with a non-null value.
pub(crate) fn lookup<'a>(obj: &'a Map<String, Value>, keys: Keys) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Resolve a string field. Wrong-typed values count as absent.
pub(crate) fn string(obj: &Map<String, Value>, keys: Keys) -> Option<String> {
    lookup(obj, keys).and_then(Value::as_str).map(str::to_owned)
}

/// Resolve an identifier-like field: strings as-is, numbers and booleans
/// as their JSON text. Arrays and objects count as absent.
pub(crate) fn scalar(obj: &Map<String, Value>, keys: Keys) -> Option<String> {
    match lookup(obj, keys)? {
        Value::String(s) => Some(s.clone()),
        other if is_scalar(other) => Some(other.to_string()),
        _ => None,
    }
}

fn any_value(_: &Value) -> bool {
    true
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

/// Resolve a string field, falling back to `default`.
pub(crate) fn string_or(obj: &Map<String, Value>, keys: Keys, default: &str) -> String {
    string(obj, keys).unwrap_or_else(|| default.to_owned())
}

/// Decode the array under `key` element by element.
///
/// Absent and `null` both yield an empty list.
pub(crate) fn list<T>(
    obj: &Map<String, Value>,
    key: &str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(decode).collect(),
        Some(other) => Err(SdkError::Shape(format!(
            "'{key}' must be an array, got {}",
            describe(other)
        ))),
    }
}

/// Copy every entry no field in `known` consumed: unknown keys, and known
/// keys holding a value of the wrong type.
pub(crate) fn extra(obj: &Map<String, Value>, known: &[Field]) -> Map<String, Value> {
    obj.iter()
        .filter(|(key, value)| !known.iter().any(|field| field.consumes(key, value)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Implement `Deserialize` for a record by decoding into a [`Value`] first
/// and handing it to the record's `from_json`.
macro_rules! deserialize_via_from_json {
    ($record:ty) => {
        impl<'de> serde::Deserialize<'de> for $record {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = serde_json::Value::deserialize(deserializer)?;
                Self::from_json(&value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use deserialize_via_from_json;
