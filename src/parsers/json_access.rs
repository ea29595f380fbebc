//! Lenient accessors over `serde_json::Value`
//!
//! Chat exports vary between producers and versions, so every field read goes
//! through these helpers. They return `None` for missing fields, `null`, and
//! values of the wrong shape instead of failing.

use serde_json::{Map, Value};

/// Get `key` from `value` if `value` is an object
pub fn get<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|obj| obj.get(key))
}

/// Get `key` as an object
pub fn get_object<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    get(value, key).and_then(Value::as_object)
}

/// Get `key` as an array
pub fn get_array<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    get(value, key).and_then(Value::as_array)
}

/// Get `key` as a string
pub fn get_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    get(value, key).and_then(Value::as_str)
}

/// Get `key` as a string, treating `""` as absent
pub fn get_non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    get_str(value, key).filter(|s| !s.is_empty())
}

/// Return the first of `keys` whose value is present and not `null`
pub fn first_present<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| get(value, key)).find(|v| !v.is_null())
}

/// Whether a message slot holds something worth reading
///
/// `null`, `false`, empty objects and empty strings all count as "no message".
pub fn is_empty_slot(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Object(obj) => obj.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Number(_) => false,
    }
}

/// Coerce a JSON value to a finite epoch in seconds
///
/// Numbers are taken as-is, strings are parsed after trimming, booleans map to
/// 1.0 / 0.0. Anything else, and any NaN or infinite result, yields `None`.
pub fn coerce_epoch(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };

    raw.is_finite().then_some(raw)
}
