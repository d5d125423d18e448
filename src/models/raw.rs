//! Tolerant readers for loosely-typed dataset records.
//!
//! The remote actors give no shape guarantees, so every field access
//! must degrade instead of failing: a missing key, a JSON `null` or a
//! wrong type all fall back to the field's default. Numeric reads also
//! accept numeric strings, since the actors are not consistent about
//! quoting numbers.

use serde_json::{Map, Value};

/// Coerce a value to a string. Numbers are stringified, everything
/// else is treated as absent.
pub(crate) fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Lenient float read: JSON number, or a string that parses as one.
pub(crate) fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Lenient integer read; floats truncate toward zero.
pub(crate) fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Required string field, empty when absent.
pub(crate) fn string(data: &Map<String, Value>, key: &str) -> String {
    data.get(key).and_then(to_string).unwrap_or_default()
}

pub(crate) fn opt_string(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(to_string)
}

pub(crate) fn opt_f64(data: &Map<String, Value>, key: &str) -> Option<f64> {
    data.get(key).and_then(to_f64)
}

pub(crate) fn opt_i64(data: &Map<String, Value>, key: &str) -> Option<i64> {
    data.get(key).and_then(to_i64)
}

pub(crate) fn opt_bool(data: &Map<String, Value>, key: &str) -> Option<bool> {
    data.get(key).and_then(Value::as_bool)
}

/// Boolean flag defaulting to `false`.
pub(crate) fn flag(data: &Map<String, Value>, key: &str) -> bool {
    flag_or(data, key, false)
}

pub(crate) fn flag_or(data: &Map<String, Value>, key: &str, default: bool) -> bool {
    data.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// List of strings; non-string entries are coerced where possible and
/// dropped otherwise.
pub(crate) fn string_list(data: &Map<String, Value>, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(to_string).collect())
        .unwrap_or_default()
}

pub(crate) fn i64_list(data: &Map<String, Value>, key: &str) -> Vec<i64> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(to_i64).collect())
        .unwrap_or_default()
}

/// List of opaque records, empty when absent.
pub(crate) fn value_list(data: &Map<String, Value>, key: &str) -> Vec<Value> {
    data.get(key).and_then(Value::as_array).cloned().unwrap_or_default()
}

/// Opaque pass-through of whatever shape the actor emitted, with an
/// empty array standing in for "no data". The actors emit both arrays
/// and objects for these fields depending on the record.
pub(crate) fn collection(data: &Map<String, Value>, key: &str) -> Value {
    match data.get(key) {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(value) => value.clone(),
    }
}

/// Optional opaque pass-through; JSON `null` counts as absent.
pub(crate) fn opt_value(data: &Map<String, Value>, key: &str) -> Option<Value> {
    match data.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value.clone()),
    }
}

/// Nested object, empty when absent or not an object.
pub(crate) fn object(data: &Map<String, Value>, key: &str) -> Map<String, Value> {
    data.get(key).and_then(Value::as_object).cloned().unwrap_or_default()
}
