//! Structural (JSON) shape checks shared by every `from_json` implementation.
//!
//! Objects are validated in a fixed order: shape first (`invalid_type`), then
//! missing keys, then unrecognized keys, then per-field types
//! (`invalid_key_type`).

use serde_json::{Map, Value};

use crate::error::{ParseError, Result, SizeKind};

/// Short name of a JSON value's kind, used as the `received` field.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `value` to be an object carrying every `required` key and no key
/// outside `required` and `optional`.
pub fn expect_object<'a>(
    value: &'a Value,
    expected: &str,
    required: &[&str],
    optional: &[&str],
) -> Result<&'a Map<String, Value>> {
    let map = value
        .as_object()
        .ok_or_else(|| ParseError::invalid_type(expected, json_kind(value)))?;

    let missing: Vec<String> = required
        .iter()
        .filter(|key| !map.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ParseError::MissingKeys { keys: missing });
    }

    let mut unrecognized: Vec<String> = map
        .keys()
        .filter(|key| !required.contains(&key.as_str()) && !optional.contains(&key.as_str()))
        .cloned()
        .collect();
    if !unrecognized.is_empty() {
        unrecognized.sort();
        return Err(ParseError::UnrecognizedKeys { keys: unrecognized });
    }

    Ok(map)
}

/// Read an integer field.
///
/// Fractional numbers fail with `not_whole`; anything else that is not a
/// number fails with `invalid_key_type`.
pub fn field_i64(map: &Map<String, Value>, key: &str) -> Result<i64> {
    field_i64_in(map, key, i64::MIN, i64::MAX)
}

/// Read an integer field bounded to `minimum..=maximum`.
pub fn field_i64_in(
    map: &Map<String, Value>,
    key: &str,
    minimum: i64,
    maximum: i64,
) -> Result<i64> {
    let value = field(map, key)?;
    match value {
        Value::Number(n) => whole_number_in(n, minimum, maximum),
        other => Err(ParseError::invalid_key_type(key, "number", json_kind(other))),
    }
}

/// Read an optional integer field, defaulting when absent.
pub fn field_i64_or(map: &Map<String, Value>, key: &str, default: i64) -> Result<i64> {
    if map.contains_key(key) {
        field_i64(map, key)
    } else {
        Ok(default)
    }
}

/// Read a string field.
pub fn field_str<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    let value = field(map, key)?;
    value
        .as_str()
        .ok_or_else(|| ParseError::invalid_key_type(key, "string", json_kind(value)))
}

/// Fetch a field that `expect_object` already guaranteed.
pub fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    map.get(key).ok_or_else(|| ParseError::MissingKeys {
        keys: vec![key.to_string()],
    })
}

/// Convert a JSON number to `i64`, rejecting fractions and overflow.
pub fn whole_number(n: &serde_json::Number) -> Result<i64> {
    whole_number_in(n, i64::MIN, i64::MAX)
}

/// Like [`whole_number`], reporting `too_big`/`too_small` against
/// `minimum..=maximum` instead of the `i64` domain.
pub fn whole_number_in(n: &serde_json::Number, minimum: i64, maximum: i64) -> Result<i64> {
    let too_big = || ParseError::TooBig {
        kind: SizeKind::Number,
        maximum,
        received: n.to_string(),
    };
    let too_small = || ParseError::TooSmall {
        kind: SizeKind::Number,
        minimum,
        received: n.to_string(),
    };

    let value = if let Some(v) = n.as_i64() {
        v
    } else if n.is_u64() {
        return Err(too_big());
    } else {
        match n.as_f64() {
            Some(f) if f.fract() != 0.0 => {
                return Err(ParseError::NotWhole {
                    received: n.to_string(),
                })
            }
            Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => f as i64,
            Some(f) if f > 0.0 => return Err(too_big()),
            _ => return Err(too_small()),
        }
    };

    if value > maximum {
        Err(too_big())
    } else if value < minimum {
        Err(too_small())
    } else {
        Ok(value)
    }
}
