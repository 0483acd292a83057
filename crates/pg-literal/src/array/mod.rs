//! Array literals.
//!
//! [`encode_array`] and [`decode_array`] work on element text and know
//! nothing about element types. [`PgArray<T>`] layers per-element parsing on
//! top and implements the value contract itself, so arrays of ranges and
//! multiranges work the same as arrays of scalars.

mod codec;

pub use codec::{decode_array, encode_array};

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::config::CodecConfig;
use crate::core::object::json_kind;
use crate::core::{PgValue, Resolve, ValueInput};
use crate::error::{ParseError, Result};

/// A one-dimensional PostgreSQL array. Elements may be `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PgArray<T> {
    items: Vec<Option<T>>,
}

impl<T> PgArray<T> {
    pub fn new(items: Vec<Option<T>>) -> Self {
        Self { items }
    }

    /// An array with no `NULL` elements.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values.into_iter().map(Some).collect())
    }

    pub fn items(&self) -> &[Option<T>] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Option<T>> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<T>> {
        self.items.iter()
    }
}

impl<T> Default for PgArray<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<Option<T>>> for PgArray<T> {
    fn from(items: Vec<Option<T>>) -> Self {
        Self::new(items)
    }
}

impl<T: PgValue> PgArray<T> {
    /// Parse array text with `config`'s delimiter, then each element as `T`.
    ///
    /// The first element that fails to parse decides the error.
    pub fn parse_with(text: &str, config: &CodecConfig) -> Result<Self> {
        decode_array(text, config)?
            .into_iter()
            .map(|item| item.map(|text| T::parse_text(&text)).transpose())
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Array text with `config`'s delimiter.
    pub fn to_text_with(&self, config: &CodecConfig) -> String {
        encode_array(
            self.items
                .iter()
                .map(|item| item.as_ref().map(ToString::to_string)),
            config,
        )
    }
}

impl<T: PgValue> fmt::Display for PgArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_with(&CodecConfig::default()))
    }
}

impl<T: PgValue> FromStr for PgArray<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<T: PgValue> TryFrom<&str> for PgArray<T> {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

/// Construction shapes accepted by
/// [`PgArray::safe_from`](crate::core::PgValue::safe_from).
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayInput<T> {
    /// Array text: `{1,2,NULL}`.
    Text(String),
    /// JSON: an array string or a JSON array of element shapes and nulls.
    Json(Value),
    /// An existing array.
    Array(PgArray<T>),
    /// Element shapes, `None` for `NULL`.
    Items(Vec<Option<ValueInput<T>>>),
}

impl<T> From<&str> for ArrayInput<T> {
    fn from(v: &str) -> Self {
        ArrayInput::Text(v.to_string())
    }
}

impl<T> From<String> for ArrayInput<T> {
    fn from(v: String) -> Self {
        ArrayInput::Text(v)
    }
}

impl<T> From<Value> for ArrayInput<T> {
    fn from(v: Value) -> Self {
        ArrayInput::Json(v)
    }
}

impl<T> From<PgArray<T>> for ArrayInput<T> {
    fn from(v: PgArray<T>) -> Self {
        ArrayInput::Array(v)
    }
}

impl<T> From<Vec<Option<ValueInput<T>>>> for ArrayInput<T> {
    fn from(v: Vec<Option<ValueInput<T>>>) -> Self {
        ArrayInput::Items(v)
    }
}

impl<T: PgValue> Resolve<PgArray<T>> for ArrayInput<T> {
    fn resolve(self) -> Result<PgArray<T>> {
        match self {
            ArrayInput::Text(text) => PgArray::parse_text(&text),
            ArrayInput::Json(value) => PgArray::from_json(&value),
            ArrayInput::Array(array) => Ok(array),
            ArrayInput::Items(items) => items
                .into_iter()
                .map(|item| item.map(|input| input.resolve()).transpose())
                .collect::<Result<Vec<_>>>()
                .map(PgArray::new),
        }
    }
}

impl<T: PgValue> PgValue for PgArray<T> {
    const TYPE_NAME: &'static str = "array";
    type Input = ArrayInput<T>;

    fn parse_text(text: &str) -> Result<Self> {
        Self::parse_with(text, &CodecConfig::default())
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null => Ok(None),
                    other => T::from_json(other).map(Some),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::new),
            other => Err(ParseError::invalid_type("string | array", json_kind(other))),
        }
    }

    fn to_json(&self) -> Value {
        Value::Array(
            self.items
                .iter()
                .map(|item| item.as_ref().map_or(Value::Null, PgValue::to_json))
                .collect(),
        )
    }
}
