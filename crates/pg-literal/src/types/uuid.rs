//! PostgreSQL `uuid`.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::core::object::{expect_object, field_str, json_kind};
use crate::core::{scalar_input, PgValue, ValueInput};
use crate::error::{ParseError, Result};

/// PostgreSQL `uuid`, rendered hyphenated and lowercase.
///
/// Input accepts anything `uuid_in` does that the `uuid` crate parses:
/// hyphenated, simple (32 hex digits), braced and `urn:uuid:` forms, in
/// either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Wrap a UUID.
    pub fn new(value: uuid::Uuid) -> Self {
        Self(value)
    }

    pub fn get(&self) -> uuid::Uuid {
        self.0
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(v: uuid::Uuid) -> Self {
        Self(v)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Uuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Uuid, uuid::Uuid);

impl PgValue for Uuid {
    const TYPE_NAME: &'static str = "uuid";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        uuid::Uuid::parse_str(text.trim())
            .map(Self)
            .map_err(|_| ParseError::invalid_string(Self::TYPE_NAME, text))
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Object(_) => {
                let map = expect_object(value, "uuid object", &["value"], &[])?;
                Self::parse_text(field_str(map, "value")?)
            }
            other => Err(ParseError::invalid_type("string | object", json_kind(other))),
        }
    }

    fn to_json(&self) -> Value {
        json!({ "value": self.to_string() })
    }
}
