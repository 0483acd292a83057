//! Character types.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::core::object::{expect_object, field_str, json_kind};
use crate::core::{scalar_input, PgValue, ValueInput};
use crate::error::{ParseError, Result};

/// PostgreSQL `text`.
///
/// Any string is valid text. Ordering is bytewise, as under the `C`
/// collation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text(String);

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Text {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::new(s))
    }
}

impl TryFrom<&str> for Text {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Text);

impl PgValue for Text {
    const TYPE_NAME: &'static str = "text";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        Ok(Self::new(text))
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Self::new(s.as_str())),
            Value::Object(_) => {
                let map = expect_object(value, "text object", &["value"], &[])?;
                field_str(map, "value").map(Self::new)
            }
            other => Err(ParseError::invalid_type("string | object", json_kind(other))),
        }
    }

    fn to_json(&self) -> Value {
        json!({ "value": self.0 })
    }
}
