//! Arbitrary precision `numeric`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::core::object::{expect_object, field, json_kind};
use crate::core::{scalar_input, PgValue, ValueInput};
use crate::error::{ParseError, Result};

/// PostgreSQL `numeric`.
///
/// The scale of the input is preserved, so `1.50` renders as `1.50`, the way
/// PostgreSQL prints it. Ordering is numeric (`1.5 == 1.50`), equality
/// through [`PgValue::equals`] is textual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeric(Decimal);

impl Numeric {
    /// Wrap a decimal.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// The decimal value.
    pub fn get(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Numeric {
    fn from(v: Decimal) -> Self {
        Self(v)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Numeric {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl TryFrom<&str> for Numeric {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

scalar_input!(Numeric, Decimal);

impl PgValue for Numeric {
    const TYPE_NAME: &'static str = "numeric";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let parsed = if trimmed.contains(['e', 'E']) {
            Decimal::from_scientific(trimmed)
        } else {
            Decimal::from_str_exact(trimmed)
        };
        parsed
            .map(Self)
            .map_err(|_| ParseError::invalid_string(Self::TYPE_NAME, text))
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => Self::parse_text(&n.to_string()),
            Value::String(s) => Self::parse_text(s),
            Value::Object(_) => {
                let map = expect_object(value, "numeric object", &["value"], &[])?;
                match field(map, "value")? {
                    Value::String(s) => Self::parse_text(s),
                    Value::Number(n) => Self::parse_text(&n.to_string()),
                    other => Err(ParseError::invalid_key_type(
                        "value",
                        "string | number",
                        json_kind(other),
                    )),
                }
            }
            other => Err(ParseError::invalid_type(
                "string | number | object",
                json_kind(other),
            )),
        }
    }

    /// The value is emitted as a string so no precision is lost in JSON.
    fn to_json(&self) -> Value {
        json!({ "value": self.0.to_string() })
    }
}
