//! Fixed-width bit strings.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::core::object::{expect_object, field_str, json_kind};
use crate::core::{PgValue, ValueInput};
use crate::error::{ParseError, Result};

/// PostgreSQL `bit(N)`.
///
/// Text is exactly `N` characters of `0` and `1`. A string of the wrong
/// length fails with `invalid_n_length`, any other character with
/// `invalid_string`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bit<const N: usize> {
    bits: Vec<bool>,
}

impl<const N: usize> Bit<N> {
    /// Build from exactly `N` bits.
    pub fn new(bits: Vec<bool>) -> Result<Self> {
        if bits.len() != N {
            return Err(ParseError::InvalidNLength {
                expected: N,
                received: bits.len(),
            });
        }
        Ok(Self { bits })
    }

    /// All bits cleared.
    pub fn zeroed() -> Self {
        Self {
            bits: vec![false; N],
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }
}

impl<const N: usize> fmt::Display for Bit<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<const N: usize> FromStr for Bit<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<const N: usize> TryFrom<&str> for Bit<N> {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<const N: usize> From<Bit<N>> for ValueInput<Bit<N>> {
    fn from(v: Bit<N>) -> Self {
        ValueInput::Value(v)
    }
}

impl<const N: usize> PgValue for Bit<N> {
    const TYPE_NAME: &'static str = "bit";
    type Input = ValueInput<Self>;

    fn parse_text(text: &str) -> Result<Self> {
        let bits = text
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseError::invalid_string(Self::TYPE_NAME, text)),
            })
            .collect::<Result<Vec<bool>>>()?;
        Self::new(bits)
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Object(_) => {
                let map = expect_object(value, "bit object", &["value"], &[])?;
                Self::parse_text(field_str(map, "value")?)
            }
            other => Err(ParseError::invalid_type("string | object", json_kind(other))),
        }
    }

    fn to_json(&self) -> Value {
        json!({ "value": self.to_string() })
    }
}
