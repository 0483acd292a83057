//! Integer types: `int2`, `int4`, `int8`.

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};

use crate::core::object::{expect_object, field_i64_in, json_kind, whole_number_in};
use crate::core::{scalar_input, PgValue, ValueInput};
use crate::error::{ParseError, Result, SizeKind};

/// Parse integer text into `i64`.
///
/// Leading/trailing whitespace and a leading sign are accepted, matching
/// PostgreSQL's `int4in`. Fractional input fails with `not_whole`, digits
/// beyond the `i64` domain with `too_big`/`too_small` against `min..=max`.
fn parse_integer(text: &str, type_name: &str, min: i64, max: i64) -> Result<i64> {
    let trimmed = text.trim();

    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(v);
    }

    if let Ok(wide) = trimmed.parse::<i128>() {
        return Err(out_of_range(wide, min, max, trimmed));
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() != 0.0 && !trimmed.contains(['e', 'E']) => {
            Err(ParseError::NotWhole {
                received: trimmed.to_string(),
            })
        }
        _ => Err(ParseError::invalid_string(type_name, text)),
    }
}

fn out_of_range(value: i128, min: i64, max: i64, received: &str) -> ParseError {
    if value > i128::from(max) {
        ParseError::TooBig {
            kind: SizeKind::Number,
            maximum: max,
            received: received.to_string(),
        }
    } else {
        ParseError::TooSmall {
            kind: SizeKind::Number,
            minimum: min,
            received: received.to_string(),
        }
    }
}

macro_rules! integer_type {
    ($(#[$meta:meta])* $name:ident, $native:ty, $pg:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($native);

        impl $name {
            /// Smallest representable value.
            pub const MIN: i64 = <$native>::MIN as i64;
            /// Largest representable value.
            pub const MAX: i64 = <$native>::MAX as i64;

            /// Wrap a native integer.
            pub fn new(value: $native) -> Self {
                Self(value)
            }

            /// The native integer.
            pub fn get(&self) -> $native {
                self.0
            }

            fn from_i64(value: i64, received: &str) -> Result<Self> {
                <$native>::try_from(value)
                    .map(Self)
                    .map_err(|_| out_of_range(i128::from(value), Self::MIN, Self::MAX, received))
            }
        }

        impl From<$native> for $name {
            fn from(v: $native) -> Self {
                Self(v)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_text(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ParseError;

            fn try_from(s: &str) -> Result<Self> {
                Self::parse_text(s)
            }
        }

        scalar_input!($name, $native);

        impl PgValue for $name {
            const TYPE_NAME: &'static str = $pg;
            type Input = ValueInput<Self>;

            fn parse_text(text: &str) -> Result<Self> {
                let value = parse_integer(text, $pg, Self::MIN, Self::MAX)?;
                Self::from_i64(value, text.trim())
            }

            fn from_json(value: &Value) -> Result<Self> {
                match value {
                    Value::Number(n) => {
                        Self::from_i64(whole_number_in(n, Self::MIN, Self::MAX)?, &n.to_string())
                    }
                    Value::String(s) => Self::parse_text(s),
                    Value::Object(_) => {
                        let map = expect_object(value, concat!($pg, " object"), &["value"], &[])?;
                        let v = field_i64_in(map, "value", Self::MIN, Self::MAX)?;
                        Self::from_i64(v, &v.to_string())
                    }
                    other => Err(ParseError::invalid_type(
                        "string | number | object",
                        json_kind(other),
                    )),
                }
            }

            fn to_json(&self) -> Value {
                json!({ "value": self.0 })
            }
        }
    };
}

integer_type!(
    /// PostgreSQL `int2` / `smallint`.
    Int2,
    i16,
    "int2"
);

integer_type!(
    /// PostgreSQL `int4` / `integer`.
    Int4,
    i32,
    "int4"
);

integer_type!(
    /// PostgreSQL `int8` / `bigint`.
    Int8,
    i64,
    "int8"
);
