//! The value contract every PostgreSQL literal type implements.
//!
//! A type plugs into the framework by implementing [`PgValue`]: text parsing,
//! a structural JSON mirror, and canonical text through `Display`. Everything
//! else (multi-shape construction, positional arguments, equality, the
//! nominal predicate) is provided by default methods, and the type can then
//! be used as the element of [`Range`](crate::range::Range),
//! [`MultiRange`](crate::multirange::MultiRange) and
//! [`PgArray`](crate::array::PgArray) without further code.

use std::any::Any;
use std::fmt;

use serde_json::Value;

use crate::error::{ParseError, Result};

/// Resolve a construction shape into a validated value.
///
/// Implemented by each type's input enum; [`PgValue::safe_from`] is a thin
/// wrapper around it.
pub trait Resolve<T> {
    /// Validate the shape and build the value.
    fn resolve(self) -> Result<T>;
}

/// Construction shapes accepted by scalar types.
///
/// # Example
///
/// ```rust
/// use pg_literal::core::{PgValue, ValueInput};
/// use pg_literal::types::Int4;
///
/// let from_text = Int4::safe_from("42").unwrap();
/// let from_json = Int4::safe_from(serde_json::json!({"value": 42})).unwrap();
/// let from_native = Int4::safe_from(ValueInput::Value(Int4::new(42))).unwrap();
/// assert_eq!(from_text, from_json);
/// assert_eq!(from_json, from_native);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValueInput<T> {
    /// Canonical (or otherwise accepted) PostgreSQL text.
    Text(String),

    /// Structural JSON: the `to_json` mirror or a type-specific convenience
    /// shape such as a bare number.
    Json(Value),

    /// An already-validated value.
    Value(T),
}

impl<T> ValueInput<T> {
    /// Whether the input is already a built value and needs no parsing.
    pub fn is_parsed(&self) -> bool {
        matches!(self, ValueInput::Value(_))
    }
}

impl<T> From<&str> for ValueInput<T> {
    fn from(v: &str) -> Self {
        ValueInput::Text(v.to_string())
    }
}

impl<T> From<String> for ValueInput<T> {
    fn from(v: String) -> Self {
        ValueInput::Text(v)
    }
}

impl<T> From<&String> for ValueInput<T> {
    fn from(v: &String) -> Self {
        ValueInput::Text(v.clone())
    }
}

impl<T> From<Value> for ValueInput<T> {
    fn from(v: Value) -> Self {
        ValueInput::Json(v)
    }
}

impl<T: PgValue> Resolve<T> for ValueInput<T> {
    fn resolve(self) -> Result<T> {
        match self {
            ValueInput::Text(text) => T::parse_text(&text),
            ValueInput::Json(value) => T::from_json(&value),
            ValueInput::Value(value) => Ok(value),
        }
    }
}

/// The value contract.
///
/// Required: [`parse_text`](PgValue::parse_text),
/// [`from_json`](PgValue::from_json), [`to_json`](PgValue::to_json) and a
/// `Display` impl that writes the canonical PostgreSQL text.
///
/// Equality is defined on canonical text: two values are equal when they
/// render to the same PostgreSQL literal.
pub trait PgValue: Sized + Clone + fmt::Debug + fmt::Display + 'static {
    /// PostgreSQL type name, used in error messages.
    const TYPE_NAME: &'static str;

    /// Accepted construction shapes.
    type Input: Resolve<Self>
        + From<Self>
        + From<String>
        + for<'a> From<&'a str>
        + From<Value>;

    /// Parse PostgreSQL text.
    fn parse_text(text: &str) -> Result<Self>;

    /// Build from structural JSON (the `to_json` mirror or a convenience shape).
    fn from_json(value: &Value) -> Result<Self>;

    /// Structural mirror of the value's fields.
    fn to_json(&self) -> Value;

    /// Build from any accepted shape without panicking.
    fn safe_from(input: impl Into<Self::Input>) -> Result<Self> {
        input.into().resolve()
    }

    /// Build from positional arguments.
    ///
    /// Scalars take exactly one argument. Composite types override this to
    /// accept their own positional forms.
    fn from_args(args: Vec<Self::Input>) -> Result<Self> {
        let count = args.len();
        let mut args = args.into_iter();
        match (args.next(), count) {
            (Some(input), 1) => input.resolve(),
            (None, _) => Err(ParseError::too_few_arguments(1, 0)),
            _ => Err(ParseError::too_many_arguments(1, count)),
        }
    }

    /// Canonical PostgreSQL text.
    fn postgres(&self) -> String {
        self.to_string()
    }

    /// Parse `other` and compare canonical text.
    fn safe_equals(&self, other: impl Into<Self::Input>) -> Result<bool> {
        let other = Self::safe_from(other)?;
        Ok(self.postgres() == other.postgres())
    }

    /// Compare against any accepted shape, returning the argument's parse
    /// error unchanged when it does not build.
    ///
    /// The comparing counterpart of [`TryFrom`]/[`FromStr`](std::str::FromStr):
    /// callers that want the issue use `?`, callers that only want a verdict
    /// use [`safe_equals`](PgValue::safe_equals) and match on it.
    fn equals(&self, other: impl Into<Self::Input>) -> Result<bool> {
        self.safe_equals(other)
    }

    /// Whether `value` is already an instance of this type.
    fn is_instance(value: &dyn Any) -> bool {
        value.is::<Self>()
    }
}

/// Implement `From<T>` (and optionally native conversions) into
/// [`ValueInput<T>`] for a scalar type.
macro_rules! scalar_input {
    ($ty:ty) => {
        impl From<$ty> for $crate::core::ValueInput<$ty> {
            fn from(v: $ty) -> Self {
                $crate::core::ValueInput::Value(v)
            }
        }
    };
    ($ty:ty, $($native:ty),+) => {
        scalar_input!($ty);
        $(
            impl From<$native> for $crate::core::ValueInput<$ty> {
                fn from(v: $native) -> Self {
                    $crate::core::ValueInput::Value(<$ty>::from(v))
                }
            }
        )+
    };
}

pub(crate) use scalar_input;
