//! Construction shapes accepted by [`Range`].

use serde_json::Value;

use super::bound::{LowerBound, UpperBound};
use super::Range;
use crate::core::{PgValue, Resolve, ValueInput};
use crate::error::{ParseError, Result};

/// Construction shapes accepted by [`Range::safe_from`](crate::core::PgValue::safe_from).
///
/// Bounds left unspecified default to `[` and `)`.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeInput<T> {
    /// Range text: `[1,5)`, `("a","b"]`, `empty`.
    Text(String),

    /// JSON: a range string, a two-element array of element shapes, or a
    /// `{lower, upper, values}` object.
    Json(Value),

    /// An existing range.
    Range(Range<T>),

    /// Two element shapes with default bounds.
    Pair(ValueInput<T>, ValueInput<T>),

    /// Explicit parts. `values: None` is the empty range.
    Parts {
        lower: Option<LowerBound>,
        upper: Option<UpperBound>,
        values: Option<(ValueInput<T>, ValueInput<T>)>,
    },

    /// A single element. Only meaningful as one of two positional
    /// arguments to [`Range::from_args`](crate::core::PgValue::from_args).
    Element(ValueInput<T>),
}

impl<T> RangeInput<T> {
    /// Reinterpret a positional argument as an element shape.
    pub(crate) fn into_element(self) -> Result<ValueInput<T>>
    where
        T: PgValue,
    {
        match self {
            RangeInput::Text(text) => Ok(ValueInput::Text(text)),
            RangeInput::Json(value) => Ok(ValueInput::Json(value)),
            RangeInput::Element(input) => Ok(input),
            RangeInput::Range(_) | RangeInput::Pair(..) | RangeInput::Parts { .. } => {
                Err(ParseError::invalid_type(T::TYPE_NAME, "range"))
            }
        }
    }
}

impl<T> From<&str> for RangeInput<T> {
    fn from(v: &str) -> Self {
        RangeInput::Text(v.to_string())
    }
}

impl<T> From<String> for RangeInput<T> {
    fn from(v: String) -> Self {
        RangeInput::Text(v)
    }
}

impl<T> From<Value> for RangeInput<T> {
    fn from(v: Value) -> Self {
        RangeInput::Json(v)
    }
}

impl<T> From<Range<T>> for RangeInput<T> {
    fn from(v: Range<T>) -> Self {
        RangeInput::Range(v)
    }
}

impl<T> From<ValueInput<T>> for RangeInput<T> {
    fn from(v: ValueInput<T>) -> Self {
        RangeInput::Element(v)
    }
}

impl<T, A, B> From<(A, B)> for RangeInput<T>
where
    A: Into<ValueInput<T>>,
    B: Into<ValueInput<T>>,
{
    fn from((a, b): (A, B)) -> Self {
        RangeInput::Pair(a.into(), b.into())
    }
}

impl<T: PgValue + PartialOrd> Resolve<Range<T>> for RangeInput<T> {
    fn resolve(self) -> Result<Range<T>> {
        match self {
            RangeInput::Text(text) => Range::parse_text(&text),
            RangeInput::Json(value) => Range::from_json(&value),
            RangeInput::Range(range) => Ok(range),
            RangeInput::Pair(a, b) => Range::build(
                LowerBound::default(),
                UpperBound::default(),
                Some((a.resolve()?, b.resolve()?)),
            ),
            RangeInput::Parts {
                lower,
                upper,
                values,
            } => {
                let values = match values {
                    Some((a, b)) => Some((a.resolve()?, b.resolve()?)),
                    None => None,
                };
                Range::build(lower.unwrap_or_default(), upper.unwrap_or_default(), values)
            }
            RangeInput::Element(_) => Err(ParseError::invalid_type("range", T::TYPE_NAME)),
        }
    }
}
