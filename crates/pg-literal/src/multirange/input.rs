//! Construction shapes accepted by [`MultiRange`].

use serde_json::Value;

use super::MultiRange;
use crate::core::{PgValue, Resolve};
use crate::error::{ParseError, Result};
use crate::range::{Range, RangeInput};

/// Construction shapes accepted by
/// [`MultiRange::safe_from`](crate::core::PgValue::safe_from).
#[derive(Debug, Clone, PartialEq)]
pub enum MultiRangeInput<T> {
    /// Multirange text: `{[1,3),[5,7)}`.
    Text(String),

    /// JSON: a multirange string, an array of range shapes, or a
    /// `{ranges: [...]}` object.
    Json(Value),

    /// An existing multirange.
    MultiRange(MultiRange<T>),

    /// Member shapes, in order.
    Ranges(Vec<RangeInput<T>>),

    /// One member.
    Member(RangeInput<T>),
}

impl<T> MultiRangeInput<T> {
    /// Reinterpret a positional argument as one member.
    pub(crate) fn into_member(self) -> Result<RangeInput<T>> {
        match self {
            MultiRangeInput::Text(text) => Ok(RangeInput::Text(text)),
            MultiRangeInput::Json(value) => Ok(RangeInput::Json(value)),
            MultiRangeInput::Member(input) => Ok(input),
            MultiRangeInput::MultiRange(_) | MultiRangeInput::Ranges(_) => {
                Err(ParseError::invalid_type("range", "multirange"))
            }
        }
    }
}

impl<T> From<&str> for MultiRangeInput<T> {
    fn from(v: &str) -> Self {
        MultiRangeInput::Text(v.to_string())
    }
}

impl<T> From<String> for MultiRangeInput<T> {
    fn from(v: String) -> Self {
        MultiRangeInput::Text(v)
    }
}

impl<T> From<Value> for MultiRangeInput<T> {
    fn from(v: Value) -> Self {
        MultiRangeInput::Json(v)
    }
}

impl<T> From<MultiRange<T>> for MultiRangeInput<T> {
    fn from(v: MultiRange<T>) -> Self {
        MultiRangeInput::MultiRange(v)
    }
}

impl<T> From<Vec<Range<T>>> for MultiRangeInput<T> {
    fn from(v: Vec<Range<T>>) -> Self {
        MultiRangeInput::Ranges(v.into_iter().map(RangeInput::Range).collect())
    }
}

impl<T> From<Vec<RangeInput<T>>> for MultiRangeInput<T> {
    fn from(v: Vec<RangeInput<T>>) -> Self {
        MultiRangeInput::Ranges(v)
    }
}

impl<T> From<Range<T>> for MultiRangeInput<T> {
    fn from(v: Range<T>) -> Self {
        MultiRangeInput::Member(RangeInput::Range(v))
    }
}

impl<T> From<RangeInput<T>> for MultiRangeInput<T> {
    fn from(v: RangeInput<T>) -> Self {
        MultiRangeInput::Member(v)
    }
}

impl<T: PgValue + PartialOrd> Resolve<MultiRange<T>> for MultiRangeInput<T> {
    fn resolve(self) -> Result<MultiRange<T>> {
        match self {
            MultiRangeInput::Text(text) => MultiRange::parse_text(&text),
            MultiRangeInput::Json(value) => MultiRange::from_json(&value),
            MultiRangeInput::MultiRange(multi) => Ok(multi),
            MultiRangeInput::Ranges(ranges) => ranges
                .into_iter()
                .map(|range| range.resolve())
                .collect::<Result<Vec<_>>>()
                .map(MultiRange::new),
            MultiRangeInput::Member(range) => Ok(MultiRange::new(vec![range.resolve()?])),
        }
    }
}
