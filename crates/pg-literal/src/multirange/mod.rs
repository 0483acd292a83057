//! Multiranges: ordered lists of ranges over one element type.
//!
//! Text form is `{}` or `{` range-text (`,` range-text)* `}`, where each
//! member is anything [`Range`] accepts, `empty` included:
//!
//! ```text
//! {}
//! {empty}
//! {[1,3),[7,9]}
//! ```
//!
//! Members keep the order they were given in. Overlapping or adjacent
//! members are not merged, so `{[1,5),[3,8)}` renders back unchanged.

mod input;

pub use input::MultiRangeInput;

use std::fmt;
use std::str::FromStr;

use serde_json::{json, Value};
use tracing::debug;

use crate::config::CodecConfig;
use crate::core::object::{expect_object, field, json_kind};
use crate::core::{PgValue, Resolve, ValueInput};
use crate::error::{ParseError, Result};
use crate::range::{Range, RangeInput};

/// An ordered list of ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiRange<T> {
    ranges: Vec<Range<T>>,
}

impl<T> MultiRange<T> {
    /// Wrap ranges as given.
    pub fn new(ranges: Vec<Range<T>>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[Range<T>] {
        &self.ranges
    }

    pub fn into_ranges(self) -> Vec<Range<T>> {
        self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether there are no members. `{empty}` has one member and is not
    /// empty in this sense.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.ranges.iter()
    }
}

impl<T> Default for MultiRange<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<Range<T>>> for MultiRange<T> {
    fn from(ranges: Vec<Range<T>>) -> Self {
        Self::new(ranges)
    }
}

impl<'a, T> IntoIterator for &'a MultiRange<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T: PgValue + PartialOrd> MultiRange<T> {
    /// Parse multirange text using `config` for every member.
    pub fn parse_text_with(text: &str, config: &CodecConfig) -> Result<Self> {
        let result = Self::parse_literal(text, config);
        if let Err(err) = &result {
            debug!(input = text, code = err.code(), "rejected multirange literal");
        }
        result
    }

    fn parse_literal(text: &str, config: &CodecConfig) -> Result<Self> {
        let invalid = || ParseError::invalid_string(Self::TYPE_NAME, text);
        let body = text
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(invalid)?;

        split_members(body)
            .ok_or_else(invalid)?
            .into_iter()
            .map(|member| Range::parse_text_with(member, config))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Replace the members.
    pub fn with_ranges(&self, ranges: Vec<RangeInput<T>>) -> Result<Self> {
        MultiRangeInput::Ranges(ranges).resolve()
    }

    /// Replace the whole value with parsed multirange text.
    pub fn with_text(&self, text: &str) -> Result<Self> {
        Self::parse_text(text)
    }

    /// A copy with `range` appended.
    pub fn with_range(&self, range: impl Into<RangeInput<T>>) -> Result<Self> {
        let mut ranges = self.ranges.clone();
        ranges.push(range.into().resolve()?);
        Ok(Self::new(ranges))
    }

    /// Whether any member contains `value`.
    pub fn is_within_range(&self, value: impl Into<ValueInput<T>>) -> Result<bool> {
        let value = value.into().resolve()?;
        Ok(self.ranges.iter().any(|range| range.contains(&value)))
    }
}

/// Split a multirange body into member texts.
///
/// Returns `None` on a missing or doubled separator, a trailing separator or
/// an unterminated member.
fn split_members(body: &str) -> Option<Vec<&str>> {
    let mut members = Vec::new();
    let mut rest = body.trim_start();
    if rest.is_empty() {
        return Some(members);
    }

    loop {
        let end = member_end(rest)?;
        members.push(rest[..end].trim_end());
        rest = rest[end..].trim_start();
        match rest.strip_prefix(',') {
            Some(next) => rest = next.trim_start(),
            None if rest.is_empty() => return Some(members),
            None => return None,
        }
    }
}

/// Byte length of the member at the start of `text`.
///
/// A bracketed member runs to the first closing bracket outside quotes.
/// Anything else (`empty`) runs to the next comma.
fn member_end(text: &str) -> Option<usize> {
    let first = text.chars().next()?;
    if !matches!(first, '[' | '(') {
        let end = text.find(',').unwrap_or(text.len());
        return (end > 0).then_some(end);
    }

    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in text.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            // A doubled quote toggles twice and leaves the state unchanged.
            '"' => in_quotes = !in_quotes,
            ']' | ')' if !in_quotes => return Some(i + c.len_utf8()),
            _ => {}
        }
    }
    None
}

impl<T: PgValue> fmt::Display for MultiRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", range)?;
        }
        f.write_str("}")
    }
}

impl<T: PgValue + PartialOrd> FromStr for MultiRange<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<T: PgValue + PartialOrd> TryFrom<&str> for MultiRange<T> {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<T: PgValue + PartialOrd> PgValue for MultiRange<T> {
    const TYPE_NAME: &'static str = "multirange";
    type Input = MultiRangeInput<T>;

    fn parse_text(text: &str) -> Result<Self> {
        Self::parse_text_with(text, &CodecConfig::default())
    }

    fn from_json(value: &Value) -> Result<Self> {
        let items = match value {
            Value::String(s) => return Self::parse_text(s),
            Value::Array(items) => items,
            Value::Object(_) => {
                let map = expect_object(value, "multirange object", &["ranges"], &[])?;
                match field(map, "ranges")? {
                    Value::Array(items) => items,
                    other => {
                        return Err(ParseError::invalid_key_type(
                            "ranges",
                            "array",
                            json_kind(other),
                        ))
                    }
                }
            }
            other => {
                return Err(ParseError::invalid_type(
                    "string | array | object",
                    json_kind(other),
                ))
            }
        };
        items
            .iter()
            .map(Range::from_json)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    fn to_json(&self) -> Value {
        let ranges: Vec<Value> = self.ranges.iter().map(PgValue::to_json).collect();
        json!({ "ranges": ranges })
    }

    /// A single text argument starting with `{`, given as a string or a JSON
    /// string, is multirange text. Every other argument is one member,
    /// parsed as a range.
    fn from_args(args: Vec<MultiRangeInput<T>>) -> Result<Self> {
        if args.is_empty() {
            return Err(ParseError::too_few_arguments(1, 0));
        }
        let single_text = match args.as_slice() {
            [MultiRangeInput::Text(text)] | [MultiRangeInput::Json(Value::String(text))] => {
                Some(text.as_str())
            }
            _ => None,
        };
        if let Some(text) = single_text.filter(|text| text.trim_start().starts_with('{')) {
            return Self::parse_text(text);
        }
        args.into_iter()
            .map(|arg| arg.into_member()?.resolve())
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}
