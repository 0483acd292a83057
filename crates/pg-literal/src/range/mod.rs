//! Ranges over any ordered literal type.
//!
//! A [`Range<T>`] is either empty or a pair of endpoints with independent
//! inclusive/exclusive bounds:
//!
//! ```text
//! [1,5)      1 <= x < 5
//! (1,5]      1 <  x <= 5
//! [3,3]      the single point 3
//! empty      no points
//! ```
//!
//! Every construction and replacement validates `lower <= upper` and
//! normalizes equal endpoints: `[x,x]` is kept, any other bound pair over
//! equal endpoints collapses to `empty`, as in PostgreSQL.

mod bound;
mod input;

pub use bound::{LowerBound, UpperBound};
pub use input::RangeInput;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::config::CodecConfig;
use crate::core::literal::{has_unquoted, quote_if, split_elements, Element, QuoteStyle};
use crate::core::object::{expect_object, field, json_kind};
use crate::core::ordering::{is_equal, is_greater, is_greater_than, is_less};
use crate::core::{PgValue, Resolve, ValueInput};
use crate::error::{ParseError, Result};

/// A possibly empty interval over `T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: LowerBound,
    upper: UpperBound,
    values: Option<(T, T)>,
}

impl<T> Range<T> {
    /// The empty range.
    pub fn empty() -> Self {
        Self {
            lower: LowerBound::default(),
            upper: UpperBound::default(),
            values: None,
        }
    }

    pub fn lower(&self) -> LowerBound {
        self.lower
    }

    pub fn upper(&self) -> UpperBound {
        self.upper
    }

    /// Both endpoints, or `None` for the empty range.
    pub fn values(&self) -> Option<&(T, T)> {
        self.values.as_ref()
    }

    pub fn lower_value(&self) -> Option<&T> {
        self.values.as_ref().map(|(lower, _)| lower)
    }

    pub fn upper_value(&self) -> Option<&T> {
        self.values.as_ref().map(|(_, upper)| upper)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_none()
    }
}

impl<T: PgValue + PartialOrd> Range<T> {
    /// Validate endpoint order and normalize.
    pub(crate) fn build(
        lower: LowerBound,
        upper: UpperBound,
        values: Option<(T, T)>,
    ) -> Result<Self> {
        if let Some((a, b)) = &values {
            if is_greater_than(a, b) {
                return Err(ParseError::invalid_range_bound(a, b));
            }
        }
        Ok(Self::normalized(lower, upper, values))
    }

    fn normalized(lower: LowerBound, upper: UpperBound, values: Option<(T, T)>) -> Self {
        match values {
            Some((a, b))
                if is_equal(&a, &b) && !(lower.is_inclusive() && upper.is_inclusive()) =>
            {
                Self::empty()
            }
            Some(values) => Self {
                lower,
                upper,
                values: Some(values),
            },
            None => Self::empty(),
        }
    }

    /// Build from endpoints with explicit bounds.
    pub fn new(lower: LowerBound, a: T, b: T, upper: UpperBound) -> Result<Self> {
        Self::build(lower, upper, Some((a, b)))
    }

    /// Parse range text using `config`.
    pub fn parse_text_with(text: &str, config: &CodecConfig) -> Result<Self> {
        let result = Self::parse_literal(text, config);
        if let Err(err) = &result {
            debug!(input = text, code = err.code(), "rejected range literal");
        }
        result
    }

    fn parse_literal(text: &str, config: &CodecConfig) -> Result<Self> {
        let trimmed = text.trim();
        if config.is_empty_literal(trimmed) {
            return Ok(Self::empty());
        }

        let invalid = || ParseError::invalid_string(Self::TYPE_NAME, text);
        let mut chars = trimmed.chars();
        let lower = chars
            .next()
            .and_then(LowerBound::from_char)
            .ok_or_else(invalid)?;
        let upper = chars
            .next_back()
            .and_then(UpperBound::from_char)
            .ok_or_else(invalid)?;

        let body = chars.as_str();
        if has_unquoted(body, |c| matches!(c, '(' | ')' | '[' | ']')) {
            return Err(invalid());
        }
        let elements =
            split_elements(body, ',', QuoteStyle::Doubled, false).ok_or_else(invalid)?;
        let [first, second]: [Element; 2] = elements.try_into().map_err(|_| invalid())?;
        // Unbounded ranges are not supported: both endpoints must be present.
        if [&first, &second]
            .iter()
            .any(|e| !e.quoted && e.text.is_empty())
        {
            return Err(invalid());
        }

        let a = T::parse_text(&first.text)?;
        let b = T::parse_text(&second.text)?;
        Self::build(lower, upper, Some((a, b)))
    }

    /// A copy with a different lower bound, re-normalized.
    pub fn with_lower(&self, lower: LowerBound) -> Self {
        Self::normalized(lower, self.upper, self.values.clone())
    }

    /// A copy with a different upper bound, re-normalized.
    pub fn with_upper(&self, upper: UpperBound) -> Self {
        Self::normalized(self.lower, upper, self.values.clone())
    }

    /// A copy with new endpoints, keeping the current bounds.
    ///
    /// An empty range has no bounds of its own, so replacing its values
    /// uses the default `[` and `)`.
    pub fn with_values(
        &self,
        a: impl Into<ValueInput<T>>,
        b: impl Into<ValueInput<T>>,
    ) -> Result<Self> {
        let values = (a.into().resolve()?, b.into().resolve()?);
        Self::build(self.lower, self.upper, Some(values))
    }

    /// Replace the whole value with parsed range text.
    pub fn with_text(&self, text: &str) -> Result<Self> {
        Self::parse_text(text)
    }

    /// Whether `value` lies within the range.
    ///
    /// The argument is parsed as an element first; a parse failure is
    /// returned as the error.
    pub fn is_within_range(&self, value: impl Into<ValueInput<T>>) -> Result<bool> {
        let value = value.into().resolve()?;
        Ok(self.contains(&value))
    }

    /// Membership for an already-built element.
    pub fn contains(&self, value: &T) -> bool {
        match &self.values {
            None => false,
            Some((a, b)) => {
                is_greater(value, a, self.lower.is_inclusive())
                    && is_less(value, b, self.upper.is_inclusive())
            }
        }
    }

    fn pair_from_json(items: &[Value]) -> Result<(T, T)> {
        match items {
            [a, b] => Ok((T::from_json(a)?, T::from_json(b)?)),
            _ => Err(ParseError::array_length(2, items.len())),
        }
    }
}

/// Read an optional bound marker field.
fn bound_field<B: DeserializeOwned>(
    map: &Map<String, Value>,
    key: &str,
    expected: &str,
) -> Result<Option<B>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    serde_json::from_value(value.clone()).map(Some).map_err(|_| {
        let received = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| json_kind(value).to_string());
        ParseError::invalid_key_type(key, expected, received)
    })
}

impl<T: PgValue> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((a, b)) = &self.values else {
            return f.write_str("empty");
        };
        let special =
            |c: char| matches!(c, '"' | '\\' | '(' | ')' | '[' | ']' | ',') || c.is_whitespace();
        write!(
            f,
            "{}{},{}{}",
            self.lower,
            quote_if(&a.to_string(), QuoteStyle::Doubled, special),
            quote_if(&b.to_string(), QuoteStyle::Doubled, special),
            self.upper
        )
    }
}

impl<T: PgValue + PartialOrd> FromStr for Range<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<T: PgValue + PartialOrd> TryFrom<&str> for Range<T> {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse_text(s)
    }
}

impl<T: PgValue + PartialOrd> PgValue for Range<T> {
    const TYPE_NAME: &'static str = "range";
    type Input = RangeInput<T>;

    fn parse_text(text: &str) -> Result<Self> {
        Self::parse_text_with(text, &CodecConfig::default())
    }

    fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse_text(s),
            Value::Array(items) => {
                let values = Self::pair_from_json(items)?;
                Self::build(LowerBound::default(), UpperBound::default(), Some(values))
            }
            Value::Object(_) => {
                let map = expect_object(value, "range object", &["values"], &["lower", "upper"])?;
                let lower = bound_field(map, "lower", "\"[\" | \"(\"")?.unwrap_or_default();
                let upper = bound_field(map, "upper", "\"]\" | \")\"")?.unwrap_or_default();
                let values = match field(map, "values")? {
                    Value::Null => None,
                    Value::Array(items) => Some(Self::pair_from_json(items)?),
                    other => {
                        return Err(ParseError::invalid_key_type(
                            "values",
                            "array | null",
                            json_kind(other),
                        ))
                    }
                };
                Self::build(lower, upper, values)
            }
            other => Err(ParseError::invalid_type(
                "string | array | object",
                json_kind(other),
            )),
        }
    }

    fn to_json(&self) -> Value {
        let values = match &self.values {
            Some((a, b)) => json!([a.to_json(), b.to_json()]),
            None => Value::Null,
        };
        json!({
            "lower": self.lower.to_string(),
            "upper": self.upper.to_string(),
            "values": values,
        })
    }

    /// One argument is any range shape; two arguments are the endpoints.
    fn from_args(args: Vec<RangeInput<T>>) -> Result<Self> {
        let count = args.len();
        let mut args = args.into_iter();
        match (args.next(), args.next(), count) {
            (None, _, _) => Err(ParseError::too_few_arguments(1, 0)),
            (Some(arg), None, _) => arg.resolve(),
            (Some(a), Some(b), 2) => {
                RangeInput::Pair(a.into_element()?, b.into_element()?).resolve()
            }
            _ => Err(ParseError::too_many_arguments(2, count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Date, Int4, Numeric, Text};

    fn int_range(text: &str) -> Range<Int4> {
        Range::parse_text(text).unwrap()
    }

    // =========================================================================
    // Text parsing
    // =========================================================================

    #[test]
    fn test_parse_canonical_text() {
        let range = int_range("[1,5)");
        assert_eq!(range.lower(), LowerBound::Inclusive);
        assert_eq!(range.upper(), UpperBound::Exclusive);
        assert_eq!(range.lower_value(), Some(&Int4::new(1)));
        assert_eq!(range.upper_value(), Some(&Int4::new(5)));
        assert_eq!(range.to_string(), "[1,5)");
        assert_eq!(int_range("(1,5]").to_string(), "(1,5]");
        assert_eq!(int_range(" [1, 5) ").to_string(), "[1,5)");
    }

    #[test]
    fn test_parse_empty_spellings() {
        for text in ["empty", " empty ", "EMPTY", "Empty"] {
            assert!(int_range(text).is_empty(), "{}", text);
        }
        let strict = CodecConfig {
            case_insensitive_empty: false,
            ..CodecConfig::default()
        };
        assert!(Range::<Int4>::parse_text_with("EMPTY", &strict).is_err());
        assert!(Range::<Int4>::parse_text_with("empty", &strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "1,5", "[1,5", "1,5)", "[1)", "[1,2,3)", "{1,5}", "[,5)", "[1,)"] {
            assert_eq!(
                Range::<Int4>::parse_text(text).unwrap_err(),
                ParseError::invalid_string("range", text),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_parse_rejects_bare_bound_characters_in_elements() {
        for text in ["[a),b)", "[a,b]c)", "[(a,b)", "[a,[b)"] {
            assert_eq!(
                Range::<Text>::parse_text(text).unwrap_err(),
                ParseError::invalid_string("range", text),
                "{}",
                text
            );
        }

        let range = Range::<Text>::parse_text("[\"a)\",b)").unwrap();
        assert_eq!(range.lower_value().unwrap().as_str(), "a)");
        assert_eq!(range.to_string(), "[\"a)\",b)");

        let escaped = Range::<Text>::parse_text("[a\\),b)").unwrap();
        assert_eq!(escaped, range);
    }

    #[test]
    fn test_parse_forwards_element_error() {
        assert_eq!(
            Range::<Int4>::parse_text("[1,x)").unwrap_err(),
            ParseError::invalid_string("int4", "x")
        );
        assert!(matches!(
            Range::<Int4>::parse_text("[1,2.5)").unwrap_err(),
            ParseError::NotWhole { .. }
        ));
    }

    #[test]
    fn test_quoted_elements() {
        let range = Range::<Text>::parse_text("[\"a,b\",\"c\"\"d\")").unwrap();
        assert_eq!(range.lower_value(), Some(&Text::new("a,b")));
        assert_eq!(range.upper_value(), Some(&Text::new("c\"d")));
        assert_eq!(range.to_string(), "[\"a,b\",\"c\"\"d\")");
        assert_eq!(Range::<Text>::parse_text(&range.to_string()).unwrap(), range);

        let range = Range::<Text>::parse_text("[\"\",b)").unwrap();
        assert_eq!(range.lower_value(), Some(&Text::new("")));
        assert_eq!(range.to_string(), "[\"\",b)");
    }

    // =========================================================================
    // Validation and normalization
    // =========================================================================

    #[test]
    fn test_lower_greater_than_upper_fails() {
        assert_eq!(
            Range::<Int4>::parse_text("[5,1)").unwrap_err(),
            ParseError::invalid_range_bound(5, 1)
        );
        assert_eq!(
            Range::<Int4>::from_args(vec!["5".into(), "1".into()]).unwrap_err(),
            ParseError::InvalidRangeBound {
                lower: "5".into(),
                upper: "1".into()
            }
        );
    }

    #[test]
    fn test_equal_endpoints_normalize() {
        assert!(int_range("[3,3)").is_empty());
        assert!(int_range("(3,3]").is_empty());
        assert!(int_range("(3,3)").is_empty());
        let point = int_range("[3,3]");
        assert!(!point.is_empty());
        assert_eq!(point.to_string(), "[3,3]");
    }

    #[test]
    fn test_equal_date_endpoints_render_empty() {
        let range = Range::<Date>::parse_text("[2004-10-19,2004-10-19)").unwrap();
        assert!(range.is_empty());
        assert_eq!(range.to_string(), "empty");
    }

    #[test]
    fn test_numerically_equal_endpoints_normalize() {
        let range = Range::<Numeric>::parse_text("[1.5,1.50)").unwrap();
        assert!(range.is_empty());
    }

    // =========================================================================
    // Construction shapes
    // =========================================================================

    #[test]
    fn test_safe_from_shapes_agree() {
        let expected = int_range("[1,5)");
        let shapes: Vec<RangeInput<Int4>> = vec![
            "[1,5)".into(),
            (1i32, 5i32).into(),
            ("1", "5").into(),
            expected.clone().into(),
            json!("[1,5)").into(),
            json!([1, 5]).into(),
            json!({"lower": "[", "upper": ")", "values": [1, 5]}).into(),
            json!({"values": [{"value": 1}, {"value": 5}]}).into(),
            RangeInput::Parts {
                lower: None,
                upper: None,
                values: Some((Int4::new(1).into(), "5".into())),
            },
        ];
        for shape in shapes {
            assert_eq!(Range::<Int4>::safe_from(shape.clone()).unwrap(), expected, "{:?}", shape);
        }
    }

    #[test]
    fn test_parts_without_values_is_empty() {
        let range = Range::<Int4>::safe_from(RangeInput::Parts {
            lower: Some(LowerBound::Exclusive),
            upper: Some(UpperBound::Inclusive),
            values: None,
        })
        .unwrap();
        assert!(range.is_empty());
        assert!(Range::<Int4>::safe_from(json!({"values": null})).unwrap().is_empty());
    }

    #[test]
    fn test_parts_normalize_on_construction() {
        let half_open = Range::<Int4>::safe_from(json!({"lower": "[", "upper": ")", "values": [4, 4]}));
        assert!(half_open.unwrap().is_empty());
        let closed = Range::<Int4>::safe_from(json!({"lower": "[", "upper": "]", "values": [4, 4]}));
        assert!(!closed.unwrap().is_empty());
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            Range::<Int4>::from_json(&json!(true)).unwrap_err(),
            ParseError::invalid_type("string | array | object", "boolean")
        );
        assert_eq!(
            Range::<Int4>::from_json(&json!([1, 2, 3])).unwrap_err(),
            ParseError::array_length(2, 3)
        );
        assert_eq!(
            Range::<Int4>::from_json(&json!({"lower": "<", "values": [1, 2]})).unwrap_err(),
            ParseError::invalid_key_type("lower", "\"[\" | \"(\"", "<")
        );
        assert_eq!(
            Range::<Int4>::from_json(&json!({"values": "1,2"})).unwrap_err(),
            ParseError::invalid_key_type("values", "array | null", "string")
        );
        assert_eq!(
            Range::<Int4>::from_json(&json!({"lower": "["})).unwrap_err(),
            ParseError::MissingKeys {
                keys: vec!["values".into()]
            }
        );
        assert_eq!(
            Range::<Int4>::from_json(&json!({"values": null, "step": 1})).unwrap_err(),
            ParseError::UnrecognizedKeys {
                keys: vec!["step".into()]
            }
        );
    }

    #[test]
    fn test_from_args_arity() {
        assert_eq!(
            Range::<Int4>::from_args(vec![]).unwrap_err(),
            ParseError::too_few_arguments(1, 0)
        );
        assert_eq!(
            Range::<Int4>::from_args(vec!["1".into(), "2".into(), "3".into()]).unwrap_err(),
            ParseError::too_many_arguments(2, 3)
        );
        assert_eq!(
            Range::<Int4>::from_args(vec!["(1,3]".into()]).unwrap().to_string(),
            "(1,3]"
        );
        assert_eq!(
            Range::<Int4>::from_args(vec![ValueInput::Value(Int4::new(1)).into(), json!(3).into()])
                .unwrap()
                .to_string(),
            "[1,3)"
        );
    }

    #[test]
    fn test_from_args_rejects_nested_range() {
        let err = Range::<Int4>::from_args(vec![int_range("[1,2)").into(), "3".into()]).unwrap_err();
        assert_eq!(err, ParseError::invalid_type("int4", "range"));
    }

    #[test]
    fn test_single_element_is_not_a_range() {
        let err = Range::<Int4>::safe_from(ValueInput::Value(Int4::new(1))).unwrap_err();
        assert_eq!(err, ParseError::invalid_type("range", "int4"));
    }

    // =========================================================================
    // Replacement and membership
    // =========================================================================

    #[test]
    fn test_replacements_renormalize() {
        let point = int_range("[3,3]");
        assert!(point.with_upper(UpperBound::Exclusive).is_empty());
        assert!(point.with_lower(LowerBound::Exclusive).is_empty());

        let range = int_range("[1,5)");
        assert_eq!(range.with_lower(LowerBound::Exclusive).to_string(), "(1,5)");
        assert_eq!(range.with_upper(UpperBound::Inclusive).to_string(), "[1,5]");
        assert_eq!(range.with_values("2", 8).unwrap().to_string(), "[2,8)");
        assert!(range.with_values("2", "2").unwrap().is_empty());
        assert_eq!(
            range.with_values(9, 2).unwrap_err(),
            ParseError::invalid_range_bound(9, 2)
        );
        assert_eq!(range.with_text("(0,1]").unwrap().to_string(), "(0,1]");
        assert_eq!(range.to_string(), "[1,5)");
    }

    #[test]
    fn test_membership_boundaries() {
        let range = int_range("[1,5)");
        assert!(range.is_within_range(1).unwrap());
        assert!(range.is_within_range("4").unwrap());
        assert!(!range.is_within_range(5).unwrap());
        assert!(!range.is_within_range(0).unwrap());
        assert!(range.is_within_range("x").is_err());

        let closed = int_range("(1,5]");
        assert!(!closed.is_within_range(1).unwrap());
        assert!(closed.is_within_range(5).unwrap());

        assert!(!Range::<Int4>::empty().is_within_range(1).unwrap());
    }

    // =========================================================================
    // Equality and JSON
    // =========================================================================

    #[test]
    fn test_to_json() {
        assert_eq!(
            int_range("(1,5]").to_json(),
            json!({"lower": "(", "upper": "]", "values": [{"value": 1}, {"value": 5}]})
        );
        assert_eq!(
            Range::<Int4>::empty().to_json(),
            json!({"lower": "[", "upper": ")", "values": null})
        );
    }

    #[test]
    fn test_equality_is_reflexive() {
        for text in ["[1,5)", "(1,5]", "[3,3]", "empty"] {
            let range = int_range(text);
            assert!(range.equals(range.to_string()).unwrap(), "{}", text);
            assert!(range.equals(range.to_json()).unwrap(), "{}", text);
            assert!(range.equals(range.clone()).unwrap(), "{}", text);
        }
        assert!(!int_range("[1,5)").equals("[1,5]").unwrap());
        assert_eq!(
            int_range("[1,5)").equals("garbage").unwrap_err(),
            ParseError::invalid_string("range", "garbage")
        );
        assert_eq!(
            int_range("[1,5)").equals("[5,1)").unwrap_err(),
            ParseError::invalid_range_bound(5, 1)
        );
        assert!(int_range("[1,5)").safe_equals("garbage").is_err());
    }

    #[test]
    fn test_is_instance() {
        let range = int_range("[1,5)");
        assert!(Range::<Int4>::is_instance(&range));
        assert!(!Range::<Date>::is_instance(&range));
        assert!(!Int4::is_instance(&range));
    }
}
