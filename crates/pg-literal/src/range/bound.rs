//! Bound markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound marker: `[` (inclusive) or `(` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LowerBound {
    #[default]
    #[serde(rename = "[")]
    Inclusive,
    #[serde(rename = "(")]
    Exclusive,
}

/// Upper bound marker: `]` (inclusive) or `)` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpperBound {
    #[serde(rename = "]")]
    Inclusive,
    #[default]
    #[serde(rename = ")")]
    Exclusive,
}

impl LowerBound {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '[' => Some(LowerBound::Inclusive),
            '(' => Some(LowerBound::Exclusive),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LowerBound::Inclusive => '[',
            LowerBound::Exclusive => '(',
        }
    }

    pub fn is_inclusive(self) -> bool {
        self == LowerBound::Inclusive
    }
}

impl UpperBound {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ']' => Some(UpperBound::Inclusive),
            ')' => Some(UpperBound::Exclusive),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            UpperBound::Inclusive => ']',
            UpperBound::Exclusive => ')',
        }
    }

    pub fn is_inclusive(self) -> bool {
        self == UpperBound::Inclusive
    }
}

impl fmt::Display for LowerBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for c in ['[', '('] {
            assert_eq!(LowerBound::from_char(c).unwrap().as_char(), c);
        }
        for c in [']', ')'] {
            assert_eq!(UpperBound::from_char(c).unwrap().as_char(), c);
        }
        assert_eq!(LowerBound::from_char(']'), None);
        assert_eq!(UpperBound::from_char('('), None);
    }

    #[test]
    fn test_defaults_are_half_open() {
        assert_eq!(LowerBound::default(), LowerBound::Inclusive);
        assert_eq!(UpperBound::default(), UpperBound::Exclusive);
    }

    #[test]
    fn test_serde_uses_bracket_chars() {
        assert_eq!(
            serde_json::to_value(LowerBound::Exclusive).unwrap(),
            serde_json::json!("(")
        );
        let upper: UpperBound = serde_json::from_value(serde_json::json!("]")).unwrap();
        assert_eq!(upper, UpperBound::Inclusive);
    }
}
