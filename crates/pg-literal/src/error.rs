//! Error types for literal parsing.
//!
//! Every failed parse produces exactly one [`ParseError`]. Composite parsers
//! (ranges, multiranges, arrays) forward the first inner failure unchanged so
//! the error always points at the offending token.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// What a `too_big` / `too_small` error was measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeKind {
    /// Number of positional arguments passed to a constructor.
    Arguments,
    /// Numeric value outside the type's domain.
    Number,
    /// Number of items in a structured array shape.
    Array,
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeKind::Arguments => write!(f, "arguments"),
            SizeKind::Number => write!(f, "number"),
            SizeKind::Array => write!(f, "array"),
        }
    }
}

/// Main error type for literal parsing and validation.
///
/// Serializes as `{"code": "<kind>", ...fields}`; the human-readable message
/// is the `Display` output and is derived from the fields alone.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ParseError {
    /// The input had the wrong shape altogether.
    #[error("Expected {expected}, received {received}")]
    InvalidType { expected: String, received: String },

    /// The input was text, but not valid text for the type.
    #[error("Invalid {expected} literal: {received:?}")]
    InvalidString { expected: String, received: String },

    /// A field of a structured object had the wrong type.
    #[error("Expected {expected} for key {key:?}, received {received}")]
    InvalidKeyType {
        key: String,
        expected: String,
        received: String,
    },

    /// A structured object lacked required fields.
    #[error("Missing required keys: {}", .keys.join(", "))]
    MissingKeys { keys: Vec<String> },

    /// A structured object carried fields the type does not know.
    #[error("Unrecognized keys: {}", .keys.join(", "))]
    UnrecognizedKeys { keys: Vec<String> },

    /// Too many arguments, or a value above the type's maximum.
    #[error("{}", too_big_message(.kind, .maximum, .received))]
    TooBig {
        kind: SizeKind,
        maximum: i64,
        received: String,
    },

    /// Too few arguments, or a value below the type's minimum.
    #[error("{}", too_small_message(.kind, .minimum, .received))]
    TooSmall {
        kind: SizeKind,
        minimum: i64,
        received: String,
    },

    /// A fractional number where an integer was required.
    #[error("Expected a whole number, received {received}")]
    NotWhole { received: String },

    /// Range lower endpoint is greater than the upper endpoint.
    #[error("Range lower bound must be less than or equal to range upper bound (lower: {lower}, upper: {upper})")]
    InvalidRangeBound { lower: String, upper: String },

    /// A fixed-width value had the wrong length.
    #[error("Expected length {expected}, received length {received}")]
    InvalidNLength { expected: usize, received: usize },
}

fn too_big_message(kind: &SizeKind, maximum: &i64, received: &str) -> String {
    match kind {
        SizeKind::Arguments => format!(
            "Too many arguments: expected at most {}, received {}",
            maximum, received
        ),
        SizeKind::Number => format!(
            "Number must be less than or equal to {}, received {}",
            maximum, received
        ),
        SizeKind::Array => format!(
            "Array must contain at most {} element(s), received {}",
            maximum, received
        ),
    }
}

fn too_small_message(kind: &SizeKind, minimum: &i64, received: &str) -> String {
    match kind {
        SizeKind::Arguments => format!(
            "Too few arguments: expected at least {}, received {}",
            minimum, received
        ),
        SizeKind::Number => format!(
            "Number must be greater than or equal to {}, received {}",
            minimum, received
        ),
        SizeKind::Array => format!(
            "Array must contain at least {} element(s), received {}",
            minimum, received
        ),
    }
}

impl ParseError {
    /// Create an InvalidType error.
    pub fn invalid_type(expected: impl Into<String>, received: impl Into<String>) -> Self {
        ParseError::InvalidType {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create an InvalidString error for a literal of the named type.
    pub fn invalid_string(expected: impl Into<String>, received: impl Into<String>) -> Self {
        ParseError::InvalidString {
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create an InvalidKeyType error.
    pub fn invalid_key_type(
        key: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        ParseError::InvalidKeyType {
            key: key.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }

    /// Create the error for an argument list that is too long.
    pub fn too_many_arguments(maximum: usize, received: usize) -> Self {
        ParseError::TooBig {
            kind: SizeKind::Arguments,
            maximum: maximum as i64,
            received: received.to_string(),
        }
    }

    /// Create the error for an argument list that is too short.
    pub fn too_few_arguments(minimum: usize, received: usize) -> Self {
        ParseError::TooSmall {
            kind: SizeKind::Arguments,
            minimum: minimum as i64,
            received: received.to_string(),
        }
    }

    /// Create the error for a JSON array of the wrong fixed length.
    pub fn array_length(expected: usize, received: usize) -> Self {
        if received > expected {
            ParseError::TooBig {
                kind: SizeKind::Array,
                maximum: expected as i64,
                received: received.to_string(),
            }
        } else {
            ParseError::TooSmall {
                kind: SizeKind::Array,
                minimum: expected as i64,
                received: received.to_string(),
            }
        }
    }

    /// Create an InvalidRangeBound error from the rendered endpoints.
    pub fn invalid_range_bound(lower: impl fmt::Display, upper: impl fmt::Display) -> Self {
        ParseError::InvalidRangeBound {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    /// The snake_case kind name, e.g. `invalid_range_bound`.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidType { .. } => "invalid_type",
            ParseError::InvalidString { .. } => "invalid_string",
            ParseError::InvalidKeyType { .. } => "invalid_key_type",
            ParseError::MissingKeys { .. } => "missing_keys",
            ParseError::UnrecognizedKeys { .. } => "unrecognized_keys",
            ParseError::TooBig { .. } => "too_big",
            ParseError::TooSmall { .. } => "too_small",
            ParseError::NotWhole { .. } => "not_whole",
            ParseError::InvalidRangeBound { .. } => "invalid_range_bound",
            ParseError::InvalidNLength { .. } => "invalid_n_length",
        }
    }

    /// Human-readable message; identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error loading or validating a [`CodecConfig`](crate::config::CodecConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration values are out of bounds or inconsistent.
    #[error("Configuration error: {0}")]
    Invalid(String),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
