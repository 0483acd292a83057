//! # pg-literal
//!
//! PostgreSQL text literals as strongly typed Rust values.
//!
//! This library parses and emits the textual forms PostgreSQL uses for:
//!
//! - **Scalars** such as `int4`, `numeric`, `date`, `timestamptz`, `uuid`
//! - **Ranges** like `[1,5)` and `empty`, with bound validation and
//!   empty-range normalization
//! - **Multiranges** like `{[1,3),[7,9]}`
//! - **Arrays** like `{1,NULL,"a b"}`, of any of the above
//!
//! Every type implements the [`PgValue`] contract: construction from text,
//! JSON or an existing value without panicking, canonical text through
//! `Display`, a structural JSON mirror, and equality on canonical text.
//!
//! ## Example
//!
//! ```rust
//! use pg_literal::{Int4Range, PgValue};
//!
//! let range = Int4Range::safe_from("[1,5)").unwrap();
//! assert!(range.is_within_range(1).unwrap());
//! assert!(!range.is_within_range(5).unwrap());
//! assert_eq!(range.to_string(), "[1,5)");
//!
//! let err = Int4Range::safe_from("[5,1)").unwrap_err();
//! assert_eq!(err.code(), "invalid_range_bound");
//! ```

pub mod array;
pub mod config;
pub mod core;
pub mod error;
pub mod multirange;
pub mod range;
pub mod types;

// Re-exports for convenient access
pub use array::{decode_array, encode_array, ArrayInput, PgArray};
pub use config::CodecConfig;
pub use crate::core::{PgValue, Resolve, ValueInput};
pub use error::{ConfigError, ParseError, Result, SizeKind};
pub use multirange::{MultiRange, MultiRangeInput};
pub use range::{LowerBound, Range, RangeInput, UpperBound};
pub use types::{
    Bit, Date, DateMultiRange, DateRange, Int2, Int4, Int4MultiRange, Int4Range, Int8,
    Int8MultiRange, Int8Range, NumMultiRange, NumRange, Numeric, Text, Timestamp, Timestamptz,
    TsMultiRange, TsRange, TsTzMultiRange, TsTzRange, Uuid,
};
