//! Core abstractions shared by every literal type.
//!
//! - [`value`]: the [`PgValue`] contract and the scalar input shape
//! - [`ordering`]: comparison primitives used to validate and test bounds
//! - [`object`]: structural JSON shape checks
//! - [`literal`]: element quoting and splitting for composite literals
//!
//! # Architecture
//!
//! Concrete types (`types`) implement [`PgValue`]. Composite types
//! (`range`, `multirange`, `array`) are generic over any `PgValue` and
//! implement the contract themselves, so they nest: an array of ranges is
//! just `PgArray<Range<T>>`.

pub mod literal;
pub mod object;
pub mod ordering;
pub mod value;

pub(crate) use value::scalar_input;
pub use value::{PgValue, Resolve, ValueInput};
