//! Concrete element types and the built-in range/multirange aliases.
//!
//! Each type implements [`PgValue`](crate::core::PgValue) with its own text
//! grammar and JSON mirror. Types with a total order also work as range
//! elements.

mod bit;
mod datetime;
mod int;
mod numeric;
mod text;
mod uuid;

pub use self::bit::Bit;
pub use self::datetime::{Date, Timestamp, Timestamptz};
pub use self::int::{Int2, Int4, Int8};
pub use self::numeric::Numeric;
pub use self::text::Text;
pub use self::uuid::Uuid;

use crate::multirange::MultiRange;
use crate::range::Range;

/// `int4range`
pub type Int4Range = Range<Int4>;
/// `int8range`
pub type Int8Range = Range<Int8>;
/// `numrange`
pub type NumRange = Range<Numeric>;
/// `daterange`
pub type DateRange = Range<Date>;
/// `tsrange`
pub type TsRange = Range<Timestamp>;
/// `tstzrange`
pub type TsTzRange = Range<Timestamptz>;

/// `int4multirange`
pub type Int4MultiRange = MultiRange<Int4>;
/// `int8multirange`
pub type Int8MultiRange = MultiRange<Int8>;
/// `nummultirange`
pub type NumMultiRange = MultiRange<Numeric>;
/// `datemultirange`
pub type DateMultiRange = MultiRange<Date>;
/// `tsmultirange`
pub type TsMultiRange = MultiRange<Timestamp>;
/// `tstzmultirange`
pub type TsTzMultiRange = MultiRange<Timestamptz>;
