//! Field conversion layer
//!
//! Stateless translation between wire tokens (strings, epoch millis,
//! decimal strings) and typed values. Nothing here depends on the rest of
//! the crate, and nothing here logs: failures are returned to the caller
//! as a single [`ConversionError`] naming the offending field.

pub mod decimal;
pub mod enum_table;
pub mod error;
pub mod fields;
pub mod timestamp;

pub use decimal::{decode_decimal, encode_decimal};
pub use enum_table::EnumTable;
pub use error::{ConversionError, TableError};
pub use fields::{FieldSet, Presence};
pub use timestamp::{decode_timestamp, encode_timestamp};
