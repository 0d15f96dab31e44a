//! Binance spot order vocabulary.

pub mod tables;

pub use tables::{conversion_tables, spot_layout};
