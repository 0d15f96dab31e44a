pub mod config_loader;
pub mod conversion;
pub mod domain;
pub mod infrastructure;

pub use conversion::{ConversionError, EnumTable, FieldSet, Presence, TableError};
pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::layout::*;
pub use domain::model::common::*;
pub use domain::model::order::*;
pub use domain::tables::ConversionTables;
pub use domain::traits::{project, CommonOrder};
pub use infrastructure::exchange::{ExchangeProfile, OrderParser};
