pub mod binance;
pub mod parsers;

use crate::conversion::{ConversionError, FieldSet, TableError};
use crate::domain::constants::{BINANCE_SPOT_LAYOUT_VERSION, EXCHANGE_BINANCE};
use crate::domain::layout::FieldLayout;
use crate::domain::model::order::{build_order, encode_order, Order};
use crate::domain::tables::ConversionTables;

pub use parsers::OrderParser;

/// Everything needed to read one exchange's order payloads: the versioned
/// field layout and the enumeration tables.
#[derive(Clone, Debug)]
pub struct ExchangeProfile {
    pub layout: FieldLayout,
    pub tables: ConversionTables,
}

impl ExchangeProfile {
    pub fn binance_spot() -> Result<Self, TableError> {
        Ok(Self {
            layout: binance::spot_layout()?,
            tables: binance::conversion_tables()?,
        })
    }

    /// Looks up a built-in profile. Names are case-insensitive.
    pub fn by_name(name: &str, version: u32) -> Result<Self, TableError> {
        match (name.to_ascii_lowercase().as_str(), version) {
            (EXCHANGE_BINANCE, BINANCE_SPOT_LAYOUT_VERSION) => Self::binance_spot(),
            _ => Err(TableError::UnknownProfile {
                name: name.to_string(),
                version,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.layout.exchange()
    }

    pub fn version(&self) -> u32 {
        self.layout.version()
    }

    pub fn build_order(&self, fields: &FieldSet) -> Result<Order, ConversionError> {
        build_order(fields, &self.layout, &self.tables)
    }

    pub fn encode_order(&self, order: &Order) -> Result<FieldSet, ConversionError> {
        encode_order(order, &self.layout, &self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup() {
        let profile = ExchangeProfile::by_name("Binance", 3).unwrap();
        assert_eq!(profile.name(), "binance");
        assert_eq!(profile.version(), 3);

        assert_eq!(
            ExchangeProfile::by_name("binance", 1).unwrap_err(),
            TableError::UnknownProfile {
                name: "binance".to_string(),
                version: 1,
            }
        );
        assert!(ExchangeProfile::by_name("kraken", 3).is_err());
    }
}
