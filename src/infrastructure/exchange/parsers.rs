use log::debug;
use serde_json::Value;

use crate::conversion::{ConversionError, FieldSet, TableError};
use crate::domain::model::order::Order;

use super::ExchangeProfile;

/// Parses exchange JSON payloads into orders using one exchange profile.
#[derive(Clone, Debug)]
pub struct OrderParser {
    profile: ExchangeProfile,
}

impl OrderParser {
    pub fn new(profile: ExchangeProfile) -> Self {
        Self { profile }
    }

    pub fn binance() -> Result<Self, TableError> {
        Ok(Self::new(ExchangeProfile::binance_spot()?))
    }

    pub fn profile(&self) -> &ExchangeProfile {
        &self.profile
    }

    /// Parses a single order object.
    pub fn parse_order_json(&self, data: &Value) -> Result<Order, ConversionError> {
        let fields = FieldSet::from_value(data.clone())?;
        let order = self.profile.build_order(&fields)?;

        debug!(
            "Parsed {} order {} ({} {})",
            self.profile.name(),
            order.order_id,
            order.symbol,
            order.status
        );

        Ok(order)
    }

    pub fn parse_order_str(&self, raw: &str) -> Result<Order, ConversionError> {
        let data: Value =
            serde_json::from_str(raw).map_err(|e| ConversionError::Payload(e.to_string()))?;
        self.parse_order_json(&data)
    }

    /// Parses an array of order objects, as returned by the open-orders and
    /// all-orders endpoints. Fails on the first bad element.
    pub fn parse_orders_json(&self, data: &Value) -> Result<Vec<Order>, ConversionError> {
        let items = data.as_array().ok_or_else(|| ConversionError::InvalidType {
            field: "<payload>".to_string(),
            expected: "array",
        })?;

        let orders = items
            .iter()
            .map(|item| self.parse_order_json(item))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Parsed {} {} orders", orders.len(), self.profile.name());
        Ok(orders)
    }

    /// Accepts either one order object or an array of them.
    pub fn parse_payload(&self, data: &Value) -> Result<Vec<Order>, ConversionError> {
        match data {
            Value::Array(_) => self.parse_orders_json(data),
            _ => Ok(vec![self.parse_order_json(data)?]),
        }
    }

    /// Encodes an order back into this exchange's JSON shape.
    pub fn to_order_json(&self, order: &Order) -> Result<Value, ConversionError> {
        Ok(self.profile.encode_order(order)?.into_value())
    }
}
