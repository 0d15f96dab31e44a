// Vendor-neutral order vocabulary shared by every exchange
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommonOrderSide {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommonOrderType {
    Limit,
    Market,
    Other,
}

/// Read-only projection of an exchange order onto the neutral fields.
///
/// Computed on demand from a [`CommonOrder`](crate::domain::traits::CommonOrder),
/// never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedOrderView {
    pub id: String,
    pub symbol: String,
    pub price: Decimal,
    pub quantity: Decimal,
    pub status: String,
    pub is_active: bool,
    pub side: CommonOrderSide,
    #[serde(rename = "type")]
    pub order_type: CommonOrderType,
}
