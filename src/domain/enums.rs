use std::fmt;

use serde::{Deserialize, Serialize};

// Wire tokens are not attached to these enums. Each exchange maps its own
// vocabulary onto them through an EnumTable, see infrastructure::exchange.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
    // Futures order types
    Stop,
    StopMarket,
    TakeProfitMarket,
    TrailingStopMarket,
    Liquidation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInForce {
    GoodTillCanceled,
    ImmediateOrCancel,
    FillOrKill,
    GoodTillCrossing,
    GoodTillExpiredOrCanceled,
}

// The exchange owns the order lifecycle; this only represents where an
// order was at the time the payload was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
    /// Liquidated by the insurance fund
    Insurance,
    /// Counterparty liquidation (auto-deleveraging)
    Adl,
}

impl OrderStatus {
    /// True while the order can still trade.
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::PartiallyFilled)
    }
}

// Display renders the variant name, which is also the status string
// exposed by the normalized view ("New", "PartiallyFilled", ...).
macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

display_as_debug!(OrderSide, OrderType, TimeInForce, OrderStatus);
