use crate::conversion::EnumTable;
use crate::domain::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};

/// The four enumeration tables one exchange needs to decode an order.
///
/// Built by an exchange profile and handed to `build_order` by reference,
/// so two exchanges can decode side by side without shared state.
#[derive(Clone, Debug)]
pub struct ConversionTables {
    pub status: EnumTable<OrderStatus>,
    pub time_in_force: EnumTable<TimeInForce>,
    pub order_type: EnumTable<OrderType>,
    pub side: EnumTable<OrderSide>,
}
