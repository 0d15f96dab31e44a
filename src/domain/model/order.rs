// Domain model for exchange orders
use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::conversion::{encode_decimal, encode_timestamp, ConversionError, FieldSet};
use crate::domain::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};
use crate::domain::layout::{FieldLayout, OrderField};
use crate::domain::tables::ConversionTables;

/// One exchange order as reported in a single payload.
///
/// An `Order` is a snapshot: a later update of the same order arrives as a
/// new value with the same `order_id`. Nothing in this crate mutates or
/// merges orders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The symbol the order is for
    pub symbol: String,

    /// Exchange-assigned id, unique within one exchange
    pub order_id: i64,

    /// Id assigned by the client when placing the order
    pub client_order_id: String,

    /// Client id of the order this one replaced or references, empty if none
    pub original_client_order_id: String,

    /// Groups orders of one list (e.g. OCO); -1 when not part of a list
    pub order_list_id: i64,

    pub price: Decimal,

    /// Original quantity
    pub quantity: Decimal,

    /// Quantity executed so far
    pub quantity_filled: Decimal,

    /// Cumulative quote asset amount executed
    pub quote_quantity_filled: Decimal,

    /// Original quote order quantity
    pub quote_quantity: Decimal,

    pub stop_price: Decimal,

    pub iceberg_quantity: Decimal,

    pub status: OrderStatus,

    pub time_in_force: TimeInForce,

    pub order_type: OrderType,

    pub side: OrderSide,

    /// Time the order was submitted
    pub create_time: DateTime<Utc>,

    /// Time of the last update to the order
    pub update_time: DateTime<Utc>,

    /// True while the order rests on the book
    pub is_working: bool,
}

impl Order {
    /// Quantity still open, never below zero.
    pub fn remaining_quantity(&self) -> Decimal {
        (self.quantity - self.quantity_filled).max(Decimal::ZERO)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {{ id: {}, symbol: {}, side: {}, type: {}, price: {}, quantity: {}, filled: {}, status: {} }}",
            self.order_id,
            self.symbol,
            self.side,
            self.order_type,
            self.price,
            self.quantity,
            self.quantity_filled,
            self.status
        )
    }
}

/// Assembles an [`Order`] from one payload's raw fields.
///
/// Fields are decoded in [`OrderField`] declaration order and the first
/// failure is returned as is; no partially built order escapes.
pub fn build_order(
    fields: &FieldSet,
    layout: &FieldLayout,
    tables: &ConversionTables,
) -> Result<Order, ConversionError> {
    let name = |field| layout.wire_name(field);
    let presence = |field| layout.presence(field);

    let string = |field| fields.string(name(field), presence(field));
    let integer = |field| fields.integer(name(field), presence(field));
    let decimal = |field| fields.decimal(name(field), presence(field));

    let symbol = string(OrderField::Symbol)?;
    if symbol.is_empty() {
        return Err(ConversionError::MissingField(name(OrderField::Symbol).to_string()));
    }

    Ok(Order {
        symbol,
        order_id: integer(OrderField::OrderId)?,
        client_order_id: string(OrderField::ClientOrderId)?,
        original_client_order_id: string(OrderField::OriginalClientOrderId)?,
        order_list_id: integer(OrderField::OrderListId)?,
        price: decimal(OrderField::Price)?,
        quantity: decimal(OrderField::Quantity)?,
        quantity_filled: decimal(OrderField::QuantityFilled)?,
        quote_quantity_filled: decimal(OrderField::QuoteQuantityFilled)?,
        quote_quantity: decimal(OrderField::QuoteQuantity)?,
        stop_price: decimal(OrderField::StopPrice)?,
        iceberg_quantity: decimal(OrderField::IcebergQuantity)?,
        status: fields.token(name(OrderField::Status), &tables.status)?,
        time_in_force: fields.token(name(OrderField::TimeInForce), &tables.time_in_force)?,
        order_type: fields.token(name(OrderField::OrderType), &tables.order_type)?,
        side: fields.token(name(OrderField::Side), &tables.side)?,
        create_time: fields.timestamp(name(OrderField::CreateTime))?,
        update_time: fields.timestamp(name(OrderField::UpdateTime))?,
        is_working: fields
            .boolean(name(OrderField::IsWorking), presence(OrderField::IsWorking))?,
    })
}

/// Writes an [`Order`] back into the wire field set described by `layout`.
///
/// Optional fields are always written. Decimals keep their stored scale.
pub fn encode_order(
    order: &Order,
    layout: &FieldLayout,
    tables: &ConversionTables,
) -> Result<FieldSet, ConversionError> {
    let mut fields = FieldSet::new();

    for spec in layout.specs() {
        let value: Value = match spec.field {
            OrderField::Symbol => order.symbol.clone().into(),
            OrderField::OrderId => order.order_id.into(),
            OrderField::ClientOrderId => order.client_order_id.clone().into(),
            OrderField::OriginalClientOrderId => order.original_client_order_id.clone().into(),
            OrderField::OrderListId => order.order_list_id.into(),
            OrderField::Price => encode_decimal(&order.price).into(),
            OrderField::Quantity => encode_decimal(&order.quantity).into(),
            OrderField::QuantityFilled => encode_decimal(&order.quantity_filled).into(),
            OrderField::QuoteQuantityFilled => encode_decimal(&order.quote_quantity_filled).into(),
            OrderField::QuoteQuantity => encode_decimal(&order.quote_quantity).into(),
            OrderField::StopPrice => encode_decimal(&order.stop_price).into(),
            OrderField::IcebergQuantity => encode_decimal(&order.iceberg_quantity).into(),
            OrderField::Status => tables.status.encode(order.status)?.into(),
            OrderField::TimeInForce => tables.time_in_force.encode(order.time_in_force)?.into(),
            OrderField::OrderType => tables.order_type.encode(order.order_type)?.into(),
            OrderField::Side => tables.side.encode(order.side)?.into(),
            OrderField::CreateTime => encode_timestamp(&order.create_time).into(),
            OrderField::UpdateTime => encode_timestamp(&order.update_time).into(),
            OrderField::IsWorking => order.is_working.into(),
        };
        fields.insert(spec.wire_name, value);
    }

    Ok(fields)
}
