use std::fmt;

use crate::conversion::{Presence, TableError};

/// Logical attributes of an [`Order`](crate::domain::model::order::Order),
/// independent of any exchange's field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderField {
    Symbol,
    OrderId,
    ClientOrderId,
    OriginalClientOrderId,
    OrderListId,
    Price,
    Quantity,
    QuantityFilled,
    QuoteQuantityFilled,
    QuoteQuantity,
    StopPrice,
    IcebergQuantity,
    Status,
    TimeInForce,
    OrderType,
    Side,
    CreateTime,
    UpdateTime,
    IsWorking,
}

impl OrderField {
    pub const ALL: [OrderField; 19] = [
        OrderField::Symbol,
        OrderField::OrderId,
        OrderField::ClientOrderId,
        OrderField::OriginalClientOrderId,
        OrderField::OrderListId,
        OrderField::Price,
        OrderField::Quantity,
        OrderField::QuantityFilled,
        OrderField::QuoteQuantityFilled,
        OrderField::QuoteQuantity,
        OrderField::StopPrice,
        OrderField::IcebergQuantity,
        OrderField::Status,
        OrderField::TimeInForce,
        OrderField::OrderType,
        OrderField::Side,
        OrderField::CreateTime,
        OrderField::UpdateTime,
        OrderField::IsWorking,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrderField::Symbol => "symbol",
            OrderField::OrderId => "order_id",
            OrderField::ClientOrderId => "client_order_id",
            OrderField::OriginalClientOrderId => "original_client_order_id",
            OrderField::OrderListId => "order_list_id",
            OrderField::Price => "price",
            OrderField::Quantity => "quantity",
            OrderField::QuantityFilled => "quantity_filled",
            OrderField::QuoteQuantityFilled => "quote_quantity_filled",
            OrderField::QuoteQuantity => "quote_quantity",
            OrderField::StopPrice => "stop_price",
            OrderField::IcebergQuantity => "iceberg_quantity",
            OrderField::Status => "status",
            OrderField::TimeInForce => "time_in_force",
            OrderField::OrderType => "order_type",
            OrderField::Side => "side",
            OrderField::CreateTime => "create_time",
            OrderField::UpdateTime => "update_time",
            OrderField::IsWorking => "is_working",
        }
    }

    /// Enumerations and timestamps have no zero value, so they can never be optional.
    pub fn allows_optional(&self) -> bool {
        !matches!(
            self,
            OrderField::Status
                | OrderField::TimeInForce
                | OrderField::OrderType
                | OrderField::Side
                | OrderField::CreateTime
                | OrderField::UpdateTime
        )
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where one logical field lives in an exchange payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: OrderField,
    pub wire_name: &'static str,
    pub presence: Presence,
}

impl FieldSpec {
    pub const fn required(field: OrderField, wire_name: &'static str) -> Self {
        Self { field, wire_name, presence: Presence::Required }
    }

    pub const fn optional(field: OrderField, wire_name: &'static str) -> Self {
        Self { field, wire_name, presence: Presence::Optional }
    }
}

/// Versioned field-name table for one exchange's order payload.
///
/// Every [`OrderField`] appears exactly once and wire names are unique.
/// Adding an exchange means adding a layout, never touching `Order`.
#[derive(Clone, Debug)]
pub struct FieldLayout {
    exchange: &'static str,
    version: u32,
    // Indexed by OrderField discriminant
    specs: Vec<FieldSpec>,
}

impl FieldLayout {
    pub fn new(exchange: &'static str, version: u32, specs: Vec<FieldSpec>) -> Result<Self, TableError> {
        let mut slots: Vec<Option<FieldSpec>> = vec![None; OrderField::ALL.len()];

        for spec in specs {
            let slot = &mut slots[spec.field.index()];
            if slot.is_some() {
                return Err(TableError::DuplicateLayoutField {
                    exchange,
                    version,
                    field: spec.field.name(),
                });
            }
            if spec.presence == Presence::Optional && !spec.field.allows_optional() {
                return Err(TableError::OptionalWithoutDefault {
                    exchange,
                    version,
                    field: spec.field.name(),
                });
            }
            *slot = Some(spec);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (field, slot) in OrderField::ALL.iter().zip(slots) {
            match slot {
                Some(spec) => ordered.push(spec),
                None => {
                    return Err(TableError::MissingLayoutField {
                        exchange,
                        version,
                        field: field.name(),
                    })
                }
            }
        }

        for (i, spec) in ordered.iter().enumerate() {
            if ordered[i + 1..].iter().any(|other| other.wire_name == spec.wire_name) {
                return Err(TableError::DuplicateWireName {
                    exchange,
                    version,
                    wire_name: spec.wire_name,
                });
            }
        }

        Ok(Self { exchange, version, specs: ordered })
    }

    pub fn exchange(&self) -> &'static str {
        self.exchange
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn spec(&self, field: OrderField) -> &FieldSpec {
        &self.specs[field.index()]
    }

    pub fn wire_name(&self, field: OrderField) -> &'static str {
        self.spec(field).wire_name
    }

    pub fn presence(&self, field: OrderField) -> Presence {
        self.spec(field).presence
    }

    /// All field specs in `OrderField` declaration order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_specs() -> Vec<FieldSpec> {
        OrderField::ALL
            .iter()
            .map(|f| FieldSpec::required(*f, f.name()))
            .collect()
    }

    #[test]
    fn test_layout_orders_specs_by_field() {
        let mut specs = full_specs();
        specs.reverse();
        let layout = FieldLayout::new("test", 1, specs).unwrap();

        assert_eq!(layout.exchange(), "test");
        assert_eq!(layout.version(), 1);
        for (spec, field) in layout.specs().iter().zip(OrderField::ALL) {
            assert_eq!(spec.field, field);
        }
        assert_eq!(layout.wire_name(OrderField::IsWorking), "is_working");
    }

    #[test]
    fn test_layout_requires_every_field() {
        let mut specs = full_specs();
        specs.retain(|s| s.field != OrderField::StopPrice);

        assert_eq!(
            FieldLayout::new("test", 1, specs).unwrap_err(),
            TableError::MissingLayoutField {
                exchange: "test",
                version: 1,
                field: "stop_price",
            }
        );
    }

    #[test]
    fn test_layout_rejects_duplicates() {
        let mut specs = full_specs();
        specs.push(FieldSpec::required(OrderField::Price, "px"));
        assert!(matches!(
            FieldLayout::new("test", 1, specs),
            Err(TableError::DuplicateLayoutField { field: "price", .. })
        ));

        let mut specs = full_specs();
        specs[1] = FieldSpec::required(OrderField::OrderId, "symbol");
        assert!(matches!(
            FieldLayout::new("test", 1, specs),
            Err(TableError::DuplicateWireName { wire_name: "symbol", .. })
        ));
    }

    #[test]
    fn test_layout_rejects_optional_enum() {
        let mut specs = full_specs();
        let idx = specs.iter().position(|s| s.field == OrderField::Status).unwrap();
        specs[idx] = FieldSpec::optional(OrderField::Status, "status");

        assert!(matches!(
            FieldLayout::new("test", 1, specs),
            Err(TableError::OptionalWithoutDefault { field: "status", .. })
        ));
    }
}
