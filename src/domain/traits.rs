use rust_decimal::Decimal;

use crate::domain::enums::{OrderSide, OrderType};
use crate::domain::model::common::{CommonOrderSide, CommonOrderType, NormalizedOrderView};
use crate::domain::model::order::Order;

/// The only surface multi-exchange code should depend on.
///
/// Each exchange's order type implements this; the projection is pure and
/// total, so none of these methods can fail.
pub trait CommonOrder {
    fn common_id(&self) -> String;
    fn common_symbol(&self) -> &str;
    fn common_price(&self) -> Decimal;
    fn common_quantity(&self) -> Decimal;
    fn common_status(&self) -> String;
    fn is_active(&self) -> bool;
    fn common_side(&self) -> CommonOrderSide;
    fn common_type(&self) -> CommonOrderType;

    fn project(&self) -> NormalizedOrderView {
        NormalizedOrderView {
            id: self.common_id(),
            symbol: self.common_symbol().to_string(),
            price: self.common_price(),
            quantity: self.common_quantity(),
            status: self.common_status(),
            is_active: self.is_active(),
            side: self.common_side(),
            order_type: self.common_type(),
        }
    }
}

/// Neutral view of any exchange order.
pub fn project<O: CommonOrder + ?Sized>(order: &O) -> NormalizedOrderView {
    order.project()
}

impl CommonOrder for Order {
    fn common_id(&self) -> String {
        self.order_id.to_string()
    }

    fn common_symbol(&self) -> &str {
        &self.symbol
    }

    fn common_price(&self) -> Decimal {
        self.price
    }

    fn common_quantity(&self) -> Decimal {
        self.quantity
    }

    fn common_status(&self) -> String {
        self.status.to_string()
    }

    fn is_active(&self) -> bool {
        self.status.is_active()
    }

    // Anything that is not a sell is reported as a buy
    fn common_side(&self) -> CommonOrderSide {
        match self.side {
            OrderSide::Sell => CommonOrderSide::Sell,
            _ => CommonOrderSide::Buy,
        }
    }

    fn common_type(&self) -> CommonOrderType {
        match self.order_type {
            OrderType::Limit => CommonOrderType::Limit,
            OrderType::Market => CommonOrderType::Market,
            _ => CommonOrderType::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{OrderStatus, TimeInForce};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn order(status: OrderStatus, side: OrderSide, order_type: OrderType) -> Order {
        let time = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        Order {
            symbol: "BTCUSDT".to_string(),
            order_id: 123,
            client_order_id: "c1".to_string(),
            original_client_order_id: String::new(),
            order_list_id: -1,
            price: dec!(50000.00),
            quantity: dec!(1.5),
            quantity_filled: dec!(0.5),
            quote_quantity_filled: dec!(25000),
            quote_quantity: dec!(75000),
            stop_price: Decimal::ZERO,
            iceberg_quantity: Decimal::ZERO,
            status,
            time_in_force: TimeInForce::GoodTillCanceled,
            order_type,
            side,
            create_time: time,
            update_time: time,
            is_working: true,
        }
    }

    // A venue whose order record looks nothing like Order
    struct PerpOrder {
        id: String,
        market: String,
        size: Decimal,
        open: bool,
    }

    impl CommonOrder for PerpOrder {
        fn common_id(&self) -> String {
            self.id.clone()
        }
        fn common_symbol(&self) -> &str {
            &self.market
        }
        fn common_price(&self) -> Decimal {
            Decimal::ZERO
        }
        fn common_quantity(&self) -> Decimal {
            self.size
        }
        fn common_status(&self) -> String {
            let status = if self.open { "Open" } else { "Closed" };
            status.to_string()
        }
        fn is_active(&self) -> bool {
            self.open
        }
        fn common_side(&self) -> CommonOrderSide {
            CommonOrderSide::Sell
        }
        fn common_type(&self) -> CommonOrderType {
            CommonOrderType::Market
        }
    }

    #[test]
    fn test_project_order() {
        let view = project(&order(OrderStatus::New, OrderSide::Buy, OrderType::Limit));

        assert_eq!(view.id, "123");
        assert_eq!(view.symbol, "BTCUSDT");
        assert_eq!(view.price, dec!(50000.00));
        assert_eq!(view.quantity, dec!(1.5));
        assert_eq!(view.status, "New");
        assert!(view.is_active);
        assert_eq!(view.side, CommonOrderSide::Buy);
        assert_eq!(view.order_type, CommonOrderType::Limit);
    }

    #[test]
    fn test_activity_follows_status() {
        let active = order(OrderStatus::PartiallyFilled, OrderSide::Buy, OrderType::Limit);
        let done = order(OrderStatus::Filled, OrderSide::Buy, OrderType::Limit);

        assert!(active.project().is_active);
        assert!(!done.project().is_active);
    }

    #[test]
    fn test_side_and_type_mapping() {
        let sell = order(OrderStatus::New, OrderSide::Sell, OrderType::Market);
        assert_eq!(sell.common_side(), CommonOrderSide::Sell);
        assert_eq!(sell.common_type(), CommonOrderType::Market);

        let buy = order(OrderStatus::New, OrderSide::Buy, OrderType::TakeProfitLimit);
        assert_eq!(buy.common_side(), CommonOrderSide::Buy);
        assert_eq!(buy.common_type(), CommonOrderType::Other);
    }

    #[test]
    fn test_views_across_venues() {
        let spot = order(OrderStatus::Canceled, OrderSide::Buy, OrderType::Limit);
        let perp = PerpOrder {
            id: "p-7".to_string(),
            market: "ETH-PERP".to_string(),
            size: dec!(2),
            open: true,
        };
        let orders: Vec<&dyn CommonOrder> = vec![&spot, &perp];

        let views: Vec<NormalizedOrderView> = orders.iter().map(|o| project(*o)).collect();

        assert_eq!(views[0].status, "Canceled");
        assert!(!views[0].is_active);
        assert_eq!(views[1].id, "p-7");
        assert_eq!(views[1].side, CommonOrderSide::Sell);
        assert!(views[1].is_active);
    }

    #[test]
    fn test_view_json_shape() {
        let view = order(OrderStatus::New, OrderSide::Buy, OrderType::Limit).project();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], "123");
        assert_eq!(json["price"], "50000.00");
        assert_eq!(json["type"], "Limit");
        assert_eq!(json["side"], "Buy");
    }
}
