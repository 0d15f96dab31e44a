// Binance spot order payload: field names and enumeration tokens.
// Source: GET /api/v3/order response
use crate::conversion::{EnumTable, TableError};
use crate::domain::constants::{BINANCE_SPOT_LAYOUT_VERSION, EXCHANGE_BINANCE};
use crate::domain::enums::{OrderSide, OrderStatus, OrderType, TimeInForce};
use crate::domain::layout::{FieldLayout, FieldSpec, OrderField};
use crate::domain::tables::ConversionTables;

pub fn spot_layout() -> Result<FieldLayout, TableError> {
    use OrderField as F;

    FieldLayout::new(
        EXCHANGE_BINANCE,
        BINANCE_SPOT_LAYOUT_VERSION,
        vec![
            FieldSpec::required(F::Symbol, "symbol"),
            FieldSpec::required(F::OrderId, "orderId"),
            FieldSpec::required(F::ClientOrderId, "clientOrderId"),
            FieldSpec::optional(F::OriginalClientOrderId, "origClientOrderId"),
            FieldSpec::required(F::OrderListId, "orderListId"),
            FieldSpec::required(F::Price, "price"),
            FieldSpec::required(F::Quantity, "origQty"),
            FieldSpec::required(F::QuantityFilled, "executedQty"),
            // Misspelled by the exchange
            FieldSpec::required(F::QuoteQuantityFilled, "cummulativeQuoteQty"),
            FieldSpec::required(F::QuoteQuantity, "origQuoteOrderQty"),
            FieldSpec::required(F::StopPrice, "stopPrice"),
            FieldSpec::optional(F::IcebergQuantity, "icebergQty"),
            FieldSpec::required(F::Status, "status"),
            FieldSpec::required(F::TimeInForce, "timeInForce"),
            FieldSpec::required(F::OrderType, "type"),
            FieldSpec::required(F::Side, "side"),
            FieldSpec::required(F::CreateTime, "time"),
            FieldSpec::required(F::UpdateTime, "updateTime"),
            FieldSpec::required(F::IsWorking, "isWorking"),
        ],
    )
}

pub fn conversion_tables() -> Result<ConversionTables, TableError> {
    Ok(ConversionTables {
        status: status_table()?,
        time_in_force: time_in_force_table()?,
        order_type: order_type_table()?,
        side: side_table()?,
    })
}

pub fn status_table() -> Result<EnumTable<OrderStatus>, TableError> {
    EnumTable::new(
        "status",
        vec![
            (OrderStatus::New, "NEW"),
            (OrderStatus::PartiallyFilled, "PARTIALLY_FILLED"),
            (OrderStatus::Filled, "FILLED"),
            (OrderStatus::Canceled, "CANCELED"),
            (OrderStatus::PendingCancel, "PENDING_CANCEL"),
            (OrderStatus::Rejected, "REJECTED"),
            (OrderStatus::Expired, "EXPIRED"),
            (OrderStatus::Insurance, "INSURANCE"),
            (OrderStatus::Adl, "ADL"),
        ],
    )
}

pub fn time_in_force_table() -> Result<EnumTable<TimeInForce>, TableError> {
    EnumTable::new(
        "time_in_force",
        vec![
            (TimeInForce::GoodTillCanceled, "GTC"),
            (TimeInForce::ImmediateOrCancel, "IOC"),
            (TimeInForce::FillOrKill, "FOK"),
            (TimeInForce::GoodTillCrossing, "GTX"),
            (TimeInForce::GoodTillExpiredOrCanceled, "GTE_GTC"),
        ],
    )
}

pub fn order_type_table() -> Result<EnumTable<OrderType>, TableError> {
    EnumTable::new(
        "order_type",
        vec![
            (OrderType::Limit, "LIMIT"),
            (OrderType::Market, "MARKET"),
            (OrderType::StopLoss, "STOP_LOSS"),
            (OrderType::StopLossLimit, "STOP_LOSS_LIMIT"),
            (OrderType::TakeProfit, "TAKE_PROFIT"),
            (OrderType::TakeProfitLimit, "TAKE_PROFIT_LIMIT"),
            (OrderType::LimitMaker, "LIMIT_MAKER"),
            (OrderType::Stop, "STOP"),
            (OrderType::StopMarket, "STOP_MARKET"),
            (OrderType::TakeProfitMarket, "TAKE_PROFIT_MARKET"),
            (OrderType::TrailingStopMarket, "TRAILING_STOP_MARKET"),
            (OrderType::Liquidation, "LIQUIDATION"),
        ],
    )
}

pub fn side_table() -> Result<EnumTable<OrderSide>, TableError> {
    EnumTable::new("side", vec![(OrderSide::Buy, "BUY"), (OrderSide::Sell, "SELL")])
}
