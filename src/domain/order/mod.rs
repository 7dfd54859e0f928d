//! Order domain — request builders, enumerations, endpoints.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod request;

use crate::domain::wire_enum;

pub use request::{
    LimitOrderRequest, MarketIfTouchedOrderRequest, MarketOrderRequest,
    OrderClientExtensionsRequest, StopLossDetails, StopLossOrderRequest, StopOrderRequest,
    TakeProfitDetails, TakeProfitOrderRequest, TrailingStopLossDetails,
    TrailingStopLossOrderRequest,
};

wire_enum! {
    /// The type of an order, fixed per request builder.
    OrderType ["MARKET, LIMIT, STOP, MARKET_IF_TOUCHED, TAKE_PROFIT, STOP_LOSS, TRAILING_STOP_LOSS, FIXED_PRICE"] {
        Market => "MARKET",
        Limit => "LIMIT",
        Stop => "STOP",
        MarketIfTouched => "MARKET_IF_TOUCHED",
        TakeProfit => "TAKE_PROFIT",
        StopLoss => "STOP_LOSS",
        TrailingStopLoss => "TRAILING_STOP_LOSS",
        FixedPrice => "FIXED_PRICE",
    }
}

wire_enum! {
    /// How long an order remains in force.
    TimeInForce ["GTC, GTD, GFD, FOK, IOC"] {
        /// Good 'til cancelled.
        Gtc => "GTC",
        /// Good 'til a caller-supplied date (requires `gtdTime`).
        Gtd => "GTD",
        /// Good for the current trading day.
        Gfd => "GFD",
        /// Filled immediately and completely, or cancelled.
        Fok => "FOK",
        /// Filled immediately as much as possible, remainder cancelled.
        Ioc => "IOC",
    }
}

wire_enum! {
    /// How an order fill affects existing positions.
    OrderPositionFill ["OPEN_ONLY, REDUCE_FIRST, REDUCE_ONLY, DEFAULT"] {
        OpenOnly => "OPEN_ONLY",
        ReduceFirst => "REDUCE_FIRST",
        ReduceOnly => "REDUCE_ONLY",
        Default => "DEFAULT",
    }
}

wire_enum! {
    /// Which price side triggers a pending order.
    OrderTriggerCondition ["DEFAULT, INVERSE, BID, ASK, MID"] {
        Default => "DEFAULT",
        Inverse => "INVERSE",
        Bid => "BID",
        Ask => "ASK",
        Mid => "MID",
    }
}

wire_enum! {
    /// State filter for order list queries.
    OrderStateFilter ["PENDING, FILLED, TRIGGERED, CANCELLED, ALL"] {
        Pending => "PENDING",
        Filled => "FILLED",
        Triggered => "TRIGGERED",
        Cancelled => "CANCELLED",
        All => "ALL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_type_wire_constants() {
        assert_eq!(OrderType::TakeProfit.as_str(), "TAKE_PROFIT");
        assert_eq!(
            serde_json::to_string(&OrderType::MarketIfTouched).unwrap(),
            "\"MARKET_IF_TOUCHED\""
        );
    }

    #[test]
    fn test_time_in_force_closed_set() {
        for tif in TimeInForce::ALL {
            assert_eq!(TimeInForce::from_str(tif.as_str()).unwrap(), *tif);
        }
        let err = TimeInForce::from_str("GTX").unwrap_err();
        assert!(err.to_string().contains("GTC"));
    }

    #[test]
    fn test_position_fill_deserializes_from_wire() {
        let fill: OrderPositionFill = serde_json::from_str("\"REDUCE_FIRST\"").unwrap();
        assert_eq!(fill, OrderPositionFill::ReduceFirst);
        assert!(serde_json::from_str::<OrderPositionFill>("\"reduce_first\"").is_err());
    }

    #[test]
    fn test_trigger_condition_display() {
        assert_eq!(OrderTriggerCondition::Mid.to_string(), "MID");
    }
}
