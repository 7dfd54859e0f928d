//! Trade domain — open-trade management: close, dependent orders, client
//! extensions.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod request;

use crate::domain::wire_enum;

pub use request::{
    DependentOrder, TradeClientExtensionsRequest, TradeCloseRequest, TradeDependentOrdersRequest,
};

wire_enum! {
    /// State filter for trade list queries.
    TradeStateFilter ["OPEN, CLOSED, CLOSE_WHEN_TRADEABLE, ALL"] {
        Open => "OPEN",
        Closed => "CLOSED",
        CloseWhenTradeable => "CLOSE_WHEN_TRADEABLE",
        All => "ALL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_trade_state_filter_closed_set() {
        assert_eq!(
            TradeStateFilter::from_str("CLOSE_WHEN_TRADEABLE").unwrap(),
            TradeStateFilter::CloseWhenTradeable
        );
        assert!(TradeStateFilter::from_str("HALF_OPEN").is_err());
    }
}
