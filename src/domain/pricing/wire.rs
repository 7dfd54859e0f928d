//! Wire types for pricing responses.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::shared::{DateTimeValue, InstrumentName};

/// One side of the book at a price level.
#[derive(Deserialize, Debug, Clone)]
pub struct PriceBucket {
    pub price: Decimal,
    pub liquidity: u64,
}

/// A client price for an instrument.
#[derive(Deserialize, Debug, Clone)]
pub struct ClientPrice {
    pub instrument: InstrumentName,
    pub time: DateTimeValue,
    #[serde(default)]
    pub tradeable: bool,
    #[serde(default)]
    pub bids: Vec<PriceBucket>,
    #[serde(default)]
    pub asks: Vec<PriceBucket>,
    #[serde(rename = "closeoutBid")]
    pub closeout_bid: Decimal,
    #[serde(rename = "closeoutAsk")]
    pub closeout_ask: Decimal,
}

/// Response of the pricing endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct PricingResponse {
    pub prices: Vec<ClientPrice>,
    pub time: DateTimeValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pricing_response_parses_wire_json() {
        let raw = r#"{
            "time": "2026-08-06T09:30:00.000000000Z",
            "prices": [{
                "instrument": "EUR_USD",
                "time": "2026-08-06T09:29:59.483422591Z",
                "tradeable": true,
                "bids": [{"price": "1.21988", "liquidity": 10000000}],
                "asks": [{"price": "1.22002", "liquidity": 10000000}],
                "closeoutBid": "1.21973",
                "closeoutAsk": "1.22017"
            }]
        }"#;
        let resp: PricingResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.prices.len(), 1);
        let price = &resp.prices[0];
        assert_eq!(price.instrument.as_str(), "EUR_USD");
        assert!(price.tradeable);
        assert_eq!(price.bids[0].price, Decimal::from_str("1.21988").unwrap());
        assert_eq!(price.closeout_ask, Decimal::from_str("1.22017").unwrap());
    }
}
