//! Wire types for candle responses.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::shared::{DateTimeValue, InstrumentName};

use super::CandlestickGranularity;

/// OHLC values of one candle, as decimal strings on the wire.
#[derive(Deserialize, Debug, Clone)]
pub struct CandlestickData {
    pub o: Decimal,
    pub h: Decimal,
    pub l: Decimal,
    pub c: Decimal,
}

/// A single candle. Only the requested price components are present
/// (`mid`, `bid`, `ask`).
#[derive(Deserialize, Debug, Clone)]
pub struct Candlestick {
    pub time: DateTimeValue,
    #[serde(default)]
    pub mid: Option<CandlestickData>,
    #[serde(default)]
    pub bid: Option<CandlestickData>,
    #[serde(default)]
    pub ask: Option<CandlestickData>,
    pub volume: u64,
    /// False while the current candle is still forming.
    pub complete: bool,
}

/// Response of the candles endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct CandlesResponse {
    pub instrument: InstrumentName,
    pub granularity: CandlestickGranularity,
    pub candles: Vec<Candlestick>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_candles_response_parses_wire_json() {
        let raw = r#"{
            "instrument": "EUR_USD",
            "granularity": "H1",
            "candles": [{
                "complete": true,
                "volume": 16255,
                "time": "2026-08-05T14:00:00.000000000Z",
                "mid": {"o": "1.21993", "h": "1.22070", "l": "1.21924", "c": "1.22007"}
            }]
        }"#;
        let resp: CandlesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.granularity, CandlestickGranularity::H1);
        let candle = &resp.candles[0];
        assert!(candle.complete);
        assert!(candle.bid.is_none());
        let mid = candle.mid.as_ref().unwrap();
        assert_eq!(mid.h, Decimal::from_str("1.22070").unwrap());
    }
}
