//! Instrument endpoints: `/v3/instruments/{instrument}/...`.
//!
//! Unlike the account-scoped endpoints these are keyed by instrument alone.

use crate::domain::pricing::PricingComponent;
use crate::endpoint::{Endpoint, Method};
use crate::shared::{DateTimeValue, InstrumentName};

use super::{CandlestickGranularity, WeeklyAlignment};

/// Query parameters for [`InstrumentsCandles`].
///
/// `count` and the `from`/`to` range are mutually exclusive on the server
/// side; the dispatch layer passes through whatever the caller sets.
#[derive(Debug, Clone, Default)]
pub struct CandlesParams {
    pub price: Option<PricingComponent>,
    pub granularity: Option<CandlestickGranularity>,
    /// Number of candles (server default 500, max 5000).
    pub count: Option<u32>,
    pub from: Option<DateTimeValue>,
    pub to: Option<DateTimeValue>,
    /// Use the previous close as this candle's open.
    pub smooth: Option<bool>,
    pub include_first: Option<bool>,
    /// Hour of day (0-23) at which daily candles are cut.
    pub daily_alignment: Option<u8>,
    pub alignment_timezone: Option<String>,
    pub weekly_alignment: Option<WeeklyAlignment>,
}

impl CandlesParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(price) = self.price {
            q.push(("price", price.as_str().to_string()));
        }
        if let Some(granularity) = self.granularity {
            q.push(("granularity", granularity.as_str().to_string()));
        }
        if let Some(count) = self.count {
            q.push(("count", count.to_string()));
        }
        if let Some(from) = &self.from {
            q.push(("from", from.as_str().to_string()));
        }
        if let Some(to) = &self.to {
            q.push(("to", to.as_str().to_string()));
        }
        if let Some(smooth) = self.smooth {
            q.push(("smooth", smooth.to_string()));
        }
        if let Some(include_first) = self.include_first {
            q.push(("includeFirst", include_first.to_string()));
        }
        if let Some(daily_alignment) = self.daily_alignment {
            q.push(("dailyAlignment", daily_alignment.to_string()));
        }
        if let Some(tz) = &self.alignment_timezone {
            q.push(("alignmentTimezone", tz.clone()));
        }
        if let Some(weekly) = self.weekly_alignment {
            q.push(("weeklyAlignment", weekly.as_str().to_string()));
        }
        q
    }
}

/// `GET /v3/instruments/{instrument}/candles`.
#[derive(Debug, Clone)]
pub struct InstrumentsCandles {
    instrument: InstrumentName,
    params: CandlesParams,
}

impl InstrumentsCandles {
    pub fn new(instrument: InstrumentName, params: CandlesParams) -> Self {
        Self { instrument, params }
    }
}

impl Endpoint for InstrumentsCandles {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/instruments/{}/candles", self.instrument)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.params.to_query()
    }
}

/// `GET /v3/instruments/{instrument}/orderBook` — order book snapshot,
/// optionally at a past time.
#[derive(Debug, Clone)]
pub struct InstrumentsOrderBook {
    instrument: InstrumentName,
    time: Option<DateTimeValue>,
}

impl InstrumentsOrderBook {
    pub fn new(instrument: InstrumentName, time: Option<DateTimeValue>) -> Self {
        Self { instrument, time }
    }
}

impl Endpoint for InstrumentsOrderBook {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/instruments/{}/orderBook", self.instrument)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match &self.time {
            Some(t) => vec![("time", t.as_str().to_string())],
            None => Vec::new(),
        }
    }
}

/// `GET /v3/instruments/{instrument}/positionBook`.
#[derive(Debug, Clone)]
pub struct InstrumentsPositionBook {
    instrument: InstrumentName,
    time: Option<DateTimeValue>,
}

impl InstrumentsPositionBook {
    pub fn new(instrument: InstrumentName, time: Option<DateTimeValue>) -> Self {
        Self { instrument, time }
    }
}

impl Endpoint for InstrumentsPositionBook {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/instruments/{}/positionBook", self.instrument)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match &self.time {
            Some(t) => vec![("time", t.as_str().to_string())],
            None => Vec::new(),
        }
    }
}
