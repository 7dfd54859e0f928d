//! Instruments sub-client — candles and book snapshots.

use crate::client::V20Client;
use crate::domain::instrument::endpoints::{
    CandlesParams, InstrumentsCandles, InstrumentsOrderBook, InstrumentsPositionBook,
};
use crate::domain::instrument::wire::CandlesResponse;
use crate::error::SdkError;
use crate::http::ApiResponse;
use crate::shared::{DateTimeValue, InstrumentName};

pub struct Instruments<'a> {
    pub(crate) client: &'a V20Client,
}

impl<'a> Instruments<'a> {
    /// Fetch candles, parsed into wire types.
    pub async fn candles(
        &self,
        instrument: InstrumentName,
        params: CandlesParams,
    ) -> Result<CandlesResponse, SdkError> {
        let resp = self
            .client
            .request(&InstrumentsCandles::new(instrument, params))
            .await?;
        Ok(resp.json()?)
    }

    pub async fn order_book(
        &self,
        instrument: InstrumentName,
        time: Option<DateTimeValue>,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&InstrumentsOrderBook::new(instrument, time))
            .await
    }

    pub async fn position_book(
        &self,
        instrument: InstrumentName,
        time: Option<DateTimeValue>,
    ) -> Result<ApiResponse, SdkError> {
        self.client
            .request(&InstrumentsPositionBook::new(instrument, time))
            .await
    }
}
