//! Market order request.

use serde::Serialize;

use crate::domain::order::{OrderPositionFill, OrderType, TimeInForce};
use crate::domain::RequestBody;
use crate::error::{ValidationError, ValueError};
use crate::shared::{ClientExtensions, InstrumentName, IntoValue, PriceValue, Units};

use super::on_fill::{StopLossDetails, TakeProfitDetails, TrailingStopLossDetails};
use super::check_tif_allowed;

/// Body for a `MARKET` order: buy or sell `units` of `instrument` at the
/// current market price.
///
/// Market orders execute immediately, so only the fill-or-kill flavours of
/// time-in-force apply (`FOK` or `IOC`).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarketOrderRequest {
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    instrument: InstrumentName,
    units: Units,
    #[serde(rename = "priceBound", skip_serializing_if = "Option::is_none")]
    price_bound: Option<PriceValue>,
    #[serde(rename = "positionFill")]
    position_fill: OrderPositionFill,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
    #[serde(rename = "takeProfitOnFill", skip_serializing_if = "Option::is_none")]
    take_profit_on_fill: Option<TakeProfitDetails>,
    #[serde(rename = "stopLossOnFill", skip_serializing_if = "Option::is_none")]
    stop_loss_on_fill: Option<StopLossDetails>,
    #[serde(
        rename = "trailingStopLossOnFill",
        skip_serializing_if = "Option::is_none"
    )]
    trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    #[serde(
        rename = "tradeClientExtensions",
        skip_serializing_if = "Option::is_none"
    )]
    trade_client_extensions: Option<ClientExtensions>,
}

impl RequestBody for MarketOrderRequest {
    const ENVELOPE: Option<&'static str> = Some("order");
}

impl MarketOrderRequest {
    /// Trade `units` of `instrument` at market. Positive units buy, negative
    /// sell.
    ///
    /// Defaults: `timeInForce=FOK`, `positionFill=DEFAULT`.
    pub fn builder(
        instrument: impl IntoValue<InstrumentName>,
        units: impl IntoValue<Units>,
    ) -> Result<MarketOrderRequestBuilder, ValidationError> {
        Ok(MarketOrderRequestBuilder {
            instrument: instrument
                .into_value()
                .map_err(|e| ValidationError::field("instrument", e))?,
            units: units
                .into_value()
                .map_err(|e| ValidationError::field("units", e))?,
            time_in_force: TimeInForce::Fok,
            price_bound: None,
            position_fill: OrderPositionFill::Default,
            client_extensions: None,
            take_profit_on_fill: None,
            stop_loss_on_fill: None,
            trailing_stop_loss_on_fill: None,
            trade_client_extensions: None,
            err: None,
        })
    }
}

#[derive(Debug)]
pub struct MarketOrderRequestBuilder {
    instrument: InstrumentName,
    units: Units,
    time_in_force: TimeInForce,
    price_bound: Option<PriceValue>,
    position_fill: OrderPositionFill,
    client_extensions: Option<ClientExtensions>,
    take_profit_on_fill: Option<TakeProfitDetails>,
    stop_loss_on_fill: Option<StopLossDetails>,
    trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    trade_client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl MarketOrderRequestBuilder {
    /// Must be `FOK` or `IOC`; checked at `build()`.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Worst acceptable fill price.
    pub fn price_bound(mut self, price: impl IntoValue<PriceValue>) -> Self {
        match price.into_value() {
            Ok(v) => self.price_bound = Some(v),
            Err(e) => self.defer("priceBound", e),
        }
        self
    }

    pub fn position_fill(mut self, fill: OrderPositionFill) -> Self {
        self.position_fill = fill;
        self
    }

    pub fn client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.client_extensions = Some(ext);
        self
    }

    pub fn take_profit_on_fill(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit_on_fill = Some(details);
        self
    }

    pub fn stop_loss_on_fill(mut self, details: StopLossDetails) -> Self {
        self.stop_loss_on_fill = Some(details);
        self
    }

    pub fn trailing_stop_loss_on_fill(mut self, details: TrailingStopLossDetails) -> Self {
        self.trailing_stop_loss_on_fill = Some(details);
        self
    }

    /// Extensions for the trade opened by the fill (not the order itself).
    pub fn trade_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.trade_client_extensions = Some(ext);
        self
    }

    pub fn build(self) -> Result<MarketOrderRequest, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_tif_allowed(
            self.time_in_force,
            &[TimeInForce::Fok, TimeInForce::Ioc],
            "FOK, IOC",
        )?;
        Ok(MarketOrderRequest {
            order_type: OrderType::Market,
            time_in_force: self.time_in_force,
            instrument: self.instrument,
            units: self.units,
            price_bound: self.price_bound,
            position_fill: self.position_fill,
            client_extensions: self.client_extensions,
            take_profit_on_fill: self.take_profit_on_fill,
            stop_loss_on_fill: self.stop_loss_on_fill,
            trailing_stop_loss_on_fill: self.trailing_stop_loss_on_fill,
            trade_client_extensions: self.trade_client_extensions,
        })
    }

    fn defer(&mut self, field: &'static str, e: ValueError) {
        if self.err.is_none() {
            self.err = Some(ValidationError::field(field, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_body() {
        let order = MarketOrderRequest::builder("EUR_USD", 10_000i64)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            order.data(),
            json!({
                "order": {
                    "type": "MARKET",
                    "timeInForce": "FOK",
                    "instrument": "EUR_USD",
                    "units": "10000",
                    "positionFill": "DEFAULT",
                }
            })
        );
    }

    #[test]
    fn test_sell_units_negative() {
        let order = MarketOrderRequest::builder("EUR_USD", "-50")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(order.data()["order"]["units"], "-50");
    }

    #[test]
    fn test_tif_restricted_to_fok_ioc() {
        let err = MarketOrderRequest::builder("EUR_USD", 100i64)
            .unwrap()
            .time_in_force(TimeInForce::Gtc)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Choice {
                field: "timeInForce",
                ..
            }
        ));

        assert!(MarketOrderRequest::builder("EUR_USD", 100i64)
            .unwrap()
            .time_in_force(TimeInForce::Ioc)
            .build()
            .is_ok());
    }

    #[test]
    fn test_on_fill_details_embedded() {
        let order = MarketOrderRequest::builder("EUR_USD", 10_000i64)
            .unwrap()
            .take_profit_on_fill(TakeProfitDetails::builder("1.25").unwrap().build().unwrap())
            .stop_loss_on_fill(StopLossDetails::builder("1.19").unwrap().build().unwrap())
            .build()
            .unwrap();
        let body = order.data();
        assert_eq!(
            body["order"]["takeProfitOnFill"],
            json!({"price": "1.25", "timeInForce": "GTC"})
        );
        assert_eq!(
            body["order"]["stopLossOnFill"],
            json!({"price": "1.19", "timeInForce": "GTC"})
        );
        assert!(body["order"].get("trailingStopLossOnFill").is_none());
    }

    #[test]
    fn test_invalid_instrument_names_field() {
        let err = MarketOrderRequest::builder("EURUSD", 100i64).unwrap_err();
        assert_eq!(err.field_name(), "instrument");
    }

    #[test]
    fn test_invalid_price_bound_surfaces_at_build() {
        let err = MarketOrderRequest::builder("EUR_USD", 100i64)
            .unwrap()
            .price_bound("loose")
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "priceBound");
    }
}
