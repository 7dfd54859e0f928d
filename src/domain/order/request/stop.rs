//! Stop order request.

use serde::Serialize;

use crate::domain::order::{OrderPositionFill, OrderTriggerCondition, OrderType, TimeInForce};
use crate::domain::RequestBody;
use crate::error::{ValidationError, ValueError};
use crate::shared::{ClientExtensions, DateTimeValue, InstrumentName, IntoValue, PriceValue, Units};

use super::on_fill::{StopLossDetails, TakeProfitDetails, TrailingStopLossDetails};
use super::check_gtd_time;

/// Body for a `STOP` order: trade `units` of `instrument` once the market
/// moves through `price`, at `price` or worse.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopOrderRequest {
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    instrument: InstrumentName,
    units: Units,
    price: PriceValue,
    #[serde(rename = "priceBound", skip_serializing_if = "Option::is_none")]
    price_bound: Option<PriceValue>,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTimeValue>,
    #[serde(rename = "positionFill")]
    position_fill: OrderPositionFill,
    #[serde(
        rename = "triggerCondition",
        skip_serializing_if = "Option::is_none"
    )]
    trigger_condition: Option<OrderTriggerCondition>,
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

impl RequestBody for StopOrderRequest {
    const ENVELOPE: Option<&'static str> = Some("order");
}

impl StopOrderRequest {
    /// Trade `units` of `instrument` once the market trades through `price`.
    ///
    /// Defaults: `timeInForce=GTC`, `positionFill=DEFAULT`.
    pub fn builder(
        instrument: impl IntoValue<InstrumentName>,
        units: impl IntoValue<Units>,
        price: impl IntoValue<PriceValue>,
    ) -> Result<StopOrderRequestBuilder, ValidationError> {
        Ok(StopOrderRequestBuilder {
            instrument: instrument
                .into_value()
                .map_err(|e| ValidationError::field("instrument", e))?,
            units: units
                .into_value()
                .map_err(|e| ValidationError::field("units", e))?,
            price: price
                .into_value()
                .map_err(|e| ValidationError::field("price", e))?,
            time_in_force: TimeInForce::Gtc,
            price_bound: None,
            gtd_time: None,
            position_fill: OrderPositionFill::Default,
            trigger_condition: None,
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
pub struct StopOrderRequestBuilder {
    instrument: InstrumentName,
    units: Units,
    price: PriceValue,
    time_in_force: TimeInForce,
    price_bound: Option<PriceValue>,
    gtd_time: Option<DateTimeValue>,
    position_fill: OrderPositionFill,
    trigger_condition: Option<OrderTriggerCondition>,
    client_extensions: Option<ClientExtensions>,
    take_profit_on_fill: Option<TakeProfitDetails>,
    stop_loss_on_fill: Option<StopLossDetails>,
    trailing_stop_loss_on_fill: Option<TrailingStopLossDetails>,
    trade_client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl StopOrderRequestBuilder {
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Worst acceptable fill price once triggered.
    pub fn price_bound(mut self, price: impl IntoValue<PriceValue>) -> Self {
        match price.into_value() {
            Ok(v) => self.price_bound = Some(v),
            Err(e) => self.defer("priceBound", e),
        }
        self
    }

    pub fn gtd_time(mut self, t: impl IntoValue<DateTimeValue>) -> Self {
        match t.into_value() {
            Ok(v) => self.gtd_time = Some(v),
            Err(e) => self.defer("gtdTime", e),
        }
        self
    }

    pub fn position_fill(mut self, fill: OrderPositionFill) -> Self {
        self.position_fill = fill;
        self
    }

    pub fn trigger_condition(mut self, cond: OrderTriggerCondition) -> Self {
        self.trigger_condition = Some(cond);
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

    pub fn trade_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.trade_client_extensions = Some(ext);
        self
    }

    pub fn build(self) -> Result<StopOrderRequest, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_gtd_time(self.time_in_force, &self.gtd_time)?;
        Ok(StopOrderRequest {
            order_type: OrderType::Stop,
            time_in_force: self.time_in_force,
            instrument: self.instrument,
            units: self.units,
            price: self.price,
            price_bound: self.price_bound,
            gtd_time: self.gtd_time,
            position_fill: self.position_fill,
            trigger_condition: self.trigger_condition,
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
        let order = StopOrderRequest::builder("GBP_USD", "-5000", "1.3050")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            order.data(),
            json!({
                "order": {
                    "type": "STOP",
                    "timeInForce": "GTC",
                    "instrument": "GBP_USD",
                    "units": "-5000",
                    "price": "1.3050",
                    "positionFill": "DEFAULT",
                }
            })
        );
    }

    #[test]
    fn test_price_bound_included_when_set() {
        let order = StopOrderRequest::builder("GBP_USD", "-5000", "1.3050")
            .unwrap()
            .price_bound("1.3000")
            .build()
            .unwrap();
        assert_eq!(order.data()["order"]["priceBound"], "1.3000");
    }

    #[test]
    fn test_gtd_rule() {
        let err = StopOrderRequest::builder("GBP_USD", "-5000", "1.3050")
            .unwrap()
            .time_in_force(TimeInForce::Gtd)
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "gtdTime");
    }
}
