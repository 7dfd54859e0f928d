//! Stop-loss order request.

use serde::Serialize;

use crate::domain::order::{OrderType, TimeInForce};
use crate::domain::RequestBody;
use crate::error::{ValidationError, ValueError};
use crate::shared::{ClientExtensions, ClientId, DateTimeValue, IntoValue, PriceValue, TradeId};

use super::check_gtd_time;

/// Body for a `STOP_LOSS` order: close an existing trade to cap the loss once
/// the market moves through `price`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopLossOrderRequest {
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "tradeID")]
    trade_id: TradeId,
    #[serde(rename = "clientTradeID", skip_serializing_if = "Option::is_none")]
    client_trade_id: Option<ClientId>,
    price: PriceValue,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTimeValue>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
}

impl RequestBody for StopLossOrderRequest {
    const ENVELOPE: Option<&'static str> = Some("order");
}

impl StopLossOrderRequest {
    /// Target the trade `trade_id`, closing it at `price`. Defaults:
    /// `timeInForce=GTC`.
    pub fn builder(
        trade_id: impl IntoValue<TradeId>,
        price: impl IntoValue<PriceValue>,
    ) -> Result<StopLossOrderRequestBuilder, ValidationError> {
        Ok(StopLossOrderRequestBuilder {
            trade_id: trade_id
                .into_value()
                .map_err(|e| ValidationError::field("tradeID", e))?,
            price: price
                .into_value()
                .map_err(|e| ValidationError::field("price", e))?,
            time_in_force: TimeInForce::Gtc,
            client_trade_id: None,
            gtd_time: None,
            client_extensions: None,
            err: None,
        })
    }
}

#[derive(Debug)]
pub struct StopLossOrderRequestBuilder {
    trade_id: TradeId,
    price: PriceValue,
    time_in_force: TimeInForce,
    client_trade_id: Option<ClientId>,
    gtd_time: Option<DateTimeValue>,
    client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl StopLossOrderRequestBuilder {
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    pub fn client_trade_id(mut self, id: impl IntoValue<ClientId>) -> Self {
        match id.into_value() {
            Ok(v) => self.client_trade_id = Some(v),
            Err(e) => self.defer("clientTradeID", e),
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

    pub fn client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.client_extensions = Some(ext);
        self
    }

    pub fn build(self) -> Result<StopLossOrderRequest, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_gtd_time(self.time_in_force, &self.gtd_time)?;
        Ok(StopLossOrderRequest {
            order_type: OrderType::StopLoss,
            time_in_force: self.time_in_force,
            trade_id: self.trade_id,
            client_trade_id: self.client_trade_id,
            price: self.price,
            gtd_time: self.gtd_time,
            client_extensions: self.client_extensions,
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
        let order = StopLossOrderRequest::builder("1234", "1.07")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            order.data(),
            json!({
                "order": {
                    "type": "STOP_LOSS",
                    "timeInForce": "GTC",
                    "tradeID": "1234",
                    "price": "1.07",
                }
            })
        );
    }

    #[test]
    fn test_gtd_rule() {
        let err = StopLossOrderRequest::builder("1234", "1.07")
            .unwrap()
            .time_in_force(TimeInForce::Gtd)
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "gtdTime");
    }

    #[test]
    fn test_client_extensions_included_when_set() {
        let ext = ClientExtensions::builder().tag("hedge").build().unwrap();
        let order = StopLossOrderRequest::builder("1234", "1.07")
            .unwrap()
            .client_extensions(ext)
            .build()
            .unwrap();
        assert_eq!(order.data()["order"]["clientExtensions"], json!({"tag": "hedge"}));
    }
}
