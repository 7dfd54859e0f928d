//! Dependent-order details attached to an entry order, created when the
//! order fills: take-profit, stop-loss, trailing stop-loss.

use serde::Serialize;

use crate::error::{ValidationError, ValueError};
use crate::shared::{ClientExtensions, DateTimeValue, IntoValue, PriceValue};

use crate::domain::order::TimeInForce;

use super::check_gtd_time;

// ─── TakeProfitDetails ───────────────────────────────────────────────────────

/// Specification of a take-profit order to create when the parent fills.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TakeProfitDetails {
    price: PriceValue,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTimeValue>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
}

impl TakeProfitDetails {
    /// Details closing the resulting trade at `price`.
    pub fn builder(price: impl IntoValue<PriceValue>) -> Result<TakeProfitDetailsBuilder, ValidationError> {
        Ok(TakeProfitDetailsBuilder {
            price: price
                .into_value()
                .map_err(|e| ValidationError::field("price", e))?,
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
            err: None,
        })
    }
}

#[derive(Debug)]
pub struct TakeProfitDetailsBuilder {
    price: PriceValue,
    time_in_force: TimeInForce,
    gtd_time: Option<DateTimeValue>,
    client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl TakeProfitDetailsBuilder {
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
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

    pub fn build(self) -> Result<TakeProfitDetails, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_gtd_time(self.time_in_force, &self.gtd_time)?;
        Ok(TakeProfitDetails {
            price: self.price,
            time_in_force: self.time_in_force,
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

// ─── StopLossDetails ─────────────────────────────────────────────────────────

/// Specification of a stop-loss order to create when the parent fills.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StopLossDetails {
    price: PriceValue,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTimeValue>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
}

impl StopLossDetails {
    /// Details closing the resulting trade at `price`.
    pub fn builder(price: impl IntoValue<PriceValue>) -> Result<StopLossDetailsBuilder, ValidationError> {
        Ok(StopLossDetailsBuilder {
            price: price
                .into_value()
                .map_err(|e| ValidationError::field("price", e))?,
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
            err: None,
        })
    }
}

#[derive(Debug)]
pub struct StopLossDetailsBuilder {
    price: PriceValue,
    time_in_force: TimeInForce,
    gtd_time: Option<DateTimeValue>,
    client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl StopLossDetailsBuilder {
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
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

    pub fn build(self) -> Result<StopLossDetails, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_gtd_time(self.time_in_force, &self.gtd_time)?;
        Ok(StopLossDetails {
            price: self.price,
            time_in_force: self.time_in_force,
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

// ─── TrailingStopLossDetails ─────────────────────────────────────────────────

/// Specification of a trailing stop-loss order to create when the parent
/// fills. Carries a distance from the trade's fill price rather than an
/// absolute price.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrailingStopLossDetails {
    distance: PriceValue,
    #[serde(rename = "timeInForce")]
    time_in_force: TimeInForce,
    #[serde(rename = "gtdTime", skip_serializing_if = "Option::is_none")]
    gtd_time: Option<DateTimeValue>,
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
}

impl TrailingStopLossDetails {
    /// Details trailing the trade by `distance` price units.
    pub fn builder(
        distance: impl IntoValue<PriceValue>,
    ) -> Result<TrailingStopLossDetailsBuilder, ValidationError> {
        Ok(TrailingStopLossDetailsBuilder {
            distance: distance
                .into_value()
                .map_err(|e| ValidationError::field("distance", e))?,
            time_in_force: TimeInForce::Gtc,
            gtd_time: None,
            client_extensions: None,
            err: None,
        })
    }
}

#[derive(Debug)]
pub struct TrailingStopLossDetailsBuilder {
    distance: PriceValue,
    time_in_force: TimeInForce,
    gtd_time: Option<DateTimeValue>,
    client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl TrailingStopLossDetailsBuilder {
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
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

    pub fn build(self) -> Result<TrailingStopLossDetails, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        check_gtd_time(self.time_in_force, &self.gtd_time)?;
        Ok(TrailingStopLossDetails {
            distance: self.distance,
            time_in_force: self.time_in_force,
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
    fn test_take_profit_details_minimal() {
        let details = TakeProfitDetails::builder("1.25").unwrap().build().unwrap();
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({"price": "1.25", "timeInForce": "GTC"})
        );
    }

    #[test]
    fn test_take_profit_details_gtd_requires_time() {
        let err = TakeProfitDetails::builder("1.25")
            .unwrap()
            .time_in_force(TimeInForce::Gtd)
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "gtdTime");
    }

    #[test]
    fn test_take_profit_details_gtd_with_time() {
        let details = TakeProfitDetails::builder("1.25")
            .unwrap()
            .time_in_force(TimeInForce::Gtd)
            .gtd_time("2026-11-21T00:00:00Z")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "price": "1.25",
                "timeInForce": "GTD",
                "gtdTime": "2026-11-21T00:00:00Z",
            })
        );
    }

    #[test]
    fn test_stop_loss_details_bad_price_names_field() {
        let err = StopLossDetails::builder("cheap").unwrap_err();
        assert_eq!(err.field_name(), "price");
    }

    #[test]
    fn test_trailing_distance_field_name() {
        let err = TrailingStopLossDetails::builder("wide").unwrap_err();
        assert_eq!(err.field_name(), "distance");

        let details = TrailingStopLossDetails::builder("0.0050")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({"distance": "0.0050", "timeInForce": "GTC"})
        );
    }
}
