//! Request bodies for trade management endpoints.

use serde::{Serialize, Serializer};

use crate::domain::order::request::{StopLossDetails, TakeProfitDetails, TrailingStopLossDetails};
use crate::domain::RequestBody;
use crate::error::ValidationError;
use crate::shared::{ClientExtensions, CloseUnits, IntoValue, Units};

// ─── TradeCloseRequest ───────────────────────────────────────────────────────

/// Body for closing a trade: all of it, or a partial amount of units.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeCloseRequest {
    units: CloseUnits,
}

impl RequestBody for TradeCloseRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl TradeCloseRequest {
    /// Close the full size of the trade (`{"units": "ALL"}`).
    pub fn all() -> Self {
        Self {
            units: CloseUnits::All,
        }
    }

    /// Close `units` of the trade.
    pub fn partial(units: impl IntoValue<Units>) -> Result<Self, ValidationError> {
        Ok(Self {
            units: CloseUnits::Amount(
                units
                    .into_value()
                    .map_err(|e| ValidationError::field("units", e))?,
            ),
        })
    }
}

impl Default for TradeCloseRequest {
    fn default() -> Self {
        Self::all()
    }
}

// ─── DependentOrder ──────────────────────────────────────────────────────────

/// Tri-state for a dependent-order field in
/// [`TradeDependentOrdersRequest`]: leave it untouched (omitted on the wire),
/// cancel it (explicit JSON `null` — the one place the API assigns `null`
/// "clear this value" semantics), or create/replace it with new details.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DependentOrder<T> {
    #[default]
    Unchanged,
    Cancel,
    Set(T),
}

impl<T> DependentOrder<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl<T: Serialize> Serialize for DependentOrder<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Unchanged is skipped at the field level; serializing it anyway
            // degrades to null rather than inventing a value.
            Self::Unchanged | Self::Cancel => serializer.serialize_none(),
            Self::Set(v) => v.serialize(serializer),
        }
    }
}

// ─── TradeDependentOrdersRequest ─────────────────────────────────────────────

/// Body for the trade dependent-orders endpoint: create, replace or cancel
/// the take-profit, stop-loss and trailing stop-loss attached to an open
/// trade in one call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeDependentOrdersRequest {
    #[serde(
        rename = "takeProfit",
        skip_serializing_if = "DependentOrder::is_unchanged"
    )]
    take_profit: DependentOrder<TakeProfitDetails>,
    #[serde(
        rename = "stopLoss",
        skip_serializing_if = "DependentOrder::is_unchanged"
    )]
    stop_loss: DependentOrder<StopLossDetails>,
    #[serde(
        rename = "trailingStopLoss",
        skip_serializing_if = "DependentOrder::is_unchanged"
    )]
    trailing_stop_loss: DependentOrder<TrailingStopLossDetails>,
}

impl RequestBody for TradeDependentOrdersRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl TradeDependentOrdersRequest {
    pub fn builder() -> TradeDependentOrdersRequestBuilder {
        TradeDependentOrdersRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct TradeDependentOrdersRequestBuilder {
    take_profit: DependentOrder<TakeProfitDetails>,
    stop_loss: DependentOrder<StopLossDetails>,
    trailing_stop_loss: DependentOrder<TrailingStopLossDetails>,
}

impl TradeDependentOrdersRequestBuilder {
    pub fn take_profit(mut self, details: TakeProfitDetails) -> Self {
        self.take_profit = DependentOrder::Set(details);
        self
    }

    /// Cancel the trade's take-profit order (`"takeProfit": null`).
    pub fn cancel_take_profit(mut self) -> Self {
        self.take_profit = DependentOrder::Cancel;
        self
    }

    pub fn stop_loss(mut self, details: StopLossDetails) -> Self {
        self.stop_loss = DependentOrder::Set(details);
        self
    }

    pub fn cancel_stop_loss(mut self) -> Self {
        self.stop_loss = DependentOrder::Cancel;
        self
    }

    pub fn trailing_stop_loss(mut self, details: TrailingStopLossDetails) -> Self {
        self.trailing_stop_loss = DependentOrder::Set(details);
        self
    }

    pub fn cancel_trailing_stop_loss(mut self) -> Self {
        self.trailing_stop_loss = DependentOrder::Cancel;
        self
    }

    pub fn build(self) -> Result<TradeDependentOrdersRequest, ValidationError> {
        if self.take_profit.is_unchanged()
            && self.stop_loss.is_unchanged()
            && self.trailing_stop_loss.is_unchanged()
        {
            return Err(ValidationError::MissingAnyOf {
                fields: "takeProfit, stopLoss, trailingStopLoss",
            });
        }
        Ok(TradeDependentOrdersRequest {
            take_profit: self.take_profit,
            stop_loss: self.stop_loss,
            trailing_stop_loss: self.trailing_stop_loss,
        })
    }
}

// ─── TradeClientExtensionsRequest ────────────────────────────────────────────

/// Body for updating the client extensions of an open trade.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TradeClientExtensionsRequest {
    #[serde(rename = "clientExtensions")]
    client_extensions: ClientExtensions,
}

impl RequestBody for TradeClientExtensionsRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl TradeClientExtensionsRequest {
    pub fn new(client_extensions: ClientExtensions) -> Self {
        Self { client_extensions }
    }
}
