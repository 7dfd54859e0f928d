//! Request-body builders, one per order variant.
//!
//! Every builder follows the same two-phase shape: `builder(required...)`
//! validates the required fields eagerly (failures name the wire field),
//! optional setters accept raw or pre-validated values and defer their first
//! failure, and `build()` surfaces deferred failures, enforces cross-field
//! rules, and freezes the request. A frozen request cannot be mutated; its
//! [`data`](crate::domain::RequestBody::data) view is a pure projection
//! wrapped in the `{"order": {...}}` envelope.

mod extensions;
mod limit;
mod market;
mod market_if_touched;
mod on_fill;
mod stop;
mod stop_loss;
mod take_profit;
mod trailing_stop_loss;

pub use extensions::{OrderClientExtensionsRequest, OrderClientExtensionsRequestBuilder};
pub use limit::{LimitOrderRequest, LimitOrderRequestBuilder};
pub use market::{MarketOrderRequest, MarketOrderRequestBuilder};
pub use market_if_touched::{MarketIfTouchedOrderRequest, MarketIfTouchedOrderRequestBuilder};
pub use on_fill::{
    StopLossDetails, StopLossDetailsBuilder, TakeProfitDetails, TakeProfitDetailsBuilder,
    TrailingStopLossDetails, TrailingStopLossDetailsBuilder,
};
pub use stop::{StopOrderRequest, StopOrderRequestBuilder};
pub use stop_loss::{StopLossOrderRequest, StopLossOrderRequestBuilder};
pub use take_profit::{TakeProfitOrderRequest, TakeProfitOrderRequestBuilder};
pub use trailing_stop_loss::{TrailingStopLossOrderRequest, TrailingStopLossOrderRequestBuilder};

use crate::domain::order::TimeInForce;
use crate::error::ValidationError;

/// The GTD cross-field rule shared by every builder that accepts an expiry:
/// `timeInForce=GTD` makes `gtdTime` mandatory.
fn check_gtd_time<T>(
    time_in_force: TimeInForce,
    gtd_time: &Option<T>,
) -> Result<(), ValidationError> {
    if time_in_force == TimeInForce::Gtd && gtd_time.is_none() {
        return Err(ValidationError::ConditionallyRequired {
            field: "gtdTime",
            trigger: "timeInForce",
            trigger_value: "GTD",
        });
    }
    Ok(())
}

/// Restrict `timeInForce` to a subset of the closed set, e.g. market orders
/// only accept FOK or IOC.
fn check_tif_allowed(
    time_in_force: TimeInForce,
    allowed: &[TimeInForce],
    allowed_str: &'static str,
) -> Result<(), ValidationError> {
    if !allowed.contains(&time_in_force) {
        return Err(ValidationError::Choice {
            field: "timeInForce",
            allowed: allowed_str,
            got: time_in_force.as_str().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtd_rule_fires_only_for_gtd() {
        let unset: Option<()> = None;
        assert!(check_gtd_time(TimeInForce::Gtc, &unset).is_ok());
        let err = check_gtd_time(TimeInForce::Gtd, &unset).unwrap_err();
        assert_eq!(err.field_name(), "gtdTime");
        assert!(check_gtd_time(TimeInForce::Gtd, &Some(())).is_ok());
    }

    #[test]
    fn test_tif_subset_check() {
        let allowed = [TimeInForce::Fok, TimeInForce::Ioc];
        assert!(check_tif_allowed(TimeInForce::Ioc, &allowed, "FOK, IOC").is_ok());
        let err = check_tif_allowed(TimeInForce::Gtc, &allowed, "FOK, IOC").unwrap_err();
        assert_eq!(err.field_name(), "timeInForce");
        assert!(err.to_string().contains("FOK, IOC"));
    }
}
