//! Integration tests for request-body construction: exact field sets,
//! conditional-requirement rules, round-trips, idempotence.

use serde_json::json;
use std::str::FromStr;

use v20_sdk::prelude::*;

// ─── Exact field sets ────────────────────────────────────────────────────────

#[test]
fn take_profit_default_body_matches_reference() {
    let order = TakeProfitOrderRequest::builder("1234", "1.22")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        order.data(),
        json!({
            "order": {
                "type": "TAKE_PROFIT",
                "timeInForce": "GTC",
                "tradeID": "1234",
                "price": "1.22",
            }
        })
    );
}

#[test]
fn unset_optional_fields_never_appear() {
    let order = TakeProfitOrderRequest::builder("1234", "1.22")
        .unwrap()
        .build()
        .unwrap();
    let body = order.data();
    let fields = body["order"].as_object().unwrap();
    let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    for absent in ["gtdTime", "clientExtensions", "clientTradeID"] {
        assert!(!keys.contains(&absent), "{absent} must be omitted, not null");
    }
    assert_eq!(fields.len(), 4);
}

#[test]
fn supplied_optional_fields_all_appear() {
    let ext = ClientExtensions::builder()
        .id("my_order_100")
        .tag("strategy_9")
        .build()
        .unwrap();
    let order = TakeProfitOrderRequest::builder("1234", "1.22")
        .unwrap()
        .client_trade_id("my_trade_7")
        .client_extensions(ext)
        .build()
        .unwrap();
    let body = order.data();
    let fields = body["order"].as_object().unwrap();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields["clientTradeID"], "my_trade_7");
    assert_eq!(
        fields["clientExtensions"],
        json!({"id": "my_order_100", "tag": "strategy_9"})
    );
}

#[test]
fn entry_order_with_full_dependent_stack() {
    let order = LimitOrderRequest::builder("EUR_USD", 10_000i64, "1.2150")
        .unwrap()
        .time_in_force(TimeInForce::Gtd)
        .gtd_time("2026-12-01T00:00:00Z")
        .position_fill(OrderPositionFill::ReduceFirst)
        .take_profit_on_fill(TakeProfitDetails::builder("1.25").unwrap().build().unwrap())
        .stop_loss_on_fill(StopLossDetails::builder("1.19").unwrap().build().unwrap())
        .trailing_stop_loss_on_fill(
            TrailingStopLossDetails::builder("0.0050")
                .unwrap()
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert_eq!(
        order.data(),
        json!({
            "order": {
                "type": "LIMIT",
                "timeInForce": "GTD",
                "instrument": "EUR_USD",
                "units": "10000",
                "price": "1.2150",
                "gtdTime": "2026-12-01T00:00:00Z",
                "positionFill": "REDUCE_FIRST",
                "takeProfitOnFill": {"price": "1.25", "timeInForce": "GTC"},
                "stopLossOnFill": {"price": "1.19", "timeInForce": "GTC"},
                "trailingStopLossOnFill": {"distance": "0.0050", "timeInForce": "GTC"},
            }
        })
    );
}

// ─── Conditional-requirement rules ───────────────────────────────────────────

#[test]
fn gtd_without_time_always_fails_with_field_name() {
    let err = TakeProfitOrderRequest::builder("1234", "1.22")
        .unwrap()
        .time_in_force(TimeInForce::Gtd)
        .build()
        .unwrap_err();
    assert_eq!(err.field_name(), "gtdTime");

    let err = StopOrderRequest::builder("EUR_USD", 100i64, "1.30")
        .unwrap()
        .time_in_force(TimeInForce::Gtd)
        .build()
        .unwrap_err();
    assert_eq!(err.field_name(), "gtdTime");
}

#[test]
fn non_trigger_values_do_not_require_the_field() {
    for tif in [TimeInForce::Gtc, TimeInForce::Gfd] {
        assert!(TakeProfitOrderRequest::builder("1234", "1.22")
            .unwrap()
            .time_in_force(tif)
            .build()
            .is_ok());
    }
}

#[test]
fn validation_is_synchronous_and_total() {
    // A builder either exists fully valid or not at all: the first failure
    // wins even when later inputs are also bad.
    let err = TakeProfitOrderRequest::builder("nope", "also nope").unwrap_err();
    assert_eq!(err.field_name(), "tradeID");
}

// ─── Round-trips ─────────────────────────────────────────────────────────────

#[test]
fn wire_roundtrip_preserves_values_and_precision() {
    let order = TrailingStopLossOrderRequest::builder("42", "0.00750")
        .unwrap()
        .build()
        .unwrap();
    let body = order.data();
    let text = serde_json::to_string(&body).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, body);
    assert_eq!(parsed["order"]["distance"], "0.00750");
}

#[test]
fn data_reads_are_idempotent() {
    let order = MarketOrderRequest::builder("EUR_USD", "-2500")
        .unwrap()
        .price_bound("1.2000")
        .build()
        .unwrap();
    assert_eq!(order.data(), order.data());
}

// ─── Enumeration validation ──────────────────────────────────────────────────

#[test]
fn every_enum_member_roundtrips_and_outsiders_fail() {
    for tif in TimeInForce::ALL {
        assert_eq!(TimeInForce::from_str(tif.as_str()).unwrap(), *tif);
    }
    assert!(TimeInForce::from_str("GTX").is_err());

    for g in CandlestickGranularity::ALL {
        assert_eq!(CandlestickGranularity::from_str(g.as_str()).unwrap(), *g);
    }
    assert!(CandlestickGranularity::from_str("S1").is_err());

    for c in PricingComponent::ALL {
        assert_eq!(PricingComponent::from_str(c.as_str()).unwrap(), *c);
    }
    assert!(PricingComponent::from_str("X").is_err());
}

#[test]
fn tif_subset_violations_name_the_field() {
    let err = MarketOrderRequest::builder("EUR_USD", 100i64)
        .unwrap()
        .time_in_force(TimeInForce::Gtd)
        .build()
        .unwrap_err();
    match err {
        ValidationError::Choice { field, got, .. } => {
            assert_eq!(field, "timeInForce");
            assert_eq!(got, "GTD");
        }
        other => panic!("expected Choice error, got {other:?}"),
    }
}

// ─── Bare-body requests ──────────────────────────────────────────────────────

#[test]
fn trade_and_position_bodies_have_no_envelope() {
    assert_eq!(TradeCloseRequest::all().data(), json!({"units": "ALL"}));

    let close = PositionCloseRequest::builder()
        .long_all()
        .build()
        .unwrap();
    assert_eq!(close.data(), json!({"longUnits": "ALL"}));
}

#[test]
fn dependent_orders_emit_null_only_for_cancel() {
    let update = TradeDependentOrdersRequest::builder()
        .take_profit(TakeProfitDetails::builder("1.30").unwrap().build().unwrap())
        .cancel_stop_loss()
        .build()
        .unwrap();
    let body = update.data();
    assert_eq!(body["stopLoss"], serde_json::Value::Null);
    assert_eq!(body["takeProfit"]["price"], "1.30");
    assert!(body.get("trailingStopLoss").is_none());
}
