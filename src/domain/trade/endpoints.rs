//! Trade endpoints: `/v3/accounts/{accountID}/trades...`.

use crate::endpoint::{Endpoint, Method};
use crate::shared::{AccountId, InstrumentName, TradeId, TradeSpecifier};

use super::TradeStateFilter;

/// Query parameters for [`TradesList`].
#[derive(Debug, Clone, Default)]
pub struct TradesListParams {
    /// Restrict to these trade IDs.
    pub ids: Vec<TradeId>,
    pub state: Option<TradeStateFilter>,
    pub instrument: Option<InstrumentName>,
    pub count: Option<u32>,
    /// Return trades with IDs at or before this one.
    pub before_id: Option<TradeId>,
}

impl TradesListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if !self.ids.is_empty() {
            let ids: Vec<&str> = self.ids.iter().map(|id| id.as_str()).collect();
            q.push(("ids", ids.join(",")));
        }
        if let Some(state) = self.state {
            q.push(("state", state.as_str().to_string()));
        }
        if let Some(instrument) = &self.instrument {
            q.push(("instrument", instrument.as_str().to_string()));
        }
        if let Some(count) = self.count {
            q.push(("count", count.to_string()));
        }
        if let Some(before) = &self.before_id {
            q.push(("beforeID", before.as_str().to_string()));
        }
        q
    }
}

/// `GET /v3/accounts/{accountID}/trades` — list trades.
#[derive(Debug, Clone)]
pub struct TradesList {
    account_id: AccountId,
    params: TradesListParams,
}

impl TradesList {
    pub fn new(account_id: AccountId, params: TradesListParams) -> Self {
        Self { account_id, params }
    }
}

impl Endpoint for TradesList {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/trades", self.account_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.params.to_query()
    }
}

/// `GET /v3/accounts/{accountID}/openTrades` — all open trades.
#[derive(Debug, Clone)]
pub struct OpenTrades {
    account_id: AccountId,
}

impl OpenTrades {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for OpenTrades {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/openTrades", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/trades/{tradeSpecifier}` — trade details.
#[derive(Debug, Clone)]
pub struct TradeDetails {
    account_id: AccountId,
    specifier: TradeSpecifier,
}

impl TradeDetails {
    pub fn new(account_id: AccountId, specifier: TradeSpecifier) -> Self {
        Self {
            account_id,
            specifier,
        }
    }
}

impl Endpoint for TradeDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/trades/{}", self.account_id, self.specifier)
    }
}

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/close`.
#[derive(Debug, Clone)]
pub struct TradeClose {
    account_id: AccountId,
    specifier: TradeSpecifier,
    body: serde_json::Value,
}

impl TradeClose {
    pub fn new(account_id: AccountId, specifier: TradeSpecifier, body: serde_json::Value) -> Self {
        Self {
            account_id,
            specifier,
            body,
        }
    }
}

impl Endpoint for TradeClose {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/trades/{}/close",
            self.account_id, self.specifier
        )
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }
}

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/clientExtensions`.
#[derive(Debug, Clone)]
pub struct TradeClientExtensions {
    account_id: AccountId,
    specifier: TradeSpecifier,
    body: serde_json::Value,
}

impl TradeClientExtensions {
    pub fn new(account_id: AccountId, specifier: TradeSpecifier, body: serde_json::Value) -> Self {
        Self {
            account_id,
            specifier,
            body,
        }
    }
}

impl Endpoint for TradeClientExtensions {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/trades/{}/clientExtensions",
            self.account_id, self.specifier
        )
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }
}

/// `PUT /v3/accounts/{accountID}/trades/{tradeSpecifier}/orders` — create,
/// replace or cancel the trade's dependent orders.
#[derive(Debug, Clone)]
pub struct TradeDependentOrders {
    account_id: AccountId,
    specifier: TradeSpecifier,
    body: serde_json::Value,
}

impl TradeDependentOrders {
    pub fn new(account_id: AccountId, specifier: TradeSpecifier, body: serde_json::Value) -> Self {
        Self {
            account_id,
            specifier,
            body,
        }
    }
}

impl Endpoint for TradeDependentOrders {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/trades/{}/orders",
            self.account_id, self.specifier
        )
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account() -> AccountId {
        AccountId::new("101-004-1435156-001").unwrap()
    }

    #[test]
    fn test_trades_list_query() {
        let params = TradesListParams {
            state: Some(TradeStateFilter::Open),
            count: Some(10),
            ..Default::default()
        };
        let ep = TradesList::new(account(), params);
        assert_eq!(ep.method(), Method::Get);
        assert_eq!(ep.path(), "/v3/accounts/101-004-1435156-001/trades");
        assert_eq!(
            ep.query(),
            vec![("state", "OPEN".to_string()), ("count", "10".to_string())]
        );
    }

    #[test]
    fn test_trade_close_dispatch() {
        let ep = TradeClose::new(
            account(),
            TradeSpecifier::new("1234").unwrap(),
            json!({"units": "ALL"}),
        );
        assert_eq!(ep.method(), Method::Put);
        assert_eq!(
            ep.path(),
            "/v3/accounts/101-004-1435156-001/trades/1234/close"
        );
        assert_eq!(ep.body().unwrap(), &json!({"units": "ALL"}));
    }

    #[test]
    fn test_dependent_orders_path() {
        let ep = TradeDependentOrders::new(
            account(),
            TradeSpecifier::new("@my_trade_7").unwrap(),
            json!({"takeProfit": {"price": "1.25"}}),
        );
        assert_eq!(
            ep.path(),
            "/v3/accounts/101-004-1435156-001/trades/@my_trade_7/orders"
        );
    }
}
