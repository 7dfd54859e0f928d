//! Order endpoints: `/v3/accounts/{accountID}/orders...`.

use crate::endpoint::{Endpoint, Method};
use crate::shared::{AccountId, InstrumentName, OrderId, OrderSpecifier};

use super::OrderStateFilter;

/// Query parameters for [`OrderList`].
#[derive(Debug, Clone, Default)]
pub struct OrderListParams {
    /// Restrict to these order IDs (also requires a matching `state`).
    pub ids: Vec<OrderId>,
    pub state: Option<OrderStateFilter>,
    pub instrument: Option<InstrumentName>,
    /// Maximum number of orders to return (server default 50, max 500).
    pub count: Option<u32>,
    /// Return orders with IDs at or before this one.
    pub before_id: Option<OrderId>,
}

impl OrderListParams {
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

/// `POST /v3/accounts/{accountID}/orders` — create an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    account_id: AccountId,
    body: serde_json::Value,
}

impl OrderCreate {
    pub fn new(account_id: AccountId, body: serde_json::Value) -> Self {
        Self { account_id, body }
    }
}

impl Endpoint for OrderCreate {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/orders", self.account_id)
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }

    fn expected_status(&self) -> u16 {
        201
    }
}

/// `GET /v3/accounts/{accountID}/orders` — list orders.
#[derive(Debug, Clone)]
pub struct OrderList {
    account_id: AccountId,
    params: OrderListParams,
}

impl OrderList {
    pub fn new(account_id: AccountId, params: OrderListParams) -> Self {
        Self { account_id, params }
    }
}

impl Endpoint for OrderList {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/orders", self.account_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        self.params.to_query()
    }
}

/// `GET /v3/accounts/{accountID}/pendingOrders` — all pending orders.
#[derive(Debug, Clone)]
pub struct OrdersPending {
    account_id: AccountId,
}

impl OrdersPending {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for OrdersPending {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/pendingOrders", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/orders/{orderSpecifier}` — order details.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    account_id: AccountId,
    specifier: OrderSpecifier,
}

impl OrderDetails {
    pub fn new(account_id: AccountId, specifier: OrderSpecifier) -> Self {
        Self {
            account_id,
            specifier,
        }
    }
}

impl Endpoint for OrderDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/orders/{}", self.account_id, self.specifier)
    }
}

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}` — cancel and
/// replace with a new order.
#[derive(Debug, Clone)]
pub struct OrderReplace {
    account_id: AccountId,
    specifier: OrderSpecifier,
    body: serde_json::Value,
}

impl OrderReplace {
    pub fn new(account_id: AccountId, specifier: OrderSpecifier, body: serde_json::Value) -> Self {
        Self {
            account_id,
            specifier,
            body,
        }
    }
}

impl Endpoint for OrderReplace {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/orders/{}", self.account_id, self.specifier)
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }

    fn expected_status(&self) -> u16 {
        201
    }
}

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/cancel`.
#[derive(Debug, Clone)]
pub struct OrderCancel {
    account_id: AccountId,
    specifier: OrderSpecifier,
}

impl OrderCancel {
    pub fn new(account_id: AccountId, specifier: OrderSpecifier) -> Self {
        Self {
            account_id,
            specifier,
        }
    }
}

impl Endpoint for OrderCancel {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/orders/{}/cancel",
            self.account_id, self.specifier
        )
    }
}

/// `PUT /v3/accounts/{accountID}/orders/{orderSpecifier}/clientExtensions`.
#[derive(Debug, Clone)]
pub struct OrderClientExtensions {
    account_id: AccountId,
    specifier: OrderSpecifier,
    body: serde_json::Value,
}

impl OrderClientExtensions {
    pub fn new(account_id: AccountId, specifier: OrderSpecifier, body: serde_json::Value) -> Self {
        Self {
            account_id,
            specifier,
            body,
        }
    }
}

impl Endpoint for OrderClientExtensions {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/orders/{}/clientExtensions",
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
    fn test_order_create_dispatch() {
        let ep = OrderCreate::new(account(), json!({"order": {"type": "MARKET"}}));
        assert_eq!(ep.method(), Method::Post);
        assert_eq!(ep.path(), "/v3/accounts/101-004-1435156-001/orders");
        assert_eq!(ep.expected_status(), 201);
        assert!(ep.body().is_some());
        assert!(ep.query().is_empty());
    }

    #[test]
    fn test_order_list_query_assembly() {
        let params = OrderListParams {
            state: Some(OrderStateFilter::Pending),
            instrument: Some(InstrumentName::new("EUR_USD").unwrap()),
            count: Some(20),
            ..Default::default()
        };
        let ep = OrderList::new(account(), params);
        assert_eq!(ep.method(), Method::Get);
        assert_eq!(
            ep.query(),
            vec![
                ("state", "PENDING".to_string()),
                ("instrument", "EUR_USD".to_string()),
                ("count", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_list_ids_joined() {
        let params = OrderListParams {
            ids: vec![OrderId::new("12").unwrap(), OrderId::new("34").unwrap()],
            state: Some(OrderStateFilter::All),
            ..Default::default()
        };
        let ep = OrderList::new(account(), params);
        assert_eq!(ep.query()[0], ("ids", "12,34".to_string()));
    }

    #[test]
    fn test_order_cancel_path_with_client_specifier() {
        let spec = OrderSpecifier::new("@my_order_100").unwrap();
        let ep = OrderCancel::new(account(), spec);
        assert_eq!(ep.method(), Method::Put);
        assert_eq!(
            ep.path(),
            "/v3/accounts/101-004-1435156-001/orders/@my_order_100/cancel"
        );
        assert_eq!(ep.expected_status(), 200);
    }

    #[test]
    fn test_order_replace_expects_201() {
        let ep = OrderReplace::new(
            account(),
            OrderSpecifier::new("6372").unwrap(),
            json!({"order": {}}),
        );
        assert_eq!(ep.expected_status(), 201);
        assert_eq!(
            ep.path(),
            "/v3/accounts/101-004-1435156-001/orders/6372"
        );
    }
}
