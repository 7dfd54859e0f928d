//! Account endpoints: `/v3/accounts...`.

use crate::endpoint::{Endpoint, Method};
use crate::shared::{AccountId, InstrumentName, TransactionId};

/// `GET /v3/accounts` — all accounts the token can access.
#[derive(Debug, Clone, Default)]
pub struct AccountList;

impl AccountList {
    pub fn new() -> Self {
        Self
    }
}

impl Endpoint for AccountList {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        "/v3/accounts".to_string()
    }
}

/// `GET /v3/accounts/{accountID}` — full account details, including open
/// trades, orders and positions.
#[derive(Debug, Clone)]
pub struct AccountDetails {
    account_id: AccountId,
}

impl AccountDetails {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for AccountDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/summary` — details without the open state.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    account_id: AccountId,
}

impl AccountSummary {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for AccountSummary {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/summary", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/instruments` — tradeable instruments,
/// optionally restricted to a list.
#[derive(Debug, Clone)]
pub struct AccountInstruments {
    account_id: AccountId,
    instruments: Vec<InstrumentName>,
}

impl AccountInstruments {
    pub fn new(account_id: AccountId, instruments: Vec<InstrumentName>) -> Self {
        Self {
            account_id,
            instruments,
        }
    }
}

impl Endpoint for AccountInstruments {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/instruments", self.account_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        if self.instruments.is_empty() {
            return Vec::new();
        }
        let names: Vec<&str> = self.instruments.iter().map(|i| i.as_str()).collect();
        vec![("instruments", names.join(","))]
    }
}

/// `PATCH /v3/accounts/{accountID}/configuration`.
#[derive(Debug, Clone)]
pub struct AccountConfiguration {
    account_id: AccountId,
    body: serde_json::Value,
}

impl AccountConfiguration {
    pub fn new(account_id: AccountId, body: serde_json::Value) -> Self {
        Self { account_id, body }
    }
}

impl Endpoint for AccountConfiguration {
    fn method(&self) -> Method {
        Method::Patch
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/configuration", self.account_id)
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }
}

/// `GET /v3/accounts/{accountID}/changes` — state changes since a
/// transaction ID.
#[derive(Debug, Clone)]
pub struct AccountChanges {
    account_id: AccountId,
    since_transaction_id: Option<TransactionId>,
}

impl AccountChanges {
    pub fn new(account_id: AccountId, since_transaction_id: Option<TransactionId>) -> Self {
        Self {
            account_id,
            since_transaction_id,
        }
    }
}

impl Endpoint for AccountChanges {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/changes", self.account_id)
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match &self.since_transaction_id {
            Some(id) => vec![("sinceTransactionID", id.as_str().to_string())],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountId {
        AccountId::new("101-004-1435156-001").unwrap()
    }

    #[test]
    fn test_account_list_has_no_ids() {
        let ep = AccountList::new();
        assert_eq!(ep.path(), "/v3/accounts");
        assert_eq!(ep.method(), Method::Get);
    }

    #[test]
    fn test_account_instruments_query() {
        let ep = AccountInstruments::new(
            account(),
            vec![
                InstrumentName::new("EUR_USD").unwrap(),
                InstrumentName::new("USD_JPY").unwrap(),
            ],
        );
        assert_eq!(ep.query(), vec![("instruments", "EUR_USD,USD_JPY".to_string())]);
    }

    #[test]
    fn test_account_configuration_is_patch() {
        let ep = AccountConfiguration::new(account(), serde_json::json!({"alias": "swing"}));
        assert_eq!(ep.method(), Method::Patch);
        assert_eq!(
            ep.path(),
            "/v3/accounts/101-004-1435156-001/configuration"
        );
    }

    #[test]
    fn test_account_changes_query() {
        let ep = AccountChanges::new(account(), Some(TransactionId::new("6410").unwrap()));
        assert_eq!(
            ep.query(),
            vec![("sinceTransactionID", "6410".to_string())]
        );
        let ep = AccountChanges::new(account(), None);
        assert!(ep.query().is_empty());
    }
}
