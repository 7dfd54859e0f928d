//! Position endpoints: `/v3/accounts/{accountID}/positions...`.

use crate::endpoint::{Endpoint, Method};
use crate::shared::{AccountId, InstrumentName};

/// `GET /v3/accounts/{accountID}/positions` — all positions over the
/// lifetime of the account.
#[derive(Debug, Clone)]
pub struct PositionList {
    account_id: AccountId,
}

impl PositionList {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for PositionList {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/positions", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/openPositions`.
#[derive(Debug, Clone)]
pub struct OpenPositions {
    account_id: AccountId,
}

impl OpenPositions {
    pub fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }
}

impl Endpoint for OpenPositions {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!("/v3/accounts/{}/openPositions", self.account_id)
    }
}

/// `GET /v3/accounts/{accountID}/positions/{instrument}`.
#[derive(Debug, Clone)]
pub struct PositionDetails {
    account_id: AccountId,
    instrument: InstrumentName,
}

impl PositionDetails {
    pub fn new(account_id: AccountId, instrument: InstrumentName) -> Self {
        Self {
            account_id,
            instrument,
        }
    }
}

impl Endpoint for PositionDetails {
    fn method(&self) -> Method {
        Method::Get
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/positions/{}",
            self.account_id, self.instrument
        )
    }
}

/// `PUT /v3/accounts/{accountID}/positions/{instrument}/close`.
#[derive(Debug, Clone)]
pub struct PositionClose {
    account_id: AccountId,
    instrument: InstrumentName,
    body: serde_json::Value,
}

impl PositionClose {
    pub fn new(account_id: AccountId, instrument: InstrumentName, body: serde_json::Value) -> Self {
        Self {
            account_id,
            instrument,
            body,
        }
    }
}

impl Endpoint for PositionClose {
    fn method(&self) -> Method {
        Method::Put
    }

    fn path(&self) -> String {
        format!(
            "/v3/accounts/{}/positions/{}/close",
            self.account_id, self.instrument
        )
    }

    fn body(&self) -> Option<&serde_json::Value> {
        Some(&self.body)
    }
}
