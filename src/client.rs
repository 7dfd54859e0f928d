//! High-level client — `V20Client` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder and the generic endpoint passthrough.

use crate::domain::account::client::Accounts;
use crate::domain::instrument::client::Instruments;
use crate::domain::order::client::Orders;
use crate::domain::position::client::Positions;
use crate::domain::pricing::client::Pricing;
use crate::domain::trade::client::Trades;
use crate::endpoint::Endpoint;
use crate::error::SdkError;
use crate::http::{ApiResponse, V20Http};

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::instrument::client::Instruments as InstrumentsClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::pricing::client::Pricing as PricingClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the v20 SDK.
///
/// Provides nested sub-client accessors for each domain —
/// `client.orders()`, `client.trades()`, etc. — plus a generic
/// [`request`](V20Client::request) for dispatching any endpoint directly.
#[derive(Clone)]
pub struct V20Client {
    pub(crate) http: V20Http,
}

impl V20Client {
    pub fn builder() -> V20ClientBuilder {
        V20ClientBuilder::default()
    }

    /// Dispatch any endpoint and get back the status/raw-body pair.
    pub async fn request(&self, endpoint: &impl Endpoint) -> Result<ApiResponse, SdkError> {
        Ok(self.http.call(endpoint).await?)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn positions(&self) -> Positions<'_> {
        Positions { client: self }
    }

    pub fn pricing(&self) -> Pricing<'_> {
        Pricing { client: self }
    }

    pub fn instruments(&self) -> Instruments<'_> {
        Instruments { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct V20ClientBuilder {
    base_url: String,
    access_token: Option<String>,
}

impl Default for V20ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::PRACTICE_API_URL.to_string(),
            access_token: None,
        }
    }
}

impl V20ClientBuilder {
    /// Point at an arbitrary host (e.g. a test double).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use the fxTrade Practice host (the default).
    pub fn practice(mut self) -> Self {
        self.base_url = crate::network::PRACTICE_API_URL.to_string();
        self
    }

    /// Use the fxTrade live host.
    pub fn live(mut self) -> Self {
        self.base_url = crate::network::LIVE_API_URL.to_string();
        self
    }

    /// The personal access token generated from the account portal.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<V20Client, SdkError> {
        let token = self
            .access_token
            .ok_or_else(|| SdkError::Other("access token is required".to_string()))?;
        Ok(V20Client {
            http: V20Http::new(&self.base_url, Some(token)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        assert!(V20Client::builder().build().is_err());
        assert!(V20Client::builder().access_token("token").build().is_ok());
    }

    #[test]
    fn test_request_surfaces_transport_errors() {
        // Nothing listens on the discard port; a non-retrying POST fails
        // with a transport error rather than hanging.
        let client = V20Client::builder()
            .base_url("http://127.0.0.1:9")
            .access_token("token")
            .build()
            .unwrap();
        let account = crate::shared::AccountId::new("001-011-5838423-001").unwrap();
        let ep = crate::domain::order::endpoints::OrderCreate::new(
            account,
            serde_json::json!({"order": {"type": "MARKET"}}),
        );
        let err = tokio_test::block_on(client.request(&ep)).unwrap_err();
        assert!(matches!(err, SdkError::Http(_)));
    }

    #[test]
    fn test_builder_host_selection() {
        let client = V20Client::builder()
            .live()
            .access_token("token")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), crate::network::LIVE_API_URL);

        let client = V20Client::builder()
            .base_url("http://localhost:8080/")
            .access_token("token")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "http://localhost:8080");
    }
}
