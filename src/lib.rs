//! # v20 SDK
//!
//! A Rust SDK for the OANDA v20 REST trading API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Validating value types, closed enumeration sets, request
//!    builders, endpoint definitions (always available, WASM-safe)
//! 2. **HTTP** — `V20Http` with per-method retry policies
//! 3. **High-Level Client** — `V20Client` with nested sub-clients
//!
//! The core is stateless and synchronous: every request body is validated at
//! construction (malformed values, missing conditionally-required fields and
//! out-of-set enum constants all fail before anything touches the network),
//! frozen afterwards, and safe to share across tasks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use v20_sdk::prelude::*;
//!
//! let client = V20Client::builder()
//!     .practice()
//!     .access_token(std::env::var("V20_TOKEN")?)
//!     .build()?;
//!
//! let account_id = AccountId::new("101-004-1435156-001")?;
//! let order = TakeProfitOrderRequest::builder("1234", "1.22")?.build()?;
//! let resp = client.orders().create(&account_id, &order).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared validating newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): enums, request builders, endpoints.
pub mod domain;

/// Endpoint dispatch: method + path + query + body per API operation.
pub mod endpoint;

/// Unified SDK error types.
pub mod error;

/// Network host constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `V20Client` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::{
        AccountId, AccountUnits, ClientComment, ClientExtensions, ClientId, ClientTag, CloseUnits,
        DateTimeValue, InstrumentName, IntoValue, OrderId, OrderSpecifier, PriceValue, TradeId,
        TradeSpecifier, TransactionId, Units,
    };

    // Order domain — enums and request builders
    pub use crate::domain::order::{
        LimitOrderRequest, MarketIfTouchedOrderRequest, MarketOrderRequest,
        OrderClientExtensionsRequest, OrderPositionFill, OrderStateFilter, OrderTriggerCondition,
        OrderType, StopLossDetails, StopLossOrderRequest, StopOrderRequest, TakeProfitDetails,
        TakeProfitOrderRequest, TimeInForce, TrailingStopLossDetails, TrailingStopLossOrderRequest,
    };
    pub use crate::domain::order::endpoints::OrderListParams;

    // Trade domain
    pub use crate::domain::trade::endpoints::TradesListParams;
    pub use crate::domain::trade::{
        DependentOrder, TradeClientExtensionsRequest, TradeCloseRequest,
        TradeDependentOrdersRequest, TradeStateFilter,
    };

    // Position / account domains
    pub use crate::domain::account::AccountConfigurationRequest;
    pub use crate::domain::position::PositionCloseRequest;

    // Pricing / instrument domains
    pub use crate::domain::instrument::endpoints::CandlesParams;
    pub use crate::domain::instrument::wire::{Candlestick, CandlestickData, CandlesResponse};
    pub use crate::domain::instrument::{CandlestickGranularity, WeeklyAlignment};
    pub use crate::domain::pricing::endpoints::PricingInfoParams;
    pub use crate::domain::pricing::wire::{ClientPrice, PriceBucket, PricingResponse};
    pub use crate::domain::pricing::PricingComponent;

    // Base request capability + dispatch
    pub use crate::domain::RequestBody;
    pub use crate::endpoint::{Endpoint, Method};

    // Errors
    pub use crate::error::{SdkError, ValidationError, ValueError};

    // Network
    pub use crate::network::{LIVE_API_URL, PRACTICE_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, InstrumentsClient, OrdersClient, PositionsClient, PricingClient,
        TradesClient, V20Client, V20ClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{ApiResponse, RetryConfig, RetryPolicy};
}
