//! HTTP transport layer — `V20Http` with per-method retry policies.

pub mod client;
pub mod retry;

pub use client::{ApiResponse, V20Http};
pub use retry::{RetryConfig, RetryPolicy};
