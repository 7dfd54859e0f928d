//! Position domain — per-instrument net position queries and closes.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod request;

pub use request::PositionCloseRequest;
