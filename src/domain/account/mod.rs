//! Account domain — account listing, summaries, configuration.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod request;

pub use request::AccountConfigurationRequest;
