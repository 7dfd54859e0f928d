//! Network host constants for the v20 REST API.

/// REST host for fxTrade Practice (demo) accounts.
pub const PRACTICE_API_URL: &str = "https://api-fxpractice.oanda.com";

/// REST host for fxTrade (live) accounts.
pub const LIVE_API_URL: &str = "https://api-fxtrade.oanda.com";
