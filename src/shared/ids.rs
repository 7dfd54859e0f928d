//! Identifier newtypes: server-assigned numeric IDs, client-assigned tags,
//! and the `@`-prefixed specifier convention used in URL paths.

use crate::error::ValueError;
use crate::shared::impl_into_value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

impl_into_value!(TradeId => &str, String, u64);
impl_into_value!(OrderId => &str, String, u64);
impl_into_value!(TransactionId => &str, String, u64);
impl_into_value!(ClientId => &str, String);
impl_into_value!(ClientTag => &str, String);
impl_into_value!(ClientComment => &str, String);
impl_into_value!(OrderSpecifier => &str, String);
impl_into_value!(TradeSpecifier => &str, String);

/// Parse a server-assigned ID: the string form of a positive integer.
///
/// Returns the normalized form (`"007"` → `"7"`).
fn parse_numeric_id(raw: &str, what: &str) -> Result<String, ValueError> {
    raw.parse::<u64>()
        .map(|n| n.to_string())
        .map_err(|_| ValueError::new(format!("`{raw}` is not a {what} (positive integer string)")))
}

/// Check a client-assigned string: non-empty, length-capped.
fn check_client_str(raw: &str, what: &str, max: usize) -> Result<(), ValueError> {
    if raw.is_empty() {
        return Err(ValueError::new(format!("{what} must not be empty")));
    }
    if raw.chars().count() > max {
        return Err(ValueError::new(format!(
            "{what} must be at most {max} characters, got {}",
            raw.chars().count()
        )));
    }
    Ok(())
}

macro_rules! string_serde {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = ValueError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValueError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ─── TradeId ─────────────────────────────────────────────────────────────────

/// The server-assigned ID of a trade, e.g. `"1234"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeId(String);

impl TradeId {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        Ok(Self(parse_numeric_id(s.as_ref(), "trade ID")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<u64> for TradeId {
    type Error = ValueError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Ok(Self(n.to_string()))
    }
}

string_serde!(TradeId);

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// The server-assigned ID of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        Ok(Self(parse_numeric_id(s.as_ref(), "order ID")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<u64> for OrderId {
    type Error = ValueError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Ok(Self(n.to_string()))
    }
}

string_serde!(OrderId);

// ─── TransactionId ───────────────────────────────────────────────────────────

/// The server-assigned ID of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        Ok(Self(parse_numeric_id(s.as_ref(), "transaction ID")?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<u64> for TransactionId {
    type Error = ValueError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Ok(Self(n.to_string()))
    }
}

string_serde!(TransactionId);

// ─── ClientId / ClientTag / ClientComment ────────────────────────────────────

/// A client-provided identifier for an order or trade, up to 128 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        check_client_str(&s, "client ID", 128)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_serde!(ClientId);

/// A client-provided tag, up to 128 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientTag(String);

impl ClientTag {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        check_client_str(&s, "client tag", 128)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_serde!(ClientTag);

/// A client-provided comment, up to 256 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientComment(String);

impl ClientComment {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        check_client_str(&s, "client comment", 256)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_serde!(ClientComment);

// ─── OrderSpecifier / TradeSpecifier ─────────────────────────────────────────

/// Parse a specifier: either a server-assigned numeric ID, or a
/// client-assigned ID prefixed with `@`.
fn parse_specifier(raw: &str, what: &str) -> Result<String, ValueError> {
    if let Some(client) = raw.strip_prefix('@') {
        check_client_str(client, what, 128)?;
        Ok(raw.to_string())
    } else {
        parse_numeric_id(raw, what)
    }
}

/// Identifies an order in a URL path: `"6372"` or `"@my_order_100"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderSpecifier(String);

impl OrderSpecifier {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        Ok(Self(parse_specifier(s.as_ref(), "order specifier")?))
    }

    /// Specifier for a server-assigned order ID.
    pub fn id(id: OrderId) -> Self {
        Self(id.as_str().to_string())
    }

    /// Specifier for a client-assigned order ID (adds the `@` prefix).
    pub fn client(id: ClientId) -> Self {
        Self(format!("@{}", id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_serde!(OrderSpecifier);

/// Identifies a trade in a URL path: `"1234"` or `"@my_trade_7"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeSpecifier(String);

impl TradeSpecifier {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        Ok(Self(parse_specifier(s.as_ref(), "trade specifier")?))
    }

    pub fn id(id: TradeId) -> Self {
        Self(id.as_str().to_string())
    }

    pub fn client(id: ClientId) -> Self {
        Self(format!("@{}", id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_serde!(TradeSpecifier);
