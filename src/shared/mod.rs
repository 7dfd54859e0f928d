//! Shared validating newtypes used across all domain modules.
//!
//! Every type here checks its wire format on construction and is immutable
//! afterwards: once a value exists, it is wire-valid. Construction failures
//! are [`ValueError`]s; request builders attach the wire field name they were
//! validating for.
//!
//! The types are serialization-transparent: they serialize to exactly the
//! string the backend expects, so they can be embedded in request structs
//! without conversion.

pub mod client_extensions;
pub mod ids;
pub mod price;

pub use client_extensions::ClientExtensions;
pub use ids::{
    ClientComment, ClientId, ClientTag, OrderId, OrderSpecifier, TradeId, TradeSpecifier,
    TransactionId,
};
pub use price::{AccountUnits, CloseUnits, PriceValue, Units};

use crate::error::ValueError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── IntoValue ───────────────────────────────────────────────────────────────

/// Conversion into a validated value type.
///
/// Implemented by raw inputs (`&str`, `f64`, ...) through their fallible
/// parses, and reflexively by every value type, so builder arguments accept
/// either form: `builder("1234", "1.22")` or `builder(trade_id, price)`.
pub trait IntoValue<T>: Sized {
    fn into_value(self) -> Result<T, ValueError>;
}

impl<T> IntoValue<T> for T {
    fn into_value(self) -> Result<T, ValueError> {
        Ok(self)
    }
}

macro_rules! impl_into_value {
    ($target:ty => $($src:ty),+ $(,)?) => {
        $(
            impl crate::shared::IntoValue<$target> for $src {
                fn into_value(self) -> Result<$target, crate::error::ValueError> {
                    <$target>::try_from(self).map_err(crate::error::ValueError::from)
                }
            }
        )+
    };
}
pub(crate) use impl_into_value;

impl_into_value!(AccountId => &str, String);
impl_into_value!(InstrumentName => &str, String);
impl_into_value!(DateTimeValue => &str, String);

impl IntoValue<DateTimeValue> for chrono::DateTime<chrono::Utc> {
    fn into_value(self) -> Result<DateTimeValue, ValueError> {
        Ok(DateTimeValue::from(self))
    }
}

// ─── AccountId ───────────────────────────────────────────────────────────────

/// A v20 account identifier, e.g. `"001-011-5838423-001"`.
///
/// Four groups of digits separated by `-` (site, division, user, account
/// number).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        let parts: Vec<&str> = s.split('-').collect();
        let well_formed = parts.len() == 4
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(ValueError::new(format!(
                "`{s}` is not a v20 account ID (expected e.g. 001-011-5838423-001)"
            )));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for AccountId {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ─── InstrumentName ──────────────────────────────────────────────────────────

/// An instrument name: base and quote joined by `_`, e.g. `"EUR_USD"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstrumentName(String);

impl InstrumentName {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        let ok = match s.split_once('_') {
            Some((base, quote)) => {
                let part_ok = |p: &str| {
                    (1..=10).contains(&p.len())
                        && p.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
                };
                part_ok(base) && part_ok(quote) && !quote.contains('_')
            }
            None => false,
        };
        if !ok {
            return Err(ValueError::new(format!(
                "`{s}` is not an instrument name (expected e.g. EUR_USD)"
            )));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InstrumentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstrumentName {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for InstrumentName {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for InstrumentName {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl Serialize for InstrumentName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InstrumentName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ─── DateTimeValue ───────────────────────────────────────────────────────────

/// An RFC 3339 timestamp as the API accepts it, e.g.
/// `"2026-11-21T14:00:00.000000000Z"`.
///
/// The original string is preserved verbatim — the API echoes timestamps at
/// nanosecond precision and reformatting through a float would lose it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimeValue(String);

impl DateTimeValue {
    pub fn new(s: impl Into<String>) -> Result<Self, ValueError> {
        let s = s.into();
        chrono::DateTime::parse_from_rfc3339(&s)
            .map_err(|e| ValueError::new(format!("`{s}` is not an RFC 3339 timestamp: {e}")))?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTimeValue {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true))
    }
}

impl TryFrom<&str> for DateTimeValue {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for DateTimeValue {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl Serialize for DateTimeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DateTimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_accepts_wire_format() {
        let id = AccountId::new("001-011-5838423-001").unwrap();
        assert_eq!(id.as_str(), "001-011-5838423-001");
    }

    #[test]
    fn test_account_id_rejects_malformed() {
        assert!(AccountId::new("001-011-5838423").is_err());
        assert!(AccountId::new("001-011-5838423-").is_err());
        assert!(AccountId::new("abc-011-5838423-001").is_err());
        assert!(AccountId::new("").is_err());
    }

    #[test]
    fn test_account_id_serializes_as_string() {
        let id = AccountId::new("101-004-1435156-001").unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"101-004-1435156-001\""
        );
    }

    #[test]
    fn test_instrument_name_accepts_majors_and_cfds() {
        for name in ["EUR_USD", "XAU_USD", "SPX500_USD", "DE30_EUR"] {
            assert!(InstrumentName::new(name).is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_instrument_name_rejects_malformed() {
        assert!(InstrumentName::new("EURUSD").is_err());
        assert!(InstrumentName::new("eur_usd").is_err());
        assert!(InstrumentName::new("EUR_").is_err());
        assert!(InstrumentName::new("_USD").is_err());
        assert!(InstrumentName::new("EUR_USD_CHF").is_err());
    }

    #[test]
    fn test_datetime_value_accepts_rfc3339() {
        assert!(DateTimeValue::new("2026-11-21T14:00:00Z").is_ok());
        assert!(DateTimeValue::new("2026-11-21T14:00:00.000000000Z").is_ok());
        assert!(DateTimeValue::new("2026-11-21T14:00:00+02:00").is_ok());
    }

    #[test]
    fn test_datetime_value_preserves_input() {
        let dt = DateTimeValue::new("2026-11-21T14:00:00.123456789Z").unwrap();
        assert_eq!(dt.as_str(), "2026-11-21T14:00:00.123456789Z");
    }

    #[test]
    fn test_datetime_value_rejects_garbage() {
        assert!(DateTimeValue::new("yesterday").is_err());
        assert!(DateTimeValue::new("2026-11-21").is_err());
        assert!(DateTimeValue::new("2026-13-40T99:00:00Z").is_err());
    }

    #[test]
    fn test_datetime_value_from_chrono() {
        use chrono::TimeZone;
        let utc = chrono::Utc.with_ymd_and_hms(2026, 11, 21, 14, 0, 0).unwrap();
        let dt = DateTimeValue::from(utc);
        assert!(dt.as_str().starts_with("2026-11-21T14:00:00"));
        assert!(dt.as_str().ends_with('Z'));
    }
}
