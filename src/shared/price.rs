//! Numeric wire values: prices, unit counts, account-currency amounts.
//!
//! The v20 wire format carries every numeric value as a JSON string. Prices
//! are parsed into `rust_decimal::Decimal` so the caller's precision survives
//! the round trip: `"1.22"` stays `"1.22"`, never `1.2199999...`.

use crate::error::ValueError;
use crate::shared::impl_into_value;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

impl_into_value!(PriceValue => &str, String, f64, Decimal);
impl_into_value!(Units => &str, String, i64, i32);
impl_into_value!(AccountUnits => &str, String, f64, Decimal);

// ─── PriceValue ──────────────────────────────────────────────────────────────

/// A price on the wire: any real number, serialized as its decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriceValue(Decimal);

impl PriceValue {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        let s = s.as_ref();
        let d = Decimal::from_str(s)
            .map_err(|_| ValueError::new(format!("`{s}` is not a decimal number")))?;
        Ok(Self(d))
    }

    /// The wire representation, e.g. `"1.22"`.
    pub fn value(&self) -> String {
        self.0.to_string()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for PriceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for PriceValue {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl FromStr for PriceValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PriceValue {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for PriceValue {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<f64> for PriceValue {
    type Error = ValueError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Decimal::try_from(f)
            .map(Self)
            .map_err(|_| ValueError::new(format!("`{f}` is not representable as a decimal")))
    }
}

impl Serialize for PriceValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for PriceValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Units ───────────────────────────────────────────────────────────────────

/// An order size in units of the instrument's base currency.
///
/// Positive buys, negative sells; serialized as an integer string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Units(i64);

impl Units {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        let s = s.as_ref();
        let n = s
            .parse::<i64>()
            .map_err(|_| ValueError::new(format!("`{s}` is not a whole number of units")))?;
        Ok(Self(n))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Units {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl FromStr for Units {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Units {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for Units {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<i32> for Units {
    type Error = ValueError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Ok(Self(n as i64))
    }
}

impl Serialize for Units {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Units {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── AccountUnits ────────────────────────────────────────────────────────────

/// An amount in the account's home currency, e.g. a margin rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountUnits(Decimal);

impl AccountUnits {
    pub fn new(s: impl AsRef<str>) -> Result<Self, ValueError> {
        let s = s.as_ref();
        let d = Decimal::from_str(s)
            .map_err(|_| ValueError::new(format!("`{s}` is not a decimal amount")))?;
        Ok(Self(d))
    }

    pub fn value(&self) -> String {
        self.0.to_string()
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for AccountUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for AccountUnits {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl TryFrom<&str> for AccountUnits {
    type Error = ValueError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountUnits {
    type Error = ValueError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<f64> for AccountUnits {
    type Error = ValueError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Decimal::try_from(f)
            .map(Self)
            .map_err(|_| ValueError::new(format!("`{f}` is not representable as a decimal")))
    }
}

impl Serialize for AccountUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for AccountUnits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

// ─── CloseUnits ──────────────────────────────────────────────────────────────

/// Size argument for close requests: everything, nothing, or an amount.
///
/// Serializes as `"ALL"`, `"NONE"` or the unit count string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseUnits {
    All,
    None,
    Amount(Units),
}

impl Serialize for CloseUnits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str("ALL"),
            Self::None => serializer.serialize_str("NONE"),
            Self::Amount(units) => units.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_value_preserves_precision() {
        assert_eq!(PriceValue::new("1.22").unwrap().value(), "1.22");
        assert_eq!(PriceValue::new("1.2200").unwrap().value(), "1.2200");
        assert_eq!(PriceValue::new("0.00001").unwrap().value(), "0.00001");
    }

    #[test]
    fn test_price_value_from_f64() {
        assert_eq!(PriceValue::try_from(1.22f64).unwrap().value(), "1.22");
    }

    #[test]
    fn test_price_value_rejects_non_numeric() {
        assert!(PriceValue::new("").is_err());
        assert!(PriceValue::new("1.2.3").is_err());
        assert!(PriceValue::new("about 1.22").is_err());
    }

    #[test]
    fn test_price_value_serde_roundtrip() {
        let p = PriceValue::new("1.22").unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"1.22\"");
        let back: PriceValue = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_units_accepts_signed_integers() {
        assert_eq!(Units::new("100").unwrap().as_i64(), 100);
        assert_eq!(Units::new("-50").unwrap().as_i64(), -50);
        assert_eq!(Units::from(10_000).as_i64(), 10_000);
    }

    #[test]
    fn test_units_rejects_fractions() {
        assert!(Units::new("1.5").is_err());
        assert!(Units::new("many").is_err());
    }

    #[test]
    fn test_units_serializes_as_string() {
        assert_eq!(serde_json::to_string(&Units::from(-50)).unwrap(), "\"-50\"");
    }

    #[test]
    fn test_account_units_parses_decimal() {
        assert_eq!(AccountUnits::new("0.02").unwrap().value(), "0.02");
        assert!(AccountUnits::new("two percent").is_err());
    }

    #[test]
    fn test_close_units_wire_forms() {
        assert_eq!(serde_json::to_string(&CloseUnits::All).unwrap(), "\"ALL\"");
        assert_eq!(
            serde_json::to_string(&CloseUnits::None).unwrap(),
            "\"NONE\""
        );
        assert_eq!(
            serde_json::to_string(&CloseUnits::Amount(Units::from(250))).unwrap(),
            "\"250\""
        );
    }
}
