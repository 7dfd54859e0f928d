//! Request body for account configuration updates.

use serde::Serialize;

use crate::domain::RequestBody;
use crate::error::{ValidationError, ValueError};
use crate::shared::{AccountUnits, IntoValue};

/// Body for the account configuration endpoint: set the account alias and/or
/// the default margin rate. At least one field must be supplied.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(rename = "marginRate", skip_serializing_if = "Option::is_none")]
    margin_rate: Option<AccountUnits>,
}

impl RequestBody for AccountConfigurationRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl AccountConfigurationRequest {
    pub fn builder() -> AccountConfigurationRequestBuilder {
        AccountConfigurationRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct AccountConfigurationRequestBuilder {
    alias: Option<String>,
    margin_rate: Option<AccountUnits>,
    err: Option<ValidationError>,
}

impl AccountConfigurationRequestBuilder {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Margin rate as a decimal string, e.g. `"0.02"` for 50:1 leverage.
    pub fn margin_rate(mut self, rate: impl IntoValue<AccountUnits>) -> Self {
        match rate.into_value() {
            Ok(v) => self.margin_rate = Some(v),
            Err(e) => self.defer("marginRate", e),
        }
        self
    }

    pub fn build(self) -> Result<AccountConfigurationRequest, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        if self.alias.is_none() && self.margin_rate.is_none() {
            return Err(ValidationError::MissingAnyOf {
                fields: "alias, marginRate",
            });
        }
        Ok(AccountConfigurationRequest {
            alias: self.alias,
            margin_rate: self.margin_rate,
        })
    }

    fn defer(&mut self, field: &'static str, e: ValueError) {
        if self.err.is_none() {
            self.err = Some(ValidationError::field(field, e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_shapes() {
        let body = AccountConfigurationRequest::builder()
            .alias("swing")
            .margin_rate("0.02")
            .build()
            .unwrap();
        assert_eq!(body.data(), json!({"alias": "swing", "marginRate": "0.02"}));

        let alias_only = AccountConfigurationRequest::builder()
            .alias("swing")
            .build()
            .unwrap();
        assert_eq!(alias_only.data(), json!({"alias": "swing"}));
    }

    #[test]
    fn test_empty_update_rejected() {
        let err = AccountConfigurationRequest::builder().build().unwrap_err();
        assert!(matches!(err, ValidationError::MissingAnyOf { .. }));
    }

    #[test]
    fn test_bad_margin_rate_named() {
        let err = AccountConfigurationRequest::builder()
            .margin_rate("2%")
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "marginRate");
    }
}
