//! Request body for closing a position.

use serde::Serialize;

use crate::domain::RequestBody;
use crate::error::{ValidationError, ValueError};
use crate::shared::{ClientExtensions, CloseUnits, IntoValue, Units};

/// Body for the position close endpoint: reduce the long side, the short
/// side, or both.
///
/// Each side takes `"ALL"`, `"NONE"` or a unit count; at least one side must
/// be supplied, and a side's client extensions only make sense when that side
/// is closed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionCloseRequest {
    #[serde(rename = "longUnits", skip_serializing_if = "Option::is_none")]
    long_units: Option<CloseUnits>,
    #[serde(
        rename = "longClientExtensions",
        skip_serializing_if = "Option::is_none"
    )]
    long_client_extensions: Option<ClientExtensions>,
    #[serde(rename = "shortUnits", skip_serializing_if = "Option::is_none")]
    short_units: Option<CloseUnits>,
    #[serde(
        rename = "shortClientExtensions",
        skip_serializing_if = "Option::is_none"
    )]
    short_client_extensions: Option<ClientExtensions>,
}

impl RequestBody for PositionCloseRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl PositionCloseRequest {
    pub fn builder() -> PositionCloseRequestBuilder {
        PositionCloseRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct PositionCloseRequestBuilder {
    long_units: Option<CloseUnits>,
    long_client_extensions: Option<ClientExtensions>,
    short_units: Option<CloseUnits>,
    short_client_extensions: Option<ClientExtensions>,
    err: Option<ValidationError>,
}

impl PositionCloseRequestBuilder {
    /// Close the whole long side.
    pub fn long_all(mut self) -> Self {
        self.long_units = Some(CloseUnits::All);
        self
    }

    /// Reduce the long side by `units`.
    pub fn long_units(mut self, units: impl IntoValue<Units>) -> Self {
        match units.into_value() {
            Ok(v) => self.long_units = Some(CloseUnits::Amount(v)),
            Err(e) => self.defer("longUnits", e),
        }
        self
    }

    pub fn long_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.long_client_extensions = Some(ext);
        self
    }

    /// Close the whole short side.
    pub fn short_all(mut self) -> Self {
        self.short_units = Some(CloseUnits::All);
        self
    }

    /// Reduce the short side by `units`.
    pub fn short_units(mut self, units: impl IntoValue<Units>) -> Self {
        match units.into_value() {
            Ok(v) => self.short_units = Some(CloseUnits::Amount(v)),
            Err(e) => self.defer("shortUnits", e),
        }
        self
    }

    pub fn short_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.short_client_extensions = Some(ext);
        self
    }

    pub fn build(self) -> Result<PositionCloseRequest, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        if self.long_units.is_none() && self.short_units.is_none() {
            return Err(ValidationError::MissingAnyOf {
                fields: "longUnits, shortUnits",
            });
        }
        if self.long_client_extensions.is_some() && self.long_units.is_none() {
            return Err(ValidationError::ConditionallyRequired {
                field: "longUnits",
                trigger: "longClientExtensions",
                trigger_value: "set",
            });
        }
        if self.short_client_extensions.is_some() && self.short_units.is_none() {
            return Err(ValidationError::ConditionallyRequired {
                field: "shortUnits",
                trigger: "shortClientExtensions",
                trigger_value: "set",
            });
        }
        Ok(PositionCloseRequest {
            long_units: self.long_units,
            long_client_extensions: self.long_client_extensions,
            short_units: self.short_units,
            short_client_extensions: self.short_client_extensions,
        })
    }

    fn defer(&mut self, field: &'static str, e: ValueError) {
        if self.err.is_none() {
            self.err = Some(ValidationError::field(field, e));
        }
    }
}
