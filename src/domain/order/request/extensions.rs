//! Body for updating the client extensions of an existing order.

use serde::Serialize;

use crate::domain::RequestBody;
use crate::error::ValidationError;
use crate::shared::ClientExtensions;

/// Body for the order client-extensions endpoint: update the extensions of
/// the order and/or of the trade it would open on fill.
///
/// Sent bare (no `order` envelope). At least one of the two groups must be
/// supplied.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderClientExtensionsRequest {
    #[serde(rename = "clientExtensions", skip_serializing_if = "Option::is_none")]
    client_extensions: Option<ClientExtensions>,
    #[serde(
        rename = "tradeClientExtensions",
        skip_serializing_if = "Option::is_none"
    )]
    trade_client_extensions: Option<ClientExtensions>,
}

impl RequestBody for OrderClientExtensionsRequest {
    const ENVELOPE: Option<&'static str> = None;
}

impl OrderClientExtensionsRequest {
    pub fn builder() -> OrderClientExtensionsRequestBuilder {
        OrderClientExtensionsRequestBuilder {
            client_extensions: None,
            trade_client_extensions: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct OrderClientExtensionsRequestBuilder {
    client_extensions: Option<ClientExtensions>,
    trade_client_extensions: Option<ClientExtensions>,
}

impl OrderClientExtensionsRequestBuilder {
    pub fn client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.client_extensions = Some(ext);
        self
    }

    pub fn trade_client_extensions(mut self, ext: ClientExtensions) -> Self {
        self.trade_client_extensions = Some(ext);
        self
    }

    pub fn build(self) -> Result<OrderClientExtensionsRequest, ValidationError> {
        if self.client_extensions.is_none() && self.trade_client_extensions.is_none() {
            return Err(ValidationError::MissingAnyOf {
                fields: "clientExtensions, tradeClientExtensions",
            });
        }
        Ok(OrderClientExtensionsRequest {
            client_extensions: self.client_extensions,
            trade_client_extensions: self.trade_client_extensions,
        })
    }
}
