//! Client extensions: caller-assigned ID, tag and comment attached to an
//! order or trade.

use crate::error::{ValidationError, ValueError};
use serde::{Deserialize, Serialize};

use super::{ClientComment, ClientId, ClientTag, IntoValue};

/// Client-provided extensions for an order or trade.
///
/// At least one of `id`, `tag`, `comment` must be set — an empty extensions
/// object is meaningless on the wire and construction rejects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientExtensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<ClientTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<ClientComment>,
}

impl ClientExtensions {
    pub fn builder() -> ClientExtensionsBuilder {
        ClientExtensionsBuilder::default()
    }

    pub fn id(&self) -> Option<&ClientId> {
        self.id.as_ref()
    }

    pub fn tag(&self) -> Option<&ClientTag> {
        self.tag.as_ref()
    }

    pub fn comment(&self) -> Option<&ClientComment> {
        self.comment.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ClientExtensionsBuilder {
    id: Option<ClientId>,
    tag: Option<ClientTag>,
    comment: Option<ClientComment>,
    err: Option<ValidationError>,
}

impl ClientExtensionsBuilder {
    pub fn id(mut self, id: impl IntoValue<ClientId>) -> Self {
        match id.into_value() {
            Ok(v) => self.id = Some(v),
            Err(e) => self.defer("id", e),
        }
        self
    }

    pub fn tag(mut self, tag: impl IntoValue<ClientTag>) -> Self {
        match tag.into_value() {
            Ok(v) => self.tag = Some(v),
            Err(e) => self.defer("tag", e),
        }
        self
    }

    pub fn comment(mut self, comment: impl IntoValue<ClientComment>) -> Self {
        match comment.into_value() {
            Ok(v) => self.comment = Some(v),
            Err(e) => self.defer("comment", e),
        }
        self
    }

    pub fn build(self) -> Result<ClientExtensions, ValidationError> {
        if let Some(e) = self.err {
            return Err(e);
        }
        if self.id.is_none() && self.tag.is_none() && self.comment.is_none() {
            return Err(ValidationError::MissingAnyOf {
                fields: "id, tag, comment",
            });
        }
        Ok(ClientExtensions {
            id: self.id,
            tag: self.tag,
            comment: self.comment,
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
    fn test_unset_fields_are_omitted() {
        let ext = ClientExtensions::builder()
            .id("my_order_100")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({"id": "my_order_100"})
        );
    }

    #[test]
    fn test_full_extensions() {
        let ext = ClientExtensions::builder()
            .id("my_order_100")
            .tag("strategy_9")
            .comment("scalp the london open")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&ext).unwrap(),
            json!({
                "id": "my_order_100",
                "tag": "strategy_9",
                "comment": "scalp the london open",
            })
        );
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let err = ClientExtensions::builder().build().unwrap_err();
        assert!(matches!(err, ValidationError::MissingAnyOf { .. }));
    }

    #[test]
    fn test_invalid_field_surfaces_at_build() {
        let err = ClientExtensions::builder()
            .id("")
            .tag("strategy_9")
            .build()
            .unwrap_err();
        assert_eq!(err.field_name(), "id");
    }
}
