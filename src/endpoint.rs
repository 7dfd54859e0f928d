//! Endpoint dispatch — the pairing of HTTP method, v3 path, query and body
//! that identifies one API operation.
//!
//! Endpoint objects carry no business validation: they trust the body handed
//! to them (bodies are produced by the request builders in `domain`, which do
//! validate). The transport layer consumes the assembled parts and hands back
//! a status/raw-body pair.

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One API operation: verb + path template + optional query/body.
///
/// Implementors live in `domain/<resource>/endpoints.rs`, one struct per
/// operation, with resource IDs interpolated into [`path`](Endpoint::path)
/// at construction time.
pub trait Endpoint {
    /// HTTP verb for this operation.
    fn method(&self) -> Method;

    /// Path relative to the API host, e.g. `/v3/accounts/{accountID}/orders`
    /// with the IDs already substituted.
    fn path(&self) -> String;

    /// Query parameters, rendered to wire strings. Empty by default.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body, if the operation carries one.
    fn body(&self) -> Option<&serde_json::Value> {
        None
    }

    /// Status code the server answers with on success.
    fn expected_status(&self) -> u16 {
        200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Put.to_string(), "PUT");
    }
}
