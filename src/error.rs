//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// A raw value that failed its format or range check.
///
/// Carries only the reason — the wire field name is attached by the request
/// builder that consumed the value, producing a [`ValidationError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValueError {
    pub message: String,
}

impl ValueError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::convert::Infallible> for ValueError {
    fn from(x: std::convert::Infallible) -> Self {
        match x {}
    }
}

/// Construction-time validation failure for a request body.
///
/// Always synchronous, always names the offending wire field, always prevents
/// the request from existing. There is no partial success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A supplied value failed its value-type check.
    #[error("invalid `{field}`: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: ValueError,
    },

    /// A field that is mandatory only when another field holds a specific
    /// value was left unset.
    #[error("`{field}` is required when `{trigger}` is `{trigger_value}`")]
    ConditionallyRequired {
        field: &'static str,
        trigger: &'static str,
        trigger_value: &'static str,
    },

    /// A value outside a field's closed set of wire constants.
    #[error("`{field}` must be one of [{allowed}], got `{got}`")]
    Choice {
        field: &'static str,
        allowed: &'static str,
        got: String,
    },

    /// A body where at least one of a group of fields must be supplied.
    #[error("at least one of [{fields}] must be set")]
    MissingAnyOf { fields: &'static str },
}

impl ValidationError {
    /// Tag a [`ValueError`] with the wire field it was destined for.
    pub fn field(field: &'static str, source: ValueError) -> Self {
        Self::Field { field, source }
    }

    /// The wire name of the offending field (the whole group for
    /// `MissingAnyOf`).
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Field { field, .. } => field,
            Self::ConditionallyRequired { field, .. } => field,
            Self::Choice { field, .. } => field,
            Self::MissingAnyOf { fields } => fields,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Structured error answered by the v20 API (`errorCode`/`errorMessage`).
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// 2xx answer whose status differs from the endpoint's documented one.
    #[error("Unexpected status {got} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: u16,
        got: u16,
        body: String,
    },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}
