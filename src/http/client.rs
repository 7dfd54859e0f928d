//! Low-level HTTP client — `V20Http`.
//!
//! Executes [`Endpoint`]s against a v20 REST host: assembles the URL, injects
//! the bearer token, applies the per-method retry policy, and maps non-2xx
//! answers to [`HttpError`]. Carries no business validation — bodies arrive
//! here already validated by the request builders.

use crate::endpoint::{Endpoint, Method};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// The status/raw-body pair handed back for every dispatched endpoint.
///
/// Interpretation of the body belongs to the caller; transaction-bearing
/// responses in particular are left as raw JSON.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Parse the raw body into a typed response.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Error body shape the v20 API answers with on failure.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(rename = "errorCode")]
    code: Option<String>,
    #[serde(rename = "errorMessage")]
    message: Option<String>,
}

/// Low-level HTTP client for the v20 REST API.
pub struct V20Http {
    base_url: String,
    client: Client,
    /// Bearer token. Fixed at construction — v20 tokens do not rotate
    /// mid-session.
    access_token: Option<String>,
}

impl V20Http {
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch an endpoint with the default policy for its verb:
    /// GET retries as idempotent, mutating verbs never retry.
    pub async fn call(&self, endpoint: &impl Endpoint) -> Result<ApiResponse, HttpError> {
        let policy = match endpoint.method() {
            Method::Get => RetryPolicy::Idempotent,
            _ => RetryPolicy::None,
        };
        self.call_with_retry(endpoint, policy).await
    }

    /// Dispatch an endpoint under an explicit retry policy.
    pub async fn call_with_retry(
        &self,
        endpoint: &impl Endpoint,
        retry: RetryPolicy,
    ) -> Result<ApiResponse, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(endpoint).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(endpoint).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::Api { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying {} {}",
                            endpoint.method(),
                            endpoint.path()
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    fn url_for(&self, endpoint: &impl Endpoint) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint.path());
        let query = endpoint.query();
        if !query.is_empty() {
            let rendered: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url = format!("{}?{}", url, rendered.join("&"));
        }
        url
    }

    async fn do_request(&self, endpoint: &impl Endpoint) -> Result<ApiResponse, HttpError> {
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, self.url_for(endpoint));

        if let Some(token) = &self.access_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = endpoint.body() {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let status_code = status.as_u16();

        if status.is_success() {
            let body = resp.json::<serde_json::Value>().await?;
            let expected = endpoint.expected_status();
            if status_code != expected {
                return Err(HttpError::UnexpectedStatus {
                    expected,
                    got: status_code,
                    body: body.to_string(),
                });
            }
            return Ok(ApiResponse {
                status: status_code,
                body,
            });
        }

        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            _ => {
                let parsed = serde_json::from_str::<ErrorBody>(&body_text).ok();
                let (code, message) = match parsed {
                    Some(e) => (e.code, e.message.unwrap_or_else(|| body_text.clone())),
                    None => (None, body_text),
                };
                Err(HttpError::Api {
                    status: status_code,
                    code,
                    message,
                })
            }
        }
    }
}

impl Clone for V20Http {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Endpoint, Method};

    struct FakeEndpoint;

    impl Endpoint for FakeEndpoint {
        fn method(&self) -> Method {
            Method::Get
        }

        fn path(&self) -> String {
            "/v3/instruments/EUR_USD/candles".to_string()
        }

        fn query(&self) -> Vec<(&'static str, String)> {
            vec![
                ("granularity", "H1".to_string()),
                ("from", "2026-08-01T00:00:00Z".to_string()),
            ]
        }
    }

    #[test]
    fn test_url_assembly_encodes_query() {
        let http = V20Http::new("https://api-fxpractice.oanda.com/", None);
        assert_eq!(http.base_url(), "https://api-fxpractice.oanda.com");
        assert_eq!(
            http.url_for(&FakeEndpoint),
            "https://api-fxpractice.oanda.com/v3/instruments/EUR_USD/candles\
             ?granularity=H1&from=2026-08-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_api_response_json() {
        let resp = ApiResponse {
            status: 200,
            body: serde_json::json!({"lastTransactionID": "6410"}),
        };
        #[derive(serde::Deserialize)]
        struct Last {
            #[serde(rename = "lastTransactionID")]
            last: String,
        }
        assert_eq!(resp.json::<Last>().unwrap().last, "6410");
    }
}
