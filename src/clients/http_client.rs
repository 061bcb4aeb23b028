//! HTTP client shared by the downstream clients.
//!
//! This module provides the [`HttpClient`] type. It owns the one place where
//! the retry and timeout profile is applied, so every downstream operation
//! observes the same policy.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClientOptions;
use crate::context::IoContext;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for one downstream service and one request.
///
/// The client handles:
/// - URL construction from a base URL and base path
/// - Default headers: `User-Agent`, `Accept`, the platform token, request id and locale
/// - The per-attempt timeout of the [`ClientOptions`] profile
/// - Retries for 429, 5xx and transport timeouts/connect failures
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
    options: ClientOptions,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_uri` - Scheme and host of the downstream service
    /// * `base_path` - Path prefix for every request (e.g., `/search-api/v1/store/api`)
    /// * `vtex` - The platform session providing token and request id
    /// * `options` - The retry and timeout profile
    /// * `user_agent_prefix` - Optional prefix for the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot be
    /// created (e.g., TLS initialization failure).
    pub fn new(
        base_uri: impl Into<String>,
        base_path: impl Into<String>,
        vtex: &IoContext,
        options: &ClientOptions,
        user_agent_prefix: Option<&str>,
    ) -> Result<Self, HttpError> {
        let base_uri = base_uri.into();
        let base_path = base_path.into();

        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!(
            "{user_agent_prefix}search-graphql-facade v{SDK_VERSION} | {}",
            vtex.account
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Proxy-Authorization".to_string(),
            vtex.auth_token.as_ref().to_string(),
        );
        default_headers.insert("X-Vtex-Use-Https".to_string(), "true".to_string());
        if let Some(request_id) = &vtex.request_id {
            default_headers.insert("X-Request-Id".to_string(), request_id.clone());
        }
        if let Some(locale) = &vtex.locale {
            default_headers.insert("Accept-Language".to_string(), locale.clone());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(options.timeout())
            .build()?;

        tracing::debug!(
            base_uri = %base_uri,
            base_path = %base_path,
            retries = options.retries(),
            timeout_ms = u64::try_from(options.timeout().as_millis()).unwrap_or(u64::MAX),
            "created downstream HTTP client"
        );

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            options: *options,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry and timeout profile of this client.
    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Sends a request, applying the client profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A non-retryable non-2xx response is received (`Response`)
    /// - A network error occurs and retries are disabled (`Network`)
    /// - Every attempt failed with a retryable error (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let max_tries = self.options.tries();
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
            };
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }

            // The body read shares the attempt's timeout and failure handling.
            let outcome = async {
                let res = req_builder.send().await?;
                let code = res.status().as_u16();
                let res_headers = Self::parse_response_headers(res.headers());
                let body_text = res.text().await?;
                Ok::<_, reqwest::Error>((code, res_headers, body_text))
            }
            .await;

            let (code, res_headers, body_text) = match outcome {
                Ok(parts) => parts,
                Err(error) => {
                    if !Self::is_retryable_transport(&error) || max_tries == 1 {
                        return Err(HttpError::Network(error));
                    }
                    if tries >= max_tries {
                        return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                            code: None,
                            tries: max_tries,
                            message: error.to_string(),
                            error_reference: None,
                        }));
                    }
                    tracing::warn!(
                        path = %request.path,
                        attempt = tries,
                        error = %error,
                        "downstream transport failure, retrying"
                    );
                    tokio::time::sleep(self.options.retry_wait()).await;
                    continue;
                }
            };

            let body = if body_text.is_empty() {
                serde_json::json!({})
            } else {
                serde_json::from_str(&body_text).unwrap_or_else(|_| {
                    if code >= 400 {
                        serde_json::json!({ "raw_body": body_text })
                    } else {
                        serde_json::Value::String(body_text)
                    }
                })
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if !Self::is_retryable_status(code) || max_tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference,
                }));
            }

            if tries >= max_tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code: Some(code),
                    tries: max_tries,
                    message: error_message,
                    error_reference,
                }));
            }

            let delay = self.retry_delay(&response, code);
            tracing::warn!(
                path = %request.path,
                status = code,
                attempt = tries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "downstream request failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    const fn is_retryable_status(code: u16) -> bool {
        code == 429 || code >= 500
    }

    fn is_retryable_transport(error: &reqwest::Error) -> bool {
        error.is_timeout() || error.is_connect()
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// 429 honours `Retry-After`, capped at the profile timeout; everything
    /// else waits the profile's fixed delay.
    fn retry_delay(&self, response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(retry_after) = response
                .retry_after()
                .map(|seconds| Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
            {
                return retry_after.min(self.options.timeout());
            }
        }
        self.options.retry_wait()
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "message", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
