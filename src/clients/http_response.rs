//! HTTP response type for downstream calls.

use std::collections::HashMap;

/// A parsed downstream response.
///
/// Header names are stored lower-cased; a header may repeat.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use search_facade::clients::HttpResponse;
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"total": 3}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` when empty).
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Retry-After` header as seconds, if present and numeric.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
    }
}
