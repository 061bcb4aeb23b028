//! Error types for downstream calls.
//!
//! Every failure a resolver can see is a [`ClientError`]: the single
//! "downstream call failed" class. It wraps the transport-level [`HttpError`]
//! family and adds payload-shape and GraphQL-level failures.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_facade::clients::{ClientError, HttpError};
//!
//! match ctx.clients.biggy_search.search_result(args).await {
//!     Ok(payload) => println!("{} hits", payload.total().unwrap_or_default()),
//!     Err(ClientError::Http(HttpError::Response(e))) => println!("status {}", e.code),
//!     Err(ClientError::Http(HttpError::MaxRetries(e))) => println!("gave up after {}", e.tries),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a downstream request receives a non-successful response.
///
/// The message is a JSON rendering of the `error`/`errors`/`message` fields
/// found in the response body, plus the request id when the server sent one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when the retry budget of the client profile is exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response, or `None` if the last attempt
    /// failed in transport.
    pub code: Option<u16>,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last attempt.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code behind this error, if there is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => e.code,
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

/// A failed downstream call, as seen by resolvers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not have the expected shape.
    #[error("Unexpected payload from {operation}: {source}")]
    Deserialize {
        /// The downstream operation that produced the payload.
        operation: &'static str,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The GraphQL endpoint answered with an `errors` array.
    #[error("GraphQL errors from {operation}: {}", .messages.join("; "))]
    Graphql {
        /// The downstream operation that was queried.
        operation: &'static str,
        /// The `message` of every reported error.
        messages: Vec<String>,
    },
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(HttpError::Network(error))
    }
}
