//! Error types for service configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! misconfigured service fails at startup rather than on its first request.
//!
//! # Example
//!
//! ```rust
//! use search_facade::{AccountName, ConfigError};
//!
//! let result = AccountName::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidAccountName { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building the service configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account name is invalid.
    #[error("Invalid account name '{account}'. Expected lowercase letters and digits only (e.g., 'mystore').")]
    InvalidAccountName {
        /// The invalid account name that was provided.
        account: String,
    },

    /// Workspace name is invalid.
    #[error("Invalid workspace '{workspace}'. Expected lowercase letters, digits and inner hyphens (e.g., 'master').")]
    InvalidWorkspace {
        /// The invalid workspace that was provided.
        workspace: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Every downstream call needs the platform token.")]
    EmptyAuthToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL with a host (e.g., 'https://search.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Client timeout is out of range.
    #[error("Invalid client timeout of {millis} ms. Expected a value between 1 ms and {max_millis} ms.")]
    InvalidTimeout {
        /// The configured timeout in milliseconds.
        millis: u128,
        /// The maximum accepted timeout in milliseconds.
        max_millis: u128,
    },

    /// Retry count is out of range.
    #[error("Invalid retry count {retries}. At most {max} retries are allowed.")]
    TooManyRetries {
        /// The configured retry count.
        retries: u32,
        /// The maximum accepted retry count.
        max: u32,
    },
}
