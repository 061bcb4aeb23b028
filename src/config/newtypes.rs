//! Validated newtype wrappers for configuration and session values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated platform account name.
///
/// Account names are the store identifiers used in downstream paths and host
/// names, so they are restricted to lowercase ASCII letters and digits.
///
/// # Example
///
/// ```rust
/// use search_facade::AccountName;
///
/// let account = AccountName::new("MyStore").unwrap();
/// assert_eq!(account.as_ref(), "mystore");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a new validated account name. Input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountName`] if the name is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(account: impl Into<String>) -> Result<Self, ConfigError> {
        let account = account.into().trim().to_lowercase();

        if account.is_empty()
            || !account
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidAccountName { account });
        }

        Ok(Self(account))
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated workspace name.
///
/// Workspaces may contain lowercase letters, digits and hyphens, but cannot
/// start or end with a hyphen.
///
/// # Example
///
/// ```rust
/// use search_facade::Workspace;
///
/// assert_eq!(Workspace::master().as_ref(), "master");
/// assert!(Workspace::new("feature-search").is_ok());
/// assert!(Workspace::new("-broken").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Workspace(String);

impl Workspace {
    /// Creates a new validated workspace name. Input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkspace`] if the name is invalid.
    pub fn new(workspace: impl Into<String>) -> Result<Self, ConfigError> {
        let workspace = workspace.into().trim().to_lowercase();

        if !Self::is_valid(&workspace) {
            return Err(ConfigError::InvalidWorkspace { workspace });
        }

        Ok(Self(workspace))
    }

    /// The production workspace.
    #[must_use]
    pub fn master() -> Self {
        Self("master".to_string())
    }

    fn is_valid(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::master()
    }
}

impl AsRef<str> for Workspace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated platform auth token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)`.
///
/// # Example
///
/// ```rust
/// use search_facade::AuthToken;
///
/// let token = AuthToken::new("app-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

/// A validated base URL for a downstream service.
///
/// The URL must use the `http` or `https` scheme and name a host. A trailing
/// `/` is trimmed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use search_facade::BaseUrl;
///
/// let url = BaseUrl::new("https://search.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://search.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "search.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
