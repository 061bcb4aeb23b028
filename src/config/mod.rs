//! Configuration types for the search facade.
//!
//! # Overview
//!
//! - [`ServiceConfig`]: downstream hosts, user agent and the client profile
//! - [`ServiceConfigBuilder`]: a builder for constructing [`ServiceConfig`] instances
//! - [`ClientsConfig`] / [`ClientOptions`]: the `default` retry and timeout profile
//! - [`AccountName`], [`Workspace`], [`AuthToken`], [`BaseUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use search_facade::{ClientOptions, ClientsConfig, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .clients(ClientsConfig::new(ClientOptions::new(2, Duration::from_secs(15)).unwrap()))
//!     .user_agent_prefix("storefront/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.clients().options().retries(), 2);
//! ```

mod newtypes;
mod options;

pub use newtypes::{AccountName, AuthToken, BaseUrl, Workspace};
pub use options::{
    ClientOptions, ClientsConfig, DEFAULT_RETRIES, DEFAULT_RETRY_WAIT, DEFAULT_TIMEOUT,
    MAX_RETRIES, MAX_TIMEOUT,
};

use crate::error::ConfigError;

/// Default host of the search/recommendation backend.
pub const DEFAULT_BIGGY_HOST: &str = "https://search.biggylabs.com.br";

/// Configuration for the search facade service.
///
/// Built once at service startup and shared by every request.
///
/// # Thread Safety
///
/// `ServiceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    biggy_host: BaseUrl,
    search_graphql_host: Option<BaseUrl>,
    clients: ClientsConfig,
    user_agent_prefix: Option<String>,
}

impl ServiceConfig {
    /// Creates a new builder for constructing a `ServiceConfig`.
    #[must_use]
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Returns the search/recommendation backend host.
    #[must_use]
    pub const fn biggy_host(&self) -> &BaseUrl {
        &self.biggy_host
    }

    /// Returns the search GraphQL host override, if configured.
    ///
    /// When `None`, the host is derived from the request's account and workspace.
    #[must_use]
    pub const fn search_graphql_host(&self) -> Option<&BaseUrl> {
        self.search_graphql_host.as_ref()
    }

    /// Returns the client profiles.
    #[must_use]
    pub const fn clients(&self) -> &ClientsConfig {
        &self.clients
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            biggy_host: default_biggy_host(),
            search_graphql_host: None,
            clients: ClientsConfig::default(),
            user_agent_prefix: None,
        }
    }
}

fn default_biggy_host() -> BaseUrl {
    BaseUrl::new(DEFAULT_BIGGY_HOST).expect("default backend host is a valid URL")
}

// Verify ServiceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceConfig>();
};

/// Builder for constructing [`ServiceConfig`] instances.
///
/// # Defaults
///
/// - `biggy_host`: [`DEFAULT_BIGGY_HOST`]
/// - `search_graphql_host`: `None` (derived per request)
/// - `clients`: 2 retries, 15000 ms timeout
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    biggy_host: Option<BaseUrl>,
    search_graphql_host: Option<BaseUrl>,
    clients: Option<ClientsConfig>,
    user_agent_prefix: Option<String>,
}

impl ServiceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search/recommendation backend host.
    #[must_use]
    pub fn biggy_host(mut self, host: BaseUrl) -> Self {
        self.biggy_host = Some(host);
        self
    }

    /// Pins the search GraphQL host instead of deriving it per request.
    #[must_use]
    pub fn search_graphql_host(mut self, host: BaseUrl) -> Self {
        self.search_graphql_host = Some(host);
        self
    }

    /// Sets the client profiles.
    #[must_use]
    pub const fn clients(mut self, clients: ClientsConfig) -> Self {
        self.clients = Some(clients);
        self
    }

    /// Sets the user agent prefix for outbound requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ServiceConfig`], validating the client profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] or [`ConfigError::TooManyRetries`]
    /// if the `default` profile is out of range.
    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let clients = self.clients.unwrap_or_default();
        clients.options().validate()?;

        Ok(ServiceConfig {
            biggy_host: self.biggy_host.unwrap_or_else(default_biggy_host),
            search_graphql_host: self.search_graphql_host,
            clients,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
