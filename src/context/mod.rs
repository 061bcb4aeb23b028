//! Per-request resolver context.
//!
//! Every resolver receives a [`Context`] by reference: the platform session
//! ([`IoContext`]) plus the pair of downstream clients instantiated for the
//! request ([`Clients`]). Nothing here is global; a fresh context is built for
//! each incoming request and dropped with it.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_facade::{Clients, Context, IoContext, ServiceConfig};
//!
//! let config = ServiceConfig::builder().build()?;
//! let vtex = IoContext::new(account, workspace, token);
//! let clients = Clients::from_config(&config, &vtex)?;
//! let ctx = Context::new(vtex, clients);
//! ```

pub mod session;

use std::sync::Arc;

pub use session::IoContext;

use crate::clients::biggy::{BiggySearch, BiggySearchClient};
use crate::clients::search_graphql::{SearchGraphQl, SearchGraphQlClient};
use crate::clients::HttpError;
use crate::config::ServiceConfig;

/// The downstream clients available to resolvers.
#[derive(Clone)]
pub struct Clients {
    /// The search/recommendation backend.
    pub biggy_search: Arc<dyn BiggySearch>,
    /// The search GraphQL endpoint.
    pub search_graphql: Arc<dyn SearchGraphQl>,
}

impl Clients {
    /// Wraps already-built clients, typically test doubles.
    #[must_use]
    pub fn new(biggy_search: Arc<dyn BiggySearch>, search_graphql: Arc<dyn SearchGraphQl>) -> Self {
        Self {
            biggy_search,
            search_graphql,
        }
    }

    /// Instantiates both HTTP clients for one request.
    ///
    /// Both clients get the `default` profile of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be built.
    pub fn from_config(config: &ServiceConfig, vtex: &IoContext) -> Result<Self, HttpError> {
        let biggy_search = BiggySearchClient::new(config, vtex)?;
        let search_graphql = SearchGraphQlClient::new(config, vtex)?;

        Ok(Self::new(Arc::new(biggy_search), Arc::new(search_graphql)))
    }
}

impl std::fmt::Debug for Clients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clients").finish_non_exhaustive()
    }
}

/// The context handed to every resolver.
#[derive(Clone, Debug)]
pub struct Context {
    /// The platform session.
    pub vtex: IoContext,
    /// The downstream clients.
    pub clients: Clients,
}

impl Context {
    /// Creates a context from a session and its clients.
    #[must_use]
    pub const fn new(vtex: IoContext, clients: Clients) -> Self {
        Self { vtex, clients }
    }
}

// Verify Context is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Context>();
};
