//! The service entry point.
//!
//! [`Service`] is built once at startup. For each incoming request it builds a
//! [`Context`] and dispatches fields through its [`ResolverRegistry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use search_facade::{IoContext, Service, ServiceConfig};
//! use search_facade::resolvers::QUERY;
//! use serde_json::{json, Value};
//!
//! let service = Service::new(ServiceConfig::default());
//! let ctx = service.context(IoContext::new(account, workspace, token))?;
//! let result = service
//!     .resolve(QUERY, "searchResult", &Value::Null, json!({"term": "shoe"}), &ctx)
//!     .await?;
//! ```

use serde_json::Value;

use crate::clients::HttpError;
use crate::config::ServiceConfig;
use crate::context::{Clients, Context, IoContext};
use crate::resolvers::{ResolverError, ResolverRegistry};

/// The search facade: configuration plus resolver registry.
#[derive(Clone, Debug)]
pub struct Service {
    config: ServiceConfig,
    registry: ResolverRegistry,
}

// Verify Service is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Service>();
};

impl Service {
    /// Creates a service with the standard resolver registry.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_registry(config, ResolverRegistry::new())
    }

    /// Creates a service with a custom registry.
    #[must_use]
    pub const fn with_registry(config: ServiceConfig, registry: ResolverRegistry) -> Self {
        Self { config, registry }
    }

    /// Returns the service configuration.
    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the resolver registry.
    #[must_use]
    pub const fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// Builds the context of one request, instantiating both downstream clients.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if an HTTP client cannot be built.
    pub fn context(&self, vtex: IoContext) -> Result<Context, HttpError> {
        let clients = Clients::from_config(&self.config, &vtex)?;
        tracing::debug!(
            account = %vtex.account,
            workspace = %vtex.workspace,
            request_id = vtex.request_id.as_deref().unwrap_or("-"),
            "built request context"
        );
        Ok(Context::new(vtex, clients))
    }

    /// Resolves one field through the registry.
    ///
    /// # Errors
    ///
    /// See [`ResolverRegistry::resolve`].
    pub async fn resolve(
        &self,
        type_name: &str,
        field: &str,
        parent: &Value,
        args: Value,
        ctx: &Context,
    ) -> Result<Value, ResolverError> {
        self.registry
            .resolve(type_name, field, parent, args, ctx)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountName, AuthToken, Workspace};
    use crate::resolvers::{QUERY, SEARCH_PRODUCT};
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok, block_on};

    fn vtex() -> IoContext {
        IoContext::new(
            AccountName::new("storetheme").unwrap(),
            Workspace::master(),
            AuthToken::new("token").unwrap(),
        )
        .with_request_id("req-1")
    }

    #[test]
    fn test_new_uses_standard_registry() {
        let service = Service::new(ServiceConfig::default());
        assert_eq!(
            service.registry().types(),
            ResolverRegistry::new().types()
        );
    }

    #[test]
    fn test_context_keeps_session() {
        let service = Service::new(ServiceConfig::default());
        let ctx = service.context(vtex()).unwrap();

        assert_eq!(ctx.vtex.account.as_ref(), "storetheme");
        assert_eq!(ctx.vtex.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_with_registry_keeps_custom_registry() {
        let service = Service::with_registry(ServiceConfig::default(), ResolverRegistry::empty());
        assert!(service.registry().types().is_empty());
    }

    #[test]
    fn test_resolve_unknown_field() {
        let service = Service::new(ServiceConfig::default());
        let ctx = service.context(vtex()).unwrap();

        let error = assert_err!(block_on(service.resolve(
            QUERY,
            "facets",
            &Value::Null,
            Value::Null,
            &ctx
        )));
        assert!(matches!(
            error,
            ResolverError::UnknownField { ref field, .. } if field == "facets"
        ));
    }

    #[test]
    fn test_resolve_extra_info_from_parent_properties() {
        let service = Service::new(ServiceConfig::default());
        let ctx = service.context(vtex()).unwrap();
        let parent = json!({
            "productId": "1",
            "properties": [{"name": "Color", "values": ["Red", "Blue"]}]
        });

        let info = assert_ok!(block_on(service.resolve(
            SEARCH_PRODUCT,
            "extraInfo",
            &parent,
            Value::Null,
            &ctx
        )));
        assert_eq!(info, json!([{"key": "Color", "value": "Red,Blue"}]));
    }
}
