//! Resolver registry.
//!
//! A [`ResolverRegistry`] maps a GraphQL type name and field name to a
//! [`ResolverFn`]: `(parent, args, context) -> future of result`. Every
//! registered resolver makes at most one downstream call and returns what the
//! client returned. Errors are never caught here; they surface as
//! [`ResolverError::Client`] carrying the client's own error.
//!
//! The typed resolvers in [`autocomplete`], [`search`], [`products`] and
//! [`extra_info`] can also be called directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use search_facade::resolvers::{ResolverRegistry, QUERY};
//! use serde_json::{json, Value};
//!
//! let registry = ResolverRegistry::new();
//! let result = registry
//!     .resolve(QUERY, "searchResult", &Value::Null, json!({"term": "shoe"}), &ctx)
//!     .await?;
//! ```

pub mod autocomplete;
pub mod extra_info;
pub mod products;
pub mod search;

use std::collections::BTreeMap;
use std::fmt;

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::clients::ClientError;
use crate::context::Context;

/// GraphQL root query type.
pub const QUERY: &str = "Query";

/// GraphQL type returned by `Query.searchResult`.
pub const RESULT_RESPONSE: &str = "ResultResponse";

/// GraphQL type returned by `Query.suggestionProducts`.
pub const SUGGESTION_PRODUCTS_OUTPUT: &str = "SuggestionProductsOutput";

/// GraphQL catalog product type.
pub const SEARCH_PRODUCT: &str = "SearchProduct";

/// Future returned by a registered resolver.
pub type ResolverFuture<'a> = BoxFuture<'a, Result<Value, ResolverError>>;

/// A registered resolver: `(parent, args, context)`.
pub type ResolverFn = for<'a> fn(&'a Value, Value, &'a Context) -> ResolverFuture<'a>;

/// A group of field resolvers, merged into a type like an object spread.
pub type FieldResolvers = Vec<(&'static str, ResolverFn)>;

/// Errors surfaced by a resolver.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// The downstream call failed. The client's error is kept as-is.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The arguments did not match the operation's input record.
    #[error("Invalid arguments for {field}: {source}")]
    InvalidArguments {
        /// The field being resolved.
        field: &'static str,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The parent object did not have the shape the field resolver reads.
    #[error("Invalid parent for {field}: {source}")]
    InvalidParent {
        /// The field being resolved.
        field: &'static str,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// No resolver is registered for the field.
    #[error("No resolver registered for {type_name}.{field}")]
    UnknownField {
        /// The requested type.
        type_name: String,
        /// The requested field.
        field: String,
    },

    /// The result could not be converted to a GraphQL value.
    #[error("Cannot serialize result of {field}: {source}")]
    Output {
        /// The field being resolved.
        field: &'static str,
        /// The encoding error.
        #[source]
        source: serde_json::Error,
    },
}

impl ResolverError {
    /// Returns the downstream error, if this is a failed downstream call.
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(error) => Some(error),
            _ => None,
        }
    }
}

/// Maps GraphQL `(type, field)` pairs to resolvers.
///
/// Immutable once built, so one registry serves every request.
#[derive(Clone)]
pub struct ResolverRegistry {
    types: BTreeMap<&'static str, BTreeMap<&'static str, ResolverFn>>,
}

// Verify ResolverRegistry is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResolverRegistry>();
};

impl ResolverRegistry {
    /// Creates the registry of the search facade:
    ///
    /// | Type | Fields |
    /// |---|---|
    /// | `Query` | autocomplete fields, `searchResult` |
    /// | `ResultResponse` | `products` |
    /// | `SuggestionProductsOutput` | `products` |
    /// | `SearchProduct` | `extraInfo` |
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_group(QUERY, autocomplete::resolvers())
            .with_group(QUERY, search::resolvers())
            .with_group(RESULT_RESPONSE, products::resolvers())
            .with_group(SUGGESTION_PRODUCTS_OUTPUT, products::resolvers())
            .with_group(SEARCH_PRODUCT, extra_info::resolvers())
    }

    /// Creates a registry with no resolvers.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Merges a group of field resolvers into `type_name`.
    ///
    /// A field already present is replaced.
    #[must_use]
    pub fn with_group(mut self, type_name: &'static str, group: FieldResolvers) -> Self {
        for (field, resolver) in group {
            self.register(type_name, field, resolver);
        }
        self
    }

    /// Registers a single resolver, replacing any previous one for the field.
    pub fn register(&mut self, type_name: &'static str, field: &'static str, resolver: ResolverFn) {
        self.types
            .entry(type_name)
            .or_default()
            .insert(field, resolver);
    }

    /// Returns the resolver for a field, if one is registered.
    #[must_use]
    pub fn get(&self, type_name: &str, field: &str) -> Option<ResolverFn> {
        self.types
            .get(type_name)
            .and_then(|fields| fields.get(field))
            .copied()
    }

    /// Returns the fields registered on `type_name`, sorted.
    #[must_use]
    pub fn fields(&self, type_name: &str) -> Vec<&'static str> {
        self.types
            .get(type_name)
            .map(|fields| fields.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Returns the types that have at least one resolver, sorted.
    #[must_use]
    pub fn types(&self) -> Vec<&'static str> {
        self.types.keys().copied().collect()
    }

    /// Resolves one field.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::UnknownField`] if nothing is registered for the
    /// field, otherwise whatever the resolver returns.
    pub async fn resolve(
        &self,
        type_name: &str,
        field: &str,
        parent: &Value,
        args: Value,
        ctx: &Context,
    ) -> Result<Value, ResolverError> {
        let resolver = self
            .get(type_name, field)
            .ok_or_else(|| ResolverError::UnknownField {
                type_name: type_name.to_string(),
                field: field.to_string(),
            })?;

        tracing::debug!(
            type_name,
            field,
            account = %ctx.vtex.account,
            request_id = ctx.vtex.request_id.as_deref().unwrap_or("-"),
            "resolving field"
        );

        resolver(parent, args, ctx).await
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (type_name, fields) in &self.types {
            map.entry(type_name, &fields.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}

/// Decodes caller arguments; a missing (`null`) argument object reads as `{}`.
pub(crate) fn decode_args<T: DeserializeOwned>(
    field: &'static str,
    args: Value,
) -> Result<T, ResolverError> {
    let args = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|source| ResolverError::InvalidArguments { field, source })
}

pub(crate) fn decode_parent<T: DeserializeOwned>(
    field: &'static str,
    parent: &Value,
) -> Result<T, ResolverError> {
    T::deserialize(parent).map_err(|source| ResolverError::InvalidParent { field, source })
}

pub(crate) fn encode<T: Serialize>(field: &'static str, value: &T) -> Result<Value, ResolverError> {
    serde_json::to_value(value).map_err(|source| ResolverError::Output { field, source })
}
