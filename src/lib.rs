//! # Search GraphQL Facade
//!
//! GraphQL resolvers for a storefront search service. Each resolver forwards
//! one operation to a downstream client and returns the client's result
//! unchanged.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ServiceConfig`] and [`ServiceConfigBuilder`]
//! - Validated newtypes for the platform session ([`AccountName`], [`Workspace`], [`AuthToken`])
//! - A single retry and timeout profile applied to every downstream call
//! - Clients for the search/recommendation backend and the search GraphQL endpoint
//! - A [`ResolverRegistry`] mapping GraphQL types and fields to resolvers
//!
//! ## Quick Start
//!
//! ```rust
//! use search_facade::{AccountName, AuthToken, IoContext, Service, ServiceConfig, Workspace};
//!
//! let config = ServiceConfig::builder()
//!     .user_agent_prefix("storefront/1.0")
//!     .build()
//!     .unwrap();
//! let service = Service::new(config);
//!
//! let vtex = IoContext::new(
//!     AccountName::new("storetheme").unwrap(),
//!     Workspace::master(),
//!     AuthToken::new("app-token").unwrap(),
//! );
//! let ctx = service.context(vtex).unwrap();
//! assert_eq!(ctx.vtex.host(), "master--storetheme.myvtex.com");
//! ```
//!
//! ## Resolving Fields
//!
//! ```rust,ignore
//! use search_facade::resolvers::{QUERY, RESULT_RESPONSE};
//! use serde_json::{json, Value};
//!
//! let result = service
//!     .resolve(QUERY, "searchResult", &Value::Null, json!({"term": "shoe"}), &ctx)
//!     .await?;
//! let products = service
//!     .resolve(RESULT_RESPONSE, "products", &result, Value::Null, &ctx)
//!     .await?;
//! ```
//!
//! ## Calling Resolvers Directly
//!
//! ```rust,ignore
//! use search_facade::resolvers::search::search_result;
//! use search_facade::SearchResultInput;
//!
//! let args = SearchResultInput { term: "shoe".to_string(), ..Default::default() };
//! let payload = search_result(args, &ctx).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Clients are built per request and passed in [`Context`]
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All shared types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Pass-through**: Resolvers neither reshape results nor catch errors

pub mod clients;
pub mod config;
pub mod context;
pub mod error;
pub mod resolvers;
pub mod service;
pub mod types;

// Re-export public types at crate root for convenience
pub use config::{
    AccountName, AuthToken, BaseUrl, ClientOptions, ClientsConfig, ServiceConfig,
    ServiceConfigBuilder, Workspace,
};
pub use context::{Clients, Context, IoContext};
pub use error::ConfigError;
pub use resolvers::{ResolverError, ResolverFn, ResolverRegistry};
pub use service::Service;

// Re-export client types
pub use clients::{
    BiggySearch, BiggySearchClient, ClientError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError, SearchGraphQl, SearchGraphQlClient,
};

// Re-export request and response shapes
pub use types::{
    ExtraInfo, ProductProperty, SearchProduct, SearchResultInput, SearchResultPayload,
    SuggestionProductsInput, SuggestionProductsOutput, SuggestionSearchesInput,
    SuggestionSearchesPayload, TopSearchesPayload,
};
