//! Downstream clients.
//!
//! This module provides the shared HTTP layer and the two downstream clients
//! the resolvers delegate to.
//!
//! # Overview
//!
//! - [`HttpClient`]: async HTTP client applying the retry and timeout profile
//! - [`HttpRequest`] / [`HttpResponse`]: request and parsed response
//! - [`biggy::BiggySearch`]: the search/recommendation backend
//! - [`search_graphql::SearchGraphQl`]: the search GraphQL endpoint
//! - [`ClientError`]: the one error class resolvers can observe
//!
//! # Retry Behavior
//!
//! Every request may be attempted `retries + 1` times (3 with the default
//! profile):
//!
//! - **429 (Rate Limited)**: retried after `Retry-After`, or the profile's fixed wait
//! - **5xx (Server Error)**: retried after the profile's fixed wait
//! - **Timeouts and connect failures**: retried after the profile's fixed wait
//! - **Other errors (4xx)**: returned immediately
//!
//! Each attempt is bounded by the profile timeout (15 seconds by default).

pub mod biggy;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod search_graphql;

pub use errors::{
    ClientError, HttpError, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use biggy::{BiggySearch, BiggySearchClient};
pub use search_graphql::{SearchGraphQl, SearchGraphQlClient};
