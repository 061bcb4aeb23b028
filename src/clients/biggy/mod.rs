//! Client for the search/recommendation backend.
//!
//! [`BiggySearch`] is the contract resolvers depend on; [`BiggySearchClient`]
//! is its HTTP implementation. Tests substitute their own implementation
//! through [`Clients::new`](crate::Clients::new).
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |---|---|
//! | `top_searches` | `GET top_searches` |
//! | `suggestion_searches` | `GET suggestion_searches?term=` |
//! | `suggestion_products` | `POST suggestion_products` |
//! | `search_result` | `POST search/{account}/{attributePath}?query=&page=&count=...` |

mod client;

use async_trait::async_trait;

pub use client::BiggySearchClient;

use crate::clients::ClientError;
use crate::types::{
    SearchResultInput, SearchResultPayload, SuggestionProductsInput, SuggestionProductsOutput,
    SuggestionSearchesInput, SuggestionSearchesPayload, TopSearchesPayload,
};

/// Operations of the search/recommendation backend.
#[async_trait]
pub trait BiggySearch: Send + Sync {
    /// Most searched terms of the store.
    async fn top_searches(&self) -> Result<TopSearchesPayload, ClientError>;

    /// Terms completing a typed prefix.
    async fn suggestion_searches(
        &self,
        args: SuggestionSearchesInput,
    ) -> Result<SuggestionSearchesPayload, ClientError>;

    /// Products matching a typed prefix.
    async fn suggestion_products(
        &self,
        args: SuggestionProductsInput,
    ) -> Result<SuggestionProductsOutput, ClientError>;

    /// Full search.
    async fn search_result(
        &self,
        args: SearchResultInput,
    ) -> Result<SearchResultPayload, ClientError>;
}
