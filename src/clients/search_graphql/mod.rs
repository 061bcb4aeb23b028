//! Client for the search GraphQL endpoint.
//!
//! Field resolvers use it for product data the search backend does not carry.
//! [`SearchGraphQl`] is the contract; [`SearchGraphQlClient`] posts GraphQL
//! documents over [`HttpClient`](crate::clients::HttpClient).
//!
//! A GraphQL response with a non-empty `errors` array is a failed call
//! ([`ClientError::Graphql`]), even when the HTTP status is 200.

mod client;

use async_trait::async_trait;

pub use client::{SearchGraphQlClient, GRAPHQL_BASE_PATH};

use crate::clients::ClientError;
use crate::types::SearchProduct;

/// Product fields selected by every query of this client.
macro_rules! product_fields {
    () => {
        "productId productName brand linkText properties { name values }"
    };
}

/// Query resolving a list of product ids.
pub const PRODUCTS_BY_IDENTIFIER_QUERY: &str = concat!(
    "query productsByIdentifier($ids: [ID!]) { ",
    "productsByIdentifier(field: id, values: $ids) { ",
    product_fields!(),
    " } }"
);

/// Query resolving a single product id.
pub const PRODUCT_QUERY: &str = concat!(
    "query product($id: ID!) { ",
    "product(identifier: { field: id, value: $id }) { ",
    product_fields!(),
    " } }"
);

/// Operations of the search GraphQL endpoint.
#[async_trait]
pub trait SearchGraphQl: Send + Sync {
    /// Catalog products for `ids`, in the order of `ids`.
    ///
    /// Ids the catalog does not know are left out.
    async fn products_by_identifier(&self, ids: &[String])
        -> Result<Vec<SearchProduct>, ClientError>;

    /// A single catalog product, or `None` if the id is unknown.
    async fn product(&self, id: &str) -> Result<Option<SearchProduct>, ClientError>;
}
