//! The `products` field of search results.
//!
//! Backend hits only carry ids and a few display fields. This field swaps
//! them for full catalog products with a single batched lookup.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::ClientError;
use crate::context::Context;
use crate::resolvers::{decode_parent, encode, FieldResolvers, ResolverFn, ResolverFuture};
use crate::types::payloads::hit_id;
use crate::types::{SearchProduct, SearchResultPayload, SuggestionProductsOutput};

/// The part of a `ResultResponse` or `SuggestionProductsOutput` this field reads:
/// the ids of its product hits.
///
/// Ids may be strings or numbers; hits without one are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ParentShape")]
pub struct ProductsParent {
    ids: Vec<String>,
}

#[derive(Deserialize)]
struct ParentShape {
    #[serde(default)]
    products: Option<Vec<Value>>,
}

impl From<ParentShape> for ProductsParent {
    fn from(shape: ParentShape) -> Self {
        let ids = shape
            .products
            .unwrap_or_default()
            .iter()
            .filter_map(hit_id)
            .collect();
        Self { ids }
    }
}

impl ProductsParent {
    /// Creates a parent from hit ids.
    #[must_use]
    pub const fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Ids of the hits, in hit order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl From<&SearchResultPayload> for ProductsParent {
    fn from(payload: &SearchResultPayload) -> Self {
        Self::new(payload.product_ids())
    }
}

impl From<&SuggestionProductsOutput> for ProductsParent {
    fn from(output: &SuggestionProductsOutput) -> Self {
        Self::new(output.product_ids())
    }
}

/// `ResultResponse.products` and `SuggestionProductsOutput.products`.
///
/// Makes one `products_by_identifier` call with every hit id, or no call at
/// all when the parent has no hits.
///
/// # Errors
///
/// Returns the search GraphQL client's error unchanged.
pub async fn products(
    parent: &ProductsParent,
    ctx: &Context,
) -> Result<Vec<SearchProduct>, ClientError> {
    if parent.ids.is_empty() {
        return Ok(Vec::new());
    }

    ctx.clients
        .search_graphql
        .products_by_identifier(&parent.ids)
        .await
}

/// Field resolvers of this group, keyed by GraphQL field name.
#[must_use]
pub fn resolvers() -> FieldResolvers {
    vec![("products", products_field as ResolverFn)]
}

fn products_field<'a>(parent: &'a Value, _args: Value, ctx: &'a Context) -> ResolverFuture<'a> {
    Box::pin(async move {
        let parent: ProductsParent = decode_parent("products", parent)?;
        encode("products", &products(&parent, ctx).await?)
    })
}
