//! Autocomplete resolvers on `Query`.

use serde_json::Value;

use crate::clients::ClientError;
use crate::context::Context;
use crate::resolvers::{decode_args, encode, FieldResolvers, ResolverFn, ResolverFuture};
use crate::types::{
    SuggestionProductsInput, SuggestionProductsOutput, SuggestionSearchesInput,
    SuggestionSearchesPayload, TopSearchesPayload,
};

/// `Query.topSearches`.
///
/// # Errors
///
/// Returns the backend client's error unchanged.
pub async fn top_searches(ctx: &Context) -> Result<TopSearchesPayload, ClientError> {
    ctx.clients.biggy_search.top_searches().await
}

/// `Query.suggestionSearches`.
///
/// # Errors
///
/// Returns the backend client's error unchanged.
pub async fn suggestion_searches(
    args: SuggestionSearchesInput,
    ctx: &Context,
) -> Result<SuggestionSearchesPayload, ClientError> {
    ctx.clients.biggy_search.suggestion_searches(args).await
}

/// `Query.suggestionProducts`.
///
/// # Errors
///
/// Returns the backend client's error unchanged.
pub async fn suggestion_products(
    args: SuggestionProductsInput,
    ctx: &Context,
) -> Result<SuggestionProductsOutput, ClientError> {
    ctx.clients.biggy_search.suggestion_products(args).await
}

/// Field resolvers of this group, keyed by GraphQL field name.
#[must_use]
pub fn resolvers() -> FieldResolvers {
    vec![
        ("topSearches", top_searches_field as ResolverFn),
        ("suggestionSearches", suggestion_searches_field as ResolverFn),
        ("suggestionProducts", suggestion_products_field as ResolverFn),
    ]
}

fn top_searches_field<'a>(_parent: &'a Value, _args: Value, ctx: &'a Context) -> ResolverFuture<'a> {
    Box::pin(async move { encode("topSearches", &top_searches(ctx).await?) })
}

fn suggestion_searches_field<'a>(
    _parent: &'a Value,
    args: Value,
    ctx: &'a Context,
) -> ResolverFuture<'a> {
    Box::pin(async move {
        let args = decode_args("suggestionSearches", args)?;
        encode("suggestionSearches", &suggestion_searches(args, ctx).await?)
    })
}

fn suggestion_products_field<'a>(
    _parent: &'a Value,
    args: Value,
    ctx: &'a Context,
) -> ResolverFuture<'a> {
    Box::pin(async move {
        let args = decode_args("suggestionProducts", args)?;
        encode("suggestionProducts", &suggestion_products(args, ctx).await?)
    })
}
