//! Full search resolver on `Query`.

use serde_json::Value;

use crate::clients::ClientError;
use crate::context::Context;
use crate::resolvers::{decode_args, encode, FieldResolvers, ResolverFn, ResolverFuture};
use crate::types::{SearchResultInput, SearchResultPayload};

/// `Query.searchResult`: one backend search, returned as the backend shaped it.
///
/// # Errors
///
/// Returns the backend client's error unchanged.
pub async fn search_result(
    args: SearchResultInput,
    ctx: &Context,
) -> Result<SearchResultPayload, ClientError> {
    ctx.clients.biggy_search.search_result(args).await
}

/// Field resolvers of this group, keyed by GraphQL field name.
#[must_use]
pub fn resolvers() -> FieldResolvers {
    vec![("searchResult", search_result_field as ResolverFn)]
}

fn search_result_field<'a>(_parent: &'a Value, args: Value, ctx: &'a Context) -> ResolverFuture<'a> {
    Box::pin(async move {
        let args = decode_args("searchResult", args)?;
        encode("searchResult", &search_result(args, ctx).await?)
    })
}
