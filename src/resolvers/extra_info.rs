//! The `extraInfo` field of catalog products.

use serde_json::Value;

use crate::clients::ClientError;
use crate::context::Context;
use crate::resolvers::{decode_parent, encode, FieldResolvers, ResolverFn, ResolverFuture};
use crate::types::{ExtraInfo, SearchProduct};

/// Derives `extraInfo` from the product's own properties.
///
/// Returns `None` when the parent was loaded without `properties`; an empty
/// property list gives `Some(vec![])`.
#[must_use]
pub fn extra_info(parent: &SearchProduct) -> Option<Vec<ExtraInfo>> {
    parent
        .properties
        .as_ref()
        .map(|properties| properties.iter().map(ExtraInfo::from).collect())
}

/// `SearchProduct.extraInfo`.
///
/// Uses the parent's properties when present, without any downstream call.
/// Otherwise fetches the product once by `productId`. A parent without an
/// id, or an id the catalog does not know, yields an empty list.
///
/// # Errors
///
/// Returns the search GraphQL client's error unchanged.
pub async fn resolve_extra_info(
    parent: &SearchProduct,
    ctx: &Context,
) -> Result<Vec<ExtraInfo>, ClientError> {
    if let Some(info) = extra_info(parent) {
        return Ok(info);
    }

    let Some(product_id) = parent.product_id.as_deref() else {
        return Ok(Vec::new());
    };

    let product = ctx.clients.search_graphql.product(product_id).await?;
    Ok(product.as_ref().and_then(extra_info).unwrap_or_default())
}

/// Field resolvers of this group, keyed by GraphQL field name.
#[must_use]
pub fn resolvers() -> FieldResolvers {
    vec![("extraInfo", extra_info_field as ResolverFn)]
}

fn extra_info_field<'a>(parent: &'a Value, _args: Value, ctx: &'a Context) -> ResolverFuture<'a> {
    Box::pin(async move {
        let parent: SearchProduct = decode_parent("extraInfo", parent)?;
        encode("extraInfo", &resolve_extra_info(&parent, ctx).await?)
    })
}
