//! HTTP implementation of [`SearchGraphQl`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::search_graphql::{SearchGraphQl, PRODUCTS_BY_IDENTIFIER_QUERY, PRODUCT_QUERY};
use crate::clients::{ClientError, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::ServiceConfig;
use crate::context::IoContext;
use crate::types::SearchProduct;

/// Base path of the search GraphQL endpoint on the account host.
pub const GRAPHQL_BASE_PATH: &str = "/_v/segment/graphql";

/// Endpoint version, appended to [`GRAPHQL_BASE_PATH`].
const GRAPHQL_VERSION: &str = "v1";

/// Client for the search GraphQL endpoint.
///
/// Unless the service configuration pins a host, requests go to the
/// workspace-scoped account host of the current request.
///
/// # Example
///
/// ```rust,ignore
/// use search_facade::clients::search_graphql::{SearchGraphQl, SearchGraphQlClient};
///
/// let client = SearchGraphQlClient::new(&config, &vtex)?;
/// let products = client.products_by_identifier(&["1".to_string(), "2".to_string()]).await?;
/// ```
#[derive(Debug)]
pub struct SearchGraphQlClient {
    http_client: HttpClient,
}

// Verify SearchGraphQlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchGraphQlClient>();
};

/// The `{ data, errors }` envelope of a GraphQL response.
#[derive(Debug, Deserialize)]
struct GraphqlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductsByIdentifierData {
    #[serde(default)]
    products_by_identifier: Vec<SearchProduct>,
}

#[derive(Debug, Deserialize)]
struct ProductData {
    product: Option<SearchProduct>,
}

impl SearchGraphQlClient {
    /// Creates a client for the request described by `vtex`, using the `default` profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig, vtex: &IoContext) -> Result<Self, HttpError> {
        let base_uri = config.search_graphql_host().map_or_else(
            || format!("https://{}", vtex.host()),
            |host| host.as_ref().to_string(),
        );

        let http_client = HttpClient::new(
            base_uri,
            GRAPHQL_BASE_PATH,
            vtex,
            config.clients().options(),
            config.user_agent_prefix(),
        )?;

        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn query<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<T, ClientError> {
        let request = HttpRequest::builder(HttpMethod::Post, GRAPHQL_VERSION)
            .body(serde_json::json!({
                "operationName": operation,
                "query": query,
                "variables": variables,
            }))
            .build()
            .map_err(HttpError::from)?;

        let response = self.http_client.request(request).await?;
        let envelope: GraphqlEnvelope<T> = serde_json::from_value(response.body)
            .map_err(|source| ClientError::Deserialize { operation, source })?;

        if !envelope.errors.is_empty() {
            return Err(ClientError::Graphql {
                operation,
                messages: envelope.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        envelope.data.ok_or_else(|| ClientError::Graphql {
            operation,
            messages: vec!["response carried no data".to_string()],
        })
    }
}

#[async_trait]
impl SearchGraphQl for SearchGraphQlClient {
    async fn products_by_identifier(
        &self,
        ids: &[String],
    ) -> Result<Vec<SearchProduct>, ClientError> {
        let data: ProductsByIdentifierData = self
            .query(
                "productsByIdentifier",
                PRODUCTS_BY_IDENTIFIER_QUERY,
                serde_json::json!({ "ids": ids }),
            )
            .await?;

        Ok(order_by_ids(ids, data.products_by_identifier))
    }

    async fn product(&self, id: &str) -> Result<Option<SearchProduct>, ClientError> {
        let data: ProductData = self
            .query("product", PRODUCT_QUERY, serde_json::json!({ "id": id }))
            .await?;

        Ok(data.product)
    }
}

/// Orders `products` like `ids`; products whose id was not requested are dropped.
fn order_by_ids(ids: &[String], products: Vec<SearchProduct>) -> Vec<SearchProduct> {
    let mut by_id: HashMap<String, SearchProduct> = products
        .into_iter()
        .filter_map(|product| product.product_id.clone().map(|id| (id, product)))
        .collect();

    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}
