//! HTTP implementation of [`BiggySearch`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::clients::biggy::BiggySearch;
use crate::clients::{ClientError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{AccountName, ServiceConfig};
use crate::context::IoContext;
use crate::types::{
    SearchResultInput, SearchResultPayload, SuggestionProductsInput, SuggestionProductsOutput,
    SuggestionSearchesInput, SuggestionSearchesPayload, TopSearchesPayload,
};

/// Client for the search/recommendation backend.
///
/// All endpoints live under `/search-api/v1/{account}/api` on the configured
/// backend host.
///
/// # Example
///
/// ```rust,ignore
/// use search_facade::clients::biggy::{BiggySearch, BiggySearchClient};
/// use search_facade::types::SearchResultInput;
///
/// let client = BiggySearchClient::new(&config, &vtex)?;
/// let payload = client
///     .search_result(SearchResultInput { term: "shoe".into(), ..Default::default() })
///     .await?;
/// ```
#[derive(Debug)]
pub struct BiggySearchClient {
    http_client: HttpClient,
    store: AccountName,
}

// Verify BiggySearchClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BiggySearchClient>();
};

impl BiggySearchClient {
    /// Creates a client for the account of `vtex`, using the `default` profile.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig, vtex: &IoContext) -> Result<Self, HttpError> {
        let base_path = format!(
            "/search-api/v1/{}/api",
            urlencoding::encode(vtex.account.as_ref())
        );
        let http_client = HttpClient::new(
            config.biggy_host().as_ref(),
            base_path,
            vtex,
            config.clients().options(),
            config.user_agent_prefix(),
        )?;

        Ok(Self {
            http_client,
            store: vtex.account.clone(),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: Result<HttpRequest, crate::clients::InvalidHttpRequestError>,
    ) -> Result<T, ClientError> {
        let request = request.map_err(HttpError::from)?;
        let response = self.http_client.request(request).await?;
        decode(operation, response)
    }
}

fn decode<T: DeserializeOwned>(
    operation: &'static str,
    response: HttpResponse,
) -> Result<T, ClientError> {
    serde_json::from_value(response.body)
        .map_err(|source| ClientError::Deserialize { operation, source })
}

/// Percent-encodes each segment of a facet path, dropping empty segments.
fn encode_attribute_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl BiggySearch for BiggySearchClient {
    async fn top_searches(&self) -> Result<TopSearchesPayload, ClientError> {
        let request = HttpRequest::builder(HttpMethod::Get, "top_searches").build();
        self.send("topSearches", request).await
    }

    async fn suggestion_searches(
        &self,
        args: SuggestionSearchesInput,
    ) -> Result<SuggestionSearchesPayload, ClientError> {
        let request = HttpRequest::builder(HttpMethod::Get, "suggestion_searches")
            .query_param("term", args.term)
            .build();
        self.send("suggestionSearches", request).await
    }

    async fn suggestion_products(
        &self,
        args: SuggestionProductsInput,
    ) -> Result<SuggestionProductsOutput, ClientError> {
        let attributes = args
            .attribute()
            .map(|(key, value)| vec![json!({ "key": key, "value": value })])
            .unwrap_or_default();

        let request = HttpRequest::builder(HttpMethod::Post, "suggestion_products")
            .body(json!({ "term": args.term, "attributes": attributes }))
            .build();
        self.send("suggestionProducts", request).await
    }

    async fn search_result(
        &self,
        args: SearchResultInput,
    ) -> Result<SearchResultPayload, ClientError> {
        let attribute_path = args
            .attribute_path
            .as_deref()
            .map(encode_attribute_path)
            .unwrap_or_default();
        let path = if attribute_path.is_empty() {
            format!("search/{}", self.store)
        } else {
            format!("search/{}/{attribute_path}", self.store)
        };

        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(json!({}))
            .query_param("query", args.term)
            .query_param_opt("page", args.page)
            .query_param_opt("count", args.count)
            .query_param_opt("sort", args.sort)
            .query_param_opt("operator", args.operator)
            .query_param_opt("fuzzy", args.fuzzy)
            .build();
        self.send("searchResult", request).await
    }
}
