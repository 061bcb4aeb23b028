//! Shared test doubles for the downstream clients.
//!
//! The mocks count calls with atomics and record the arguments they saw, so
//! tests can assert both what a resolver returned and how many downstream
//! calls it made.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use search_facade::clients::{ClientError, HttpError, HttpResponseError};
use search_facade::{
    AccountName, AuthToken, BiggySearch, Clients, Context, IoContext, SearchGraphQl,
    SearchProduct, SearchResultInput, SearchResultPayload, SuggestionProductsInput,
    SuggestionProductsOutput, SuggestionSearchesInput, SuggestionSearchesPayload,
    TopSearchesPayload, Workspace,
};

/// What a mocked operation answers.
#[derive(Clone, Debug)]
pub enum Reply {
    /// Succeed with this JSON payload.
    Ok(Value),
    /// Fail as a downstream HTTP error with this status.
    Fail(u16),
}

impl Reply {
    fn result<T: DeserializeOwned>(&self, operation: &'static str) -> Result<T, ClientError> {
        match self {
            Self::Ok(value) => serde_json::from_value(value.clone())
                .map_err(|source| ClientError::Deserialize { operation, source }),
            Self::Fail(code) => Err(downstream_error(*code)),
        }
    }
}

/// The error a mock returns for a failing reply.
pub fn downstream_error(code: u16) -> ClientError {
    ClientError::Http(HttpError::Response(HttpResponseError {
        code,
        message: format!("{{\"error\":\"mocked {code}\"}}"),
        error_reference: Some("mock-request".to_string()),
    }))
}

/// Backend double answering every operation with the same reply.
#[derive(Debug)]
pub struct MockBiggySearch {
    reply: Reply,
    calls: AtomicUsize,
    search_args: Mutex<Vec<SearchResultInput>>,
}

impl MockBiggySearch {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            search_args: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn search_args(&self) -> Vec<SearchResultInput> {
        self.search_args.lock().unwrap().clone()
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BiggySearch for MockBiggySearch {
    async fn top_searches(&self) -> Result<TopSearchesPayload, ClientError> {
        self.hit();
        self.reply.result("topSearches")
    }

    async fn suggestion_searches(
        &self,
        _args: SuggestionSearchesInput,
    ) -> Result<SuggestionSearchesPayload, ClientError> {
        self.hit();
        self.reply.result("suggestionSearches")
    }

    async fn suggestion_products(
        &self,
        _args: SuggestionProductsInput,
    ) -> Result<SuggestionProductsOutput, ClientError> {
        self.hit();
        self.reply.result("suggestionProducts")
    }

    async fn search_result(
        &self,
        args: SearchResultInput,
    ) -> Result<SearchResultPayload, ClientError> {
        self.hit();
        self.search_args.lock().unwrap().push(args);
        // Yield so concurrent invocations interleave.
        tokio::task::yield_now().await;
        self.reply.result("searchResult")
    }
}

/// Catalog double backed by a fixed product list.
#[derive(Debug)]
pub struct MockSearchGraphQl {
    catalog: Vec<SearchProduct>,
    fail: Option<u16>,
    batch_calls: AtomicUsize,
    product_calls: AtomicUsize,
    requested: Mutex<Vec<Vec<String>>>,
}

impl MockSearchGraphQl {
    pub fn new(catalog: Vec<SearchProduct>) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            fail: None,
            batch_calls: AtomicUsize::new(0),
            product_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(code: u16) -> Arc<Self> {
        Arc::new(Self {
            catalog: Vec::new(),
            fail: Some(code),
            batch_calls: AtomicUsize::new(0),
            product_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.batch_calls() + self.product_calls()
    }

    pub fn requested(&self) -> Vec<Vec<String>> {
        self.requested.lock().unwrap().clone()
    }

    fn find(&self, id: &str) -> Option<SearchProduct> {
        self.catalog
            .iter()
            .find(|product| product.product_id.as_deref() == Some(id))
            .cloned()
    }
}

#[async_trait]
impl SearchGraphQl for MockSearchGraphQl {
    async fn products_by_identifier(
        &self,
        ids: &[String],
    ) -> Result<Vec<SearchProduct>, ClientError> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(ids.to_vec());
        if let Some(code) = self.fail {
            return Err(downstream_error(code));
        }
        Ok(ids.iter().filter_map(|id| self.find(id)).collect())
    }

    async fn product(&self, id: &str) -> Result<Option<SearchProduct>, ClientError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(vec![id.to_string()]);
        if let Some(code) = self.fail {
            return Err(downstream_error(code));
        }
        Ok(self.find(id))
    }
}

pub fn vtex() -> IoContext {
    IoContext::new(
        AccountName::new("storetheme").unwrap(),
        Workspace::master(),
        AuthToken::new("test-token").unwrap(),
    )
    .with_request_id("test-request")
}

pub fn context(biggy: &Arc<MockBiggySearch>, graphql: &Arc<MockSearchGraphQl>) -> Context {
    let clients = Clients::new(biggy.clone(), graphql.clone());
    Context::new(vtex(), clients)
}

/// A catalog product with the given `[{name, values}]` properties.
pub fn catalog_product(id: &str, properties: Value) -> SearchProduct {
    serde_json::from_value(serde_json::json!({
        "productId": id,
        "productName": format!("Product {id}"),
        "properties": properties,
    }))
    .unwrap()
}
