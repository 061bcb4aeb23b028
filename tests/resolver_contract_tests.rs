//! Contract tests for the resolvers.
//!
//! Every resolver makes at most one downstream call, returns the client's
//! result unchanged and lets client errors through untouched.

mod common;

use std::sync::Arc;

use common::{catalog_product, context, MockBiggySearch, MockSearchGraphQl, Reply};
use search_facade::clients::{ClientError, HttpError};
use search_facade::resolvers::extra_info::{extra_info, resolve_extra_info};
use search_facade::resolvers::products::{products, ProductsParent};
use search_facade::resolvers::search::search_result;
use search_facade::resolvers::{
    autocomplete, ResolverError, ResolverRegistry, QUERY, RESULT_RESPONSE, SEARCH_PRODUCT,
    SUGGESTION_PRODUCTS_OUTPUT,
};
use search_facade::{ExtraInfo, SearchProduct, SearchResultInput, SearchResultPayload};
use serde_json::{json, Value};

fn search_payload() -> Value {
    json!({
        "total": 2,
        "products": [
            {"id": "10", "name": "Running Shoe", "price": 199.9},
            {"id": "20", "name": "Trail Shoe", "badge": "new"}
        ],
        "sort": "relevance",
        "operator": "and",
        "fuzzy": "auto",
        "correction": {"misspelled": false, "correction": false},
        "pagination": {"page": 1, "perPage": 2}
    })
}

// ============================================================================
// searchResult
// ============================================================================

#[tokio::test]
async fn test_search_result_passes_backend_payload_through() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let registry = ResolverRegistry::new();
    let result = registry
        .resolve(QUERY, "searchResult", &Value::Null, json!({"term": "shoe"}), &ctx)
        .await
        .unwrap();

    assert_eq!(result, search_payload());
    assert_eq!(biggy.calls(), 1);
    assert_eq!(graphql.total_calls(), 0);
}

#[tokio::test]
async fn test_search_result_forwards_arguments_unchanged() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let args = SearchResultInput {
        term: "shoe".to_string(),
        attribute_path: Some("category-1/shoes".to_string()),
        page: Some(2),
        count: Some(24),
        sort: Some("price:asc".to_string()),
        ..SearchResultInput::default()
    };
    search_result(args.clone(), &ctx).await.unwrap();

    assert_eq!(biggy.search_args(), vec![args]);
}

#[tokio::test]
async fn test_typed_search_result_matches_mocked_payload() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let args: SearchResultInput = serde_json::from_value(json!({"term": "shoe"})).unwrap();
    let payload = search_result(args, &ctx).await.unwrap();

    assert_eq!(payload.total(), Some(2));
    assert_eq!(serde_json::to_value(&payload).unwrap(), search_payload());
}

#[tokio::test]
async fn test_search_result_propagates_client_error() {
    let biggy = MockBiggySearch::new(Reply::Fail(503));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let error = ResolverRegistry::new()
        .resolve(QUERY, "searchResult", &Value::Null, json!({"term": "shoe"}), &ctx)
        .await
        .unwrap_err();

    match error.client_error() {
        Some(ClientError::Http(HttpError::Response(response))) => {
            assert_eq!(response.code, 503);
            assert_eq!(response.error_reference.as_deref(), Some("mock-request"));
        }
        other => panic!("expected the backend error, got {other:?}"),
    }
    assert_eq!(biggy.calls(), 1);
}

#[tokio::test]
async fn test_typed_search_result_returns_client_error_as_is() {
    let biggy = MockBiggySearch::new(Reply::Fail(400));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let result = search_result(SearchResultInput::default(), &ctx).await;

    assert!(matches!(
        result,
        Err(ClientError::Http(HttpError::Response(ref e))) if e.code == 400
    ));
}

#[tokio::test]
async fn test_search_result_with_wrong_argument_types_makes_no_call() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let error = ResolverRegistry::new()
        .resolve(QUERY, "searchResult", &Value::Null, json!({"page": "two"}), &ctx)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResolverError::InvalidArguments { field: "searchResult", .. }
    ));
    assert_eq!(biggy.calls(), 0);
}

/// Payloads a typed round trip would alter: missing or null fields, integer
/// prices, numeric ids, non-object bodies.
fn irregular_payloads() -> Vec<Value> {
    vec![
        json!({"products": [{"id": "1", "price": 100}]}),
        json!({"products": [], "sort": null, "total": 3}),
        json!({"total": null, "products": []}),
        json!({"products": [{"id": 42, "name": null}], "correction": {"misspelled": true}}),
        json!({"searches": [{"term": "shoe", "count": null}], "attributes": null}),
        json!({"searches": null}),
        json!({}),
        json!([]),
        json!("plain text body"),
    ]
}

#[tokio::test]
async fn test_query_fields_return_irregular_payloads_unchanged() {
    let fields = [
        ("topSearches", Value::Null),
        ("suggestionSearches", json!({"term": "sho"})),
        ("suggestionProducts", json!({"term": "sho"})),
        ("searchResult", json!({"term": "shoe"})),
    ];
    let registry = ResolverRegistry::new();
    let root = Value::Null;

    for raw in irregular_payloads() {
        for (field, args) in &fields {
            let biggy = MockBiggySearch::new(Reply::Ok(raw.clone()));
            let graphql = MockSearchGraphQl::new(Vec::new());
            let ctx = context(&biggy, &graphql);

            let result = registry
                .resolve(QUERY, field, &root, args.clone(), &ctx)
                .await
                .unwrap_or_else(|e| panic!("{field} failed on {raw}: {e}"));

            assert_eq!(result, raw, "{field} altered the payload");
            assert_eq!(
                serde_json::to_string(&result).unwrap(),
                serde_json::to_string(&raw).unwrap(),
                "{field} changed the serialized payload"
            );
            assert_eq!(biggy.calls(), 1);
        }
    }
}

#[tokio::test]
async fn test_search_result_keeps_integer_prices_and_nulls() {
    let raw = json!({"products": [{"id": "1", "price": 100}], "sort": null});
    let biggy = MockBiggySearch::new(Reply::Ok(raw.clone()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let payload = search_result(SearchResultInput::default(), &ctx).await.unwrap();

    assert_eq!(payload.as_value(), &raw);
    assert_eq!(payload.total(), None);
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"products":[{"id":"1","price":100}],"sort":null}"#
    );
}

// ============================================================================
// Autocomplete
// ============================================================================

#[tokio::test]
async fn test_top_searches_passes_payload_through() {
    let payload = json!({"searches": [{"term": "shoe", "count": 120}, {"term": "shirt", "count": 80}]});
    let biggy = MockBiggySearch::new(Reply::Ok(payload.clone()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let result = ResolverRegistry::new()
        .resolve(QUERY, "topSearches", &Value::Null, Value::Null, &ctx)
        .await
        .unwrap();

    assert_eq!(result, payload);
    assert_eq!(biggy.calls(), 1);
}

#[tokio::test]
async fn test_suggestion_searches_requires_term() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({"searches": []})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let result = ResolverRegistry::new()
        .resolve(QUERY, "suggestionSearches", &Value::Null, json!({}), &ctx)
        .await;

    assert!(matches!(result, Err(ResolverError::InvalidArguments { .. })));
    assert_eq!(biggy.calls(), 0);
}

#[tokio::test]
async fn test_suggestion_products_typed_call() {
    let payload = json!({"products": [{"id": "10"}], "count": 1, "misspelled": false});
    let biggy = MockBiggySearch::new(Reply::Ok(payload.clone()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let args = serde_json::from_value(json!({"term": "sho"})).unwrap();
    let output = autocomplete::suggestion_products(args, &ctx).await.unwrap();

    assert_eq!(output.count(), Some(1));
    assert_eq!(serde_json::to_value(&output).unwrap(), payload);
}

// ============================================================================
// products
// ============================================================================

#[tokio::test]
async fn test_products_resolves_hits_with_one_batched_call() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(vec![
        catalog_product("20", json!([])),
        catalog_product("10", json!([{"name": "Color", "values": ["Red"]}])),
    ]);
    let ctx = context(&biggy, &graphql);

    let resolved = ResolverRegistry::new()
        .resolve(RESULT_RESPONSE, "products", &search_payload(), Value::Null, &ctx)
        .await
        .unwrap();

    let resolved: Vec<SearchProduct> = serde_json::from_value(resolved).unwrap();
    let ids: Vec<_> = resolved
        .iter()
        .map(|p| p.product_id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, vec!["10", "20"]);
    assert_eq!(graphql.batch_calls(), 1);
    assert_eq!(graphql.requested(), vec![vec!["10".to_string(), "20".to_string()]]);
    assert_eq!(biggy.calls(), 0);
}

#[tokio::test]
async fn test_products_accepts_numeric_hit_ids() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(vec![catalog_product("42", json!([]))]);
    let ctx = context(&biggy, &graphql);

    let parent = json!({"products": [{"id": 42, "price": 100}], "total": null});
    let resolved = ResolverRegistry::new()
        .resolve(RESULT_RESPONSE, "products", &parent, Value::Null, &ctx)
        .await
        .unwrap();

    assert_eq!(resolved[0]["productId"], "42");
    assert_eq!(graphql.requested(), vec![vec!["42".to_string()]]);
}

#[tokio::test]
async fn test_products_without_hits_makes_no_call() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let resolved = products(&ProductsParent::default(), &ctx).await.unwrap();

    assert!(resolved.is_empty());
    assert_eq!(graphql.total_calls(), 0);
}

#[tokio::test]
async fn test_suggestion_products_output_products_field() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(vec![catalog_product("7", json!([]))]);
    let ctx = context(&biggy, &graphql);

    let parent = json!({"products": [{"id": "7"}, {"id": "8"}], "count": 2});
    let resolved = ResolverRegistry::new()
        .resolve(SUGGESTION_PRODUCTS_OUTPUT, "products", &parent, Value::Null, &ctx)
        .await
        .unwrap();

    assert_eq!(resolved.as_array().map(Vec::len), Some(1));
    assert_eq!(graphql.batch_calls(), 1);
}

#[tokio::test]
async fn test_products_propagates_client_error() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::failing(500);
    let ctx = context(&biggy, &graphql);

    let payload: SearchResultPayload = serde_json::from_value(search_payload()).unwrap();
    let parent = ProductsParent::from(&payload);
    let result = products(&parent, &ctx).await;

    assert!(matches!(
        result,
        Err(ClientError::Http(HttpError::Response(ref e))) if e.code == 500
    ));
}

// ============================================================================
// extraInfo
// ============================================================================

#[tokio::test]
async fn test_extra_info_from_properties_makes_no_call() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let parent = catalog_product(
        "10",
        json!([
            {"name": "Color", "values": ["Red", "Blue"]},
            {"name": "Size", "values": ["42"]}
        ]),
    );
    let info = resolve_extra_info(&parent, &ctx).await.unwrap();

    assert_eq!(
        info,
        vec![
            ExtraInfo {
                key: "Color".to_string(),
                value: "Red,Blue".to_string(),
            },
            ExtraInfo {
                key: "Size".to_string(),
                value: "42".to_string(),
            },
        ]
    );
    assert_eq!(Some(info), extra_info(&parent));
    assert_eq!(graphql.total_calls(), 0);
    assert_eq!(biggy.calls(), 0);
}

#[tokio::test]
async fn test_extra_info_fetches_product_without_properties() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(vec![catalog_product(
        "10",
        json!([{"name": "Material", "values": ["Mesh"]}]),
    )]);
    let ctx = context(&biggy, &graphql);

    let parent = json!({"productId": "10", "productName": "Running Shoe"});
    let info = ResolverRegistry::new()
        .resolve(SEARCH_PRODUCT, "extraInfo", &parent, Value::Null, &ctx)
        .await
        .unwrap();

    assert_eq!(info, json!([{"key": "Material", "value": "Mesh"}]));
    assert_eq!(graphql.product_calls(), 1);
    assert_eq!(graphql.batch_calls(), 0);
}

#[tokio::test]
async fn test_extra_info_of_unknown_product_is_empty() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let parent = SearchProduct {
        product_id: Some("404".to_string()),
        ..SearchProduct::default()
    };
    let info = resolve_extra_info(&parent, &ctx).await.unwrap();

    assert!(info.is_empty());
    assert_eq!(graphql.product_calls(), 1);
}

#[tokio::test]
async fn test_extra_info_without_id_makes_no_call() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let info = resolve_extra_info(&SearchProduct::default(), &ctx)
        .await
        .unwrap();

    assert!(info.is_empty());
    assert_eq!(graphql.total_calls(), 0);
}

// ============================================================================
// Registry and concurrency
// ============================================================================

#[tokio::test]
async fn test_unknown_field_is_reported() {
    let biggy = MockBiggySearch::new(Reply::Ok(json!({})));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = context(&biggy, &graphql);

    let error = ResolverRegistry::new()
        .resolve(QUERY, "facets", &Value::Null, Value::Null, &ctx)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "No resolver registered for Query.facets");
    assert_eq!(biggy.calls(), 0);
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let first_biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let second_biggy = MockBiggySearch::new(Reply::Fail(502));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let first_ctx = context(&first_biggy, &graphql);
    let second_ctx = context(&second_biggy, &graphql);
    let registry = ResolverRegistry::new();
    let root = Value::Null;

    let shoe = registry.resolve(QUERY, "searchResult", &root, json!({"term": "shoe"}), &first_ctx);
    let shirt = registry.resolve(QUERY, "searchResult", &root, json!({"term": "shirt"}), &second_ctx);
    let (shoe, shirt) = tokio::join!(shoe, shirt);

    assert_eq!(shoe.unwrap(), search_payload());
    assert!(shirt.is_err());
    assert_eq!(first_biggy.calls(), 1);
    assert_eq!(second_biggy.calls(), 1);
    assert_eq!(first_biggy.search_args()[0].term, "shoe");
    assert_eq!(second_biggy.search_args()[0].term, "shirt");
}

#[tokio::test]
async fn test_concurrent_invocations_across_tasks() {
    let biggy = MockBiggySearch::new(Reply::Ok(search_payload()));
    let graphql = MockSearchGraphQl::new(Vec::new());
    let ctx = Arc::new(context(&biggy, &graphql));
    let registry = Arc::new(ResolverRegistry::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ctx = Arc::clone(&ctx);
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                registry
                    .resolve(
                        QUERY,
                        "searchResult",
                        &Value::Null,
                        json!({"term": format!("term-{i}")}),
                        &ctx,
                    )
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), search_payload());
    }
    assert_eq!(biggy.calls(), 8);
}
