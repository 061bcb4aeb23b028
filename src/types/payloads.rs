//! Payloads returned by the search/recommendation backend.
//!
//! Each payload wraps the backend's JSON as-is and serializes back to the very
//! same value, so it reaches the GraphQL layer unmodified. Accessors read the
//! few fields this crate needs without constraining the rest.

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! passthrough_payload {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Value);

        impl $name {
            /// Wraps a backend value.
            #[must_use]
            pub const fn new(value: Value) -> Self {
                Self(value)
            }

            /// Returns the backend value.
            #[must_use]
            pub const fn as_value(&self) -> &Value {
                &self.0
            }

            /// Unwraps the backend value.
            #[must_use]
            pub fn into_value(self) -> Value {
                self.0
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Value {
            fn from(payload: $name) -> Self {
                payload.0
            }
        }
    };
}

passthrough_payload!(
    /// Result of `Query.topSearches`.
    TopSearchesPayload
);

passthrough_payload!(
    /// Result of `Query.suggestionSearches`.
    SuggestionSearchesPayload
);

passthrough_payload!(
    /// Result of `Query.suggestionProducts` (GraphQL type `SuggestionProductsOutput`).
    SuggestionProductsOutput
);

passthrough_payload!(
    /// Result of `Query.searchResult` (GraphQL type `ResultResponse`).
    SearchResultPayload
);

impl TopSearchesPayload {
    /// The suggested terms, in backend order.
    #[must_use]
    pub fn terms(&self) -> Vec<&str> {
        search_terms(&self.0)
    }
}

impl SuggestionSearchesPayload {
    /// The suggested terms, in backend order.
    #[must_use]
    pub fn terms(&self) -> Vec<&str> {
        search_terms(&self.0)
    }
}

impl SuggestionProductsOutput {
    /// Total matches for the typed prefix, when the backend reports it.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.0.get("count").and_then(Value::as_u64)
    }

    /// Ids of the product hits, in hit order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        product_ids(&self.0)
    }
}

impl SearchResultPayload {
    /// Total matches across all pages, when the backend reports it.
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.0.get("total").and_then(Value::as_u64)
    }

    /// Ids of the product hits, in hit order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<String> {
        product_ids(&self.0)
    }
}

fn search_terms(value: &Value) -> Vec<&str> {
    value
        .get("searches")
        .and_then(Value::as_array)
        .map(|searches| {
            searches
                .iter()
                .filter_map(|search| search.get("term").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Reads `products[].id`; ids may be strings or numbers. Hits without one are skipped.
fn product_ids(value: &Value) -> Vec<String> {
    value
        .get("products")
        .and_then(Value::as_array)
        .map(|products| products.iter().filter_map(hit_id).collect())
        .unwrap_or_default()
}

pub(crate) fn hit_id(hit: &Value) -> Option<String> {
    match hit.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_round_trips_exactly() {
        let raw = json!({
            "products": [{"id": "1", "price": 100, "skus": [{"id": "10"}]}],
            "sort": null,
            "pagination": {"current": {"index": 1}}
        });

        let payload: SearchResultPayload = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&payload).unwrap(), raw);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            serde_json::to_string(&raw).unwrap()
        );
    }

    #[test]
    fn test_search_result_accessors() {
        let payload = SearchResultPayload::new(json!({
            "total": 3,
            "products": [{"id": "1"}, {"id": 42}, {"name": "no id"}, {"id": null}]
        }));

        assert_eq!(payload.total(), Some(3));
        assert_eq!(payload.product_ids(), vec!["1".to_string(), "42".to_string()]);
    }

    #[test]
    fn test_accessors_tolerate_missing_and_null_fields() {
        let payload = SearchResultPayload::new(json!({"total": null, "products": null}));
        assert_eq!(payload.total(), None);
        assert!(payload.product_ids().is_empty());

        let output = SuggestionProductsOutput::new(json!({}));
        assert_eq!(output.count(), None);
        assert!(output.product_ids().is_empty());
    }

    #[test]
    fn test_terms_skip_entries_without_term() {
        let payload = TopSearchesPayload::new(json!({
            "searches": [{"term": "shoe", "count": 3}, {"count": 1}, {"term": "shirt"}]
        }));
        assert_eq!(payload.terms(), vec!["shoe", "shirt"]);
        assert!(SuggestionSearchesPayload::new(Value::Null).terms().is_empty());
    }
}
