//! Argument records of the GraphQL operations.
//!
//! These are deserialized at the resolver boundary from the caller's
//! schema-validated arguments, using the schema's camelCase names.

use serde::{Deserialize, Serialize};

/// Arguments of `Query.searchResult`.
///
/// # Example
///
/// ```rust
/// use search_facade::types::SearchResultInput;
///
/// let args: SearchResultInput =
///     serde_json::from_value(serde_json::json!({"term": "shoe", "page": 2})).unwrap();
/// assert_eq!(args.term, "shoe");
/// assert_eq!(args.page, Some(2));
/// assert!(args.attribute_path.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultInput {
    /// The full-text search term. Empty browses the whole catalog.
    #[serde(default)]
    pub term: String,
    /// Facet path, e.g. `category-1/shoes/brand/acme`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_path: Option<String>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Sort expression understood by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Term operator, `and` or `or`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Fuzziness, `0`, `1` or `auto`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy: Option<String>,
}

/// Arguments of `Query.suggestionSearches`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSearchesInput {
    /// The partial term typed so far.
    pub term: String,
}

/// Arguments of `Query.suggestionProducts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionProductsInput {
    /// The partial term typed so far.
    pub term: String,
    /// Restrict suggestions to an attribute, e.g. `brand`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_key: Option<String>,
    /// Value of `attribute_key` to restrict to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
}

impl SuggestionProductsInput {
    /// Returns the attribute filter when both key and value are set.
    #[must_use]
    pub fn attribute(&self) -> Option<(&str, &str)> {
        self.attribute_key
            .as_deref()
            .zip(self.attribute_value.as_deref())
    }
}
