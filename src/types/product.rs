//! Catalog product data served by the search GraphQL endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog product (GraphQL type `SearchProduct`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProduct {
    /// Catalog product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Slug of the product page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    /// Specification properties. `None` when the parent selection did not fetch them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<ProductProperty>>,
    /// Fields not modelled here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named product specification with its values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProperty {
    /// Specification name.
    pub name: String,
    /// Specification values.
    #[serde(default)]
    pub values: Vec<String>,
}

/// One entry of `SearchProduct.extraInfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfo {
    /// Specification name.
    pub key: String,
    /// Specification values joined by `,`.
    pub value: String,
}

impl From<&ProductProperty> for ExtraInfo {
    fn from(property: &ProductProperty) -> Self {
        Self {
            key: property.name.clone(),
            value: property.values.join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_properties_stay_none() {
        let product: SearchProduct =
            serde_json::from_value(json!({"productId": "1", "productName": "Runner"})).unwrap();
        assert!(product.properties.is_none());
    }

    #[test]
    fn test_empty_properties_are_some() {
        let product: SearchProduct =
            serde_json::from_value(json!({"productId": "1", "properties": []})).unwrap();
        assert_eq!(product.properties, Some(Vec::new()));
    }

    #[test]
    fn test_extra_info_joins_values() {
        let property = ProductProperty {
            name: "Color".to_string(),
            values: vec!["Red".to_string(), "Blue".to_string()],
        };
        assert_eq!(
            ExtraInfo::from(&property),
            ExtraInfo {
                key: "Color".to_string(),
                value: "Red,Blue".to_string()
            }
        );
    }
}
