use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{choice, present, Validate};
use crate::errors::ValidationError;

pub const PRODUCT_COLLECTION: &str = "product";
pub const DEFAULT_PRODUCT_LIMIT: u32 = 12;
pub const MAX_PRODUCT_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProductCategory {
    Auto,
    Landbouw,
    #[default]
    Diversen,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [
        ProductCategory::Auto,
        ProductCategory::Landbouw,
        ProductCategory::Diversen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Auto => "Auto",
            ProductCategory::Landbouw => "Landbouw",
            ProductCategory::Diversen => "Diversen",
        }
    }
}

impl AsRef<str> for ProductCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listing for the "Verkoop & Onderdelen" page, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Short description or state
    pub description: Option<String>,
    pub category: ProductCategory,
    /// Fixed price; absent means price on request
    pub price: Option<f64>,
    /// Condition, e.g. Nieuw, Gebruikt, Dealer onderhouden
    pub condition: Option<String>,
    /// Public image URL for the product card
    pub image_url: Option<String>,
}

/// Incoming body for `POST /api/products`
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    /// One of Auto, Landbouw, Diversen (default Diversen)
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    pub price: Option<f64>,
    pub condition: Option<String>,
    pub image_url: Option<String>,
}

impl Validate for Product {
    type Payload = ProductPayload;

    fn validate(payload: ProductPayload) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let title = match payload.title {
            None => {
                errors.add("title", "field required");
                None
            }
            Some(t) if t.trim().is_empty() => {
                errors.add("title", "must not be empty");
                None
            }
            Some(t) => Some(t),
        };

        let category = choice(
            &mut errors,
            "category",
            payload.category,
            &ProductCategory::ALL,
        );

        if let Some(price) = payload.price {
            if !price.is_finite() || price < 0.0 {
                errors.add("price", "must be greater than or equal to 0");
            }
        }

        errors.into_result()?;

        Ok(Product {
            title: title.unwrap_or_default(),
            description: payload.description,
            category: category.unwrap_or_default(),
            price: payload.price,
            condition: payload.condition,
            image_url: payload.image_url,
        })
    }
}

/// A product as returned by the list endpoint: internal ids stripped,
/// timestamps rendered as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListing {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Query string accepted by `GET /api/products`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQueryParams {
    /// Only return products of this category
    pub category: Option<String>,
    /// Maximum number of products to return (default 12)
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: Option<ProductCategory>,
    pub limit: u32,
}

impl Validate for ProductQuery {
    type Payload = ProductQueryParams;

    fn validate(params: ProductQueryParams) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        // An empty category means no filter
        let category = match params.category.filter(|c| !c.is_empty()) {
            None => None,
            Some(c) => choice(
                &mut errors,
                "category",
                Some(Some(c)),
                &ProductCategory::ALL,
            ),
        };

        let limit = match params.limit {
            None => DEFAULT_PRODUCT_LIMIT,
            Some(l) if (0..=MAX_PRODUCT_LIMIT as i64).contains(&l) => l as u32,
            Some(_) => {
                errors.add(
                    "limit",
                    format!("must be between 0 and {}", MAX_PRODUCT_LIMIT),
                );
                DEFAULT_PRODUCT_LIMIT
            }
        };

        errors.into_result()?;
        Ok(ProductQuery { category, limit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>) -> ProductPayload {
        ProductPayload {
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_product_gets_defaults() {
        let product = Product::validate(payload(Some("Tractor X"))).unwrap();
        assert_eq!(product.title, "Tractor X");
        assert_eq!(product.category, ProductCategory::Diversen);
        assert_eq!(product.price, None);
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_full_product_is_kept() {
        let product = Product::validate(ProductPayload {
            title: Some("Golf VII".to_string()),
            description: Some("Dealer onderhouden".to_string()),
            category: Some(Some("Auto".to_string())),
            price: Some(0.0),
            condition: Some("Gebruikt".to_string()),
            image_url: Some("https://example.com/golf.jpg".to_string()),
        })
        .unwrap();
        assert_eq!(product.category, ProductCategory::Auto);
        assert_eq!(product.price, Some(0.0));
        assert_eq!(product.condition.as_deref(), Some("Gebruikt"));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let err = Product::validate(payload(None)).unwrap_err();
        assert_eq!(err.field_names(), vec!["title"]);

        let err = Product::validate(payload(Some("   "))).unwrap_err();
        assert!(err.has_field("title"));
    }

    #[test]
    fn test_unknown_category_and_negative_price_reported_together() {
        let err = Product::validate(ProductPayload {
            title: None,
            category: Some(Some("Boten".to_string())),
            price: Some(-1.0),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field_names(), vec!["title", "category", "price"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let mut p = payload(Some("Ploeg"));
        p.category = Some(Some("landbouw".to_string()));
        assert!(Product::validate(p).unwrap_err().has_field("category"));
    }

    #[test]
    fn test_null_category_is_rejected() {
        let mut p = payload(Some("Golf"));
        p.category = Some(None);
        let err = Product::validate(p).unwrap_err();
        assert_eq!(err.field_names(), vec!["category"]);
    }

    #[test]
    fn test_payload_tells_null_from_missing() {
        let missing: ProductPayload = serde_json::from_str(r#"{"title":"Golf"}"#).unwrap();
        assert_eq!(missing.category, None);

        let null: ProductPayload =
            serde_json::from_str(r#"{"title":"Golf","category":null}"#).unwrap();
        assert_eq!(null.category, Some(None));
    }

    #[test]
    fn test_query_defaults() {
        let query = ProductQuery::validate(ProductQueryParams::default()).unwrap();
        assert_eq!(query.category, None);
        assert_eq!(query.limit, DEFAULT_PRODUCT_LIMIT);
    }

    #[test]
    fn test_query_empty_category_means_no_filter() {
        let query = ProductQuery::validate(ProductQueryParams {
            category: Some(String::new()),
            limit: Some(0),
        })
        .unwrap();
        assert_eq!(query.category, None);
        assert_eq!(query.limit, 0);
    }

    #[test]
    fn test_query_rejects_out_of_range_limit() {
        for limit in [-1, MAX_PRODUCT_LIMIT as i64 + 1] {
            let err = ProductQuery::validate(ProductQueryParams {
                category: Some("Auto".to_string()),
                limit: Some(limit),
            })
            .unwrap_err();
            assert_eq!(err.field_names(), vec!["limit"]);
        }
    }

    #[test]
    fn test_category_serializes_as_plain_name() {
        let json = serde_json::to_value(ProductCategory::Landbouw).unwrap();
        assert_eq!(json, serde_json::json!("Landbouw"));
    }
}
