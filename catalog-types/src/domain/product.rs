//! Product domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::currency::CurrencyCode;
use super::price::Price;
use crate::error::DomainError;

/// Unique identifier for a Product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random ProductId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ProductId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A catalog entry: a named, categorized item with a price in some
/// base currency, plus optional trade identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Product category (e.g. electronics, clothing)
    pub category: String,
    /// Price in the currency it was listed in
    pub price: Price,
    /// European Article Number, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// Amazon Standard Identification Number, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    /// When the product was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product.
    ///
    /// # Validation
    /// - Name cannot be empty
    /// - Price must be non-negative and finite (checked by [`Price::new`])
    pub fn new(
        name: String,
        category: String,
        price: f64,
        currency: CurrencyCode,
        ean: Option<String>,
        asin: Option<String>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Product name cannot be empty".into(),
            ));
        }

        Ok(Self {
            id: ProductId::new(),
            name,
            category,
            price: Price::new(price, currency)?,
            ean,
            asin,
            created_at: Utc::now(),
        })
    }

    /// Creates a product with all fields specified (for database reconstruction).
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProductId,
        name: String,
        category: String,
        price: Price,
        ean: Option<String>,
        asin: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            price,
            ean,
            asin,
            created_at,
        }
    }

    /// Returns the currency this product's price is listed in.
    pub fn currency(&self) -> &CurrencyCode {
        self.price.currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD").unwrap()
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            "Laptop".to_string(),
            "electronics".to_string(),
            999.99,
            usd(),
            Some("4006381333931".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(product.name, "Laptop");
        assert_eq!(product.category, "electronics");
        assert_eq!(product.price.amount(), 999.99);
        assert_eq!(product.currency().as_str(), "USD");
        assert!(product.asin.is_none());
    }

    #[test]
    fn test_empty_name_fails() {
        let result = Product::new(
            "  ".to_string(),
            "electronics".to_string(),
            10.0,
            usd(),
            None,
            None,
        );
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_negative_price_fails() {
        let result = Product::new(
            "Laptop".to_string(),
            "electronics".to_string(),
            -10.0,
            usd(),
            None,
            None,
        );
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }
}
