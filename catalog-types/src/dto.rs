//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to add a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Product category
    #[schema(example = "electronics")]
    pub category: String,
    /// Price in the listing currency
    #[schema(example = 999.99)]
    pub price: f64,
    /// Currency the price is listed in
    #[schema(example = "USD")]
    pub currency: String,
    /// Optional European Article Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// Optional Amazon Standard Identification Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

/// Request to replace an existing product's fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    /// Product name
    #[schema(example = "Laptop")]
    pub name: String,
    /// Product category
    #[schema(example = "electronics")]
    pub category: String,
    /// Price in the listing currency
    #[schema(example = 899.99)]
    pub price: f64,
    /// Currency the price is listed in
    #[schema(example = "USD")]
    pub currency: String,
    /// Optional European Article Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    /// Optional Amazon Standard Identification Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// A product price expressed in a requested target currency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertedPriceResponse {
    /// The converted amount
    #[schema(example = 899.99)]
    pub amount: f64,
    /// Canonical form of the currency the amount is expressed in
    #[schema(example = "EUR")]
    pub currency: String,
}
