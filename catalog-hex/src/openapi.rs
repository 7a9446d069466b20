//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use catalog_types::domain::{CurrencyCode, Price, Product, ProductId};
use catalog_types::dto::{ConvertedPriceResponse, CreateProductRequest, UpdateProductRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation.
// These are not the actual handlers, just for OpenAPI path generation.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Invalid request")
    )
)]
async fn create_product() {}

/// List products, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    params(
        ("category" = Option<String>, Query, description = "Restrict the listing to one category")
    ),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>)
    )
)]
async fn list_products() {}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    )
)]
async fn get_product() {}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    request_body = UpdateProductRequest,
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Product not found")
    )
)]
async fn update_product() {}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(
        ("id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
async fn delete_product() {}

/// Delete every product in the catalog
#[utoipa::path(
    delete,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 204, description = "Catalog emptied")
    )
)]
async fn delete_all_products() {}

/// Get a product's price in another currency
#[utoipa::path(
    get,
    path = "/api/products/{id}/price",
    tag = "conversion",
    params(
        ("id" = String, Path, description = "Product ID (UUID)"),
        ("currency" = String, Query, description = "Target currency code, any casing")
    ),
    responses(
        (status = 200, description = "Converted price", body = ConvertedPriceResponse),
        (status = 404, description = "Product or target currency not found"),
        (status = 502, description = "Rate source unavailable")
    )
)]
async fn get_product_price() {}

/// OpenAPI documentation for the Catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog Service API",
        version = "1.0.0",
        description = "A product catalog with on-demand currency conversion. Prices are stored in their listing currency and converted into any requested target currency using live exchange rates.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
        delete_all_products,
        get_product_price,
    ),
    components(
        schemas(
            CreateProductRequest,
            UpdateProductRequest,
            ConvertedPriceResponse,
            Product,
            Price,
            CurrencyCode,
            ProductId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Catalog management operations"),
        (name = "conversion", description = "Currency conversion of stored prices"),
    )
)]
pub struct ApiDoc;
