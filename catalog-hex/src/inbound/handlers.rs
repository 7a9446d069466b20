//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use catalog_types::{
    AppError, ConvertedPriceResponse, CreateProductRequest, CurrencyCode, ProductId,
    ProductRepository, RateSource, UpdateProductRequest,
};

use crate::{CurrencyConverter, ProductService};

/// Application state shared across handlers.
pub struct AppState<R: ProductRepository, S: RateSource> {
    pub products: ProductService<R>,
    pub converter: CurrencyConverter<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::UpstreamUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Add a product to the catalog.
#[tracing::instrument(skip(state), fields(name = %req.name))]
pub async fn create_product<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.products.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Optional category filter for product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// List products, optionally restricted to one category.
#[tracing::instrument(skip(state))]
pub async fn list_products<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let products = match query.category {
        Some(category) => state.products.list_products_by_category(&category).await?,
        None => state.products.list_products().await?,
    };
    Ok(Json(products))
}

/// Get product by ID.
#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn get_product<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let product = state.products.get_product(product_id).await?;
    Ok(Json(product))
}

/// Replace a product's fields.
#[tracing::instrument(skip(state, req), fields(product_id = %id))]
pub async fn update_product<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let product = state.products.update_product(product_id, req).await?;
    Ok(Json(product))
}

/// Delete a product by ID.
#[tracing::instrument(skip(state), fields(product_id = %id))]
pub async fn delete_product<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    state.products.delete_product(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every product in the catalog.
#[tracing::instrument(skip(state))]
pub async fn delete_all_products<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
) -> Result<impl IntoResponse, ApiError> {
    state.products.delete_all_products().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Target currency for a price conversion.
/// Example request: GET /api/products/{id}/price?currency=EUR
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub currency: String,
}

/// Get a product's price expressed in a target currency.
///
/// The stored price passes through the conversion engine: identical
/// currencies short-circuit, everything else goes through a fresh rate
/// table fetch.
#[tracing::instrument(skip(state), fields(product_id = %id, currency = %query.currency))]
pub async fn get_product_price<R: ProductRepository, S: RateSource>(
    State(state): State<Arc<AppState<R, S>>>,
    Path(id): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id: ProductId = id
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))?;

    let product = state.products.get_product(product_id).await?;

    let target = CurrencyCode::new(query.currency)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let amount = state
        .converter
        .convert(product.price.amount(), product.currency(), &target)
        .await
        .map_err(AppError::from)?;

    Ok(Json(ConvertedPriceResponse {
        amount,
        currency: target.canonical(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::{ConversionError, CurrencyCode, RateFetchError};

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_status_codes_per_error_kind() {
        assert_eq!(
            status_of(AppError::BadRequest("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound("missing".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::UpstreamUnavailable("down".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(AppError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_target_currency_responds_404() {
        let err = ConversionError::TargetCurrencyNotFound("JPY".to_string());
        assert_eq!(status_of(err.into()), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rate_fetch_failure_responds_502() {
        let base = CurrencyCode::new("usd").unwrap();
        let err = ConversionError::RateFetch(RateFetchError::new(&base, "connection refused"));
        assert_eq!(status_of(err.into()), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_conversion_failure_responds_500() {
        let err = ConversionError::ConversionFailed("Non-finite result".to_string());
        assert_eq!(status_of(err.into()), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
