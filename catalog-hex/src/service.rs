//! Product Application Service
//!
//! Orchestrates catalog operations through the repository port.
//! Contains NO infrastructure logic - pure business orchestration.

use catalog_types::{
    AppError, CreateProductRequest, CurrencyCode, Product, ProductId, ProductRepository,
    UpdateProductRequest,
};

/// Application service for catalog operations.
///
/// Generic over `R: ProductRepository` - the adapter is injected at compile
/// time, so the SQLite adapter, the in-memory adapter, or a test mock can
/// back the same service without code changes.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds a product to the catalog.
    pub async fn create_product(&self, req: CreateProductRequest) -> Result<Product, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::BadRequest("Product name cannot be empty".into()));
        }

        self.repo.create(req).await.map_err(Into::into)
    }

    /// Gets a product by ID.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Product {}", id))))
    }

    /// Lists all products.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.repo.list().await.map_err(Into::into)
    }

    /// Lists all products in the given category.
    pub async fn list_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, AppError> {
        self.repo.list_by_category(category).await.map_err(Into::into)
    }

    /// Replaces an existing product's fields, keeping its identity.
    pub async fn update_product(
        &self,
        id: ProductId,
        req: UpdateProductRequest,
    ) -> Result<Product, AppError> {
        let existing = self.get_product(id).await?;

        let currency = CurrencyCode::new(req.currency)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut updated =
            Product::new(req.name, req.category, req.price, currency, req.ean, req.asin)
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
        updated.id = existing.id;
        updated.created_at = existing.created_at;

        self.repo.update(updated).await.map_err(Into::into)
    }

    /// Deletes a product by ID. Returns an error if it did not exist.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Product {}", id)))
        }
    }

    /// Deletes every product from the catalog.
    pub async fn delete_all_products(&self) -> Result<(), AppError> {
        self.repo.delete_all().await.map_err(Into::into)
    }

    /// Checks if a product exists by ID.
    pub async fn exists(&self, id: ProductId) -> Result<bool, AppError> {
        self.repo.exists(id).await.map_err(Into::into)
    }

    /// Number of products in the catalog.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await.map_err(Into::into)
    }

    /// True if the catalog holds no products.
    pub async fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.count().await? == 0)
    }
}
