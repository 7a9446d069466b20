//! Product repository port.
//!
//! This is the storage-facing port in our hexagonal architecture.
//! Adapters (SQLite, in-memory) implement this trait; any keyed record
//! store satisfies the contract.

use crate::domain::{Product, ProductId};
use crate::dto::CreateProductRequest;
use crate::error::RepoError;

/// The repository port for product persistence.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Stores a new product and returns it with its assigned identity.
    async fn create(&self, req: CreateProductRequest) -> Result<Product, RepoError>;

    /// Gets a product by ID.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepoError>;

    /// Lists all products.
    async fn list(&self) -> Result<Vec<Product>, RepoError>;

    /// Lists all products in the given category.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError>;

    /// Replaces an existing product. Fails with `RepoError::NotFound` if
    /// no product with the same ID exists.
    async fn update(&self, product: Product) -> Result<Product, RepoError>;

    /// Deletes a product by ID. Returns true if it existed.
    async fn delete(&self, id: ProductId) -> Result<bool, RepoError>;

    /// Deletes every product.
    async fn delete_all(&self) -> Result<(), RepoError>;

    /// Checks whether a product with the given ID exists.
    async fn exists(&self, id: ProductId) -> Result<bool, RepoError>;

    /// Number of stored products.
    async fn count(&self) -> Result<i64, RepoError>;
}
