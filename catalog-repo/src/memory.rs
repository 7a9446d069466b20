//! In-memory repository adapter backed by a concurrent map.
//!
//! Used by tests and demo setups; the port contract is identical to the
//! SQLite adapter's.

use async_trait::async_trait;
use dashmap::DashMap;

use catalog_types::{
    CreateProductRequest, CurrencyCode, Product, ProductId, ProductRepository, RepoError,
};

/// In-memory product repository.
#[derive(Default)]
pub struct InMemoryRepo {
    products: DashMap<ProductId, Product>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepo {
    async fn create(&self, req: CreateProductRequest) -> Result<Product, RepoError> {
        let currency = CurrencyCode::new(req.currency).map_err(RepoError::Domain)?;
        let product = Product::new(req.name, req.category, req.price, currency, req.ean, req.asin)
            .map_err(RepoError::Domain)?;

        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        Ok(self.products.get(&id).map(|p| p.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> =
            self.products.iter().map(|p| p.value().clone()).collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.value().category == category)
            .map(|p| p.value().clone())
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn update(&self, product: Product) -> Result<Product, RepoError> {
        if !self.products.contains_key(&product.id) {
            return Err(RepoError::NotFound);
        }
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepoError> {
        Ok(self.products.remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        self.products.clear();
        Ok(())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, RepoError> {
        Ok(self.products.contains_key(&id))
    }

    async fn count(&self) -> Result<i64, RepoError> {
        Ok(self.products.len() as i64)
    }
}
