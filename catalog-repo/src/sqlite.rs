//! SQLite repository adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use catalog_types::{
    CreateProductRequest, CurrencyCode, Product, ProductId, ProductRepository, RepoError,
};

use crate::types::DbProduct;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_products.sql");
        sqlx::raw_sql(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for SqliteRepo {
    async fn create(&self, req: CreateProductRequest) -> Result<Product, RepoError> {
        let currency = CurrencyCode::new(req.currency).map_err(RepoError::Domain)?;
        let product = Product::new(req.name, req.category, req.price, currency, req.ean, req.asin)
            .map_err(RepoError::Domain)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, category, price, currency, ean, asin, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price.amount())
        .bind(product.currency().as_str())
        .bind(&product.ean)
        .bind(&product.asin)
        .bind(product.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(product)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        let row: Option<DbProduct> = sqlx::query_as(
            r#"SELECT id, name, category, price, currency, ean, asin, created_at
               FROM products WHERE id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbProduct::into_domain).transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> = sqlx::query_as(
            r#"SELECT id, name, category, price, currency, ean, asin, created_at
               FROM products ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbProduct::into_domain).collect()
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> = sqlx::query_as(
            r#"SELECT id, name, category, price, currency, ean, asin, created_at
               FROM products WHERE category = ? ORDER BY created_at DESC"#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbProduct::into_domain).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, RepoError> {
        let result = sqlx::query(
            r#"UPDATE products
               SET name = ?, category = ?, price = ?, currency = ?, ean = ?, asin = ?
               WHERE id = ?"#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price.amount())
        .bind(product.currency().as_str())
        .bind(&product.ean)
        .bind(&product.asin)
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM products WHERE id = ?"#)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM products"#)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }

    async fn exists(&self, id: ProductId) -> Result<bool, RepoError> {
        let row: Option<(i64,)> = sqlx::query_as(r#"SELECT 1 FROM products WHERE id = ?"#)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let row: (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM products"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.0)
    }
}
