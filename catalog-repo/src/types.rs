//! Database row types for the SQLite adapter.

use sqlx::FromRow;

use catalog_types::{CurrencyCode, Price, Product, ProductId, RepoError};

/// Product row from the database.
///
/// SQLite stores UUIDs and timestamps as text; parsing back into domain
/// types happens here so the rest of the crate deals in `Product` only.
#[derive(FromRow)]
pub struct DbProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub currency: String,
    pub ean: Option<String>,
    pub asin: Option<String>,
    pub created_at: String,
}

impl DbProduct {
    /// Convert database row to domain Product.
    pub fn into_domain(self) -> Result<Product, RepoError> {
        let uuid =
            uuid::Uuid::parse_str(&self.id).map_err(|e| RepoError::Database(e.to_string()))?;

        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        let currency = CurrencyCode::new(self.currency).map_err(RepoError::Domain)?;
        let price = Price::new(self.price, currency).map_err(RepoError::Domain)?;

        Ok(Product::from_parts(
            ProductId::from_uuid(uuid),
            self.name,
            self.category,
            price,
            self.ean,
            self.asin,
            created_at,
        ))
    }
}
