//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use catalog_types::{CreateProductRequest, ProductId, ProductRepository, RepoError};

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn product(name: &str, category: &str, price: f64, currency: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            category: category.to_string(),
            price,
            currency: currency.to_string(),
            ean: None,
            asin: None,
        }
    }

    #[tokio::test]
    async fn test_create_product() {
        let repo = setup_repo().await;

        let created = repo
            .create(CreateProductRequest {
                name: "Laptop".to_string(),
                category: "electronics".to_string(),
                price: 999.99,
                currency: "USD".to_string(),
                ean: Some("4006381333931".to_string()),
                asin: Some("B01LYCLS24".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Laptop");
        assert_eq!(created.price.amount(), 999.99);
        assert_eq!(created.currency().as_str(), "USD");
        assert_eq!(created.ean.as_deref(), Some("4006381333931"));
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let repo = setup_repo().await;

        let result = repo.create(product("Laptop", "electronics", -1.0, "USD")).await;

        assert!(matches!(result, Err(RepoError::Domain(_))));
    }

    #[tokio::test]
    async fn test_get_round_trips_currency_casing() {
        let repo = setup_repo().await;

        // The listing currency is stored verbatim, casing included.
        let created = repo
            .create(product("Mug", "kitchen", 7.5, "eur"))
            .await
            .unwrap();

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.currency().as_str(), "eur");
        assert_eq!(fetched.price.amount(), 7.5);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repo = setup_repo().await;

        let result = repo.get(ProductId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let repo = setup_repo().await;

        repo.create(product("Laptop", "electronics", 999.99, "USD"))
            .await
            .unwrap();
        repo.create(product("Phone", "electronics", 499.0, "USD"))
            .await
            .unwrap();
        repo.create(product("Mug", "kitchen", 7.5, "EUR"))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 3);

        let electronics = repo.list_by_category("electronics").await.unwrap();
        assert_eq!(electronics.len(), 2);

        let empty = repo.list_by_category("toys").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_update_product() {
        let repo = setup_repo().await;

        let mut created = repo
            .create(product("Laptop", "electronics", 999.99, "USD"))
            .await
            .unwrap();

        created.name = "Laptop Pro".to_string();
        let updated = repo.update(created.clone()).await.unwrap();
        assert_eq!(updated.name, "Laptop Pro");

        let fetched = repo.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Laptop Pro");
    }

    #[tokio::test]
    async fn test_update_missing_product_fails() {
        let repo = setup_repo().await;

        let created = repo
            .create(product("Laptop", "electronics", 999.99, "USD"))
            .await
            .unwrap();
        assert!(repo.delete(created.id).await.unwrap());

        let result = repo.update(created).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_semantics() {
        let repo = setup_repo().await;

        let created = repo
            .create(product("Laptop", "electronics", 999.99, "USD"))
            .await
            .unwrap();

        assert!(repo.exists(created.id).await.unwrap());
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.exists(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_all_and_count() {
        let repo = setup_repo().await;

        repo.create(product("A", "x", 1.0, "USD")).await.unwrap();
        repo.create(product("B", "y", 2.0, "USD")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);

        repo.delete_all().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
