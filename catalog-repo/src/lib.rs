//! # Catalog Repository
//!
//! Concrete repository implementations (adapters) for the catalog service.
//! This crate provides the storage adapters behind the `ProductRepository`
//! port: a SQLite adapter for deployments and an in-memory adapter for
//! tests and demos.

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(feature = "sqlite")]
mod types;

#[cfg(feature = "sqlite")]
#[cfg(test)]
mod sqlite_tests;

pub use memory::InMemoryRepo;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepo;

/// Build and initialize a repository from a database URL.
///
/// Connects to the database, runs the schema migration, and returns a
/// ready-to-use repository.
///
/// # Examples
///
/// ```ignore
/// let repo = build_repo("sqlite://catalog.db?mode=rwc").await?;
/// ```
#[cfg(feature = "sqlite")]
pub async fn build_repo(database_url: &str) -> anyhow::Result<SqliteRepo> {
    SqliteRepo::new(database_url).await
}
