//! Domain models for the catalog service.

pub mod currency;
pub mod price;
pub mod product;
pub mod rates;

pub use currency::CurrencyCode;
pub use price::Price;
pub use product::{Product, ProductId};
pub use rates::RateTable;
