//! # Catalog Hex
//!
//! Application service layer and HTTP adapter for the catalog service.
//!
//! ## Architecture
//!
//! - `convert` - Currency conversion engine (drives the `RateSource` port)
//! - `service` - Product application service (drives the repository port)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! Both halves are generic over their ports: `CurrencyConverter<S: RateSource>`
//! and `ProductService<R: ProductRepository>` take their adapters at compile
//! time, so tests inject mocks and the binary injects the real clients.

pub mod convert;
pub mod inbound;
mod openapi;
pub mod service;


pub use convert::CurrencyConverter;
pub use service::ProductService;
