//! Rate source port.
//!
//! This trait defines the interface for exchange rate sources.
//! Implementations can be HTTP clients, mock sources, etc.

use crate::domain::{CurrencyCode, RateTable};

/// Error type for rate retrieval.
///
/// Network failure, a non-2xx response and an undecodable payload all
/// classify as this single kind: from the caller's perspective the rate
/// table simply could not be obtained. The underlying cause is attached,
/// never swallowed.
#[derive(Debug, thiserror::Error)]
#[error("Error fetching currency rates for base {base}: {cause}")]
pub struct RateFetchError {
    /// The base currency the fetch was attempted for, verbatim.
    pub base: String,
    /// Human-readable description of the underlying failure.
    pub cause: String,
}

impl RateFetchError {
    pub fn new(base: &CurrencyCode, cause: impl Into<String>) -> Self {
        Self {
            base: base.as_str().to_string(),
            cause: cause.into(),
        }
    }
}

/// Port trait for exchange rate sources.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Fetches the current rate table for the given base currency.
    ///
    /// The base code is used verbatim - implementations must not
    /// case-normalize it before transmission. Every call performs a fresh
    /// retrieval: no retry, no caching.
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateFetchError>;
}
