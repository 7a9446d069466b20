//! Exchange rate table fetched from the rate source.

use std::collections::HashMap;

use super::currency::CurrencyCode;

/// A snapshot of exchange rates relative to one base currency.
///
/// Valid only for the instant it was fetched: tables are built fresh for
/// every conversion and never persisted or reused. The base currency is
/// carried in the type so a table can only ever be interpreted relative
/// to the base it was fetched for.
///
/// Keys are stored in canonical upper-case form; lookups canonicalize
/// the requested code the same way.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Builds a table from raw code -> rate pairs, normalizing keys to
    /// the canonical upper-case form.
    pub fn new(base: CurrencyCode, raw: HashMap<String, f64>) -> Self {
        let rates = raw
            .into_iter()
            .map(|(code, rate)| (code.to_uppercase(), rate))
            .collect();
        Self { base, rates }
    }

    /// The base currency this table was fetched for.
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Looks up the rate for the given target currency, case-insensitively.
    pub fn rate_for(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates.get(&target.canonical()).copied()
    }

    /// Number of rates in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
