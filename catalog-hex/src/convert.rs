//! Currency Conversion Engine
//!
//! Converts a money amount from its base currency into a requested target
//! currency using a freshly fetched rate table. Stateless and single-shot:
//! every call either passes the amount through, converts it, or fails with
//! one typed error.

use catalog_types::{ConversionError, CurrencyCode, RateSource};

/// Conversion engine, generic over the rate source port.
pub struct CurrencyConverter<S: RateSource> {
    rates: S,
}

impl<S: RateSource> CurrencyConverter<S> {
    /// Creates a converter backed by the given rate source.
    pub fn new(rates: S) -> Self {
        Self { rates }
    }

    /// Returns a reference to the underlying rate source.
    pub fn rate_source(&self) -> &S {
        &self.rates
    }

    /// Converts `amount` from `base` into `target`.
    ///
    /// If the two codes compare equal case-insensitively the amount is
    /// returned unchanged without touching the rate source - this keeps a
    /// no-op conversion working even while the remote source is down.
    ///
    /// Otherwise the rate table for `base` is fetched (base code verbatim,
    /// casing untouched), the upper-cased target is looked up, and the
    /// amount is multiplied by the rate. Native f64 multiplication, no
    /// rounding.
    pub async fn convert(
        &self,
        amount: f64,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<f64, ConversionError> {
        if base.matches(target) {
            return Ok(amount);
        }

        let table = self.rates.fetch_rates(base).await?;

        let rate = table
            .rate_for(target)
            .ok_or_else(|| ConversionError::TargetCurrencyNotFound(target.canonical()))?;

        let converted = amount * rate;
        if !converted.is_finite() {
            return Err(ConversionError::ConversionFailed(format!(
                "Non-finite result converting {} {} at rate {}",
                amount, base, rate
            )));
        }

        Ok(converted)
    }
}
