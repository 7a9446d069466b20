//! Monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::currency::CurrencyCode;
use crate::error::DomainError;

/// A non-negative monetary amount denominated in a currency.
///
/// Amounts are plain `f64` - conversion applies native floating-point
/// multiplication with no rounding or precision rules. Immutable once
/// read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Price {
    amount: f64,
    currency: CurrencyCode,
}

impl Price {
    /// Creates a new Price value.
    pub fn new(amount: f64, currency: CurrencyCode) -> Result<Self, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { amount, currency })
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency the amount is denominated in.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
