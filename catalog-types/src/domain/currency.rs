//! Currency code domain type.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::DomainError;

/// A short textual currency identifier such as "USD" or "eur".
///
/// Any non-empty string is accepted; there is no validation against an
/// ISO list. Comparison is case-insensitive and the canonical
/// form is upper-case, but the caller's original spelling is preserved:
/// it is what gets transmitted verbatim to the rate source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "USD")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code from the caller-supplied spelling.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::EmptyCurrency);
        }
        Ok(Self(code))
    }

    /// Returns the code exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical upper-case form, used for rate table lookups.
    pub fn canonical(&self) -> String {
        self.0.to_uppercase()
    }

    /// Case-insensitive equality. Comparison only - neither side is mutated.
    pub fn matches(&self, other: &CurrencyCode) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_preserves_casing() {
        let code = CurrencyCode::new("usd").unwrap();
        assert_eq!(code.as_str(), "usd");
        assert_eq!(code.canonical(), "USD");
    }

    #[test]
    fn test_empty_currency_fails() {
        assert!(matches!(
            CurrencyCode::new("  "),
            Err(DomainError::EmptyCurrency)
        ));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let a = CurrencyCode::new("Usd").unwrap();
        let b = CurrencyCode::new("uSD").unwrap();
        let c = CurrencyCode::new("EUR").unwrap();
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_any_string_is_accepted() {
        assert!(CurrencyCode::new("DOGE").is_ok());
        assert!(CurrencyCode::new("x").is_ok());
    }
}
