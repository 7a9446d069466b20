//! Error types for the catalog service.

use crate::ports::RateFetchError;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Price cannot be negative")]
    NegativeAmount,

    #[error("Price must be a finite number")]
    NonFiniteAmount,

    #[error("Currency code cannot be empty")]
    EmptyCurrency,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Currency conversion errors.
///
/// The three outcomes are kept distinct on purpose: callers report a
/// missing target currency (a 404-style failure) differently from an
/// unreachable or misbehaving rate source (a 502-style failure).
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The rate table could not be retrieved at all.
    #[error(transparent)]
    RateFetch(#[from] RateFetchError),

    /// The rate table was fetched but holds no entry for the target code.
    #[error("Target currency not found in rates: {0}")]
    TargetCurrencyNotFound(String),

    /// Catch-all for unexpected failures during the conversion step
    /// (e.g. malformed numeric data).
    #[error("Currency conversion failed: {0}")]
    ConversionFailed(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => AppError::BadRequest(e.to_string()),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
            RepoError::Conflict(e) => AppError::BadRequest(e),
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::RateFetch(e) => AppError::UpstreamUnavailable(e.to_string()),
            ConversionError::TargetCurrencyNotFound(code) => {
                AppError::NotFound(format!("Target currency not found in rates: {}", code))
            }
            ConversionError::ConversionFailed(e) => AppError::Internal(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyCode;

    #[test]
    fn test_rate_fetch_lowers_to_upstream_unavailable() {
        let base = CurrencyCode::new("usd").unwrap();
        let err = ConversionError::RateFetch(RateFetchError::new(&base, "connection refused"));

        let app = AppError::from(err);
        assert!(matches!(app, AppError::UpstreamUnavailable(_)));
        assert!(app.to_string().contains("connection refused"));
    }

    #[test]
    fn test_missing_target_lowers_to_not_found() {
        let err = ConversionError::TargetCurrencyNotFound("JPY".to_string());

        let app = AppError::from(err);
        match app {
            AppError::NotFound(msg) => {
                assert_eq!(msg, "Target currency not found in rates: JPY");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_conversion_failure_lowers_to_internal() {
        let err = ConversionError::ConversionFailed("Non-finite result".to_string());

        assert!(matches!(AppError::from(err), AppError::Internal(_)));
    }

    #[test]
    fn test_repo_errors_lower_by_kind() {
        assert!(matches!(
            AppError::from(RepoError::NotFound),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Domain(DomainError::NegativeAmount)),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Database("disk I/O error".to_string())),
            AppError::Internal(_)
        ));
    }
}
