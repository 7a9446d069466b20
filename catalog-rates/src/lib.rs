//! # Catalog Rates
//!
//! Outbound HTTP adapter implementing the [`RateSource`] port against a
//! remote exchange-rate authority (VATComply-compatible API).
//!
//! One outbound GET per invocation, no retry, no caching: a rate table is
//! only valid for the instant it was fetched, so every conversion request
//! performs a fresh round trip.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use catalog_types::{CurrencyCode, RateFetchError, RateSource, RateTable};

/// Rate authority queried when no override is configured.
pub const DEFAULT_RATES_URL: &str = "https://api.vatcomply.com";

/// Explicit request timeout; a hung remote must not block a request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Typed shape of the rate source response.
///
/// Decoded directly from the transport response instead of going through
/// an untyped map: a payload without a `rates` field fails decoding and
/// classifies as a fetch failure.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// HTTP client for the remote rate source.
///
/// No authentication, no API key: `GET {base_url}/rates?base=<CODE>`.
pub struct HttpRateSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRateSource {
    /// Creates a rate source client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("catalog-service/0.1")
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Creates a rate source client against [`DEFAULT_RATES_URL`].
    pub fn with_default_url() -> anyhow::Result<Self> {
        Self::new(DEFAULT_RATES_URL)
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    #[instrument(name = "RateFetch", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, RateFetchError> {
        // The base code goes out verbatim; canonicalization is a
        // comparison-time concern, not a transmission-time one.
        let url = format!("{}/rates", self.base_url);
        debug!("Requesting rates from {} for base {}", url, base);

        let response = self
            .client
            .get(&url)
            .query(&[("base", base.as_str())])
            .send()
            .await
            .map_err(|e| RateFetchError::new(base, format!("Request error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::new(base, format!("HTTP error: {}", status)));
        }

        let payload = response
            .json::<RatesResponse>()
            .await
            .map_err(|e| RateFetchError::new(base, format!("Malformed response: {}", e)))?;

        debug!("Received {} rates for base {}", payload.rates.len(), base);
        Ok(RateTable::new(base.clone(), payload.rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    async fn mock_rates_server(base: &str, body: &str, status: u16) -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rates"))
            .and(query_param("base", base))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;

        server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let body = r#"{
            "date": "2026-08-28",
            "base": "USD",
            "rates": {"EUR": 0.9, "SEK": 10.4}
        }"#;
        let server = mock_rates_server("USD", body, 200).await;

        let source = HttpRateSource::new(server.uri()).unwrap();
        let table = source.fetch_rates(&code("USD")).await.unwrap();

        assert_eq!(table.base().as_str(), "USD");
        assert_eq!(table.rate_for(&code("EUR")), Some(0.9));
        assert_eq!(table.rate_for(&code("SEK")), Some(10.4));
        assert_eq!(table.rate_for(&code("JPY")), None);
    }

    #[tokio::test]
    async fn test_base_code_is_sent_verbatim() {
        // The mock only matches the lower-case spelling the caller used.
        let body = r#"{"rates": {"EUR": 0.9}}"#;
        let server = mock_rates_server("usd", body, 200).await;

        let source = HttpRateSource::new(server.uri()).unwrap();
        let table = source.fetch_rates(&code("usd")).await.unwrap();

        assert_eq!(table.rate_for(&code("eur")), Some(0.9));
    }

    #[tokio::test]
    async fn test_http_error_classifies_as_fetch_failure() {
        let server = mock_rates_server("USD", "oops", 500).await;

        let source = HttpRateSource::new(server.uri()).unwrap();
        let err = source.fetch_rates(&code("USD")).await.unwrap_err();

        assert_eq!(err.base, "USD");
        assert!(err.cause.contains("HTTP error"));
    }

    #[tokio::test]
    async fn test_malformed_payload_classifies_as_fetch_failure() {
        let server = mock_rates_server("USD", "{not json", 200).await;

        let source = HttpRateSource::new(server.uri()).unwrap();
        let err = source.fetch_rates(&code("USD")).await.unwrap_err();

        assert!(err.cause.contains("Malformed response"));
    }

    #[tokio::test]
    async fn test_missing_rates_field_classifies_as_fetch_failure() {
        let body = r#"{"date": "2026-08-28", "base": "USD"}"#;
        let server = mock_rates_server("USD", body, 200).await;

        let source = HttpRateSource::new(server.uri()).unwrap();
        let err = source.fetch_rates(&code("USD")).await.unwrap_err();

        assert!(err.cause.contains("Malformed response"));
    }

    #[tokio::test]
    async fn test_unreachable_source_classifies_as_fetch_failure() {
        // Nothing listens on this port.
        let source = HttpRateSource::new("http://127.0.0.1:1").unwrap();
        let err = source.fetch_rates(&code("USD")).await.unwrap_err();

        assert!(err.cause.contains("Request error"));
    }
}
