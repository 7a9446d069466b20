//! Configuration loading from environment.

use std::env;

use catalog_rates::DEFAULT_RATES_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub rates_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Everything has a default: the service comes up against a local
    /// SQLite file and the public rate authority with no configuration
    /// at all. `RATES_URL` exists mainly so tests can point the client
    /// at a mock server.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalog.db?mode=rwc".to_string());

        let rates_url = env::var("RATES_URL").unwrap_or_else(|_| DEFAULT_RATES_URL.to_string());

        Ok(Self {
            port,
            database_url,
            rates_url,
        })
    }
}
