//! Backend connection settings.

use crate::api::ApiError;
use serde::Deserialize;
use std::time::Duration;

fn default_timeout_secs() -> u64 {
    10
}

/// Connection settings for the sales backend.
///
/// Credentials and the base URL are injected here instead of living in the
/// binary. `from_env` covers the common deployment path; the serde derive
/// lets the struct sit inside a larger configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout, applied to connect, read, and write.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Reads the connection settings from `REPSALES_*` environment variables.
    ///
    /// `REPSALES_BASE_URL`, `REPSALES_USERNAME`, and `REPSALES_PASSWORD` are
    /// required; `REPSALES_TIMEOUT_SECS` is optional.
    pub fn from_env() -> Result<Self, ApiError> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| ApiError::Config(format!("{name} is not set")))
        };

        let timeout_secs = match std::env::var("REPSALES_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ApiError::Config(format!("REPSALES_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            Err(_) => default_timeout_secs(),
        };

        Ok(Self {
            base_url: var("REPSALES_BASE_URL")?,
            username: var("REPSALES_USERNAME")?,
            password: var("REPSALES_PASSWORD")?,
            timeout_secs,
        })
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_omitted_from_config_files() {
        let config: ApiConfig = serde_json::from_str(
            r#"{"base_url": "http://backend.local/sales", "username": "program", "password": "secret"}"#,
        )
        .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
