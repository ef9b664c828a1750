//! Application configuration. Backend location, timeouts, mock mode.
//!
//! Sources, lowest to highest precedence: defaults, optional config file
//! (`MEETING_SUMMARIZER_CONFIG`), `MEETING_SUMMARIZER_*` env (after `.env`), CLI flags.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

pub const ENV_PREFIX: &str = "MEETING_SUMMARIZER";
pub const CONFIG_PATH_VAR: &str = "MEETING_SUMMARIZER_CONFIG";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_SUMMARIZE_PATH: &str = "/summarize";
/// Transcribing and summarizing a long meeting takes minutes.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_MOCK_DELAY_MS: u64 = 1500;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Backend origin. Read from MEETING_SUMMARIZER_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Route of the upload endpoint. Read from MEETING_SUMMARIZER_SUMMARIZE_PATH.
    #[serde(default)]
    pub summarize_path: Option<String>,

    /// Whole-request timeout in seconds. Read from MEETING_SUMMARIZER_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Use the offline mock backend. Read from MEETING_SUMMARIZER_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,

    /// Simulated latency of the mock backend. Read from MEETING_SUMMARIZER_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,
}

/// Values given on the command line. `None` leaves the configured value alone.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub mock: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::from_builder(c)
    }

    /// Build from an already-assembled source stack.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.base_url {
            self.base_url = Some(url.clone());
        }
        if overrides.mock {
            self.mock = Some(true);
        }
        self
    }

    /// Returns the backend origin. Defaults to http://localhost:5000.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Returns the upload route. Defaults to /summarize.
    pub fn summarize_path_or_default(&self) -> String {
        self.summarize_path
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARIZE_PATH.to_string())
    }

    /// Returns the request timeout. Defaults to 600s; 0 is treated as unset.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Returns true if the mock backend should be used.
    pub fn is_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }

    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_builder(config::Config::builder()).unwrap();
        assert_eq!(cfg.base_url_or_default(), "http://localhost:5000");
        assert_eq!(cfg.summarize_path_or_default(), "/summarize");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(600));
        assert!(!cfg.is_mock());
        assert_eq!(cfg.mock_delay_ms_or_default(), 1500);
    }

    #[test]
    fn test_builder_values() {
        let builder = config::Config::builder()
            .set_override("base_url", "https://summaries.internal:8443")
            .unwrap()
            .set_override("request_timeout_secs", 30)
            .unwrap()
            .set_override("mock", true)
            .unwrap();

        let cfg = AppConfig::from_builder(builder).unwrap();

        assert_eq!(cfg.base_url_or_default(), "https://summaries.internal:8443");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(30));
        assert!(cfg.is_mock());
    }

    #[test]
    fn test_cli_overrides_win() {
        let cfg = AppConfig {
            base_url: Some("http://from-env:5000".to_string()),
            ..AppConfig::default()
        }
        .with_overrides(&CliOverrides {
            base_url: Some("http://from-cli:9000".to_string()),
            mock: true,
        });

        assert_eq!(cfg.base_url_or_default(), "http://from-cli:9000");
        assert!(cfg.is_mock());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let cfg = AppConfig {
            base_url: Some("  ".to_string()),
            request_timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.base_url_or_default(), DEFAULT_BASE_URL);
        assert_eq!(cfg.request_timeout(), Duration::from_secs(600));
    }
}
