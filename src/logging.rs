//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats `LoggingConfig::format` accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human oriented (`"pretty"`).
    Pretty,
    /// Single-line text (`"full"`, `"text"`, anything unrecognised).
    Full,
    /// Newline-delimited JSON (`"json"`).
    Json,
}

impl LogFormat {
    pub fn parse(format: &str) -> Self {
        match format {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Full,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format)
    }

    /// Install the global tracing subscriber. `RUST_LOG` overrides `level`.
    ///
    /// Returns false if a subscriber was already installed.
    pub fn init(&self) -> bool {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.log_format() {
            LogFormat::Json => fmt().json().with_env_filter(filter).try_init().is_ok(),
            LogFormat::Pretty => fmt().pretty().with_env_filter(filter).try_init().is_ok(),
            LogFormat::Full => fmt().with_env_filter(filter).try_init().is_ok(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
