//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`); the output format from
//! `CATALOG_LOG_FORMAT` (`json` by default, or `pretty` / `compact`).

use core::str::FromStr;

use anyhow::Context;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const FORMAT_ENV: &str = "CATALOG_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Subscriber configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,catalog_core=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read `RUST_LOG` and `CATALOG_LOG_FORMAT`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> anyhow::Result<Self> {
        let format = match format {
            Some(raw) if !raw.trim().is_empty() => raw
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {FORMAT_ENV}"))?,
            _ => LogFormat::default(),
        };

        Ok(Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            format,
        })
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() -> anyhow::Result<bool> {
    init_with(&LogConfig::from_env()?)
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Fails only when the filter directives do not parse. A subscriber that is already
/// installed is left in place and `Ok(false)` is returned.
pub fn init_with(config: &LogConfig) -> anyhow::Result<bool> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter `{}`", config.filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    }
    .is_ok();

    if installed {
        tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" Pretty ".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, UnknownLogFormat("xml".to_string()));
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn unset_vars_fall_back_to_defaults() {
        let config = LogConfig::from_vars(None, None).unwrap();
        assert_eq!(config, LogConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);

        let blank = LogConfig::from_vars(Some("  ".to_string()), Some(String::new())).unwrap();
        assert_eq!(blank, LogConfig::default());
    }

    #[test]
    fn vars_override_defaults() {
        let config = LogConfig::from_vars(
            Some("catalog_core=debug".to_string()),
            Some("compact".to_string()),
        )
        .unwrap();
        assert_eq!(config.filter, "catalog_core=debug");
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn unknown_format_var_is_an_error() {
        let err = LogConfig::from_vars(None, Some("xml".to_string())).unwrap_err();
        assert!(format!("{err:#}").contains(FORMAT_ENV));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LogConfig {
            filter: "catalog_core=loud".to_string(),
            format: LogFormat::Compact,
        };
        assert!(init_with(&config).is_err());
    }

    #[test]
    fn init_is_idempotent() {
        let config = LogConfig::default();
        assert!(init_with(&config).is_ok());
        assert!(!init_with(&config).unwrap());
        assert!(!init().unwrap());
    }
}
