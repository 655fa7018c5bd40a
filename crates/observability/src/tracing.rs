//! Tracing/logging initialization.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_ENV: &str = "EVENTADMIN_LOG_FORMAT";
const LOG_FILTER_ENV: &str = "EVENTADMIN_LOG_FILTER";
const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported log format `{0}`; expected json|pretty")]
pub struct ParseLogFormatError(String);

/// Invalid observability settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ObservabilityConfigError {
    #[error(transparent)]
    Format(#[from] ParseLogFormatError),
    #[error("invalid EVENTADMIN_LOG_FILTER `{value}`: {message}")]
    Filter { value: String, message: String },
}

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ParseLogFormatError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    /// Directive string for `EnvFilter`; `None` falls back to `RUST_LOG`, then `info`.
    pub filter: Option<String>,
}

impl ObservabilityConfig {
    /// Read `EVENTADMIN_LOG_FORMAT` and `EVENTADMIN_LOG_FILTER`.
    pub fn from_env() -> Result<Self, ObservabilityConfigError> {
        Self::from_values(
            std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
            std::env::var(LOG_FILTER_ENV).ok().as_deref(),
        )
    }

    /// Both values are rejected up front; a bad filter is never silently replaced.
    pub fn from_values(
        format: Option<&str>,
        filter: Option<&str>,
    ) -> Result<Self, ObservabilityConfigError> {
        let format = match format {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let filter = match filter.map(str::trim).filter(|f| !f.is_empty()) {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|e| ObservabilityConfigError::Filter {
                    value: directives.to_string(),
                    message: e.to_string(),
                })?;
                Some(directives.to_string())
            }
            None => None,
        };
        Ok(Self { format, filter })
    }

    fn env_filter(&self) -> EnvFilter {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
                eprintln!("invalid log filter `{directives}` ({e}); using `{DEFAULT_FILTER}`");
                EnvFilter::new(DEFAULT_FILTER)
            }),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = config.env_filter();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);

    let _ = match config.format {
        LogFormat::Json => builder.json().with_target(false).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
