//! Subscriber setup for the crate's `tracing` events.
//!
//! The library only emits events: `trace!` per descent iteration (`debug!`
//! when `GdOptions::verbose` is set), `debug!`/`warn!` when a run ends,
//! and `debug!`/`info!` per sweep trial and cell. Binaries, tests and
//! notebooks that want to see them call [`init_tracing`] once, which needs
//! the `obs_tracing` feature; without it [`init_tracing`] is a no-op.
//!
//! Environment variables
//! ---------------------
//! - `RUST_LOG`: filter directive (default `quad_descent=info,warn`).
//! - `QUAD_DESCENT_LOG_FORMAT`: `pretty` or `compact` (default `compact`).
#[cfg(feature = "obs_tracing")]
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output layout of the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human-oriented.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised is `Compact`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `"quad_descent=debug"`.
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl LoggingConfig {
    pub fn new(filter: impl Into<String>) -> Self {
        Self { filter: filter.into(), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let format = std::env::var("QUAD_DESCENT_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();
        let filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "quad_descent=info,warn".to_string());
        Self { format, filter, with_ansi: true, with_target: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// The filter directive did not parse.
    InvalidFilter { filter: String, reason: String },
    /// A global subscriber is already installed.
    AlreadyInitialized,
}

impl std::error::Error for LoggingError {}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter { filter, reason } => {
                write!(f, "Invalid log filter '{filter}': {reason}")
            }
            LoggingError::AlreadyInitialized => {
                write!(f, "A global tracing subscriber is already installed")
            }
        }
    }
}

/// Install a global `fmt` subscriber filtered by `config.filter`.
///
/// # Errors
/// - [`LoggingError::InvalidFilter`] for an unparsable directive.
/// - [`LoggingError::AlreadyInitialized`] if called twice in one process.
#[cfg(feature = "obs_tracing")]
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::InvalidFilter {
        filter: config.filter.clone(),
        reason: e.to_string(),
    })?;

    let installed = match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()
        }
    };
    installed.map_err(|_| LoggingError::AlreadyInitialized)
}

/// No-op without the `obs_tracing` feature.
#[cfg(not(feature = "obs_tracing"))]
pub fn init_tracing(_config: &LoggingConfig) -> Result<(), LoggingError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify format parsing and explicit filter construction.
    fn format_parsing_and_config() {
        // Act
        let config = LoggingConfig::new("quad_descent=debug");

        // Assert
        assert_eq!(LogFormat::parse(" Pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("json"), LogFormat::Compact);
        assert_eq!(config.filter, "quad_descent=debug");
    }

    #[cfg(feature = "obs_tracing")]
    #[test]
    // Purpose
    // -------
    // Ensure a malformed directive is reported rather than installed.
    fn init_rejects_bad_filter() {
        // Arrange
        let config = LoggingConfig::new("quad_descent=notalevel");

        // Act
        let result = init_tracing(&config);

        // Assert
        assert!(matches!(result, Err(LoggingError::InvalidFilter { .. })));
    }
}
