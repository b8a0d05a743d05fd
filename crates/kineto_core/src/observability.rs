//! Tracing subscriber initialization.

use kineto_error::ConfigError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_directive`
/// (for example `"info"`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str, format: LogFormat) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;
    debug!(?format, "Tracing initialized");
    Ok(())
}
