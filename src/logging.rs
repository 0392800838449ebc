//! Tracing subscriber setup for binaries and tests embedding the harness.
//!
//! Libraries should not install a global subscriber on their own; this is
//! a convenience for applications that have none yet.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{Error, Result};

/// Output format for [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive` (for example
/// `"info"` or `"trueno_scientist::observation=warn"`).
///
/// # Errors
///
/// Returns [`Error::Logging`] if the directive is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(default_directive: &str, format: LogFormat) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|e| Error::Logging(format!("invalid filter '{default_directive}': {e}")))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
