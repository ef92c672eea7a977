//! Tracing subscriber setup for hosts embedding the runtime.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the host. [`init`] is a convenience for the common case.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install a plain-text subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter` when set.
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

fn build_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter).map_err(|err| LoggingError::InvalidFilter {
            filter: default_filter.to_string(),
            message: err.to_string(),
        }),
    }
}
