//! Tracing subscriber setup
//!
//! The terminal belongs to the UI, so diagnostics go to a log file.
//! Shared between the binary and tests.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when the filter variable is unset or unparseable
const DEFAULT_DIRECTIVE: &str = "debug";

/// Initialize the global tracing subscriber with file logging.
///
/// Filtering follows `RUST_LOG`, defaulting to DEBUG.
pub fn init_global(log_file_path: &Path) -> std::io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file).init();
    Ok(())
}

/// Build a subscriber that writes formatted records to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    build_subscriber_with_filter(log_file, filter_from_env(EnvFilter::DEFAULT_ENV))
}

/// Read filter directives from the environment variable `var`.
///
/// Falls back to DEBUG only when `var` is unset or invalid, so a level set
/// there can also lower verbosity.
pub fn filter_from_env(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn build_subscriber_with_filter(
    log_file: File,
    env_filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
