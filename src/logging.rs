// src/logging.rs
//! Logging setup and the `app_log!` / `app_span!` macros used across the crate
//!
//! The macros keep the `app_log!(level, ...)` / `app_span!(name, fields)` call
//! shape of the graflog macros used in cvenom, expanded straight onto `tracing`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "resume_scanner=info";

/// Log through `tracing` at the given level: `app_log!(info, "...", args)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::__tracing::$level!($($arg)+)
    };
}

/// Open an info-level span: `app_span!("name", field = %value)`
#[macro_export]
macro_rules! app_span {
    ($name:expr) => {
        $crate::__tracing::info_span!($name)
    };
    ($name:expr, $($fields:tt)+) => {
        $crate::__tracing::info_span!($name, $($fields)+)
    };
}

/// Install the global subscriber: readable lines on stderr, plus JSON lines
/// appended to `log_file` when one is given.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(json_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
