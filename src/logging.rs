//! File-based logging. The TUI owns stdout, so nothing is written to the console.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::defaults::Defaults;

/// Installs the global subscriber writing to a daily-rotated file in `log_dir`.
///
/// The filter comes from `RUST_LOG`, falling back to [`Defaults::LOG_FILTER`].
/// Keep the returned guard alive for the whole run or buffered lines are lost.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, Defaults::LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Defaults::LOG_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");
    Ok(guard)
}
