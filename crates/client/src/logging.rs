//! Tracing subscriber setup.
//!
//! Stdout belongs to the host protocol, so logs only ever go to stderr and,
//! optionally, a session log file.
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::BotConfig;

/// Installs the global subscriber described by `config`.
///
/// The returned guard flushes the file log when dropped; keep it alive for
/// the whole session.
pub fn setup_logging(config: &BotConfig) -> Result<Option<WorkerGuard>> {
    let session_id = config.session_id();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = config.stderr_log.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
    });

    let (file_layer, guard, log_file) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let file_name = format!("{}.log", session_id);
            let file_appender = tracing_appender::rolling::never(dir, &file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard), Some(dir.join(file_name)))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    if let Some(path) = log_file {
        tracing::info!("Log file: {}", path.display());
    }

    Ok(guard)
}
