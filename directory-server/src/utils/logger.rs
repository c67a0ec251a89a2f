//! Logging Infrastructure
//!
//! Structured logging to stdout, plus a daily rolling file when a log
//! directory is configured.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the background file writer alive; drop it only at process exit
pub type LoggerGuard = Option<WorkerGuard>;

const LOG_FILE_PREFIX: &str = "directory-server.log";

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    log_dir: Option<&str>,
) -> anyhow::Result<LoggerGuard> {
    let level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},surrealdb=warn,tower_http=info")));

    let stdout_layer = fmt::layer()
        .with_ansi(true)
        .with_target(false)
        .with_writer(std::io::stdout);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(Path::new(dir))
                .with_context(|| format!("Failed to create log directory {dir}"))?;
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
