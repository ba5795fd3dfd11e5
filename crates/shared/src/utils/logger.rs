use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Logs go to `<log_dir>/<service_name>.log`
/// as JSON so stdout stays reserved for the operator report.
///
/// The returned guard flushes the writer on drop; keep it alive in `main`.
pub fn init_logger(log_dir: &str, service_name: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {log_dir}"))?;

    let file_appender = tracing_appender::rolling::never(log_dir, format!("{service_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(service = service_name, "logger initialized");

    Ok(guard)
}
