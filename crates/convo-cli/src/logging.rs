//! Log setup for the editor.
//!
//! The TUI owns the terminal, so logs go to a file under
//! `${CONVO_HOME}/logs`. Filtering is controlled by the `CONVO_LOG` env var
//! (standard `EnvFilter` syntax); default level is `info`.

use anyhow::{Context, Result};
use convo_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber writing to the log file.
///
/// The returned guard must stay alive for the process lifetime or buffered
/// log lines are dropped.
pub fn init() -> Result<WorkerGuard> {
    let dir = paths::logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create log dir {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, "convo.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("CONVO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
