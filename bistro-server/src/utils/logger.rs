//! Logging Infrastructure
//!
//! Console output by default, JSON lines when requested, and a daily
//! rolling file when a log directory is given.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. The returned guard must
/// be held for the lifetime of the process when file output is enabled,
/// otherwise buffered lines are lost.
pub fn init_logger_with_file(
    log_level: &str,
    json: bool,
    log_dir: Option<&Path>,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{log_level},tower_http=info,sqlx=warn"))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_writer = log_dir.filter(|dir| dir.exists()).map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "bistro-server.log");
        tracing_appender::non_blocking(file_appender)
    });

    match (json, file_writer) {
        (true, Some((writer, guard))) => {
            builder.json().with_writer(writer).init();
            Some(guard)
        }
        (false, Some((writer, guard))) => {
            builder.with_ansi(false).with_writer(writer).init();
            Some(guard)
        }
        (true, None) => {
            builder.json().init();
            None
        }
        (false, None) => {
            builder.init();
            None
        }
    }
}
