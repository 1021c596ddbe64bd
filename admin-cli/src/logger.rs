//! Logging setup
//!
//! Human-readable output on stderr; with a log directory, a daily-rolling
//! file instead. The returned guard must live until exit so buffered lines
//! are flushed.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init_logger(filter: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && dir.is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "shop-admin.log");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        subscriber.with_ansi(false).with_writer(writer).init();
        return Some(guard);
    }

    subscriber.with_writer(std::io::stderr).init();
    None
}
