//! Tracing subscriber setup for the host process.

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;

/// Initialize the global tracing subscriber.
///
/// Development builds log human-readable output with file/line
/// information; production logs JSON. The returned guard must be held
/// for the lifetime of the process, dropping it stops the writer.
pub fn init(config: &AppConfig) -> WorkerGuard {
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}
