use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The binary logs under its bin name (`playerdesk`), the libraries under their crate names.
const DEFAULT_FILTER: &str =
    "info,playerdesk=debug,playerdesk_app=debug,playerdesk_remote=debug,playerdesk_web=debug";

/// Sets up the logging configuration for the application.
///
/// Two layers: stdout, and a daily rotating file under `logs/`.
/// Log levels come from `RUST_LOG`; without it, `info` for everything
/// and `debug` for the playerdesk crates.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "playerdesk.log");
    let (non_blocking_file, guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The guard flushes the file writer on drop; it has to live as long as the process.
    std::mem::forget(guard_file);
}
