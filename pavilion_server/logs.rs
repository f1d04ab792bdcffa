use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up the logging configuration for the application.
///
/// Two layers: stdout, and a daily rotating file under `logs/`. Levels are
/// controlled by `RUST_LOG`; without it everything logs at `info` and the
/// pavilion crates at `debug`.
pub fn setup_logging() {
    let file_appender = tracing_appender::rolling::daily("logs", "pavilion.log");
    let (non_blocking_file, _guard_file) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_thread_ids(true)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter =
        "info,pavilion=debug,pavilion_app=debug,pavilion_db=debug,pavilion_web=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    // The appender guard must outlive the process for the file layer to
    // keep flushing.
    std::mem::forget(_guard_file);
}
