//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber to write diagnostic logs to a file
//! under the data directory. Logging is purely diagnostic: initialization
//! failures are swallowed and the app runs unlogged.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// The filter level comes from `config.log_level`, defaulting to `"info"`;
/// the `RUST_LOG`-style syntax is accepted. Logs land in `ladle.log` inside
/// the data directory. Stdout is never used — it belongs to the UI.
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Silently does nothing if the directory or file cannot be created.
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = config
        .data_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::data_dir);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join(crate::infrastructure::paths::LOG_FILE);
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
