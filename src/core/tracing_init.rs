use crate::core::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S]";

/// Install the global subscriber writing to the log file and, if enabled, stdout.
///
/// Fails when the log file cannot be opened for appending.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .context(format!("{} is not writable", config.path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    if config.format == "json" {
        let stdout_layer = config.console.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_timer(timer.clone())
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(timer)
                    .with_writer(Mutex::new(log_file)),
            )
            .with(stdout_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
    } else {
        // Human-readable lines; the file never gets ANSI escapes
        let stdout_layer = config.console.then(|| {
            tracing_subscriber::fmt::layer()
                .with_timer(timer.clone())
                .with_target(false)
                .with_level(true)
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(timer)
                    .with_target(false)
                    .with_level(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(log_file)),
            )
            .with(stdout_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    Ok(())
}
