use anyhow::{Context, Result};
use qbt_mover::core::commands::Command;
use qbt_mover::core::config::Config;
use qbt_mover::core::startup::check_settings;
use qbt_mover::core::state::AppState;
use qbt_mover::core::tracing_init::init_tracing;
use qbt_mover::handlers::dispatch;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "/app/config/config.toml";
const CONFIG_ENV_VAR: &str = "QBT_MOVER_CONFIG";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config_path = args
        .get(2)
        .map(PathBuf::from)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    // Nothing can be logged before the config names the log file
    let config = match load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "qbt-mover failed");
            ExitCode::FAILURE
        }
    }
}

fn load(config_path: &Path) -> Result<Config> {
    let config = Config::from_file(config_path).context(format!(
        "Failed to load configuration from '{}'. \
        Copy config.example.toml to that location and adjust the values.",
        config_path.display()
    ))?;

    init_tracing(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %config_path.display(),
        "{} starting",
        env!("CARGO_PKG_NAME")
    );

    Ok(config)
}

fn run(config: &Config, selector: Option<&str>) -> Result<()> {
    let command = Command::parse(selector)?;

    check_settings(config, command)?;

    // One invocation runs one sequential operation
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    let state = AppState::new(config);

    runtime
        .block_on(dispatch(command, &state))
        .context(format!("{} operation aborted", command.as_str()))?;

    info!(command = command.as_str(), "Operation finished");
    Ok(())
}
