// Centralized error handling for qbt-mover

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a single torrent-client CLI call
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}: {stderr}", exit_code_label(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to parse torrent list output: {0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Failures talking to the remote host over ssh
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Failed to execute ssh: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Connection to {host} timed out after {timeout_secs}s")]
    Timeout { host: String, timeout_secs: u64 },

    #[error("Host {host} is unreachable: {detail}")]
    Unreachable { host: String, detail: String },

    #[error("Remote command '{command}' on {host} exited with {}: {stderr}", exit_code_label(.code))]
    CommandFailed {
        host: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Failures reading or writing the paused-torrents tracking file
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("Failed to write tracking file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove tracking file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize paused torrents: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Invalid command-line selector
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("No command provided. Expected one of: {list}", list = crate::core::commands::SELECTORS.join(", "))]
    Missing,

    #[error("Invalid command '{0}'. Expected one of: {list}", list = crate::core::commands::SELECTORS.join(", "))]
    Invalid(String),
}

/// Reasons a pause, resume or poll operation was aborted
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("Torrent client error: {0}")]
    Client(#[from] ClientError),

    #[error("Remote host error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Tracking file error: {0}")]
    Tracking(#[from] TrackingError),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}
