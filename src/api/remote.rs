use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::config::RemoteConfig;
use crate::core::error::RemoteError;
use crate::utils::process::{run, stderr_text};

const PROBE_REPLY: &str = "connected";

/// Remote host operations: liveness probe and mover control
#[async_trait]
pub trait RemoteHost: Send + Sync {
    /// Round-trip probe; must answer within the configured timeout
    async fn check_reachable(&self) -> Result<(), RemoteError>;

    /// Whether the mover executable currently appears in the process list
    async fn mover_running(&self) -> Result<bool, RemoteError>;

    /// Start the mover detached; returns without waiting for it to finish
    async fn start_mover(&self) -> Result<(), RemoteError>;

    fn host(&self) -> &str;
}

/// [`RemoteHost`] reached through the system `ssh` client
pub struct SshRemote {
    ssh_binary: String,
    host: String,
    connect_timeout: Duration,
    mover_path: String,
    mover_start_command: String,
}

impl SshRemote {
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            ssh_binary: "ssh".to_string(),
            host: config.host.clone(),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            mover_path: config.mover_path.clone(),
            mover_start_command: config.mover_start_command.clone(),
        }
    }

    #[cfg(test)]
    fn with_ssh_binary(mut self, binary: &str) -> Self {
        self.ssh_binary = binary.to_string();
        self
    }

    fn args(&self, remote_command: &str) -> Vec<String> {
        vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout.as_secs()),
            self.host.clone(),
            remote_command.to_string(),
        ]
    }

    async fn exec(&self, remote_command: &str) -> Result<std::process::Output, RemoteError> {
        debug!(host = %self.host, command = %remote_command, "Running remote command");
        run(&self.ssh_binary, self.args(remote_command))
            .await
            .map_err(RemoteError::Spawn)
    }

    fn probe_command() -> String {
        format!("echo {}", PROBE_REPLY)
    }

    fn start_command(&self) -> String {
        format!("nohup {} >/dev/null 2>&1 &", self.mover_start_command)
    }

    fn pgrep_command(&self) -> String {
        format!("pgrep -f {}", self.mover_path)
    }
}

#[async_trait]
impl RemoteHost for SshRemote {
    async fn check_reachable(&self) -> Result<(), RemoteError> {
        let command = Self::probe_command();
        let output = tokio::time::timeout(self.connect_timeout, self.exec(&command))
            .await
            .map_err(|_| RemoteError::Timeout {
                host: self.host.clone(),
                timeout_secs: self.connect_timeout.as_secs(),
            })??;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if output.status.success() && stdout.contains(PROBE_REPLY) {
            return Ok(());
        }

        let stderr = stderr_text(&output);
        Err(RemoteError::Unreachable {
            host: self.host.clone(),
            detail: if stderr.is_empty() {
                format!("unexpected probe reply '{}'", stdout.trim())
            } else {
                stderr
            },
        })
    }

    async fn mover_running(&self) -> Result<bool, RemoteError> {
        let command = self.pgrep_command();
        let output = self.exec(&command).await?;

        // pgrep: 0 = match found, 1 = no match, anything else = failure
        match output.status.code() {
            Some(0) => Ok(!output.stdout.trim_ascii().is_empty()),
            Some(1) => Ok(false),
            code => Err(RemoteError::CommandFailed {
                host: self.host.clone(),
                command,
                code,
                stderr: stderr_text(&output),
            }),
        }
    }

    async fn start_mover(&self) -> Result<(), RemoteError> {
        let command = self.start_command();
        let output = self.exec(&command).await?;

        if !output.status.success() {
            return Err(RemoteError::CommandFailed {
                host: self.host.clone(),
                command,
                code: output.status.code(),
                stderr: stderr_text(&output),
            });
        }
        Ok(())
    }

    fn host(&self) -> &str {
        &self.host
    }
}
