use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::core::commands::Command;
use crate::core::config::Config;

// this runs before any operation touches the client or the remote host
pub fn check_settings(config: &Config, command: Command) -> Result<()> {
    let client = resolve_binary(&config.client.binary)?;
    debug!(path = %client.display(), "Torrent client found");

    if command.needs_remote() {
        let ssh = resolve_binary("ssh")?;
        debug!(path = %ssh.display(), "ssh client found");
    }

    Ok(())
}

/// Locate `binary` on PATH (or verify it when given as a path)
pub fn resolve_binary(binary: &str) -> Result<PathBuf> {
    which::which(binary).context(format!("{} is not installed or not executable", binary))
}
