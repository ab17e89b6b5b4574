use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::core::config::ClientConfig;
use crate::core::error::ClientError;
use crate::models::torrent::{TorrentRecord, TorrentState};
use crate::utils::hash::join_hashes;
use crate::utils::process::{display_command, run, stderr_text};

/// Torrent client operations the coordinator depends on
#[async_trait]
pub trait TorrentClient: Send + Sync {
    /// List every torrent known to the client
    async fn list_torrents(&self) -> Result<Vec<TorrentRecord>, ClientError>;

    /// Pause all `hashes` in a single request
    async fn pause(&self, hashes: &[String]) -> Result<(), ClientError>;

    /// Resume all `hashes` in a single request
    async fn resume(&self, hashes: &[String]) -> Result<(), ClientError>;

    /// Current state of one torrent, `None` if the client no longer knows it
    async fn torrent_state(&self, hash: &str) -> Result<Option<TorrentState>, ClientError>;
}

/// [`TorrentClient`] backed by the `qbt` command-line client
pub struct QbtClient {
    binary: String,
    config: Option<PathBuf>,
}

impl QbtClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            config: config.config.clone(),
        }
    }

    fn args(&self, base: &[&str]) -> Vec<String> {
        let mut args: Vec<String> = base.iter().map(|s| s.to_string()).collect();
        if let Some(config) = &self.config {
            args.push("--config".to_string());
            args.push(config.display().to_string());
        }
        args
    }

    /// Run `qbt` and return stdout, failing on non-zero exit
    async fn exec(&self, base: &[&str]) -> Result<Vec<u8>, ClientError> {
        let args = self.args(base);
        let command = display_command(&self.binary, &args);
        debug!(command = %command, "Running torrent client");

        let output = run(&self.binary, &args).await.map_err(|source| ClientError::Spawn {
            program: self.binary.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ClientError::CommandFailed {
                command,
                code: output.status.code(),
                stderr: stderr_text(&output),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl TorrentClient for QbtClient {
    async fn list_torrents(&self) -> Result<Vec<TorrentRecord>, ClientError> {
        let stdout = self.exec(&["torrent", "list", "--output", "json"]).await?;
        parse_torrent_list(&stdout)
    }

    async fn pause(&self, hashes: &[String]) -> Result<(), ClientError> {
        let joined = join_hashes(hashes);
        self.exec(&["torrent", "pause", "--hashes", joined.as_str()]).await?;
        Ok(())
    }

    async fn resume(&self, hashes: &[String]) -> Result<(), ClientError> {
        let joined = join_hashes(hashes);
        self.exec(&["torrent", "resume", "--hashes", joined.as_str()]).await?;
        Ok(())
    }

    async fn torrent_state(&self, hash: &str) -> Result<Option<TorrentState>, ClientError> {
        let stdout = self
            .exec(&["torrent", "list", "--hashes", hash, "--output", "json"])
            .await?;
        Ok(parse_torrent_list(&stdout)?
            .into_iter()
            .find(|t| t.hash == hash)
            .map(|t| t.state))
    }
}

/// Parse `qbt torrent list --output json`. An empty output means no torrents.
pub fn parse_torrent_list(stdout: &[u8]) -> Result<Vec<TorrentRecord>, ClientError> {
    if stdout.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(binary: String, config: Option<PathBuf>) -> QbtClient {
        QbtClient::new(&ClientConfig { binary, config })
    }

    #[test]
    fn test_parse_torrent_list() {
        let json = br#"[{"hash":"aaa","name":"A","state":"stalledUP","size":1,"progress":1.0}]"#;
        let torrents = parse_torrent_list(json).unwrap();
        assert_eq!(torrents.len(), 1);
        assert_eq!(torrents[0].state, TorrentState::StalledUp);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_torrent_list(b"").unwrap().is_empty());
        assert!(parse_torrent_list(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        let result = parse_torrent_list(b"Error: could not login");
        assert!(matches!(result, Err(ClientError::InvalidOutput(_))));
    }

    #[test]
    fn test_config_flag_appended() {
        let client = client_for("qbt".to_string(), Some(PathBuf::from("/cfg/.qbt.toml")));
        assert_eq!(
            client.args(&["torrent", "list"]),
            vec!["torrent", "list", "--config", "/cfg/.qbt.toml"]
        );

        let client = client_for("qbt".to_string(), None);
        assert_eq!(client.args(&["torrent", "list"]), vec!["torrent", "list"]);
    }

    #[tokio::test]
    async fn test_empty_listing_from_binary() {
        // `true` exits 0 without output, like a client with no torrents
        let torrents = client_for("true".to_string(), None).list_torrents().await.unwrap();
        assert!(torrents.is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_listing_from_binary() {
        // `echo` prints its arguments, which is not JSON
        let result = client_for("echo".to_string(), None).list_torrents().await;
        assert!(matches!(result, Err(ClientError::InvalidOutput(_))));
    }

    #[tokio::test]
    async fn test_pause_succeeds_on_zero_exit() {
        let client = client_for("echo".to_string(), None);
        client
            .pause(&["h1".to_string(), "h2".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let err = client_for("false".to_string(), None)
            .resume(&["h1".to_string()])
            .await
            .unwrap_err();

        match err {
            ClientError::CommandFailed { command, code, .. } => {
                assert_eq!(command, "false torrent resume --hashes h1");
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected CommandFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_torrent_state_unknown_hash() {
        // No output means the client does not know the hash
        let client = client_for("true".to_string(), None);
        assert_eq!(client.torrent_state("h1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let client = client_for("/nonexistent/qbt".to_string(), None);
        let result = client.list_torrents().await;
        assert!(matches!(result, Err(ClientError::Spawn { .. })));
    }
}
