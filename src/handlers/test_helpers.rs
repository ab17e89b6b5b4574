//! Recording fakes of the collaborator traits shared by handler tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::api::client::TorrentClient;
use crate::api::remote::RemoteHost;
use crate::core::config::Config;
use crate::core::error::{ClientError, RemoteError};
use crate::core::state::AppState;
use crate::models::torrent::{TorrentRecord, TorrentState};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCall {
    List,
    Pause(Vec<String>),
    Resume(Vec<String>),
    State(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteCall {
    Probe,
    MoverRunning,
    StartMover,
}

#[derive(Default)]
pub struct MockClient {
    pub torrents: Vec<TorrentRecord>,
    /// States reported by `torrent_state` after a resume; missing hashes are unknown to the client
    pub states_after_resume: HashMap<String, TorrentState>,
    pub fail_list: bool,
    pub fail_pause: bool,
    pub fail_resume: bool,
    pub fail_state_for: Option<String>,
    pub calls: Mutex<Vec<ClientCall>>,
}

impl MockClient {
    pub fn with_torrents(torrents: Vec<TorrentRecord>) -> Self {
        Self {
            torrents,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pause_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ClientCall::Pause(hashes) => Some(hashes),
                _ => None,
            })
            .collect()
    }

    pub fn resume_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ClientCall::Resume(hashes) => Some(hashes),
                _ => None,
            })
            .collect()
    }

    pub fn state_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ClientCall::State(hash) => Some(hash),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ClientCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure(command: &str) -> ClientError {
        ClientError::CommandFailed {
            command: command.to_string(),
            code: Some(1),
            stderr: "mock failure".to_string(),
        }
    }
}

#[async_trait]
impl TorrentClient for MockClient {
    async fn list_torrents(&self) -> Result<Vec<TorrentRecord>, ClientError> {
        self.record(ClientCall::List);
        if self.fail_list {
            return Err(Self::failure("qbt torrent list"));
        }
        Ok(self.torrents.clone())
    }

    async fn pause(&self, hashes: &[String]) -> Result<(), ClientError> {
        self.record(ClientCall::Pause(hashes.to_vec()));
        if self.fail_pause {
            return Err(Self::failure("qbt torrent pause"));
        }
        Ok(())
    }

    async fn resume(&self, hashes: &[String]) -> Result<(), ClientError> {
        self.record(ClientCall::Resume(hashes.to_vec()));
        if self.fail_resume {
            return Err(Self::failure("qbt torrent resume"));
        }
        Ok(())
    }

    async fn torrent_state(&self, hash: &str) -> Result<Option<TorrentState>, ClientError> {
        self.record(ClientCall::State(hash.to_string()));
        if self.fail_state_for.as_deref() == Some(hash) {
            return Err(Self::failure("qbt torrent list"));
        }
        Ok(self.states_after_resume.get(hash).cloned())
    }
}

pub struct MockRemote {
    pub reachable: bool,
    pub timeout: bool,
    pub mover_running: bool,
    pub fail_start: bool,
    pub calls: Mutex<Vec<RemoteCall>>,
}

impl Default for MockRemote {
    fn default() -> Self {
        Self {
            reachable: true,
            timeout: false,
            mover_running: false,
            fail_start: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockRemote {
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: RemoteCall) -> usize {
        self.calls().into_iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RemoteHost for MockRemote {
    async fn check_reachable(&self) -> Result<(), RemoteError> {
        self.record(RemoteCall::Probe);
        if self.timeout {
            return Err(RemoteError::Timeout {
                host: self.host().to_string(),
                timeout_secs: 10,
            });
        }
        if !self.reachable {
            return Err(RemoteError::Unreachable {
                host: self.host().to_string(),
                detail: "Connection refused".to_string(),
            });
        }
        Ok(())
    }

    async fn mover_running(&self) -> Result<bool, RemoteError> {
        self.record(RemoteCall::MoverRunning);
        Ok(self.mover_running)
    }

    async fn start_mover(&self) -> Result<(), RemoteError> {
        self.record(RemoteCall::StartMover);
        if self.fail_start {
            return Err(RemoteError::CommandFailed {
                host: self.host().to_string(),
                command: "nohup mover start >/dev/null 2>&1 &".to_string(),
                code: Some(255),
                stderr: "mock failure".to_string(),
            });
        }
        Ok(())
    }

    fn host(&self) -> &str {
        "mock-host"
    }
}

pub fn test_config(tracking_path: &Path, states: &[&str]) -> Config {
    let states = states
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(", ");
    Config::from_toml(&format!(
        "[remote]\nhost = \"mock-host\"\n\n[pause]\nstates = [{}]\n\n[tracking]\npath = \"{}\"\n",
        states,
        tracking_path.display()
    ))
    .unwrap()
}

pub fn test_state(
    tracking_path: &Path,
    states: &[&str],
    client: Arc<MockClient>,
    remote: Arc<MockRemote>,
) -> AppState {
    let config = test_config(tracking_path, states);
    AppState::with_collaborators(&config, client, remote)
}

pub fn torrent(hash: &str, state: &str) -> TorrentRecord {
    TorrentRecord::new(hash, &format!("Torrent {}", hash), TorrentState::from(state))
}
