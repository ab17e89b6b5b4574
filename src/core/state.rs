// Application state (AppState)

use crate::api::client::{QbtClient, TorrentClient};
use crate::api::remote::{RemoteHost, SshRemote};
use crate::core::config::Config;
use crate::models::torrent::TorrentState;
use crate::stores::paused_store::PausedStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Everything an operation needs, built once at process entry
#[derive(Clone)]
pub struct AppState {
    /// Torrent client collaborator
    pub client: Arc<dyn TorrentClient>,

    /// Remote host running the mover
    pub remote: Arc<dyn RemoteHost>,

    /// Tracking file of paused torrents
    pub store: Arc<PausedStore>,

    /// States that get a torrent paused before the mover runs
    pub trigger_states: Arc<HashSet<TorrentState>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(QbtClient::new(&config.client)),
            Arc::new(SshRemote::new(&config.remote)),
        )
    }

    pub fn with_collaborators(
        config: &Config,
        client: Arc<dyn TorrentClient>,
        remote: Arc<dyn RemoteHost>,
    ) -> Self {
        Self {
            client,
            remote,
            store: Arc::new(PausedStore::new(config.tracking.path.clone())),
            trigger_states: Arc::new(config.pause.states.iter().cloned().collect()),
        }
    }
}
