use chrono::Local;
use tracing::{error, info};

use crate::core::error::OperationError;
use crate::core::state::AppState;
use crate::handlers::mover::start_mover;
use crate::models::paused::PausedTorrentEntry;
use crate::utils::hash::short_hash;
use crate::utils::summary::summarize;

#[derive(Debug, Clone, PartialEq)]
pub struct PauseReport {
    /// Entries paused by this run, in listing order
    pub paused: Vec<PausedTorrentEntry>,
    pub mover_started: bool,
}

/// Pause every torrent in a trigger state, record it, then start the mover.
///
/// Aborts with no side effects when the remote host is unreachable or the
/// torrent listing fails.
pub async fn pause_torrents(state: &AppState) -> Result<PauseReport, OperationError> {
    if let Err(e) = state.remote.check_reachable().await {
        error!(
            host = %state.remote.host(),
            error = %e,
            "Skipping pause and mover start due to SSH connection failure"
        );
        return Err(e.into());
    }

    info!("Starting pause operation");

    let torrents = state.client.list_torrents().await.map_err(|e| {
        error!(error = %e, "Failed to list torrents");
        e
    })?;

    info!(
        total = torrents.len(),
        summary = %summarize(torrents.iter().map(|t| &t.state)),
        "Torrent status summary before pausing"
    );

    let paused_at = Local::now();
    let paused: Vec<PausedTorrentEntry> = torrents
        .iter()
        .filter(|t| state.trigger_states.contains(&t.state))
        .map(|t| PausedTorrentEntry::from_record(t, paused_at))
        .collect();

    if paused.is_empty() {
        info!("No torrents needed to be paused");
    } else {
        let hashes: Vec<String> = paused.iter().map(|e| e.hash.clone()).collect();

        state.client.pause(&hashes).await.map_err(|e| {
            error!(count = hashes.len(), error = %e, "Failed to pause torrents");
            e
        })?;

        for entry in &paused {
            info!(
                name = %entry.name,
                hash = %short_hash(&entry.hash),
                original_state = %entry.original_state,
                "Torrent paused"
            );
        }

        state.store.save(&paused).map_err(|e| {
            error!(error = %e, "Failed to record paused torrents");
            e
        })?;

        info!(
            count = paused.len(),
            summary = %summarize(paused.iter().map(|e| &e.original_state)),
            "Paused torrents"
        );
    }

    let mover_started = start_mover(state).await;

    Ok(PauseReport {
        paused,
        mover_started,
    })
}
