use tracing::{error, info, warn};

use crate::core::error::OperationError;
use crate::core::state::AppState;
use crate::models::torrent::TorrentState;
use crate::utils::hash::short_hash;
use crate::utils::summary::summarize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeReport {
    /// Torrents included in the resume request
    pub resumed: usize,
    /// Torrents whose state after resuming matched the recorded one
    pub restored: usize,
    pub mismatched: usize,
}

/// Resume every torrent recorded by an earlier pause and drop the record.
///
/// Without a record this is a no-op, so running it repeatedly is safe.
pub async fn resume_paused_torrents(state: &AppState) -> Result<ResumeReport, OperationError> {
    info!("Starting resume operation");

    let entries = state.store.load();
    if entries.is_empty() {
        info!("No paused torrents found to resume");
        return Ok(ResumeReport::default());
    }

    info!(
        count = entries.len(),
        summary = %summarize(entries.iter().map(|e| &e.original_state)),
        "Will attempt to resume torrents"
    );

    let hashes: Vec<String> = entries.iter().map(|e| e.hash.clone()).collect();
    state.client.resume(&hashes).await.map_err(|e| {
        error!(count = hashes.len(), error = %e, "Failed to resume torrents");
        e
    })?;

    let mut report = ResumeReport {
        resumed: entries.len(),
        ..ResumeReport::default()
    };

    for entry in &entries {
        let current = match state.client.torrent_state(&entry.hash).await {
            Ok(Some(current)) => current,
            Ok(None) => TorrentState::Unknown,
            Err(e) => {
                warn!(
                    hash = %short_hash(&entry.hash),
                    error = %e,
                    "Could not query torrent state"
                );
                TorrentState::Unknown
            }
        };

        info!(
            name = %entry.name,
            hash = %short_hash(&entry.hash),
            original_state = %entry.original_state,
            current_state = %current,
            "Torrent resumed"
        );

        if current == entry.original_state {
            info!(
                name = %entry.name,
                state = %entry.original_state,
                "✓ Successfully restored torrent to original state"
            );
            report.restored += 1;
        } else {
            warn!(
                name = %entry.name,
                expected = %entry.original_state,
                actual = %current,
                "⚠ Torrent state mismatch after resume"
            );
            report.mismatched += 1;
        }
    }

    info!(
        resumed = report.resumed,
        total = entries.len(),
        restored = report.restored,
        mismatched = report.mismatched,
        "Resumed torrents"
    );

    state.store.clear()?;

    Ok(report)
}

/// Targeted resume: only the recorded torrents, never every paused torrent
pub async fn force_resume(state: &AppState) -> Result<ResumeReport, OperationError> {
    info!("Using targeted resume instead of force-resume ALL");
    resume_paused_torrents(state).await
}
