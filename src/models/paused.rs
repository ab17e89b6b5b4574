use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::torrent::{unknown_state, TorrentRecord, TorrentState};

/// A torrent this tool paused and still owes a resume for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PausedTorrentEntry {
    pub hash: String,
    pub name: String,
    /// State observed right before the pause; resume is verified against it
    #[serde(default = "unknown_state")]
    pub original_state: TorrentState,
    /// RFC 3339 timestamp. Kept as text so files without an offset still load.
    pub paused_at: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub progress: f64,
}

impl PausedTorrentEntry {
    pub fn from_record(record: &TorrentRecord, paused_at: DateTime<Local>) -> Self {
        Self {
            hash: record.hash.clone(),
            name: record.name.clone(),
            original_state: record.state.clone(),
            paused_at: paused_at.to_rfc3339(),
            size: record.size,
            progress: record.progress,
        }
    }
}
