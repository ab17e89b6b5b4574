use serde::{Deserialize, Serialize};
use std::fmt;

/// Torrent state as reported by the client.
///
/// Known qBittorrent states get their own variant; anything else is kept
/// verbatim in [`TorrentState::Other`] so newer client versions never break
/// parsing or comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TorrentState {
    Error,
    MissingFiles,
    Uploading,
    PausedUp,
    StoppedUp,
    QueuedUp,
    StalledUp,
    CheckingUp,
    ForcedUp,
    Allocating,
    Downloading,
    MetaDl,
    PausedDl,
    StoppedDl,
    QueuedDl,
    StalledDl,
    CheckingDl,
    ForcedDl,
    CheckingResumeData,
    Moving,
    Unknown,
    Other(String),
}

impl TorrentState {
    pub fn as_str(&self) -> &str {
        match self {
            TorrentState::Error => "error",
            TorrentState::MissingFiles => "missingFiles",
            TorrentState::Uploading => "uploading",
            TorrentState::PausedUp => "pausedUP",
            TorrentState::StoppedUp => "stoppedUP",
            TorrentState::QueuedUp => "queuedUP",
            TorrentState::StalledUp => "stalledUP",
            TorrentState::CheckingUp => "checkingUP",
            TorrentState::ForcedUp => "forcedUP",
            TorrentState::Allocating => "allocating",
            TorrentState::Downloading => "downloading",
            TorrentState::MetaDl => "metaDL",
            TorrentState::PausedDl => "pausedDL",
            TorrentState::StoppedDl => "stoppedDL",
            TorrentState::QueuedDl => "queuedDL",
            TorrentState::StalledDl => "stalledDL",
            TorrentState::CheckingDl => "checkingDL",
            TorrentState::ForcedDl => "forcedDL",
            TorrentState::CheckingResumeData => "checkingResumeData",
            TorrentState::Moving => "moving",
            TorrentState::Unknown => "unknown",
            TorrentState::Other(s) => s,
        }
    }
}

impl From<&str> for TorrentState {
    fn from(s: &str) -> Self {
        match s {
            "error" => TorrentState::Error,
            "missingFiles" => TorrentState::MissingFiles,
            "uploading" => TorrentState::Uploading,
            "pausedUP" => TorrentState::PausedUp,
            "stoppedUP" => TorrentState::StoppedUp,
            "queuedUP" => TorrentState::QueuedUp,
            "stalledUP" => TorrentState::StalledUp,
            "checkingUP" => TorrentState::CheckingUp,
            "forcedUP" => TorrentState::ForcedUp,
            "allocating" => TorrentState::Allocating,
            "downloading" => TorrentState::Downloading,
            "metaDL" => TorrentState::MetaDl,
            "pausedDL" => TorrentState::PausedDl,
            "stoppedDL" => TorrentState::StoppedDl,
            "queuedDL" => TorrentState::QueuedDl,
            "stalledDL" => TorrentState::StalledDl,
            "checkingDL" => TorrentState::CheckingDl,
            "forcedDL" => TorrentState::ForcedDl,
            "checkingResumeData" => TorrentState::CheckingResumeData,
            "moving" => TorrentState::Moving,
            "unknown" => TorrentState::Unknown,
            other => TorrentState::Other(other.to_string()),
        }
    }
}

impl From<String> for TorrentState {
    fn from(s: String) -> Self {
        TorrentState::from(s.as_str())
    }
}

impl From<TorrentState> for String {
    fn from(state: TorrentState) -> Self {
        match state {
            TorrentState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TorrentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `qbt torrent list --output json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TorrentRecord {
    pub hash: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "unknown_state")]
    pub state: TorrentState,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub progress: f64,
}

pub(crate) fn unknown_state() -> TorrentState {
    TorrentState::Unknown
}

impl TorrentRecord {
    pub fn new(hash: &str, name: &str, state: TorrentState) -> Self {
        Self {
            hash: hash.to_string(),
            name: name.to_string(),
            state,
            size: 0,
            progress: 0.0,
        }
    }
}
