use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::error::TrackingError;
use crate::models::paused::PausedTorrentEntry;

/// JSON snapshot of the torrents paused by this tool and not yet resumed.
///
/// The file is replaced as a whole on every save (write to a sibling temp
/// file, then rename), so a failed save leaves the previous snapshot intact.
pub struct PausedStore {
    path: PathBuf,
}

impl PausedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the snapshot. Missing or unreadable files count as "nothing owed".
    pub fn load(&self) -> Vec<PausedTorrentEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not read paused torrents file, treating as empty"
                );
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Could not parse paused torrents file, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the snapshot with `entries`
    pub fn save(&self, entries: &[PausedTorrentEntry]) -> Result<(), TrackingError> {
        let json = serde_json::to_string_pretty(entries)?;
        let write_err = |source| TrackingError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp_path = self.tmp_path();
        let result = fs::File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp_path, &self.path));

        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(e));
        }

        info!(
            count = entries.len(),
            path = %self.path.display(),
            "Saved paused torrents with original states"
        );
        Ok(())
    }

    /// Delete the snapshot; a missing file is not an error
    pub fn clear(&self) -> Result<(), TrackingError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Removed paused torrents file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(TrackingError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
