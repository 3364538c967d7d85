use std::path::{Path, PathBuf};

use crate::error::{PoiError, Result};
use crate::tracker::Tracker;

/// A tracker kept as a JSON file on disk.
pub struct TrackerStore {
    path: PathBuf,
}

impl TrackerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Tracker> {
        if !self.path.exists() {
            return Err(PoiError::TrackerNotFound(self.path.clone()));
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let tracker: Tracker =
            serde_json::from_str(&contents).map_err(|e| PoiError::TrackerParse {
                path: self.path.clone(),
                source: e,
            })?;

        tracker.check_ids().map_err(|reason| PoiError::TrackerInvalid {
            path: self.path.clone(),
            reason,
        })?;

        log::debug!(
            "loaded tracker '{}' with {} issue(s) from {}",
            tracker.title,
            tracker.issues().len(),
            self.path.display()
        );
        Ok(tracker)
    }

    pub fn save(&self, tracker: &Tracker) -> Result<()> {
        let write_err = |e: std::io::Error| PoiError::TrackerWrite {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = serde_json::to_string_pretty(tracker)?;
        std::fs::write(&self.path, contents).map_err(write_err)?;

        log::debug!("saved tracker to {}", self.path.display());
        Ok(())
    }
}
