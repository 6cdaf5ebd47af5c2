//! Flat-file persistence for the goal collection.
//!
//! The whole collection lives in one JSON document. Every [`GoalStore::load`]
//! reads and parses the entire file and every [`GoalStore::save`] rewrites it,
//! so there is no cache to invalidate and no partial write to reconcile.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, TrackerError},
    models::Goal,
};

/// Handle on the JSON data file.
#[derive(Debug, Clone)]
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    /// Creates a store backed by the file at `path`. The file does not need
    /// to exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection.
    ///
    /// A missing or zero-length file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::MalformedStore` if the file is not a JSON array
    /// of goals, and `TrackerError::FileSystem` if it cannot be read.
    pub fn load(&self) -> Result<Vec<Goal>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Data file {} does not exist yet", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(TrackerError::file_system(&self.path, e)),
        };

        if contents.is_empty() {
            return Ok(Vec::new());
        }

        let goals: Vec<Goal> =
            serde_json::from_slice(&contents).map_err(|source| TrackerError::MalformedStore {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} goals from {}", goals.len(), self.path.display());
        Ok(goals)
    }

    /// Overwrites the file with the full collection, pretty-printed with a
    /// two-space indent.
    ///
    /// The write is not atomic: a crash part-way through can leave a
    /// truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, goals: &[Goal]) -> Result<()> {
        let json = serde_json::to_string_pretty(goals)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TrackerError::file_system(parent, e))?;
        }

        fs::write(&self.path, json).map_err(|e| TrackerError::file_system(&self.path, e))?;
        debug!("Saved {} goals to {}", goals.len(), self.path.display());
        Ok(())
    }
}
