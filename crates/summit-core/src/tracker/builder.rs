//! Builder for creating and configuring GoalTracker instances.

use std::path::{Path, PathBuf};

use log::warn;
use tokio::task;

use super::GoalTracker;
use crate::{
    error::{Result, ResultExt, TrackerError},
    store::GoalStore,
};

/// Data file used when none is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "goals.json";

/// Builder for creating and configuring GoalTracker instances.
#[derive(Debug, Clone, Default)]
pub struct GoalTrackerBuilder {
    data_file: Option<PathBuf>,
}

impl GoalTrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_file: None }
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses [`DEFAULT_DATA_FILE`] in the current working
    /// directory.
    pub fn with_data_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// The data file is read once so that an unreadable file surfaces here.
    /// A file with malformed contents is only logged: requests report it
    /// until the file is fixed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the parent directory cannot be
    /// created or the data file cannot be read
    pub async fn build(self) -> Result<GoalTracker> {
        let data_file = self
            .data_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        if let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| TrackerError::file_system(parent, e))?;
        }

        let store = GoalStore::new(&data_file);
        let startup_store = store.clone();
        let loaded = task::spawn_blocking(move || startup_store.load())
            .await
            .with_context("Task join error")?;

        match loaded {
            Ok(_) => {}
            Err(e @ TrackerError::MalformedStore { .. }) => {
                warn!("{e}; requests will fail until the file is repaired");
            }
            Err(e) => return Err(e),
        }

        Ok(GoalTracker::new(store))
    }
}
