//! High-level tracker API for managing goals and sub-goals.
//!
//! [`GoalTracker`] is the single entry point used by interfaces. Every
//! operation follows the same cycle against the [`GoalStore`]:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │  store.load  │───▶│ linear search +  │───▶│  store.save  │
//! │ (whole file) │    │ in-memory change │    │ (whole file) │
//! └──────────────┘    └──────────────────┘    └──────────────┘
//! ```
//!
//! Input is validated before the file is read, and a failed lookup returns
//! before anything is written, so an operation either persists its full
//! effect or leaves the file untouched.
//!
//! The tracker itself does not serialise the cycle. Two operations running at
//! the same time can both load the old collection and the later save wins.
//! Callers that accept concurrent requests wrap the tracker in a mutex.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`GoalTracker`] instances
//! - [`goal_ops`]: Goal operations (create, list, change, delete)
//! - [`sub_goal_ops`]: Sub-goal operations (add, change, delete)
//!
//! # Usage
//!
//! ```rust
//! use summit_core::{params::CreateGoal, GoalTrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = GoalTrackerBuilder::new()
//!     .with_data_file(Some("goals.json"))
//!     .build()
//!     .await?;
//!
//! let goal = tracker
//!     .create_goal(&CreateGoal {
//!         goal: Some("Learn Rust".to_string()),
//!         sub_goals: Some(vec!["Read the book".to_string()]),
//!     })
//!     .await?;
//! println!("Created goal: {}", goal);
//! # Ok(())
//! # }
//! ```

use std::{path::Path, sync::Arc};

use tokio::task;

use crate::{
    error::{Result, ResultExt, TrackerError},
    ids::IdGenerator,
    models::Goal,
    params::PathId,
    store::GoalStore,
};

pub mod builder;
pub mod goal_ops;
pub mod sub_goal_ops;

#[cfg(test)]
mod tests;

pub use builder::GoalTrackerBuilder;

/// Main tracker interface for managing goals and sub-goals.
#[derive(Debug, Clone)]
pub struct GoalTracker {
    store: GoalStore,
    ids: Arc<IdGenerator>,
}

impl GoalTracker {
    /// Creates a new tracker backed by the given store.
    pub(crate) fn new(store: GoalStore) -> Self {
        Self {
            store,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Path of the data file backing this tracker.
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Runs a blocking store operation on the blocking thread pool.
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&GoalStore, &IdGenerator) -> Result<T> + Send + 'static,
    {
        let store = self.store.clone();
        let ids = Arc::clone(&self.ids);

        task::spawn_blocking(move || op(&store, &ids))
            .await
            .with_context("Task join error")?
    }
}

/// Finds the first goal addressed by `id`.
pub(crate) fn find_goal_mut(goals: &mut [Goal], id: PathId) -> Option<&mut Goal> {
    goals.iter_mut().find(|goal| id.matches(goal.id))
}

/// Makes sure ids already present in `goals` are never issued again.
pub(crate) fn seed_ids(ids: &IdGenerator, goals: &[Goal]) {
    if let Some(max) = goals.iter().map(Goal::max_id).max() {
        ids.observe(max);
    }
}

/// Extracts required, non-empty text or reports which field is missing.
pub(crate) fn required_text(text: Option<&String>, field: &str, reason: &str) -> Result<String> {
    text.filter(|text| !text.is_empty())
        .cloned()
        .ok_or_else(|| TrackerError::invalid_input(field).with_reason(reason))
}
