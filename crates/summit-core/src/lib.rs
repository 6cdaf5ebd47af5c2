//! Core library for the Summit goal tracking service.
//!
//! This crate holds everything that is independent of the HTTP surface: the
//! goal and sub-goal models, the flat-file JSON store, id generation, and the
//! [`GoalTracker`] operations that tie them together.
//!
//! # Quick Start
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
//!         goal: Some("Run a marathon".to_string()),
//!         sub_goals: Some(vec!["Run 10k".to_string(), "Run 21k".to_string()]),
//!     })
//!     .await?;
//!
//! for goal in tracker.list_goals().await? {
//!     println!("Goal: {}", goal);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use error::{Result, TrackerError};
pub use ids::IdGenerator;
pub use models::{Goal, SubGoal};
pub use params::{AddSubGoal, ChangeGoal, ChangeSubGoal, CreateGoal, Id, PathId, SubGoalRef};
pub use store::GoalStore;
pub use tracker::{builder::DEFAULT_DATA_FILE, GoalTracker, GoalTrackerBuilder};
