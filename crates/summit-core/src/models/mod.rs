//! Data models for goals and sub-goals.
//!
//! The whole persisted state is a single ordered collection of [`Goal`]s, each
//! owning an ordered list of [`SubGoal`]s. Both serialize the way the data file
//! stores them: the description lives under the `goal` key and the children
//! under `subGoals`.
//!
//! ```rust
//! use summit_core::models::{Goal, SubGoal};
//!
//! let goal = Goal {
//!     id: 1,
//!     text: Some("Learn Rust".to_string()),
//!     sub_goals: vec![SubGoal {
//!         id: 2,
//!         text: Some("Read the book".to_string()),
//!     }],
//! };
//!
//! let json = serde_json::to_value(&goal).unwrap();
//! assert_eq!(json["goal"], "Learn Rust");
//! assert_eq!(json["subGoals"][0]["id"], 2);
//! println!("{}", goal); // #1 Learn Rust
//! ```

pub mod goal;
pub mod sub_goal;


pub use goal::Goal;
pub use sub_goal::SubGoal;
