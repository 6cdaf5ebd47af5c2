//! Goal model definition and related functionality.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SubGoal;
use crate::params::PathId;

/// A top-level goal with its ordered sub-goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Description of the goal; absent after an update that supplied none
    #[serde(rename = "goal", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Sub-goals in insertion order
    #[serde(rename = "subGoals", default)]
    pub sub_goals: Vec<SubGoal>,
}

impl Goal {
    /// Finds the first sub-goal addressed by `id`.
    pub fn sub_goal_mut(&mut self, id: PathId) -> Option<&mut SubGoal> {
        self.sub_goals.iter_mut().find(|sub_goal| id.matches(sub_goal.id))
    }

    /// Position of the first sub-goal addressed by `id`.
    pub fn sub_goal_position(&self, id: PathId) -> Option<usize> {
        self.sub_goals.iter().position(|sub_goal| id.matches(sub_goal.id))
    }

    /// Highest id used by this goal or any of its sub-goals.
    pub fn max_id(&self) -> u64 {
        self.sub_goals
            .iter()
            .map(|sub_goal| sub_goal.id)
            .fold(self.id, u64::max)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.text.as_deref().unwrap_or("<no text>"))?;
        if !self.sub_goals.is_empty() {
            write!(f, " ({} sub-goals)", self.sub_goals.len())?;
        }
        Ok(())
    }
}
