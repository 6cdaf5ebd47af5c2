//! SubGoal model definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A child entry of a [`super::Goal`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubGoal {
    /// Identifier, unique within the parent goal
    pub id: u64,

    /// Description of the sub-goal
    #[serde(rename = "goal", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl fmt::Display for SubGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.text.as_deref().unwrap_or("<no text>"))
    }
}
