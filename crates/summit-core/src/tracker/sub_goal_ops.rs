//! Sub-goal operations for the GoalTracker.

use log::info;

use super::{find_goal_mut, required_text, seed_ids, GoalTracker};
use crate::{
    error::{Result, TrackerError},
    models::SubGoal,
    params::{AddSubGoal, ChangeSubGoal, SubGoalRef},
};

impl GoalTracker {
    /// Appends a sub-goal to an existing goal.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the text is missing or empty,
    /// and `TrackerError::ParentGoalNotFound` if the goal does not exist
    pub async fn add_sub_goal(&self, params: &AddSubGoal) -> Result<SubGoal> {
        let text = required_text(params.goal.as_ref(), "goal", "SubGoal is required")?;
        let goal_id = params.goal_id;

        let sub_goal = self
            .with_store(move |store, ids| {
                let mut goals = store.load()?;
                seed_ids(ids, &goals);

                let parent = find_goal_mut(&mut goals, goal_id)
                    .ok_or(TrackerError::ParentGoalNotFound { id: goal_id })?;
                let sub_goal = SubGoal {
                    id: ids.next_id()?,
                    text: Some(text),
                };
                parent.sub_goals.push(sub_goal.clone());

                store.save(&goals)?;
                Ok(sub_goal)
            })
            .await?;

        info!("Added sub-goal {sub_goal} to goal {goal_id}");
        Ok(sub_goal)
    }

    /// Replaces the text of one sub-goal, leaving its siblings untouched.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ParentGoalNotFound` if the goal does not exist,
    /// and `TrackerError::SubGoalNotFound` if the goal has no such sub-goal
    pub async fn change_sub_goal(&self, params: &ChangeSubGoal) -> Result<SubGoal> {
        let ChangeSubGoal {
            goal_id,
            sub_goal_id,
            goal: text,
        } = params.clone();

        let sub_goal = self
            .with_store(move |store, _| {
                let mut goals = store.load()?;
                let parent = find_goal_mut(&mut goals, goal_id)
                    .ok_or(TrackerError::ParentGoalNotFound { id: goal_id })?;
                let parent_id = parent.id;
                let sub_goal =
                    parent
                        .sub_goal_mut(sub_goal_id)
                        .ok_or(TrackerError::SubGoalNotFound {
                            goal_id: parent_id,
                            id: sub_goal_id,
                        })?;
                sub_goal.text = text;
                let updated = sub_goal.clone();

                store.save(&goals)?;
                Ok(updated)
            })
            .await?;

        info!("Updated sub-goal {sub_goal} of goal {goal_id}");
        Ok(sub_goal)
    }

    /// Removes one sub-goal from its parent and returns it.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::ParentGoalNotFound` if the goal does not exist,
    /// and `TrackerError::SubGoalNotFound` if the goal has no such sub-goal
    pub async fn delete_sub_goal(&self, params: &SubGoalRef) -> Result<SubGoal> {
        let SubGoalRef {
            goal_id,
            sub_goal_id,
        } = *params;

        let sub_goal = self
            .with_store(move |store, _| {
                let mut goals = store.load()?;
                let parent = find_goal_mut(&mut goals, goal_id)
                    .ok_or(TrackerError::ParentGoalNotFound { id: goal_id })?;
                let index =
                    parent
                        .sub_goal_position(sub_goal_id)
                        .ok_or(TrackerError::SubGoalNotFound {
                            goal_id: parent.id,
                            id: sub_goal_id,
                        })?;
                let removed = parent.sub_goals.remove(index);

                store.save(&goals)?;
                Ok(removed)
            })
            .await?;

        info!("Deleted sub-goal {sub_goal} of goal {goal_id}");
        Ok(sub_goal)
    }
}
