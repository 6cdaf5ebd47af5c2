//! Goal operations for the GoalTracker.

use log::{debug, info};

use super::{find_goal_mut, required_text, seed_ids, GoalTracker};
use crate::{
    error::{Result, TrackerError},
    models::{Goal, SubGoal},
    params::{ChangeGoal, CreateGoal, Id},
};

impl GoalTracker {
    /// Creates a goal, and optionally its sub-goals, at the end of the
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the goal text is missing or
    /// empty, and `TrackerError::IdsExhausted` if no id is left to assign;
    /// the data file is not touched in either case.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        let text = required_text(params.goal.as_ref(), "goal", "Goal is required")?;
        let sub_goal_texts = params.sub_goals.clone().unwrap_or_default();

        let goal = self
            .with_store(move |store, ids| {
                let mut goals = store.load()?;
                seed_ids(ids, &goals);

                let id = ids.next_id()?;
                let sub_goals = sub_goal_texts
                    .into_iter()
                    .map(|text| {
                        Ok(SubGoal {
                            id: ids.next_id()?,
                            text: Some(text),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let goal = Goal {
                    id,
                    text: Some(text),
                    sub_goals,
                };

                goals.push(goal.clone());
                store.save(&goals)?;
                Ok(goal)
            })
            .await?;

        info!("Created goal {goal}");
        Ok(goal)
    }

    /// Returns the whole collection in stored order.
    pub async fn list_goals(&self) -> Result<Vec<Goal>> {
        let goals = self.with_store(|store, _| store.load()).await?;
        debug!("Listed {} goals", goals.len());
        Ok(goals)
    }

    /// Replaces the text of a goal. A `None` text is stored as absent.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::GoalNotFound` if no goal has the given id
    pub async fn change_goal(&self, params: &ChangeGoal) -> Result<Goal> {
        let id = params.id;
        let text = params.goal.clone();

        let goal = self
            .with_store(move |store, _| {
                let mut goals = store.load()?;
                let goal = find_goal_mut(&mut goals, id).ok_or(TrackerError::GoalNotFound { id })?;
                goal.text = text;
                let updated = goal.clone();

                store.save(&goals)?;
                Ok(updated)
            })
            .await?;

        info!("Updated goal {goal}");
        Ok(goal)
    }

    /// Permanently removes a goal together with all of its sub-goals and
    /// returns what was removed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::GoalNotFound` if no goal has the given id
    pub async fn delete_goal(&self, params: &Id) -> Result<Goal> {
        let id = params.id;

        let goal = self
            .with_store(move |store, _| {
                let mut goals = store.load()?;
                let index = goals
                    .iter()
                    .position(|goal| id.matches(goal.id))
                    .ok_or(TrackerError::GoalNotFound { id })?;
                let removed = goals.remove(index);

                store.save(&goals)?;
                Ok(removed)
            })
            .await?;

        info!("Deleted goal {goal}");
        Ok(goal)
    }
}
