//! Tests for the tracker module.

use super::*;
use crate::params::{AddSubGoal, ChangeGoal, ChangeSubGoal, CreateGoal, Id, SubGoalRef};
use tempfile::TempDir;

/// Helper function to create a test tracker
async fn create_test_tracker() -> (TempDir, GoalTracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("goals.json");
    let tracker = GoalTrackerBuilder::new()
        .with_data_file(Some(&data_file))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

fn create_params(goal: &str, sub_goals: &[&str]) -> CreateGoal {
    CreateGoal {
        goal: Some(goal.to_string()),
        sub_goals: Some(sub_goals.iter().map(ToString::to_string).collect()),
    }
}

#[tokio::test]
async fn test_create_goal_without_sub_goals() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let goal = tracker
        .create_goal(&CreateGoal {
            goal: Some("Learn X".to_string()),
            sub_goals: None,
        })
        .await
        .expect("Failed to create goal");

    assert_eq!(goal.text.as_deref(), Some("Learn X"));
    assert!(goal.sub_goals.is_empty());
    assert_eq!(tracker.list_goals().await.unwrap(), vec![goal]);
}

#[tokio::test]
async fn test_create_goal_assigns_distinct_ids() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let goal = tracker
        .create_goal(&create_params("Parent", &["One", "Two", "Three"]))
        .await
        .expect("Failed to create goal");

    let texts: Vec<_> = goal.sub_goals.iter().map(|s| s.text.as_deref()).collect();
    assert_eq!(texts, vec![Some("One"), Some("Two"), Some("Three")]);

    let mut ids: Vec<u64> = goal.sub_goals.iter().map(|s| s.id).collect();
    ids.push(goal.id);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[tokio::test]
async fn test_create_goal_requires_text() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    for goal in [None, Some(String::new())] {
        let err = tracker
            .create_goal(&CreateGoal {
                goal,
                sub_goals: Some(vec!["orphan".to_string()]),
            })
            .await
            .expect_err("Missing goal text should be rejected");
        assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "goal"));
    }

    // Validation happens before any file access
    assert!(!tracker.data_file().exists());
}

#[tokio::test]
async fn test_change_goal_can_clear_text() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Original", &["Keep me"]))
        .await
        .unwrap();

    let changed = tracker
        .change_goal(&ChangeGoal {
            id: goal.id.into(),
            goal: None,
        })
        .await
        .expect("Failed to change goal");

    assert_eq!(changed.text, None);
    assert_eq!(changed.sub_goals, goal.sub_goals);
}

#[tokio::test]
async fn test_change_missing_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.create_goal(&create_params("Only", &[])).await.unwrap();
    let before = std::fs::read_to_string(tracker.data_file()).unwrap();

    let err = tracker
        .change_goal(&ChangeGoal {
            id: PathId::from(999_999),
            goal: Some("nope".to_string()),
        })
        .await
        .expect_err("Unknown goal should not be found");

    assert!(matches!(err, TrackerError::GoalNotFound { .. }));
    assert_eq!(std::fs::read_to_string(tracker.data_file()).unwrap(), before);
}

#[tokio::test]
async fn test_unparseable_id_is_not_found() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.create_goal(&create_params("Only", &[])).await.unwrap();

    let err = tracker
        .delete_goal(&Id {
            id: PathId::parse("abc"),
        })
        .await
        .expect_err("Unparseable id should not match");

    assert!(err.is_not_found());
    assert_eq!(tracker.list_goals().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_goal_twice() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Doomed", &["Also doomed"]))
        .await
        .unwrap();
    let params = Id { id: goal.id.into() };

    let removed = tracker.delete_goal(&params).await.expect("First delete");
    assert_eq!(removed, goal);
    assert!(tracker.list_goals().await.unwrap().is_empty());

    let err = tracker.delete_goal(&params).await.expect_err("Second delete");
    assert!(matches!(err, TrackerError::GoalNotFound { .. }));
}

#[tokio::test]
async fn test_add_sub_goal_appends() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Parent", &["First"]))
        .await
        .unwrap();

    let added = tracker
        .add_sub_goal(&AddSubGoal {
            goal_id: goal.id.into(),
            goal: Some("Second".to_string()),
        })
        .await
        .expect("Failed to add sub-goal");

    assert!(added.id > goal.sub_goals[0].id);
    let stored = tracker.list_goals().await.unwrap();
    assert_eq!(stored[0].sub_goals.len(), 2);
    assert_eq!(stored[0].sub_goals[1], added);
}

#[tokio::test]
async fn test_add_sub_goal_errors() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker.create_goal(&create_params("Parent", &[])).await.unwrap();

    let err = tracker
        .add_sub_goal(&AddSubGoal {
            goal_id: goal.id.into(),
            goal: None,
        })
        .await
        .expect_err("Missing text");
    assert!(matches!(err, TrackerError::InvalidInput { .. }));

    let err = tracker
        .add_sub_goal(&AddSubGoal {
            goal_id: (goal.id + 1).into(),
            goal: Some("Lost".to_string()),
        })
        .await
        .expect_err("Missing parent");
    assert!(matches!(err, TrackerError::ParentGoalNotFound { .. }));
}

#[tokio::test]
async fn test_change_sub_goal_leaves_siblings() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Parent", &["Sub1", "Sub2"]))
        .await
        .unwrap();

    let changed = tracker
        .change_sub_goal(&ChangeSubGoal {
            goal_id: goal.id.into(),
            sub_goal_id: goal.sub_goals[0].id.into(),
            goal: Some("Sub1-edited".to_string()),
        })
        .await
        .expect("Failed to change sub-goal");

    assert_eq!(changed.id, goal.sub_goals[0].id);
    assert_eq!(changed.text.as_deref(), Some("Sub1-edited"));

    let stored = tracker.list_goals().await.unwrap();
    assert_eq!(stored[0].sub_goals[0], changed);
    assert_eq!(stored[0].sub_goals[1], goal.sub_goals[1]);
    assert_eq!(stored[0].text.as_deref(), Some("Parent"));
}

#[tokio::test]
async fn test_sub_goal_lookup_errors() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Parent", &["Sub1"]))
        .await
        .unwrap();

    let err = tracker
        .change_sub_goal(&ChangeSubGoal {
            goal_id: PathId::none(),
            sub_goal_id: goal.sub_goals[0].id.into(),
            goal: Some("x".to_string()),
        })
        .await
        .expect_err("Missing parent");
    assert!(matches!(err, TrackerError::ParentGoalNotFound { .. }));

    let err = tracker
        .delete_sub_goal(&SubGoalRef {
            goal_id: goal.id.into(),
            sub_goal_id: PathId::from(1),
        })
        .await
        .expect_err("Missing sub-goal");
    assert!(
        matches!(err, TrackerError::SubGoalNotFound { goal_id, .. } if goal_id == goal.id)
    );
}

#[tokio::test]
async fn test_delete_sub_goal() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let goal = tracker
        .create_goal(&create_params("Parent", &["Sub1", "Sub2"]))
        .await
        .unwrap();

    let removed = tracker
        .delete_sub_goal(&SubGoalRef {
            goal_id: goal.id.into(),
            sub_goal_id: goal.sub_goals[1].id.into(),
        })
        .await
        .expect("Failed to delete sub-goal");

    assert_eq!(removed, goal.sub_goals[1]);
    let stored = tracker.list_goals().await.unwrap();
    assert_eq!(stored[0].sub_goals, vec![goal.sub_goals[0].clone()]);
}

#[tokio::test]
async fn test_new_ids_skip_ids_already_on_disk() {
    let (temp_dir, tracker) = create_test_tracker().await;
    let far_future = u64::MAX / 2;
    std::fs::write(
        temp_dir.path().join("goals.json"),
        format!(r#"[{{"id": {far_future}, "goal": "From the future", "subGoals": []}}]"#),
    )
    .unwrap();

    let goal = tracker.create_goal(&create_params("Now", &["Soon"])).await.unwrap();

    assert!(goal.id > far_future);
    assert!(goal.sub_goals[0].id > goal.id);
}

#[tokio::test]
async fn test_running_out_of_ids_leaves_file_untouched() {
    let (temp_dir, tracker) = create_test_tracker().await;
    let data_file = temp_dir.path().join("goals.json");
    let contents = format!(
        r#"[{{"id": {}, "goal": "Last one", "subGoals": []}}]"#,
        u64::MAX - 1
    );
    std::fs::write(&data_file, &contents).unwrap();

    // The goal itself would get u64::MAX, leaving nothing for its sub-goal
    let err = tracker
        .create_goal(&create_params("Too many", &["One more"]))
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::IdsExhausted { .. }));

    let err = tracker
        .add_sub_goal(&AddSubGoal {
            goal_id: PathId::from(u64::MAX - 1),
            goal: Some("Nope".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::IdsExhausted { .. }));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), contents);
}
