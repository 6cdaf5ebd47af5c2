use summit_core::{GoalTracker, GoalTrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, GoalTracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("goals.json");
    let tracker = GoalTrackerBuilder::new()
        .with_data_file(Some(&data_file))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}
