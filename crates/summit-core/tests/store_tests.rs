use std::fs;

use summit_core::{Goal, GoalStore, SubGoal, TrackerError};
use tempfile::TempDir;

fn sample_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            text: Some("Learn Rust".to_string()),
            sub_goals: vec![SubGoal {
                id: 2,
                text: Some("Read the book".to_string()),
            }],
        },
        Goal {
            id: 3,
            text: None,
            sub_goals: vec![],
        },
    ]
}

#[test]
fn test_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = GoalStore::new(temp_dir.path().join("absent.json"));

    assert!(store.load().expect("load missing file").is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_zero_length_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goals.json");
    fs::write(&path, "").unwrap();

    let store = GoalStore::new(&path);
    assert!(store.load().expect("load empty file").is_empty());
}

#[test]
fn test_malformed_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goals.json");

    for contents in ["{not json", "   ", r#"{"id": 1}"#, r#"[{"goal": "no id"}]"#] {
        fs::write(&path, contents).unwrap();
        let err = GoalStore::new(&path)
            .load()
            .expect_err("malformed contents should fail");
        assert!(
            matches!(err, TrackerError::MalformedStore { ref path, .. } if path.ends_with("goals.json")),
            "unexpected error for {contents:?}: {err}"
        );
    }
}

#[test]
fn test_save_writes_pretty_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goals.json");
    let store = GoalStore::new(&path);

    store.save(&sample_goals()).expect("save goals");

    let expected = r#"[
  {
    "id": 1,
    "goal": "Learn Rust",
    "subGoals": [
      {
        "id": 2,
        "goal": "Read the book"
      }
    ]
  },
  {
    "id": 3,
    "subGoals": []
  }
]"#;
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let store = GoalStore::new(temp_dir.path().join("nested/dir/goals.json"));

    store.save(&sample_goals()).expect("save creates parent directories");
    assert_eq!(store.load().unwrap(), sample_goals());

    store.save(&[]).expect("save empty collection");
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_load_accepts_foreign_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goals.json");
    fs::write(
        &path,
        r#"[{"id": 1712345678901, "goal": "Imported", "extra": true,
            "subGoals": [{"id": 1712345678950, "goal": "Child"}]}]"#,
    )
    .unwrap();

    let goals = GoalStore::new(&path).load().expect("load foreign file");
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].id, 1_712_345_678_901);
    assert_eq!(goals[0].sub_goals[0].text.as_deref(), Some("Child"));
}
