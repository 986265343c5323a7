//! Goal create / edit / delete through the handler
mod common;

use common::{add_milestones, anonymous_env, create_goal, draft, logged_in_env};
use goal_tracker::{Category, Notification, Priority, TrackerError};

#[tokio::test]
async fn test_create_goal_refetches_snapshot() {
    let env = logged_in_env().await;

    let notification = env
        .handler
        .create_goal(draft("Run 5K", Priority::High))
        .await
        .unwrap();
    assert_eq!(notification.title, "Goal added");

    let snapshot = env.handler.snapshot();
    assert_eq!(snapshot.len(), 1);
    let goal = snapshot.iter().next().unwrap();
    assert_eq!(goal.title, "Run 5K");
    assert_eq!(goal.category, Category::Health);
    assert_eq!(goal.priority, Priority::High);
    assert!(goal.milestones.is_empty());
}

#[tokio::test]
async fn test_create_goal_missing_fields_never_reaches_backend() {
    let env = logged_in_env().await;
    let before = env.backend.request_count();

    let mut incomplete = draft("Run 5K", Priority::High);
    incomplete.category = String::new();
    let result = env.handler.create_goal(incomplete).await;

    let err = result.unwrap_err();
    assert!(matches!(err, TrackerError::MissingFields(_)));
    assert_eq!(Notification::from(&err).title, "All the fields are required");
    assert_eq!(env.backend.request_count(), before);
    assert!(env.handler.snapshot().is_empty());
}

#[tokio::test]
async fn test_create_goal_requires_login() {
    let (env, _) = anonymous_env();

    let result = env.handler.create_goal(draft("Run 5K", Priority::High)).await;
    assert!(matches!(result, Err(TrackerError::NotAuthenticated)));
    assert_eq!(env.backend.request_count(), 0);
}

#[tokio::test]
async fn test_network_failure_leaves_snapshot_unchanged() {
    let env = logged_in_env().await;
    create_goal(&env, "Run 5K", Priority::High).await;
    let before = env.handler.snapshot();

    env.backend.set_unreachable(true);
    let result = env.handler.create_goal(draft("Read books", Priority::Low)).await;
    let err = result.unwrap_err();
    assert!(matches!(err, TrackerError::Network(_)));
    assert!(!err.is_local());

    assert_eq!(env.handler.snapshot(), before);
}

#[tokio::test]
async fn test_update_goal_replaces_fields() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Run 5K", Priority::High).await;

    let mut edited = env.handler.goal_draft(goal_id).unwrap();
    edited.title = "Run 10K".to_string();
    edited.category = "Wellness".to_string();
    edited.priority = Priority::Low;
    let notification = env.handler.update_goal(goal_id, edited).await.unwrap();
    assert_eq!(notification.title, "Goal updated");

    let snapshot = env.handler.snapshot();
    let goal = snapshot.find_goal(goal_id).unwrap();
    assert_eq!(goal.title, "Run 10K");
    assert_eq!(goal.category, Category::Wellness);
    assert_eq!(goal.priority, Priority::Low);
}

#[tokio::test]
async fn test_update_unknown_goal_is_local_error() {
    let env = logged_in_env().await;
    let before = env.backend.request_count();

    let result = env.handler.update_goal(42, draft("x", Priority::Low)).await;
    assert!(matches!(result, Err(TrackerError::GoalNotFound(42))));
    assert_eq!(env.backend.request_count(), before);
}

#[tokio::test]
async fn test_delete_goal_removes_its_milestones() {
    let env = logged_in_env().await;
    let keep = create_goal(&env, "Keep", Priority::Low).await;
    let doomed = create_goal(&env, "Doomed", Priority::Low).await;
    let milestone_ids = add_milestones(&env, doomed, &["a", "b"]).await;

    env.handler.delete_goal(doomed).await.unwrap();

    let snapshot = env.handler.snapshot();
    assert!(snapshot.find_goal(doomed).is_none());
    assert!(snapshot.find_goal(keep).is_some());
    for id in milestone_ids {
        assert!(snapshot.find_milestone(id).is_none());
    }
}

#[tokio::test]
async fn test_goal_draft_prefills_from_snapshot() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Learn Rust", Priority::Medium).await;

    let prefilled = env.handler.goal_draft(goal_id).unwrap();
    assert_eq!(prefilled, draft("Learn Rust", Priority::Medium));
    assert!(matches!(
        env.handler.goal_draft(999),
        Err(TrackerError::GoalNotFound(999))
    ));
}
