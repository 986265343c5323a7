//! Milestone operations and their effect on derived progress
mod common;

use common::{add_milestones, create_goal, logged_in_env};
use goal_tracker::goal::{StatusBucket, bucket, progress};
use goal_tracker::{MilestonePatch, Priority, TrackerError};

#[tokio::test]
async fn test_new_milestones_start_incomplete() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Run 5K", Priority::High).await;
    add_milestones(&env, goal_id, &["Buy shoes", "Run 1K"]).await;

    let snapshot = env.handler.snapshot();
    let goal = snapshot.find_goal(goal_id).unwrap();
    assert_eq!(goal.milestones.len(), 2);
    assert!(goal.milestones.iter().all(|m| !m.status));
    assert_eq!(progress(goal), 0);
    assert_eq!(bucket(goal), StatusBucket::NotStarted);
}

#[tokio::test]
async fn test_toggle_updates_progress() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Run 5K", Priority::High).await;
    let ids = add_milestones(&env, goal_id, &["a", "b", "c"]).await;

    env.handler.toggle_milestone(ids[0]).await.unwrap();
    env.handler.toggle_milestone(ids[1]).await.unwrap();
    let snapshot = env.handler.snapshot();
    assert_eq!(progress(snapshot.find_goal(goal_id).unwrap()), 67);

    env.handler.toggle_milestone(ids[2]).await.unwrap();
    let snapshot = env.handler.snapshot();
    assert_eq!(bucket(snapshot.find_goal(goal_id).unwrap()), StatusBucket::Completed);

    // toggling again un-completes
    env.handler.toggle_milestone(ids[2]).await.unwrap();
    let snapshot = env.handler.snapshot();
    assert_eq!(progress(snapshot.find_goal(goal_id).unwrap()), 67);
}

#[tokio::test]
async fn test_rename_keeps_status() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Learn piano", Priority::Low).await;
    let ids = add_milestones(&env, goal_id, &["Scales"]).await;
    env.handler.toggle_milestone(ids[0]).await.unwrap();

    let notification = env.handler.rename_milestone(ids[0], "Major scales").await.unwrap();
    assert_eq!(notification.title, "Milestone updated");

    let snapshot = env.handler.snapshot();
    let (_, milestone) = snapshot.find_milestone(ids[0]).unwrap();
    assert_eq!(milestone.title, "Major scales");
    assert!(milestone.status);
}

#[tokio::test]
async fn test_update_milestone_with_empty_patch_is_rejected() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Learn piano", Priority::Low).await;
    let ids = add_milestones(&env, goal_id, &["Scales"]).await;
    let before = env.backend.request_count();

    let result = env
        .handler
        .update_milestone(ids[0], MilestonePatch::default())
        .await;
    assert!(matches!(result, Err(TrackerError::Validation(_))));
    assert_eq!(env.backend.request_count(), before);
}

#[tokio::test]
async fn test_add_milestone_to_unknown_goal() {
    let env = logged_in_env().await;

    let result = env.handler.add_milestone(77, "Nowhere").await;
    assert!(matches!(result, Err(TrackerError::GoalNotFound(77))));
}

#[tokio::test]
async fn test_add_blank_milestone_is_rejected() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Learn piano", Priority::Low).await;

    let result = env.handler.add_milestone(goal_id, "   ").await;
    assert!(matches!(result, Err(TrackerError::Validation(_))));
}

#[tokio::test]
async fn test_delete_milestone() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Save money", Priority::Medium).await;
    let ids = add_milestones(&env, goal_id, &["Open account", "Deposit"]).await;

    let notification = env.handler.delete_milestone(ids[0]).await.unwrap();
    assert_eq!(notification.title, "Milestone deleted");

    let snapshot = env.handler.snapshot();
    assert!(snapshot.find_milestone(ids[0]).is_none());
    assert_eq!(snapshot.find_goal(goal_id).unwrap().milestones.len(), 1);

    assert!(matches!(
        env.handler.delete_milestone(ids[0]).await,
        Err(TrackerError::MilestoneNotFound(_))
    ));
}

#[tokio::test]
async fn test_milestone_ids_unique_across_goals() {
    let env = logged_in_env().await;
    let first = create_goal(&env, "First", Priority::Low).await;
    let second = create_goal(&env, "Second", Priority::Low).await;
    let a = add_milestones(&env, first, &["a1", "a2"]).await;
    let b = add_milestones(&env, second, &["b1"]).await;

    assert!(a.iter().all(|id| !b.contains(id)));
    let snapshot = env.handler.snapshot();
    let (owner, _) = snapshot.find_milestone(b[0]).unwrap();
    assert_eq!(owner.id, second);
}

#[tokio::test]
async fn test_failed_toggle_keeps_previous_state() {
    let env = logged_in_env().await;
    let goal_id = create_goal(&env, "Run 5K", Priority::High).await;
    let ids = add_milestones(&env, goal_id, &["a"]).await;

    env.backend.set_unreachable(true);
    assert!(env.handler.toggle_milestone(ids[0]).await.is_err());

    env.backend.set_unreachable(false);
    let snapshot = env.handler.snapshot();
    assert!(!snapshot.find_milestone(ids[0]).unwrap().1.status);
}
