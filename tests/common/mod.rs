//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use goal_tracker::{GoalDraft, InMemoryBackend, Priority, SessionStore, TrackerHandler, User};
use std::sync::Arc;
use tempfile::TempDir;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "password123";

/// Handler over an in-memory backend with a temporary session file
///
/// The `TempDir` must be kept alive for as long as the handler is used.
pub struct TestEnv {
    pub handler: TrackerHandler,
    pub backend: Arc<InMemoryBackend>,
    pub dir: TempDir,
}

impl TestEnv {
    pub fn session_path(&self) -> std::path::PathBuf {
        self.dir.path().join("session.toml")
    }

    /// A second handler over the same backend and session file, as a new run would see it
    pub async fn restart(&self) -> TrackerHandler {
        TrackerHandler::start(self.backend.clone(), SessionStore::new(self.session_path())).await
    }
}

/// Anonymous handler; one account exists on the backend
pub fn anonymous_env() -> (TestEnv, User) {
    let dir = TempDir::new().unwrap();
    let backend = Arc::new(InMemoryBackend::new());
    let user = backend.add_user("Ada", EMAIL, PASSWORD);
    let handler = TrackerHandler::new(
        backend.clone(),
        SessionStore::new(dir.path().join("session.toml")),
    );
    (TestEnv { handler, backend, dir }, user)
}

/// Handler already logged in as the test user
pub async fn logged_in_env() -> TestEnv {
    let (env, _) = anonymous_env();
    env.handler.login(EMAIL, PASSWORD).await.unwrap();
    env
}

/// A complete goal form
pub fn draft(title: &str, priority: Priority) -> GoalDraft {
    GoalDraft {
        title: title.to_string(),
        description: format!("{} description", title),
        category: "Health".to_string(),
        priority,
        target_date: NaiveDate::from_ymd_opt(2030, 1, 1),
    }
}

/// Create a goal and return its id, taken from the refreshed snapshot
pub async fn create_goal(env: &TestEnv, title: &str, priority: Priority) -> i64 {
    env.handler.create_goal(draft(title, priority)).await.unwrap();
    env.handler
        .snapshot()
        .iter()
        .filter(|g| g.title == title)
        .map(|g| g.id)
        .max()
        .unwrap()
}

/// Add milestones to a goal and return their ids in creation order
pub async fn add_milestones(env: &TestEnv, goal_id: i64, titles: &[&str]) -> Vec<i64> {
    for title in titles {
        env.handler.add_milestone(goal_id, title).await.unwrap();
    }
    env.handler
        .snapshot()
        .find_goal(goal_id)
        .unwrap()
        .milestones
        .iter()
        .map(|m| m.id)
        .collect()
}
