//! Backend boundary
//!
//! The goal backend is an external REST service. `GoalBackend` is the seam
//! the rest of the crate talks to; `HttpBackend` reaches the real server and
//! `InMemoryBackend` keeps everything in process for embedding and tests.

mod http;
mod memory;
pub mod wire;

pub use http::HttpBackend;
pub use memory::InMemoryBackend;

use crate::error::TrackerResult;
use crate::goal::{GoalDraft, GoalSet, MilestonePatch, User};
use async_trait::async_trait;

/// Logical operations offered by the goal backend
///
/// Mutations return nothing useful: callers refetch the full goal list
/// afterwards instead of merging results.
#[async_trait]
pub trait GoalBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> TrackerResult<User>;

    async fn register(&self, name: &str, email: &str, password: &str) -> TrackerResult<()>;

    async fn fetch_goals(&self, user_id: i64) -> TrackerResult<GoalSet>;

    async fn create_goal(&self, user_id: i64, draft: &GoalDraft) -> TrackerResult<()>;

    async fn update_goal(&self, user_id: i64, goal_id: i64, draft: &GoalDraft)
    -> TrackerResult<()>;

    async fn delete_goal(&self, goal_id: i64) -> TrackerResult<()>;

    async fn create_milestone(&self, goal_id: i64, title: &str) -> TrackerResult<()>;

    async fn update_milestone(&self, milestone_id: i64, patch: &MilestonePatch)
    -> TrackerResult<()>;

    async fn delete_milestone(&self, milestone_id: i64) -> TrackerResult<()>;
}
