//! Goal domain models and progress logic
//!
//! This module contains the goal/milestone data structures and the pure
//! derivations every view is built from:
//! - `model`: Goal, Milestone, Priority, Category and form payloads
//! - `goal_set`: the immutable snapshot fetched from the backend
//! - `progress`: completion percentage and status bucket
//! - `queries`: filter/sort engine for goal list, priority and deadline views
//! - `summary`: dashboard counts and report projections
//! - `palette`: display token lookup tables

mod goal_set;
mod model;
pub mod palette;
pub mod progress;
pub mod queries;
pub mod summary;

// Re-export all public types
pub use goal_set::GoalSet;
pub use model::{Category, Goal, GoalDraft, Milestone, MilestonePatch, Priority, User};
pub use progress::{StatusBucket, bucket, progress};
pub use queries::{
    GoalFilter, deadline_goals, deadline_reference_now, filter_goals, priority_goals,
};
pub use summary::{
    Dashboard, DashboardSummary, GoalProgressEntry, Report, dashboard, report, summarize,
};
