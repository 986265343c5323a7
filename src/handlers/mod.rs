//! User action handlers
//!
//! Each file adds one group of actions to `TrackerHandler`. Mutating actions
//! share the same shape: validate locally, send one request, refetch the
//! whole goal list on success, and report a notification.

pub mod auth;
pub mod goals;
pub mod milestones;
pub mod views;
