//! Session context: who is logged in and the goals last fetched for them
//!
//! Lifecycle is explicit: `load` on login or at startup when a stored user
//! exists, `replace_goals` after each fetch, `clear` on logout.

use crate::error::{TrackerError, TrackerResult};
use crate::goal::{GoalSet, User};

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    goals: GoalSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the identity; any previous snapshot is dropped
    pub fn load(&mut self, user: User) {
        self.user = Some(user);
        self.goals = GoalSet::new();
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.goals = GoalSet::new();
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The logged-in user or `NotAuthenticated`
    pub fn require_user(&self) -> TrackerResult<&User> {
        self.user.as_ref().ok_or(TrackerError::NotAuthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn replace_goals(&mut self, goals: GoalSet) {
        self.goals = goals;
    }
}
