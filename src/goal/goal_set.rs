use crate::goal::model::{Goal, Milestone};

/// Immutable snapshot of a user's goals, in the order the backend returned them
///
/// The snapshot is replaced wholesale after every mutation; nothing patches
/// it in place. Order matters: views that sort use a stable sort, so ties
/// keep this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalSet {
    goals: Vec<Goal>,
}

impl GoalSet {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-validated goals
    ///
    /// Id uniqueness is checked at the network boundary (`api::wire`), not
    /// here.
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Find a goal by its ID
    pub fn find_goal(&self, id: i64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Find a milestone by its system-wide ID, together with its owning goal
    pub fn find_milestone(&self, id: i64) -> Option<(&Goal, &Milestone)> {
        self.goals
            .iter()
            .find_map(|g| g.find_milestone(id).map(|m| (g, m)))
    }

    /// Total number of milestones across all goals
    pub fn milestone_count(&self) -> usize {
        self.goals.iter().map(|g| g.milestones.len()).sum()
    }
}

impl<'a> IntoIterator for &'a GoalSet {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.iter()
    }
}
