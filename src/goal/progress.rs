//! Progress derivation
//!
//! A goal's progress is a pure function of its milestones: the share of
//! completed milestones as an integer percentage. The status bucket used for
//! badges and dashboard partitions is in turn a pure function of progress.

use super::model::Goal;
use std::fmt;

/// Integer percentage `part / whole`, rounded half-up, 0 when `whole == 0`
///
/// Computed in integer arithmetic so that e.g. 1/2 is exactly 50 and 1/8
/// rounds up to 13.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Completion percentage of a goal in `[0, 100]`
///
/// A goal without milestones is at 0, indistinguishable from a goal where
/// nothing is done yet.
pub fn progress(goal: &Goal) -> u8 {
    percentage(goal.completed_milestones(), goal.milestones.len())
}

/// Badge bucket derived from progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusBucket {
    Completed,
    InProgress,
    NotStarted,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 3] = [
        StatusBucket::Completed,
        StatusBucket::InProgress,
        StatusBucket::NotStarted,
    ];

    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => StatusBucket::NotStarted,
            p if p >= 100 => StatusBucket::Completed,
            _ => StatusBucket::InProgress,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Completed => "Completed",
            StatusBucket::InProgress => "In Progress",
            StatusBucket::NotStarted => "Not Started",
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status bucket of a goal
pub fn bucket(goal: &Goal) -> StatusBucket {
    StatusBucket::from_progress(progress(goal))
}
