//! Goal selection and ordering for the different views
//!
//! Every function here takes the snapshot by reference and returns borrowed
//! goals in view order; nothing is cached between calls.

use super::goal_set::GoalSet;
use super::model::{Goal, Priority};
use super::progress::progress;
use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Maximum number of entries in the priority-goals view
pub const PRIORITY_VIEW_LIMIT: usize = 5;

/// How far in the past a target date may lie and still show in the deadline view
pub const DEADLINE_LOOKBACK_DAYS: i64 = 7;

/// Tab selector of the goal list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GoalFilter {
    #[default]
    All,
    Completed,
    InProgress,
    NotStarted,
    HighPriority,
}

impl GoalFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalFilter::All => "all",
            GoalFilter::Completed => "completed",
            GoalFilter::InProgress => "in-progress",
            GoalFilter::NotStarted => "not-started",
            GoalFilter::HighPriority => "high-priority",
        }
    }

    /// Whether a single goal passes this selector
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            GoalFilter::All => true,
            GoalFilter::Completed => progress(goal) == 100,
            GoalFilter::InProgress => {
                let p = progress(goal);
                p > 0 && p < 100
            }
            GoalFilter::NotStarted => progress(goal) == 0,
            GoalFilter::HighPriority => goal.priority == Priority::High,
        }
    }
}

impl FromStr for GoalFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(GoalFilter::All),
            "completed" => Ok(GoalFilter::Completed),
            "in-progress" => Ok(GoalFilter::InProgress),
            "not-started" => Ok(GoalFilter::NotStarted),
            "high-priority" => Ok(GoalFilter::HighPriority),
            _ => Err(format!(
                "Invalid filter '{}'. Valid filters: all, completed, in-progress, not-started, high-priority",
                s
            )),
        }
    }
}

impl fmt::Display for GoalFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goals passing `filter`, in snapshot order
///
/// `None` behaves as [`GoalFilter::All`].
pub fn filter_goals(goals: &GoalSet, filter: Option<GoalFilter>) -> Vec<&Goal> {
    let filter = filter.unwrap_or_default();
    goals.iter().filter(|g| filter.matches(g)).collect()
}

/// High-priority goals that still need work, least progress first
///
/// The sort is stable so equal-progress goals keep snapshot order. At most
/// [`PRIORITY_VIEW_LIMIT`] entries are returned.
pub fn priority_goals(goals: &GoalSet) -> Vec<&Goal> {
    let mut selected: Vec<(&Goal, u8)> = goals
        .iter()
        .map(|g| (g, progress(g)))
        .filter(|(g, p)| g.priority == Priority::High && *p < 100)
        .collect();
    selected.sort_by_key(|(_, p)| *p);
    selected
        .into_iter()
        .take(PRIORITY_VIEW_LIMIT)
        .map(|(g, _)| g)
        .collect()
}

/// Current time to pass to [`deadline_goals`]
///
/// Target dates are calendar dates taken as UTC midnight, so they are
/// compared against UTC wall-clock time rather than local time.
pub fn deadline_reference_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Incomplete goals with milestones whose target date is not more than a
/// week in the past
///
/// There is no upper bound: a deadline a year out qualifies. A target date
/// is taken as midnight at the start of that day and compared with
/// `now - 7 days`, so a deadline exactly seven calendar days ago only
/// qualifies when `now` is itself midnight.
pub fn deadline_goals(goals: &GoalSet, now: NaiveDateTime) -> Vec<&Goal> {
    let cutoff = now - Duration::days(DEADLINE_LOOKBACK_DAYS);
    goals
        .iter()
        .filter(|g| {
            progress(g) < 100
                && !g.milestones.is_empty()
                && g.target_date
                    .is_some_and(|date| date.and_time(NaiveTime::MIN) >= cutoff)
        })
        .collect()
}
