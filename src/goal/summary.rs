//! Roll-ups over a goal snapshot: dashboard counts and report projections

use super::goal_set::GoalSet;
use super::model::Goal;
use super::progress::{StatusBucket, percentage, progress};
use super::queries::{deadline_goals, priority_goals};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Dashboard-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_goals: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    pub not_started_count: usize,
    pub total_milestones: usize,
    pub completed_milestones: usize,
}

impl DashboardSummary {
    /// Share of goals that are completed, 0 when there are no goals
    pub fn goal_completion_rate(&self) -> u8 {
        percentage(self.completed_count, self.total_goals)
    }

    /// Share of milestones that are completed, 0 when there are no milestones
    pub fn milestone_completion_rate(&self) -> u8 {
        percentage(self.completed_milestones, self.total_milestones)
    }

    pub fn count_for(&self, bucket: StatusBucket) -> usize {
        match bucket {
            StatusBucket::Completed => self.completed_count,
            StatusBucket::InProgress => self.in_progress_count,
            StatusBucket::NotStarted => self.not_started_count,
        }
    }
}

/// Compute the dashboard counts in a single pass
pub fn summarize(goals: &GoalSet) -> DashboardSummary {
    let mut summary = DashboardSummary::default();
    for goal in goals {
        summary.total_goals += 1;
        summary.total_milestones += goal.milestones.len();
        summary.completed_milestones += goal.completed_milestones();
        match StatusBucket::from_progress(progress(goal)) {
            StatusBucket::Completed => summary.completed_count += 1,
            StatusBucket::InProgress => summary.in_progress_count += 1,
            StatusBucket::NotStarted => summary.not_started_count += 1,
        }
    }
    summary
}

/// Everything the dashboard page shows
#[derive(Debug, Clone)]
pub struct Dashboard<'a> {
    pub summary: DashboardSummary,
    pub priority_goals: Vec<&'a Goal>,
    pub deadline_goals: Vec<&'a Goal>,
}

pub fn dashboard(goals: &GoalSet, now: NaiveDateTime) -> Dashboard<'_> {
    Dashboard {
        summary: summarize(goals),
        priority_goals: priority_goals(goals),
        deadline_goals: deadline_goals(goals, now),
    }
}

/// One bar of the per-goal progress chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalProgressEntry {
    pub goal_id: i64,
    pub title: String,
    pub progress: u8,
}

/// Data behind the reports page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Snapshot order
    pub goal_progress: Vec<GoalProgressEntry>,
    /// Always all three buckets, in `StatusBucket::ALL` order
    pub status_distribution: Vec<(StatusBucket, usize)>,
    /// Goal count per category, largest first, ties by name
    pub category_distribution: Vec<(String, usize)>,
    pub summary: DashboardSummary,
}

pub fn report(goals: &GoalSet) -> Report {
    let summary = summarize(goals);

    let goal_progress = goals
        .iter()
        .map(|g| GoalProgressEntry {
            goal_id: g.id,
            title: g.title.clone(),
            progress: progress(g),
        })
        .collect();

    let status_distribution = StatusBucket::ALL
        .iter()
        .map(|b| (*b, summary.count_for(*b)))
        .collect();

    let mut per_category: HashMap<&str, usize> = HashMap::new();
    for goal in goals {
        *per_category.entry(goal.category.as_str()).or_default() += 1;
    }
    let mut category_distribution: Vec<(String, usize)> = per_category
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    category_distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Report {
        goal_progress,
        status_distribution,
        category_distribution,
        summary,
    }
}
