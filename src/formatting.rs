//! Text rendering of the goal views
//!
//! Display tokens from `goal::palette` are shown in brackets so a terminal
//! front end (or a test) can see the same color/badge decisions the UI makes.

use crate::goal::palette::{category_color, priority_badge, status_color};
use crate::goal::{Dashboard, Goal, GoalFilter, Report, bucket, progress};
use std::fmt::Write;

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) / 10;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

fn push_goal_summary(out: &mut String, goal: &Goal) {
    let p = progress(goal);
    let b = bucket(goal);
    let _ = writeln!(
        out,
        "- [{}] {} {} {}% ({} <{}>)",
        goal.id,
        goal.title,
        progress_bar(p),
        p,
        b,
        status_color(b)
    );
    let _ = writeln!(
        out,
        "  Category: {} <{}>  Priority: {} <{}>",
        goal.category,
        category_color(&goal.category),
        goal.priority,
        priority_badge(goal.priority)
    );
    if let Some(date) = goal.target_date {
        let _ = writeln!(out, "  Target date: {}", date);
    }
    let _ = writeln!(
        out,
        "  Milestones: {}/{}",
        goal.completed_milestones(),
        goal.milestones.len()
    );
}

/// Format the goal grid for one filter tab
pub fn format_goals(goals: &[&Goal], filter: GoalFilter) -> String {
    if goals.is_empty() {
        return format!("No goals found (filter: {})", filter);
    }

    let mut result = format!("Found {} goal(s) (filter: {}):\n\n", goals.len(), filter);
    for goal in goals {
        push_goal_summary(&mut result, goal);
    }
    result
}

/// Format a single goal with its milestones
pub fn format_goal_detail(goal: &Goal) -> String {
    let mut result = String::new();
    push_goal_summary(&mut result, goal);
    if !goal.description.is_empty() {
        let _ = writeln!(result, "  Description: {}", goal.description);
    }
    if goal.milestones.is_empty() {
        result.push_str("  No milestones yet\n");
    }
    for milestone in &goal.milestones {
        let _ = writeln!(
            result,
            "    [{}] #{} {}",
            if milestone.status { "x" } else { " " },
            milestone.id,
            milestone.title
        );
    }
    result
}

pub fn format_dashboard(dashboard: &Dashboard<'_>) -> String {
    let s = &dashboard.summary;
    let mut result = String::new();

    let _ = writeln!(result, "Total goals:          {}", s.total_goals);
    let _ = writeln!(
        result,
        "Completed goals:      {} ({}% completion rate)",
        s.completed_count,
        s.goal_completion_rate()
    );
    let _ = writeln!(result, "Total milestones:     {}", s.total_milestones);
    let _ = writeln!(
        result,
        "Completed milestones: {} ({}% completion rate)",
        s.completed_milestones,
        s.milestone_completion_rate()
    );
    let _ = writeln!(
        result,
        "Goal progress:        {} completed, {} in progress, {} not started",
        s.completed_count, s.in_progress_count, s.not_started_count
    );

    result.push_str("\nPriority goals:\n");
    if dashboard.priority_goals.is_empty() {
        result.push_str("  No high priority goals need attention\n");
    }
    for goal in &dashboard.priority_goals {
        let _ = writeln!(result, "  [{}] {} {}%", goal.id, goal.title, progress(goal));
    }

    result.push_str("\nUpcoming deadlines:\n");
    if dashboard.deadline_goals.is_empty() {
        result.push_str("  No upcoming deadlines\n");
    }
    for goal in &dashboard.deadline_goals {
        if let Some(date) = goal.target_date {
            let _ = writeln!(
                result,
                "  [{}] {} due {} ({}%)",
                goal.id,
                goal.title,
                date,
                progress(goal)
            );
        }
    }

    result
}

pub fn format_report(report: &Report) -> String {
    let mut result = String::from("Goal progress:\n");
    if report.goal_progress.is_empty() {
        result.push_str("  No goals yet\n");
    }
    for entry in &report.goal_progress {
        let _ = writeln!(
            result,
            "  {} {} {}%",
            progress_bar(entry.progress),
            entry.title,
            entry.progress
        );
    }

    result.push_str("\nStatus distribution:\n");
    for (status, count) in &report.status_distribution {
        let _ = writeln!(result, "  {}: {}", status, count);
    }

    result.push_str("\nCategory distribution:\n");
    for (category, count) in &report.category_distribution {
        let name = if category.is_empty() { "(none)" } else { category };
        let _ = writeln!(result, "  {}: {}", name, count);
    }

    let _ = writeln!(
        result,
        "\nMilestones completed: {}/{} ({}%)",
        report.summary.completed_milestones,
        report.summary.total_milestones,
        report.summary.milestone_completion_rate()
    );
    result
}
