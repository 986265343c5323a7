//! Validation helper functions for the goal tracker
//!
//! Everything here runs before a request is built, so a failure means
//! nothing was sent to the backend.

use crate::error::{TrackerError, TrackerResult};
use crate::goal::{GoalDraft, GoalFilter, MilestonePatch, Priority};
use chrono::NaiveDate;

const MIN_PASSWORD_LEN: usize = 8;

/// Parse and validate the goal list filter
///
/// # Arguments
/// * `filter_str` - One of all, completed, in-progress, not-started, high-priority
pub fn parse_goal_filter(filter_str: &str) -> TrackerResult<GoalFilter> {
    filter_str
        .trim()
        .parse::<GoalFilter>()
        .map_err(TrackerError::Validation)
}

/// Parse and validate a priority
pub fn parse_priority(priority_str: &str) -> TrackerResult<Priority> {
    priority_str
        .parse::<Priority>()
        .map_err(TrackerError::Validation)
}

/// Parse a target date in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_target_date(date_str: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Check the create/edit goal form
///
/// Title, description, category and target date are all required; priority
/// always has a value.
pub fn validate_goal_draft(draft: &GoalDraft) -> TrackerResult<()> {
    let mut missing = Vec::new();
    if draft.title.trim().is_empty() {
        missing.push("title");
    }
    if draft.description.trim().is_empty() {
        missing.push("description");
    }
    if draft.category.trim().is_empty() {
        missing.push("category");
    }
    if draft.target_date.is_none() {
        missing.push("target date");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TrackerError::MissingFields(format!(
            "Please fill in all the fields (missing: {})",
            missing.join(", ")
        )))
    }
}

pub fn validate_milestone_title(title: &str) -> TrackerResult<()> {
    if title.trim().is_empty() {
        return Err(TrackerError::Validation(
            "Milestone title must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_milestone_patch(patch: &MilestonePatch) -> TrackerResult<()> {
    if patch.is_empty() {
        return Err(TrackerError::Validation(
            "Nothing to update: provide a title or a status".to_string(),
        ));
    }
    if let Some(ref title) = patch.title {
        validate_milestone_title(title)?;
    }
    Ok(())
}

/// Minimal email shape check: something@something.tld
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

pub fn validate_login(email: &str, password: &str) -> TrackerResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(TrackerError::MissingFields(
            "Please fill all the fields!".to_string(),
        ));
    }
    if !looks_like_email(email.trim()) {
        return Err(TrackerError::Validation("Invalid email format!".to_string()));
    }
    Ok(())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> TrackerResult<()> {
    if name.trim().is_empty() {
        return Err(TrackerError::MissingFields(
            "Please fill all the fields!".to_string(),
        ));
    }
    validate_login(email, password)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(TrackerError::Validation(
            "Password must be at least 8 characters long!".to_string(),
        ));
    }
    Ok(())
}
