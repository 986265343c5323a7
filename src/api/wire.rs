//! Wire shapes of the backend and their conversion into typed entities
//!
//! Responses are first decoded into loose structures where every field is
//! optional, then validated as a whole. Nothing outside this module sees an
//! unvalidated goal: a single malformed goal rejects the entire response.

use crate::error::{TrackerError, TrackerResult};
use crate::goal::{Category, Goal, GoalDraft, GoalSet, Milestone, MilestonePatch, Priority, User};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Date format used on the wire (`targetDate`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireMilestone {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireGoal {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    #[serde(rename = "targetDate")]
    pub target_date: Option<String>,
    pub milestones: Option<Vec<WireMilestone>>,
}

/// User ids come back as numbers from the login endpoint but older stored
/// sessions kept them as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireUser {
    pub id: Option<WireId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub message: Option<String>,
    pub user: Option<WireUser>,
}

/// `{"error": "..."}` body of a failed request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Body of create_goal / update_goal. `id` is the owning user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalPayload {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    #[serde(rename = "targetDate")]
    pub target_date: Option<String>,
}

impl GoalPayload {
    pub fn new(user_id: i64, draft: &GoalDraft) -> Self {
        Self {
            id: user_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            priority: draft.priority,
            target_date: draft.target_date.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateMilestonePayload {
    pub goal_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateMilestonePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl From<&MilestonePatch> for UpdateMilestonePayload {
    fn from(patch: &MilestonePatch) -> Self {
        Self {
            title: patch.title.clone(),
            status: patch.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Parse a wire date; empty means absent
///
/// Accepts a bare `YYYY-MM-DD` and, leniently, a full RFC 3339 timestamp of
/// which only the date part is kept.
pub fn parse_wire_date(value: &str) -> TrackerResult<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| TrackerError::Schema(format!("invalid targetDate '{}'", value)))
}

fn milestone_from_wire(goal_id: i64, wire: WireMilestone) -> TrackerResult<Milestone> {
    let id = wire
        .id
        .ok_or_else(|| TrackerError::Schema(format!("milestone of goal {} has no id", goal_id)))?;
    Ok(Milestone {
        id,
        title: wire.title.unwrap_or_default(),
        status: wire.status.unwrap_or(false),
    })
}

/// Validate one goal
pub fn goal_from_wire(wire: WireGoal) -> TrackerResult<Goal> {
    let id = wire
        .id
        .ok_or_else(|| TrackerError::Schema("goal without id".to_string()))?;
    let title = wire
        .title
        .ok_or_else(|| TrackerError::Schema(format!("goal {} has no title", id)))?;

    let priority = match wire.priority.as_deref().map(str::trim) {
        None | Some("") => {
            return Err(TrackerError::Schema(format!("goal {} has no priority", id)));
        }
        Some(p) => p
            .parse::<Priority>()
            .map_err(|e| TrackerError::Schema(format!("goal {}: {}", id, e)))?,
    };

    let target_date = match wire.target_date.as_deref() {
        None => None,
        Some(date) => parse_wire_date(date)?,
    };

    let milestones = wire
        .milestones
        .unwrap_or_default()
        .into_iter()
        .map(|m| milestone_from_wire(id, m))
        .collect::<TrackerResult<Vec<_>>>()?;

    Ok(Goal {
        id,
        title,
        description: wire.description.unwrap_or_default(),
        category: Category::from(wire.category.as_deref().unwrap_or_default()),
        priority,
        target_date,
        milestones,
    })
}

/// Validate a whole goal list response
///
/// Goal ids and milestone ids must each be unique across the set.
pub fn goals_from_wire(wire: Vec<WireGoal>) -> TrackerResult<GoalSet> {
    let goals = wire
        .into_iter()
        .map(goal_from_wire)
        .collect::<TrackerResult<Vec<_>>>()?;

    let mut goal_ids = HashSet::new();
    let mut milestone_ids = HashSet::new();
    for goal in &goals {
        if !goal_ids.insert(goal.id) {
            return Err(TrackerError::Schema(format!("duplicate goal id {}", goal.id)));
        }
        for milestone in &goal.milestones {
            if !milestone_ids.insert(milestone.id) {
                return Err(TrackerError::Schema(format!(
                    "duplicate milestone id {}",
                    milestone.id
                )));
            }
        }
    }

    Ok(GoalSet::from_goals(goals))
}

/// Decode and validate a raw goal list body
pub fn decode_goals(body: &str) -> TrackerResult<GoalSet> {
    let wire: Vec<WireGoal> =
        serde_json::from_str(body).map_err(|e| TrackerError::Schema(e.to_string()))?;
    goals_from_wire(wire)
}

pub fn user_from_wire(wire: WireUser) -> TrackerResult<User> {
    let id = match wire.id {
        Some(WireId::Number(n)) => n,
        Some(WireId::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| TrackerError::Schema(format!("invalid user id '{}'", s)))?,
        None => return Err(TrackerError::Schema("user without id".to_string())),
    };
    Ok(User {
        id,
        name: wire.name.unwrap_or_default(),
        email: wire.email.unwrap_or_default(),
    })
}

/// Best-effort human message out of an error body
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(e), .. }) => e,
        Ok(ErrorBody { message: Some(m), .. }) => m,
        _ if body.trim().is_empty() => "no details".to_string(),
        _ => body.trim().to_string(),
    }
}
