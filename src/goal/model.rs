use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Goal priority
///
/// The backend stores whatever casing the client sent, so parsing is
/// case-insensitive. The canonical form is lower case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal category
///
/// The six well-known categories get their own variants; anything else the
/// backend hands back is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Health,
    Career,
    Finance,
    Personal,
    Education,
    Wellness,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Health => "Health",
            Category::Career => "Career",
            Category::Finance => "Finance",
            Category::Personal => "Personal",
            Category::Education => "Education",
            Category::Wellness => "Wellness",
            Category::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "Health" => Category::Health,
            "Career" => Category::Career,
            "Finance" => Category::Finance,
            "Personal" => Category::Personal,
            "Education" => Category::Education,
            "Wellness" => Category::Wellness,
            other => Category::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-task of a goal. `status == true` means completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Unique across the whole system, not only within the owning goal
    pub id: i64,
    pub title: String,
    pub status: bool,
}

/// A trackable objective with its milestones
///
/// Progress is never stored here; it is derived from `milestones` on demand
/// (see [`crate::goal::progress`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// Absent target date keeps a goal out of the deadline view
    pub target_date: Option<NaiveDate>,
    pub milestones: Vec<Milestone>,
}

impl Goal {
    /// Number of milestones marked completed
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.status).count()
    }

    pub fn find_milestone(&self, id: i64) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }
}

/// The authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payload of the create/edit goal form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub target_date: Option<NaiveDate>,
}

impl GoalDraft {
    /// Pre-fill an edit form from an existing goal
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            title: goal.title.clone(),
            description: goal.description.clone(),
            category: goal.category.as_str().to_string(),
            priority: goal.priority,
            target_date: goal.target_date,
        }
    }
}

/// Partial milestone update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestonePatch {
    pub title: Option<String>,
    pub status: Option<bool>,
}

impl MilestonePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.status.is_none()
    }
}
