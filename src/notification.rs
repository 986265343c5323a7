//! Transient user-facing notifications
//!
//! Every action ends in exactly one notification: a default one on success,
//! a destructive one on failure.

use crate::error::TrackerError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl From<&TrackerError> for Notification {
    fn from(e: &TrackerError) -> Self {
        match e {
            TrackerError::MissingFields(msg) => {
                Notification::error("All the fields are required", msg.clone())
            }
            TrackerError::InvalidCredentials => {
                Notification::error("Login failed", "Invalid credentials")
            }
            other => Notification::error("Error", other.to_string()),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}: {}", self.title, self.description)
        }
    }
}
