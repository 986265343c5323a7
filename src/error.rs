//! Typed error hierarchy for the goal tracker client.
//!
//! Every failure is recoverable: callers turn it into a notification and
//! keep the state they had before the attempted action.

use thiserror::Error;

/// Errors from the backend boundary, form validation and the session store.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Could not reach the server: {0}")]
    Network(String),

    #[error("Server returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// A required form field was left empty
    #[error("{0}")]
    MissingFields(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("Goal {0} not found")]
    GoalNotFound(i64),

    #[error("Milestone {0} not found")]
    MilestoneNotFound(i64),

    #[error("Unexpected response from server: {0}")]
    Schema(String),

    #[error("Session store error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// True for failures detected before anything was sent to the backend
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            TrackerError::MissingFields(_)
                | TrackerError::Validation(_)
                | TrackerError::NotAuthenticated
                | TrackerError::GoalNotFound(_)
                | TrackerError::MilestoneNotFound(_)
        )
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TrackerError::Schema(e.to_string())
        } else {
            TrackerError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(e: std::io::Error) -> Self {
        TrackerError::Storage(e.to_string())
    }
}

impl From<toml::de::Error> for TrackerError {
    fn from(e: toml::de::Error) -> Self {
        TrackerError::Storage(e.to_string())
    }
}

impl From<toml::ser::Error> for TrackerError {
    fn from(e: toml::ser::Error) -> Self {
        TrackerError::Storage(e.to_string())
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
