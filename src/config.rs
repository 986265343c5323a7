//! Client configuration
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! or missing file is valid. Command line flags override file values.

use crate::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const SESSION_FILE_NAME: &str = "session.toml";
const FALLBACK_SESSION_FILE: &str = ".goal-tracker-session.toml";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Where the authenticated user is remembered between runs
pub fn default_session_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("goal-tracker").join(SESSION_FILE_NAME),
        None => PathBuf::from(FALLBACK_SESSION_FILE),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Root URL of the goal backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Session store location
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_file: default_session_file(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TrackerConfig {
    /// Load from a TOML file, defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| TrackerError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> TrackerResult<Self> {
        let mut config: TrackerConfig =
            toml::from_str(content).map_err(|e| TrackerError::Config(e.to_string()))?;
        config.normalize()?;
        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        session_file: Option<PathBuf>,
    ) -> TrackerResult<Self> {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(file) = session_file {
            self.session_file = file;
        }
        self.normalize()?;
        Ok(self)
    }

    fn normalize(&mut self) -> TrackerResult<()> {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TrackerError::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(TrackerError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
