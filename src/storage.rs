use crate::error::TrackerResult;
use crate::goal::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    user: Option<User>,
}

/// Durable store for the authenticated user
///
/// Holds only the identity (id, name, email), never goals: goals are always
/// fetched fresh from the backend.
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Stored user, `None` when nobody is logged in
    pub fn load(&self) -> TrackerResult<Option<User>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)?;
        let stored: StoredSession = toml::from_str(&content)?;
        Ok(stored.user)
    }

    pub fn save(&self, user: &User) -> TrackerResult<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredSession {
            user: Some(user.clone()),
        };
        let content = toml::to_string_pretty(&stored)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Forget the stored user; clearing an empty store is not an error
    pub fn clear(&self) -> TrackerResult<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}
