//! Goal Tracker Client Library
//!
//! This library is the client side of a personal goal-tracking application:
//! users authenticate, create goals with milestones, and view dashboards and
//! reports summarizing their progress. Goals live on an external REST
//! backend; this crate holds a snapshot of them and derives every view from
//! that snapshot.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Action Layer**: `TrackerHandler` - user actions (auth, goal and milestone edits, views)
//! - **Domain Layer**: `goal` module - goal model, progress derivation, filters and roll-ups
//! - **Backend Layer**: `api` module - the `GoalBackend` seam, REST and in-memory implementations
//!
//! # Example
//!
//! ```no_run
//! use goal_tracker::{HttpBackend, SessionStore, TrackerConfig, TrackerHandler};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = TrackerConfig::default();
//!     let backend = Arc::new(HttpBackend::from_config(&config)?);
//!     let handler = TrackerHandler::start(backend, SessionStore::new(&config.session_file)).await;
//!     handler.login("ada@example.com", "password123").await?;
//!     println!("{}", handler.list_view(None)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod formatting;
pub mod goal;
pub mod handlers;
pub mod notification;
pub mod session;
pub mod storage;
pub mod validation;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::warn;

// Re-export commonly used types
pub use api::{GoalBackend, HttpBackend, InMemoryBackend};
pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use goal::{
    Category, Goal, GoalDraft, GoalFilter, GoalSet, Milestone, MilestonePatch, Priority,
    StatusBucket, User,
};
pub use notification::{Notification, Variant};
pub use session::Session;
pub use storage::SessionStore;

/// Entry point for every user action
///
/// Owns the backend, the session and the session store. The session mutex
/// is never held across a request: each action reads what it needs, awaits
/// the backend, then swaps in the refetched snapshot.
pub struct TrackerHandler {
    pub(crate) backend: Arc<dyn GoalBackend>,
    pub(crate) session: Mutex<Session>,
    pub(crate) store: SessionStore,
}

impl TrackerHandler {
    /// Create a handler with an anonymous session
    pub fn new(backend: Arc<dyn GoalBackend>, store: SessionStore) -> Self {
        Self {
            backend,
            session: Mutex::new(Session::new()),
            store,
        }
    }

    /// Create a handler and restore the stored session, if any
    ///
    /// A stored user is loaded and the goal list is fetched once. Neither an
    /// unreadable session file nor a failed fetch is fatal: both are logged
    /// and the handler starts anonymous or with an empty snapshot.
    pub async fn start(backend: Arc<dyn GoalBackend>, store: SessionStore) -> Self {
        let handler = Self::new(backend, store);
        match handler.store.load() {
            Ok(Some(user)) => {
                handler.session().load(user);
                handler.refresh_quietly().await;
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "ignoring unreadable session store"),
        }
        handler
    }

    pub(crate) fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn user_id(&self) -> TrackerResult<i64> {
        self.session().require_user().map(|u| u.id)
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.session().user().cloned()
    }

    /// Copy of the current goal snapshot
    pub fn snapshot(&self) -> GoalSet {
        self.session().goals().clone()
    }

    /// Refetch the whole goal list and replace the snapshot
    pub async fn refresh(&self) -> TrackerResult<()> {
        let user_id = self.user_id()?;
        let goals = self
            .backend
            .fetch_goals(user_id)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to fetch goals"))?;
        self.session().replace_goals(goals);
        Ok(())
    }

    /// Refetch, logging instead of failing
    pub(crate) async fn refresh_quietly(&self) {
        let _ = self.refresh().await;
    }
}
