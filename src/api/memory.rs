use super::GoalBackend;
use crate::error::{TrackerError, TrackerResult};
use crate::goal::{Category, Goal, GoalDraft, GoalSet, Milestone, MilestonePatch, User};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

const MIN_PASSWORD_LEN: usize = 8;

struct Account {
    user: User,
    password: String,
}

struct OwnedGoal {
    owner: i64,
    goal: Goal,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    /// Creation order, which is also the order goals are listed in
    goals: Vec<OwnedGoal>,
    user_counter: i64,
    goal_counter: i64,
    milestone_counter: i64,
}

impl State {
    fn goal_mut(&mut self, goal_id: i64) -> TrackerResult<&mut Goal> {
        self.goals
            .iter_mut()
            .map(|o| &mut o.goal)
            .find(|g| g.id == goal_id)
            .ok_or_else(|| not_found("Goal not found!"))
    }

    fn milestone_mut(&mut self, milestone_id: i64) -> TrackerResult<&mut Milestone> {
        self.goals
            .iter_mut()
            .flat_map(|o| o.goal.milestones.iter_mut())
            .find(|m| m.id == milestone_id)
            .ok_or_else(|| not_found("Milestone not found!"))
    }
}

fn bad_request(message: &str) -> TrackerError {
    TrackerError::Backend {
        status: 400,
        message: message.to_string(),
    }
}

fn not_found(message: &str) -> TrackerError {
    TrackerError::Backend {
        status: 404,
        message: message.to_string(),
    }
}

fn check_goal_fields(draft: &GoalDraft) -> TrackerResult<()> {
    if draft.title.trim().is_empty()
        || draft.description.trim().is_empty()
        || draft.category.trim().is_empty()
        || draft.target_date.is_none()
    {
        return Err(bad_request("Please fill all the fields!"));
    }
    Ok(())
}

/// Self-contained goal backend kept in process memory
///
/// Applies the same rules as the REST server: ids are allocated from
/// counters and unique system-wide, deleting a goal deletes its milestones,
/// and create requests with missing fields are rejected with status 400.
///
/// It can be switched unreachable to simulate a dead network, and counts
/// every request it receives.
#[derive(Default)]
pub struct InMemoryBackend {
    state: Mutex<State>,
    unreachable: AtomicBool,
    requests: AtomicUsize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a request and fail it if the backend is unreachable
    fn receive(&self, operation: &str) -> TrackerResult<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        debug!(operation, "in-memory backend request");
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(TrackerError::Network("backend unreachable".to_string()));
        }
        Ok(())
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Number of requests received so far, failed ones included
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Create an account directly, without counting a request
    pub fn add_user(&self, name: &str, email: &str, password: &str) -> User {
        let mut state = self.state();
        state.user_counter += 1;
        let user = User {
            id: state.user_counter,
            name: name.to_string(),
            email: email.to_string(),
        };
        state.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        user
    }
}

#[async_trait]
impl GoalBackend for InMemoryBackend {
    async fn login(&self, email: &str, password: &str) -> TrackerResult<User> {
        self.receive("login")?;
        let state = self.state();
        state
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
            .ok_or(TrackerError::InvalidCredentials)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> TrackerResult<()> {
        self.receive("register")?;
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(bad_request("Please fill all the fields!"));
        }
        if !email.contains('@') {
            return Err(bad_request("Invalid email format!"));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(bad_request("Password must be at least 8 characters long!"));
        }
        if self.state().accounts.iter().any(|a| a.user.email == email) {
            return Err(bad_request("Email already exists!"));
        }
        self.add_user(name, email, password);
        Ok(())
    }

    async fn fetch_goals(&self, user_id: i64) -> TrackerResult<GoalSet> {
        self.receive("fetch_goals")?;
        let state = self.state();
        let goals = state
            .goals
            .iter()
            .filter(|o| o.owner == user_id)
            .map(|o| o.goal.clone())
            .collect();
        Ok(GoalSet::from_goals(goals))
    }

    async fn create_goal(&self, user_id: i64, draft: &GoalDraft) -> TrackerResult<()> {
        self.receive("create_goal")?;
        check_goal_fields(draft)?;
        let mut state = self.state();
        state.goal_counter += 1;
        let goal = Goal {
            id: state.goal_counter,
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: Category::from(draft.category.as_str()),
            priority: draft.priority,
            target_date: draft.target_date,
            milestones: Vec::new(),
        };
        state.goals.push(OwnedGoal {
            owner: user_id,
            goal,
        });
        Ok(())
    }

    async fn update_goal(
        &self,
        _user_id: i64,
        goal_id: i64,
        draft: &GoalDraft,
    ) -> TrackerResult<()> {
        self.receive("update_goal")?;
        let mut state = self.state();
        let goal = state.goal_mut(goal_id)?;
        goal.title = draft.title.clone();
        goal.description = draft.description.clone();
        goal.category = Category::from(draft.category.as_str());
        goal.priority = draft.priority;
        goal.target_date = draft.target_date;
        Ok(())
    }

    async fn delete_goal(&self, goal_id: i64) -> TrackerResult<()> {
        self.receive("delete_goal")?;
        let mut state = self.state();
        let pos = state
            .goals
            .iter()
            .position(|o| o.goal.id == goal_id)
            .ok_or_else(|| not_found("Goal not found!"))?;
        state.goals.remove(pos);
        Ok(())
    }

    async fn create_milestone(&self, goal_id: i64, title: &str) -> TrackerResult<()> {
        self.receive("create_milestone")?;
        if title.trim().is_empty() {
            return Err(bad_request("Please fill all the fields!"));
        }
        let mut state = self.state();
        let id = state.milestone_counter + 1;
        state.goal_mut(goal_id)?.milestones.push(Milestone {
            id,
            title: title.to_string(),
            status: false,
        });
        state.milestone_counter = id;
        Ok(())
    }

    async fn update_milestone(
        &self,
        milestone_id: i64,
        patch: &MilestonePatch,
    ) -> TrackerResult<()> {
        self.receive("update_milestone")?;
        let mut state = self.state();
        let milestone = state.milestone_mut(milestone_id)?;
        if let Some(ref title) = patch.title {
            milestone.title = title.clone();
        }
        if let Some(status) = patch.status {
            milestone.status = status;
        }
        Ok(())
    }

    async fn delete_milestone(&self, milestone_id: i64) -> TrackerResult<()> {
        self.receive("delete_milestone")?;
        let mut state = self.state();
        for owned in state.goals.iter_mut() {
            if let Some(pos) = owned.goal.milestones.iter().position(|m| m.id == milestone_id) {
                owned.goal.milestones.remove(pos);
                return Ok(());
            }
        }
        Err(not_found("Milestone not found!"))
    }
}
