//! Read-only views over the current snapshot

use crate::TrackerHandler;
use crate::error::{TrackerError, TrackerResult};
use crate::formatting;
use crate::goal::{self, GoalFilter};
use chrono::NaiveDateTime;

impl TrackerHandler {
    /// Summary counts, priority goals and upcoming deadlines
    pub fn dashboard_view(&self, now: NaiveDateTime) -> TrackerResult<String> {
        let session = self.session();
        session.require_user()?;
        let dashboard = goal::dashboard(session.goals(), now);
        Ok(formatting::format_dashboard(&dashboard))
    }

    /// Goal grid for one filter tab; `None` shows everything
    pub fn list_view(&self, filter: Option<GoalFilter>) -> TrackerResult<String> {
        let session = self.session();
        session.require_user()?;
        let goals = goal::filter_goals(session.goals(), filter);
        Ok(formatting::format_goals(&goals, filter.unwrap_or_default()))
    }

    pub fn goal_view(&self, goal_id: i64) -> TrackerResult<String> {
        let session = self.session();
        session.require_user()?;
        let goal = session
            .goals()
            .find_goal(goal_id)
            .ok_or(TrackerError::GoalNotFound(goal_id))?;
        Ok(formatting::format_goal_detail(goal))
    }

    pub fn report_view(&self) -> TrackerResult<String> {
        let session = self.session();
        session.require_user()?;
        Ok(formatting::format_report(&goal::report(session.goals())))
    }
}
