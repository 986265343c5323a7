//! Goal create / edit / delete

use crate::TrackerHandler;
use crate::error::{TrackerError, TrackerResult};
use crate::goal::GoalDraft;
use crate::notification::Notification;
use crate::validation;
use tracing::{info, warn};

impl TrackerHandler {
    /// Fail with `GoalNotFound` unless the snapshot has this goal
    pub(crate) fn ensure_goal(&self, goal_id: i64) -> TrackerResult<()> {
        if self.session().goals().find_goal(goal_id).is_none() {
            return Err(TrackerError::GoalNotFound(goal_id));
        }
        Ok(())
    }

    /// Current values of a goal, to pre-fill an edit form
    pub fn goal_draft(&self, goal_id: i64) -> TrackerResult<GoalDraft> {
        self.session()
            .goals()
            .find_goal(goal_id)
            .map(GoalDraft::from_goal)
            .ok_or(TrackerError::GoalNotFound(goal_id))
    }

    pub async fn create_goal(&self, draft: GoalDraft) -> TrackerResult<Notification> {
        validation::validate_goal_draft(&draft)?;
        let user_id = self.user_id()?;

        self.backend
            .create_goal(user_id, &draft)
            .await
            .inspect_err(|e| warn!(error = %e, "failed to add goal"))?;
        info!(title = %draft.title, "goal added");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Goal added",
            "Your goal has been added successfully",
        ))
    }

    /// Replace every editable field of an existing goal
    pub async fn update_goal(&self, goal_id: i64, draft: GoalDraft) -> TrackerResult<Notification> {
        validation::validate_goal_draft(&draft)?;
        let user_id = self.user_id()?;
        self.ensure_goal(goal_id)?;

        self.backend
            .update_goal(user_id, goal_id, &draft)
            .await
            .inspect_err(|e| warn!(error = %e, goal_id, "failed to update goal"))?;
        info!(goal_id, "goal updated");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Goal updated",
            "Your goal has been updated successfully",
        ))
    }

    /// Delete a goal together with its milestones
    pub async fn delete_goal(&self, goal_id: i64) -> TrackerResult<Notification> {
        self.user_id()?;
        self.ensure_goal(goal_id)?;

        self.backend
            .delete_goal(goal_id)
            .await
            .inspect_err(|e| warn!(error = %e, goal_id, "failed to delete goal"))?;
        info!(goal_id, "goal deleted");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Goal deleted",
            "Your goal has been deleted successfully",
        ))
    }
}
