//! Milestone add / rename / toggle / delete

use crate::TrackerHandler;
use crate::error::{TrackerError, TrackerResult};
use crate::goal::MilestonePatch;
use crate::notification::Notification;
use crate::validation;
use tracing::{info, warn};

impl TrackerHandler {
    /// Status of a milestone as seen in the snapshot
    fn milestone_status(&self, milestone_id: i64) -> TrackerResult<bool> {
        self.session()
            .goals()
            .find_milestone(milestone_id)
            .map(|(_, m)| m.status)
            .ok_or(TrackerError::MilestoneNotFound(milestone_id))
    }

    pub async fn add_milestone(&self, goal_id: i64, title: &str) -> TrackerResult<Notification> {
        validation::validate_milestone_title(title)?;
        self.user_id()?;
        self.ensure_goal(goal_id)?;

        self.backend
            .create_milestone(goal_id, title.trim())
            .await
            .inspect_err(|e| warn!(error = %e, goal_id, "failed to add milestone"))?;
        info!(goal_id, "milestone added");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Milestone added",
            "New milestone has been added to your goal",
        ))
    }

    /// Apply a partial update (title and/or status)
    pub async fn update_milestone(
        &self,
        milestone_id: i64,
        patch: MilestonePatch,
    ) -> TrackerResult<Notification> {
        validation::validate_milestone_patch(&patch)?;
        self.user_id()?;
        self.milestone_status(milestone_id)?;

        self.backend
            .update_milestone(milestone_id, &patch)
            .await
            .inspect_err(|e| warn!(error = %e, milestone_id, "failed to update milestone"))?;
        info!(milestone_id, "milestone updated");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Milestone updated",
            "Milestone has been updated",
        ))
    }

    pub async fn rename_milestone(
        &self,
        milestone_id: i64,
        title: &str,
    ) -> TrackerResult<Notification> {
        let patch = MilestonePatch {
            title: Some(title.trim().to_string()),
            status: None,
        };
        self.update_milestone(milestone_id, patch).await
    }

    /// Flip completion of a milestone relative to the current snapshot
    pub async fn toggle_milestone(&self, milestone_id: i64) -> TrackerResult<Notification> {
        self.user_id()?;
        let current = self.milestone_status(milestone_id)?;
        let patch = MilestonePatch {
            title: None,
            status: Some(!current),
        };
        self.update_milestone(milestone_id, patch).await
    }

    pub async fn delete_milestone(&self, milestone_id: i64) -> TrackerResult<Notification> {
        self.user_id()?;
        self.milestone_status(milestone_id)?;

        self.backend
            .delete_milestone(milestone_id)
            .await
            .inspect_err(|e| warn!(error = %e, milestone_id, "failed to delete milestone"))?;
        info!(milestone_id, "milestone deleted");

        self.refresh_quietly().await;
        Ok(Notification::success(
            "Milestone deleted",
            "Milestone has been deleted successfully",
        ))
    }
}
