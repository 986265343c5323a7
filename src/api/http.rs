use super::GoalBackend;
use super::wire::{
    self, CreateMilestonePayload, GoalPayload, LoginPayload, LoginResponse, RegisterPayload,
    UpdateMilestonePayload,
};
use crate::config::TrackerConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::goal::{GoalDraft, GoalSet, MilestonePatch, User};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;

/// REST client for the goal backend
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> TrackerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &TrackerConfig) -> TrackerResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path like `/goal/create_goal/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `TrackerError::Backend`
    async fn check(resp: Response) -> TrackerResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(TrackerError::Backend {
            status: status.as_u16(),
            message: wire::error_message(&body),
        })
    }
}

#[async_trait]
impl GoalBackend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> TrackerResult<User> {
        let url = self.url("/user/login/");
        debug!(%url, "login request");
        let resp = self
            .client
            .post(&url)
            .json(&LoginPayload { email, password })
            .send()
            .await?;

        if matches!(resp.status(), StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND) {
            return Err(TrackerError::InvalidCredentials);
        }

        let body: LoginResponse = Self::check(resp).await?.json().await?;
        let user = body
            .user
            .ok_or_else(|| TrackerError::Schema("login response without user".to_string()))?;
        wire::user_from_wire(user)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> TrackerResult<()> {
        let url = self.url("/user/register/");
        debug!(%url, "register request");
        let resp = self
            .client
            .post(&url)
            .json(&RegisterPayload {
                name,
                email,
                password,
            })
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn fetch_goals(&self, user_id: i64) -> TrackerResult<GoalSet> {
        let url = self.url(&format!("/goal/goal/{}/", user_id));
        debug!(%url, "fetch goals");
        let resp = self.client.get(&url).send().await?;
        let body = Self::check(resp).await?.text().await?;
        wire::decode_goals(&body)
    }

    async fn create_goal(&self, user_id: i64, draft: &GoalDraft) -> TrackerResult<()> {
        let url = self.url("/goal/create_goal/");
        debug!(%url, title = %draft.title, "create goal");
        let resp = self
            .client
            .post(&url)
            .json(&GoalPayload::new(user_id, draft))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn update_goal(
        &self,
        user_id: i64,
        goal_id: i64,
        draft: &GoalDraft,
    ) -> TrackerResult<()> {
        let url = self.url(&format!("/goal/update_goal/{}/", goal_id));
        debug!(%url, "update goal");
        let resp = self
            .client
            .put(&url)
            .json(&GoalPayload::new(user_id, draft))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete_goal(&self, goal_id: i64) -> TrackerResult<()> {
        let url = self.url(&format!("/goal/delete_goal/{}/", goal_id));
        debug!(%url, "delete goal");
        let resp = self.client.delete(&url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn create_milestone(&self, goal_id: i64, title: &str) -> TrackerResult<()> {
        let url = self.url("/goal/create_milestone/");
        debug!(%url, goal_id, "create milestone");
        let resp = self
            .client
            .post(&url)
            .json(&CreateMilestonePayload {
                goal_id,
                title: title.to_string(),
            })
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn update_milestone(
        &self,
        milestone_id: i64,
        patch: &MilestonePatch,
    ) -> TrackerResult<()> {
        let url = self.url(&format!("/goal/update_milestone/{}/", milestone_id));
        debug!(%url, "update milestone");
        let resp = self
            .client
            .put(&url)
            .json(&UpdateMilestonePayload::from(patch))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete_milestone(&self, milestone_id: i64) -> TrackerResult<()> {
        let url = self.url(&format!("/goal/delete_milestone/{}/", milestone_id));
        debug!(%url, "delete milestone");
        let resp = self.client.delete(&url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}
