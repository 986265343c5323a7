//! Login, registration and logout

use crate::TrackerHandler;
use crate::error::TrackerResult;
use crate::goal::User;
use crate::notification::Notification;
use crate::validation;
use tracing::{info, warn};

impl TrackerHandler {
    /// Persist and load `user`, then fetch their goals
    async fn establish(&self, user: User) -> TrackerResult<()> {
        self.store.save(&user)?;
        self.session().load(user);
        self.refresh_quietly().await;
        Ok(())
    }

    /// Log in with email and password
    ///
    /// On failure no session is established and whatever session existed
    /// before is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> TrackerResult<Notification> {
        validation::validate_login(email, password)?;
        let email = email.trim();

        let user = self
            .backend
            .login(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "login failed"))?;
        info!(user_id = user.id, "logged in");

        let greeting = format!("Welcome back, {}", user.name);
        self.establish(user).await?;
        Ok(Notification::success("Logged in", greeting))
    }

    /// Create an account and log into it
    ///
    /// The registration endpoint does not hand back the new user, so a login
    /// with the same credentials follows.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> TrackerResult<Notification> {
        validation::validate_registration(name, email, password)?;
        let email = email.trim();

        self.backend
            .register(name.trim(), email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "registration failed"))?;
        let user = self
            .backend
            .login(email, password)
            .await
            .inspect_err(|e| warn!(error = %e, "login after registration failed"))?;
        info!(user_id = user.id, "registered");

        self.establish(user).await?;
        Ok(Notification::success(
            "Account created",
            "Your account has been created successfully",
        ))
    }

    /// Forget the stored user and drop the goal snapshot
    pub fn logout(&self) -> TrackerResult<Notification> {
        self.session().clear();
        self.store.clear()?;
        info!("logged out");
        Ok(Notification::success("Logged out", ""))
    }
}
