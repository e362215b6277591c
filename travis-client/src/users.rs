//! User and account sync endpoints

use tracing::info;
use travis_core::domain::user::User;

use crate::error::{ClientError, Result};
use crate::transport::ApiRequest;
use crate::{TravisClient, expect_status, optional_json, poll};

impl TravisClient {
    /// Get the user owning the token
    ///
    /// # Returns
    /// `None` on a 404
    pub async fn get_user(&self) -> Result<Option<User>> {
        let response = self.send(ApiRequest::get("user")).await?;

        optional_json(response, "current user")
    }

    /// Sync the user's GitHub repositories so Travis can see them
    ///
    /// Triggers the sync and then polls the user until `is_syncing` clears.
    ///
    /// # Errors
    /// - [`ClientError::NotFound`] if there is no current user
    /// - the sync request did not return 200
    /// - [`ClientError::Timeout`] if the sync is still running after the
    ///   last poll
    pub async fn sync(&self) -> Result<()> {
        let user = self
            .get_user()
            .await?
            .ok_or_else(|| ClientError::NotFound("current user".to_string()))?;

        let path = format!("user/{}/sync", user.id);
        let response = self.send(ApiRequest::post(path)).await?;
        expect_status(response, 200, "current user")?;

        poll::wait_until(&self.poll, &format!("sync of {}", user.login), || async move {
            match self.get_user().await? {
                Some(user) => Ok(!user.is_syncing),
                None => Err(ClientError::NotFound("current user".to_string())),
            }
        })
        .await?;

        info!("Account {} synced", user.login);
        Ok(())
    }
}
