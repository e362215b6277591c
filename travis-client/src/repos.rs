//! Repository endpoints

use tracing::info;
use travis_core::domain::repository::Repository;

use crate::error::{ClientError, Result};
use crate::transport::ApiRequest;
use crate::{TravisClient, expect_status, optional_json, poll, repo_path, slug};

impl TravisClient {
    // =============================================================================
    // Repository Lookup
    // =============================================================================

    /// Get a repository by owner and name
    ///
    /// # Returns
    /// `None` when Travis does not know the repository (404)
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<Option<Repository>> {
        let response = self.send(ApiRequest::get(repo_path(owner, repo))).await?;

        optional_json(response, &format!("repository {}", slug(owner, repo)))
    }

    // =============================================================================
    // Activation
    // =============================================================================

    /// Enable a repository on Travis CI and wait until it reports active
    ///
    /// Issues the activation request, then re-reads the repository according
    /// to the client's [`PollPolicy`](crate::PollPolicy). A repository that
    /// is still missing while polling counts as not active yet.
    ///
    /// # Errors
    /// - the activation request did not return 200
    /// - [`ClientError::Timeout`](crate::ClientError::Timeout) if the
    ///   repository never turned active
    ///
    /// # Example
    /// ```no_run
    /// # use travis_client::TravisClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = TravisClient::from_env()?;
    /// client.activate("cs50", "hello").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn activate(&self, owner: &str, repo: &str) -> Result<()> {
        let slug = slug(owner, repo);
        let path = format!("{}/activate", repo_path(owner, repo));
        let response = self.send(ApiRequest::post(path)).await?;
        expect_status(response, 200, &format!("repository {}", slug))?;

        poll::wait_until(&self.poll, &format!("activation of {}", slug), || async move {
            let found = self.get_repo(owner, repo).await?;
            Ok::<_, ClientError>(found.is_some_and(|r| r.active))
        })
        .await?;

        info!("Repository {} is active", slug);
        Ok(())
    }
}
