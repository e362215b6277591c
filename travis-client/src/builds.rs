//! Build trigger endpoint

use tracing::info;
use travis_core::dto::build::{BuildRequest, CreateBuildRequest};

use crate::error::{ClientError, Result};
use crate::transport::ApiRequest;
use crate::{TravisClient, expect_status, repo_path, slug};

impl TravisClient {
    /// Trigger a build of `branch` with the default build configuration
    ///
    /// See [`TravisClient::build_with`] for the recovery behavior.
    ///
    /// # Example
    /// ```no_run
    /// # use travis_client::TravisClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = TravisClient::from_env()?;
    /// client.build("cs50", "hello", "cs50/2017/x/hello").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(&self, owner: &str, repo: &str, branch: &str) -> Result<()> {
        self.build_with(owner, repo, BuildRequest::for_branch(branch))
            .await
    }

    /// Submit a build request
    ///
    /// Travis answers 202 when the request is queued. A 404 means the
    /// repository is unknown to Travis: the account is synced, the
    /// repository activated and auto-cancel enabled, then the same request
    /// is sent exactly once more and must be accepted. Any other status
    /// fails without retrying.
    pub async fn build_with(&self, owner: &str, repo: &str, request: BuildRequest) -> Result<()> {
        let slug = slug(owner, repo);
        let path = format!("{}/requests", repo_path(owner, repo));
        let payload = CreateBuildRequest::from(request);

        let response = self.send(ApiRequest::post(&path).json(&payload)?).await?;
        match response.status {
            202 => {}
            404 => {
                info!(
                    "Repository {} unknown to Travis, syncing and activating before retrying",
                    slug
                );
                self.sync().await?;
                self.activate(owner, repo).await?;
                self.enable_auto_cancel(owner, repo).await?;

                let response = self.send(ApiRequest::post(&path).json(&payload)?).await?;
                expect_status(response, 202, &format!("repository {}", slug))?;
            }
            status => {
                return Err(ClientError::from_status(
                    status,
                    &format!("repository {}", slug),
                    response.body,
                ));
            }
        }

        info!(
            "Build requested for {} on branch {}",
            slug, payload.request.branch
        );
        Ok(())
    }
}
