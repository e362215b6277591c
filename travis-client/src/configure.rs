//! Repository setup
//!
//! Brings a repository into the state builds expect: known to Travis,
//! active, not building on its own, and cancelling superseded builds.

use tracing::{info, warn};

use crate::error::{ClientError, Result};
use crate::{TravisClient, slug};

impl TravisClient {
    /// Prepare a repository for on-demand builds
    ///
    /// Steps, stopping at the first failure:
    /// 1. look the repository up, syncing the account once if Travis does
    ///    not know it yet
    /// 2. activate it if inactive
    /// 3. disable builds on push
    /// 4. disable builds on pull requests
    /// 5. enable auto-cancellation
    ///
    /// Steps already applied are not undone when a later one fails.
    pub async fn configure(&self, owner: &str, repo: &str) -> Result<()> {
        let slug = slug(owner, repo);

        let found = match self.get_repo(owner, repo).await? {
            Some(found) => found,
            None => {
                info!("Repository {} not found, syncing account", slug);
                if let Err(e) = self.sync().await {
                    warn!("Account sync before configuring {} failed: {}", slug, e);
                }
                self.get_repo(owner, repo)
                    .await?
                    .ok_or_else(|| ClientError::NotFound(format!("repository {}", slug)))?
            }
        };

        if !found.active {
            self.activate(owner, repo).await?;
        }

        self.disable_build_pushes(owner, repo).await?;
        self.disable_build_pull_requests(owner, repo).await?;
        self.enable_auto_cancel(owner, repo).await?;

        info!("Repository {} configured", slug);
        Ok(())
    }
}
