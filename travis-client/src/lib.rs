//! Travis HTTP Client
//!
//! An async client for the Travis CI v3 API covering the handful of
//! operations needed to hand a GitHub repository over to Travis and run
//! builds on it: activating the repository, toggling its build settings,
//! syncing the account, triggering builds and reading back jobs and logs.
//!
//! Activation and account sync complete asynchronously on the Travis side;
//! the client polls for the new state with a bounded [`PollPolicy`].
//!
//! # Example
//!
//! ```no_run
//! use travis_client::{ClientConfig, TravisClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TravisClient::new(ClientConfig::from_env()?)?;
//!
//!     client.configure("cs50", "hello").await?;
//!     client.build("cs50", "hello", "main").await?;
//!
//!     Ok(())
//! }
//! ```

mod builds;
pub mod config;
mod configure;
pub mod error;
mod jobs;
pub mod poll;
mod repos;
mod settings;
#[cfg(test)]
mod testing;
pub mod transport;
mod users;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use poll::PollPolicy;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
pub use travis_core::dto::build::BuildRequest;
pub use travis_core::dto::setting::RepoSetting;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Client for the Travis CI API
///
/// Operations are grouped by resource:
/// - Repositories (lookup, activation, settings, configure)
/// - Builds (trigger, jobs, logs)
/// - User (lookup, account sync)
///
/// The client holds no mutable state; clones share the same transport.
#[derive(Clone)]
pub struct TravisClient {
    /// Sends requests to the API
    transport: Arc<dyn Transport>,
    /// Polling used while waiting for activation and sync
    poll: PollPolicy,
}

impl TravisClient {
    /// Create a client talking to the API described by `config`
    ///
    /// # Example
    /// ```
    /// use travis_client::{ClientConfig, TravisClient};
    ///
    /// let client = TravisClient::new(ClientConfig::new("my-token")).unwrap();
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config.poll))
    }

    /// Create a client from `TRAVIS_TOKEN` and friends
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(transport: Arc<dyn Transport>, poll: PollPolicy) -> Self {
        Self { transport, poll }
    }

    /// Get the polling policy
    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!("{} {}", request.method, request.path);
        self.transport.send(request).await
    }
}

impl std::fmt::Debug for TravisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravisClient")
            .field("poll", &self.poll)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Paths
// =============================================================================

/// `owner/repo`, used in logs and error messages
fn slug(owner: &str, repo: &str) -> String {
    format!("{}/{}", owner, repo)
}

/// Repository path with the slash percent-encoded, as Travis expects
fn repo_path(owner: &str, repo: &str) -> String {
    format!("repo/{}%2F{}", owner, repo)
}

// =============================================================================
// Response Handlers
// =============================================================================

/// Deserialize a 200 response, mapping 404 to `None`
///
/// Any other status becomes an error classified by [`ClientError::from_status`].
fn optional_json<T: DeserializeOwned>(response: ApiResponse, resource: &str) -> Result<Option<T>> {
    match response.status {
        200 => response.json().map(Some),
        404 => Ok(None),
        status => Err(ClientError::from_status(status, resource, response.body)),
    }
}

/// Require exactly `expected`
fn expect_status(response: ApiResponse, expected: u16, resource: &str) -> Result<()> {
    if response.status == expected {
        Ok(())
    } else {
        Err(ClientError::from_status(
            response.status,
            resource,
            response.body,
        ))
    }
}
