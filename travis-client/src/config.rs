//! Client configuration
//!
//! Everything the client needs to talk to Travis: where the API lives, which
//! token to authenticate with, and how patiently to wait for asynchronous
//! state changes.

use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::poll::PollPolicy;

/// Default Travis CI API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.travis-ci.com/";

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.travis-ci.com/")
    pub base_url: String,

    /// API token sent as `Authorization: token <TOKEN>`
    pub token: String,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Polling used by activation and sync
    pub poll: PollPolicy,
}

impl ClientConfig {
    /// Creates a configuration for `token` with defaults
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            request_timeout: Duration::from_secs(30),
            poll: PollPolicy::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TRAVIS_TOKEN (required)
    /// - TRAVIS_API_URL (optional, default: https://api.travis-ci.com/)
    /// - TRAVIS_POLL_ATTEMPTS (optional, default: 10)
    /// - TRAVIS_POLL_INTERVAL_SECS (optional, default: 1)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("TRAVIS_TOKEN")
            .ok_or_else(|| ClientError::Config("TRAVIS_TOKEN environment variable not set".into()))?;

        let mut config = Self::new(token);

        if let Some(url) = lookup("TRAVIS_API_URL") {
            config.base_url = url;
        }

        if let Some(attempts) = lookup("TRAVIS_POLL_ATTEMPTS").and_then(|s| s.parse::<u32>().ok())
        {
            config.poll.max_attempts = attempts;
        }

        if let Some(interval) = lookup("TRAVIS_POLL_INTERVAL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
        {
            config.poll = PollPolicy::fixed(config.poll.max_attempts, interval);
        }

        config.validate()?;
        Ok(config)
    }

    /// Overrides the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the polling policy
    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ClientError::Config("token cannot be empty".into()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Config(
                "base_url must start with http:// or https://".into(),
            ));
        }

        if self.poll.max_attempts == 0 {
            return Err(ClientError::Config(
                "poll attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("poll", &self.poll)
            .finish()
    }
}
