//! Configuration module
//!
//! Turns command-line settings into a client configuration.

use std::time::Duration;

use anyhow::Result;
use travis_client::{ClientConfig, PollPolicy, TravisClient};

/// CLI configuration
#[derive(Clone)]
pub struct Config {
    /// Travis API token
    pub token: String,
    /// Travis API base URL
    pub api_url: String,
    /// Polls before giving up on activation or sync
    pub poll_attempts: u32,
    /// Seconds between polls
    pub poll_interval: u64,
}

impl Config {
    /// Client configuration for these settings
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.token.clone())
            .with_base_url(self.api_url.clone())
            .with_poll_policy(PollPolicy::fixed(
                self.poll_attempts,
                Duration::from_secs(self.poll_interval),
            ))
    }

    /// Build a client for these settings
    pub fn client(&self) -> Result<TravisClient> {
        Ok(TravisClient::new(self.client_config())?)
    }
}
