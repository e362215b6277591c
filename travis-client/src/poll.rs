//! Bounded polling
//!
//! Travis applies activation and account sync asynchronously: the trigger
//! request returns immediately and the new state shows up a few seconds
//! later. [`wait_until`] re-reads the remote state until a predicate holds or
//! the attempt budget is spent.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::{ClientError, Result};

/// How often and how long to poll for a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Number of times the state is read before giving up
    pub max_attempts: u32,

    /// Delay after the first unsuccessful read
    pub interval: Duration,

    /// Multiplier applied to the delay after every unsuccessful read (1 = fixed)
    pub backoff_factor: u32,

    /// Upper bound for the delay when backing off
    pub max_interval: Duration,
}

impl PollPolicy {
    /// Fixed spacing: `attempts` reads, `interval` apart
    pub fn fixed(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            backoff_factor: 1,
            max_interval: interval,
        }
    }

    /// Geometric backoff starting at `interval`, capped at `max_interval`
    pub fn with_backoff(mut self, factor: u32, max_interval: Duration) -> Self {
        self.backoff_factor = factor.max(1);
        self.max_interval = max_interval.max(self.interval);
        self
    }

    /// Delay to wait after the `attempt`-th (1-based) unsuccessful read
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let mut delay = self.interval;
        for _ in 1..attempt {
            if self.backoff_factor <= 1 || delay >= self.max_interval {
                break;
            }
            delay = delay.saturating_mul(self.backoff_factor);
        }
        delay.min(self.max_interval.max(self.interval))
    }
}

impl Default for PollPolicy {
    /// Ten reads one second apart
    fn default() -> Self {
        Self::fixed(10, Duration::from_secs(1))
    }
}

/// Poll `probe` until it reports `true`
///
/// The probe runs at most `policy.max_attempts` times. An error returned by
/// the probe aborts the poll and is propagated as-is. Running out of attempts
/// yields [`ClientError::Timeout`] naming `operation`.
pub async fn wait_until<F, Fut>(policy: &PollPolicy, operation: &str, mut probe: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    for attempt in 1..=policy.max_attempts {
        if probe().await? {
            debug!("{} observed after {} attempt(s)", operation, attempt);
            return Ok(());
        }

        if attempt < policy.max_attempts {
            let delay = policy.delay_after(attempt);
            debug!(
                "{} not yet observed (attempt {}/{}), retrying in {:?}",
                operation, attempt, policy.max_attempts, delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    Err(ClientError::Timeout {
        operation: operation.to_string(),
        attempts: policy.max_attempts,
    })
}
