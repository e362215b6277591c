//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job belonging to a build
///
/// Travis returns jobs in several representations; only `id` is always
/// present, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub state: Option<JobState>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Job state as reported by Travis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Created,
    Queued,
    Received,
    Started,
    Passed,
    Failed,
    Errored,
    Canceled,
    #[serde(other)]
    Other,
}

impl JobState {
    /// Whether the job has stopped running
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            JobState::Passed | JobState::Failed | JobState::Errored | JobState::Canceled
        )
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Created => write!(f, "created"),
            JobState::Queued => write!(f, "queued"),
            JobState::Received => write!(f, "received"),
            JobState::Started => write!(f, "started"),
            JobState::Passed => write!(f, "passed"),
            JobState::Failed => write!(f, "failed"),
            JobState::Errored => write!(f, "errored"),
            JobState::Canceled => write!(f, "canceled"),
            JobState::Other => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_job() {
        let job: Job = serde_json::from_value(json!({ "@type": "job", "id": 99 })).unwrap();
        assert_eq!(job.id, 99);
        assert!(job.state.is_none());
    }

    #[test]
    fn test_unknown_state_maps_to_other() {
        let job: Job =
            serde_json::from_value(json!({ "id": 1, "state": "booting" })).unwrap();
        assert_eq!(job.state, Some(JobState::Other));
    }

    #[test]
    fn test_finished_states() {
        assert!(JobState::Passed.is_finished());
        assert!(JobState::Errored.is_finished());
        assert!(!JobState::Started.is_finished());
        assert!(!JobState::Queued.is_finished());
    }
}
