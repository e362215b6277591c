//! Build DTOs
//!
//! The build trigger payload and the build response envelope.

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;

/// Language the default build configuration runs under
pub const DEFAULT_LANGUAGE: &str = "python";

/// Python runtime version of the default build configuration
pub const DEFAULT_PYTHON_VERSION: &str = "3.5";

/// Webhook notified when a build finishes
pub const DEFAULT_WEBHOOK: &str = "https://cs50.me/hooks/travis";

/// Body of `POST repo/{slug}/requests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBuildRequest {
    pub request: BuildRequest,
}

/// A build request for a single branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub branch: String,
    pub config: BuildConfig,
}

/// `.travis.yml` content sent along with the request
///
/// With `merge_mode: replace` this config is used instead of whatever the
/// repository carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub language: String,
    pub python: String,
    pub merge_mode: String,
    pub script: String,
    pub notifications: Notifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notifications {
    pub webhooks: String,
}

impl BuildConfig {
    /// The default configuration: run the full local check for `branch`
    pub fn for_branch(branch: &str) -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            python: DEFAULT_PYTHON_VERSION.to_string(),
            merge_mode: "replace".to_string(),
            script: format!("python3 check50.py --full --local {} ../*", branch),
            notifications: Notifications {
                webhooks: DEFAULT_WEBHOOK.to_string(),
            },
        }
    }
}

impl BuildRequest {
    /// Build request for `branch` with the default configuration
    pub fn for_branch(branch: impl Into<String>) -> Self {
        let branch = branch.into();
        let config = BuildConfig::for_branch(&branch);
        Self { branch, config }
    }
}

impl From<BuildRequest> for CreateBuildRequest {
    fn from(request: BuildRequest) -> Self {
        Self { request }
    }
}

/// Body of `GET build/{id}`, reduced to the jobs list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildJobs {
    #[serde(default)]
    pub id: Option<u64>,
    pub jobs: Vec<Job>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_payload_shape() {
        let payload = CreateBuildRequest::from(BuildRequest::for_branch("cs50/2017/x/hello"));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "request": {
                    "branch": "cs50/2017/x/hello",
                    "config": {
                        "language": "python",
                        "python": "3.5",
                        "merge_mode": "replace",
                        "script": "python3 check50.py --full --local cs50/2017/x/hello ../*",
                        "notifications": { "webhooks": "https://cs50.me/hooks/travis" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_build_jobs_requires_jobs_field() {
        assert!(serde_json::from_value::<BuildJobs>(json!({ "id": 5 })).is_err());

        let build: BuildJobs =
            serde_json::from_value(json!({ "id": 5, "jobs": [{ "id": 6 }, { "id": 7 }] }))
                .unwrap();
        assert_eq!(build.jobs.len(), 2);
    }
}
