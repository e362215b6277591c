//! Build job and log endpoints

use travis_core::domain::job::Job;
use travis_core::domain::log::LogPart;
use travis_core::dto::build::BuildJobs;
use travis_core::dto::log::JobLog;

use crate::error::Result;
use crate::transport::ApiRequest;
use crate::{TravisClient, optional_json};

impl TravisClient {
    /// List the jobs of a build
    ///
    /// # Arguments
    /// * `build_id` - Travis build id
    ///
    /// # Returns
    /// `None` if the build does not exist
    pub async fn get_jobs(&self, build_id: u64) -> Result<Option<Vec<Job>>> {
        let response = self
            .send(ApiRequest::get(format!("build/{}", build_id)))
            .await?;

        let build: Option<BuildJobs> = optional_json(response, &format!("build {}", build_id))?;
        Ok(build.map(|b| b.jobs))
    }

    /// Get the log of a job, split into parts
    ///
    /// Use [`travis_core::domain::log::assemble`] to join them.
    ///
    /// # Arguments
    /// * `job_id` - Travis job id
    ///
    /// # Returns
    /// `None` if the job (or its log) does not exist
    pub async fn get_log_parts(&self, job_id: u64) -> Result<Option<Vec<LogPart>>> {
        let response = self
            .send(ApiRequest::get(format!("job/{}/log", job_id)))
            .await?;

        let log: Option<JobLog> = optional_json(response, &format!("log of job {}", job_id))?;
        Ok(log.map(|l| l.log_parts))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::{Value, json};
    use travis_core::domain::job::JobState;

    use crate::ClientError;
    use crate::testing::ScriptedTransport;

    #[tokio::test]
    async fn test_get_jobs() {
        let script = ScriptedTransport::new().expect(
            Method::GET,
            "build/100",
            200,
            json!({
                "@type": "build",
                "id": 100,
                "jobs": [
                    { "id": 101, "state": "passed" },
                    { "id": 102, "state": "started" }
                ]
            }),
        );

        let jobs = script.client().get_jobs(100).await.unwrap().unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].state, Some(JobState::Passed));
    }

    #[tokio::test]
    async fn test_get_jobs_missing_build() {
        let script = ScriptedTransport::new().expect(Method::GET, "build/100", 404, Value::Null);

        assert!(script.client().get_jobs(100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_jobs_without_jobs_field() {
        let script =
            ScriptedTransport::new().expect(Method::GET, "build/100", 200, json!({ "id": 100 }));

        let err = script.client().get_jobs(100).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_get_log_parts() {
        let script = ScriptedTransport::new().expect(
            Method::GET,
            "job/101/log",
            200,
            json!({
                "@type": "log",
                "id": 5,
                "log_parts": [
                    { "number": 0, "content": "$ python3 check50.py\n", "final": false },
                    { "number": 1, "content": ":) hello.c exists\n", "final": true }
                ]
            }),
        );

        let parts = script.client().get_log_parts(101).await.unwrap().unwrap();
        assert_eq!(parts.len(), 2);
        assert!(parts[1].is_final);
    }

    #[tokio::test]
    async fn test_get_log_parts_missing_job() {
        let script = ScriptedTransport::new().expect(Method::GET, "job/101/log", 404, Value::Null);

        assert!(script.client().get_log_parts(101).await.unwrap().is_none());
    }
}
