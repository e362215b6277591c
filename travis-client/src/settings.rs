//! Repository setting endpoints

use tracing::debug;
use travis_core::dto::setting::{RepoSetting, SettingUpdate};

use crate::error::Result;
use crate::transport::ApiRequest;
use crate::{TravisClient, expect_status, repo_path, slug};

impl TravisClient {
    /// Set a boolean repository setting
    ///
    /// Succeeds only when Travis answers with exactly 200.
    ///
    /// # Arguments
    /// * `setting` - Which setting to change
    /// * `value` - The new value
    pub async fn set_setting(
        &self,
        owner: &str,
        repo: &str,
        setting: RepoSetting,
        value: bool,
    ) -> Result<()> {
        let path = format!("{}/setting/{}", repo_path(owner, repo), setting);
        let request = ApiRequest::patch(path).json(&SettingUpdate { value })?;
        let response = self.send(request).await?;

        expect_status(
            response,
            200,
            &format!("setting {} of {}", setting, slug(owner, repo)),
        )?;

        debug!("Set {} = {} on {}", setting, value, slug(owner, repo));
        Ok(())
    }

    /// Stop building on pushed commits
    pub async fn disable_build_pushes(&self, owner: &str, repo: &str) -> Result<()> {
        self.set_setting(owner, repo, RepoSetting::BuildPushes, false)
            .await
    }

    /// Stop building pull requests
    pub async fn disable_build_pull_requests(&self, owner: &str, repo: &str) -> Result<()> {
        self.set_setting(owner, repo, RepoSetting::BuildPullRequests, false)
            .await
    }

    /// Cancel queued builds superseded by a newer push
    pub async fn enable_auto_cancel(&self, owner: &str, repo: &str) -> Result<()> {
        self.set_setting(owner, repo, RepoSetting::AutoCancelPushes, true)
            .await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::Value;

    use crate::ClientError;
    use crate::testing::ScriptedTransport;

    #[tokio::test]
    async fn test_disable_build_pushes_body() {
        let script = ScriptedTransport::new().expect(
            Method::PATCH,
            "repo/cs50%2Fhello/setting/build_pushes",
            200,
            Value::Null,
        );

        script
            .client()
            .disable_build_pushes("cs50", "hello")
            .await
            .unwrap();

        let sent = script.sent();
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"setting.value":false}"#));
    }

    #[tokio::test]
    async fn test_enable_auto_cancel_body() {
        let script = ScriptedTransport::new().expect(
            Method::PATCH,
            "repo/cs50%2Fhello/setting/auto_cancel_pushes",
            200,
            Value::Null,
        );

        script
            .client()
            .enable_auto_cancel("cs50", "hello")
            .await
            .unwrap();

        assert_eq!(
            script.sent()[0].body.as_deref(),
            Some(r#"{"setting.value":true}"#)
        );
    }

    #[tokio::test]
    async fn test_toggle_requires_exactly_200() {
        for status in [201, 204, 400, 404, 500] {
            let script = ScriptedTransport::new().expect(
                Method::PATCH,
                "repo/cs50%2Fhello/setting/build_pull_requests",
                status,
                Value::Null,
            );

            let result = script
                .client()
                .disable_build_pull_requests("cs50", "hello")
                .await;
            assert!(result.is_err(), "status {} should fail", status);
        }
    }

    #[tokio::test]
    async fn test_toggle_not_found() {
        let script = ScriptedTransport::new().expect(
            Method::PATCH,
            "repo/cs50%2Fhello/setting/build_pushes",
            404,
            Value::Null,
        );

        let err = script
            .client()
            .disable_build_pushes("cs50", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}
