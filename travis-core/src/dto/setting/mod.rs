//! Repository setting DTOs

use serde::{Deserialize, Serialize};

/// Boolean repository settings exposed by `PATCH repo/{slug}/setting/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepoSetting {
    /// Build on pushed commits
    BuildPushes,
    /// Build on pull requests
    BuildPullRequests,
    /// Cancel queued push builds when a newer commit arrives
    AutoCancelPushes,
    /// Cancel queued pull request builds when the PR is updated
    AutoCancelPullRequests,
    /// Skip builds for commits without a `.travis.yml`
    BuildsOnlyWithTravisYml,
}

impl RepoSetting {
    /// Every setting, in declaration order
    pub const ALL: [RepoSetting; 5] = [
        RepoSetting::BuildPushes,
        RepoSetting::BuildPullRequests,
        RepoSetting::AutoCancelPushes,
        RepoSetting::AutoCancelPullRequests,
        RepoSetting::BuildsOnlyWithTravisYml,
    ];

    /// Name used in the endpoint path
    pub fn as_str(&self) -> &'static str {
        match self {
            RepoSetting::BuildPushes => "build_pushes",
            RepoSetting::BuildPullRequests => "build_pull_requests",
            RepoSetting::AutoCancelPushes => "auto_cancel_pushes",
            RepoSetting::AutoCancelPullRequests => "auto_cancel_pull_requests",
            RepoSetting::BuildsOnlyWithTravisYml => "builds_only_with_travis_yml",
        }
    }
}

impl std::fmt::Display for RepoSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RepoSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RepoSetting::ALL
            .into_iter()
            .find(|setting| setting.as_str() == s)
            .ok_or_else(|| format!("unknown repository setting: {}", s))
    }
}

/// Body of a setting PATCH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingUpdate {
    #[serde(rename = "setting.value")]
    pub value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_setting_update_body() {
        let body = serde_json::to_value(SettingUpdate { value: false }).unwrap();
        assert_eq!(body, json!({ "setting.value": false }));
    }

    #[test]
    fn test_setting_names_parse_back() {
        for setting in RepoSetting::ALL {
            assert_eq!(setting.as_str().parse::<RepoSetting>(), Ok(setting));
        }
        assert!("maximum_number_of_builds".parse::<RepoSetting>().is_err());
    }
}
