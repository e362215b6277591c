//! Repository domain model

use serde::{Deserialize, Serialize};

/// A repository as known to Travis CI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Travis-assigned repository id
    pub id: u64,

    /// Repository name without the owner
    pub name: String,

    /// `owner/name`
    pub slug: String,

    /// Whether Travis builds this repository
    pub active: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub private: Option<bool>,

    #[serde(default)]
    pub default_branch: Option<Branch>,

    #[serde(default)]
    pub owner: Option<Owner>,
}

/// Minimal branch representation embedded in a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// Minimal owner representation embedded in a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: String,
}

impl Repository {
    /// Owner login, falling back to the first half of the slug
    pub fn owner_login(&self) -> &str {
        match &self.owner {
            Some(owner) => &owner.login,
            None => self.slug.split('/').next().unwrap_or_default(),
        }
    }
}
