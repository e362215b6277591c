//! User domain model
//!
//! The account that owns the API token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated Travis CI user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Travis-assigned user id, used in the sync endpoint
    pub id: u64,

    /// GitHub login
    pub login: String,

    #[serde(default)]
    pub name: Option<String>,

    /// True while Travis is importing repositories from GitHub
    pub is_syncing: bool,

    /// When the last sync finished
    #[serde(default)]
    pub synced_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_from_api_payload() {
        let payload = json!({
            "@type": "user",
            "id": 7,
            "login": "cs50",
            "name": "CS50",
            "is_syncing": false,
            "synced_at": "2017-06-01T12:00:00Z"
        });

        let user: User = serde_json::from_value(payload).unwrap();
        assert_eq!(user.id, 7);
        assert!(!user.is_syncing);
        assert!(user.synced_at.is_some());
    }

    #[test]
    fn test_user_requires_syncing_flag() {
        let payload = json!({ "id": 7, "login": "cs50" });
        assert!(serde_json::from_value::<User>(payload).is_err());
    }
}
