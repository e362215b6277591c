//! Log DTOs

use serde::{Deserialize, Serialize};

use crate::domain::log::LogPart;

/// Body of `GET job/{id}/log`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobLog {
    #[serde(default)]
    pub id: Option<u64>,
    pub log_parts: Vec<LogPart>,
}
