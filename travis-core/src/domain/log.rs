//! Log domain types

use serde::{Deserialize, Serialize};

/// A chunk of a job log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogPart {
    pub number: u32,
    #[serde(default)]
    pub content: String,
    /// Set on the last part once the job has finished
    #[serde(rename = "final", default)]
    pub is_final: bool,
}

/// Concatenate log parts in order of their part number
pub fn assemble(parts: &[LogPart]) -> String {
    let mut sorted: Vec<&LogPart> = parts.iter().collect();
    sorted.sort_by_key(|part| part.number);
    sorted.into_iter().map(|part| part.content.as_str()).collect()
}
