//! Decoder for the `index_lite.json` object form

use serde::{Deserialize, Serialize};

use crate::core::error::{HiscoresError, Result};

/// Top-level JSON response
///
/// Either collection may be missing or `null`; both decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiscoreResponse {
    #[serde(default)]
    pub skills: Option<Vec<SkillEntry>>,
    #[serde(default)]
    pub activities: Option<Vec<ActivityEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub id: usize,
    pub name: String,
    pub rank: i32,
    pub level: i32,
    #[serde(alias = "experience")]
    pub xp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEntry {
    pub id: usize,
    pub name: String,
    pub rank: i32,
    pub score: i32,
}

pub(crate) fn decode(raw: &str) -> Result<HiscoreResponse> {
    serde_json::from_str(raw)
        .map_err(|e| HiscoresError::Decode(format!("invalid hiscores JSON: {}", e)))
}
