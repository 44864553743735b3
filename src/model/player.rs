use serde::{Deserialize, Serialize};

use super::skill::{Activity, Skill};

/// A player's hiscores record
///
/// Immutable once built: the constructor takes its own copy of both
/// collections and only read-only slices are handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    rsn: String,
    skills: Vec<Skill>,
    activities: Vec<Activity>,
}

impl Player {
    pub fn new(rsn: impl Into<String>, skills: &[Skill], activities: &[Activity]) -> Self {
        Self::from_parts(rsn, skills.to_vec(), activities.to_vec())
    }

    /// Build from owned collections without copying
    pub(crate) fn from_parts(
        rsn: impl Into<String>,
        skills: Vec<Skill>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            rsn: rsn.into(),
            skills,
            activities,
        }
    }

    /// Display name exactly as the caller supplied it
    pub fn rsn(&self) -> &str {
        &self.rsn
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn overall(&self) -> Option<&Skill> {
        self.skills.iter().find(|s| s.is_overall())
    }
}
