use serde::{Deserialize, Serialize};

use super::names::{OVERALL_SKILL_NAME, UNRANKED};

/// One skill row of a player's hiscores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Index into the canonical skill table
    pub id: usize,
    pub name: String,
    /// Hiscores rank, -1 when unranked
    pub rank: i32,
    /// Level as reported, or the virtual level when requested
    pub level: i32,
    /// Experience points
    pub xp: i64,
}

impl Skill {
    pub fn new(id: usize, name: impl Into<String>, rank: i32, level: i32, xp: i64) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            level,
            xp,
        }
    }

    /// The aggregate skill, whose level is a sum and never recomputed
    pub fn is_overall(&self) -> bool {
        self.name == OVERALL_SKILL_NAME
    }

    pub fn is_ranked(&self) -> bool {
        self.rank != UNRANKED
    }
}

/// One activity (minigame, clue tier or boss) row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Index into the canonical activity table
    pub id: usize,
    pub name: String,
    /// Hiscores rank, -1 when unranked
    pub rank: i32,
    /// Always 0 when unranked
    pub score: i32,
}

impl Activity {
    /// Build an activity, forcing the score of unranked entries to 0
    pub fn new(id: usize, name: impl Into<String>, rank: i32, score: i32) -> Self {
        let score = if rank == UNRANKED { 0 } else { score };
        Self {
            id,
            name: name.into(),
            rank,
            score,
        }
    }

    pub fn is_ranked(&self) -> bool {
        self.rank != UNRANKED
    }
}
