//! Turn raw hiscores responses into a [`Player`]
//!
//! Two wire forms are supported: the JSON object served from
//! `index_lite.json` and the positional text served from `index_lite.ws`.
//! Both go through the same field policies:
//!
//! - with virtual levels requested, every skill except Overall gets its
//!   level recomputed from experience up to the virtual cap
//! - an unranked activity (rank -1) always has a score of 0
//!
//! Parsing is a pure transform. A malformed response fails the whole call;
//! no partially filled player is ever returned.

mod positional;
pub mod structured;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::FetchOptions;
use crate::core::error::{HiscoresError, Result};
use crate::levels::LevelTable;
use crate::model::{Activity, Player, Skill, ACTIVITY_NAMES, SKILL_NAMES};

pub use structured::{ActivityEntry, HiscoreResponse, SkillEntry};

/// Wire form of a hiscores response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON object with named skill and activity entries
    Structured,
    /// Newline separated `rank,level,xp` / `rank,score` rows
    Positional,
}

impl ResponseFormat {
    /// Endpoint file serving this form
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Structured => "index_lite.json",
            Self::Positional => "index_lite.ws",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "structured"),
            Self::Positional => write!(f, "positional"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = HiscoresError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(Self::Structured),
            "positional" | "csv" | "text" => Ok(Self::Positional),
            other => Err(HiscoresError::Config(format!(
                "unknown response format {:?}",
                other
            ))),
        }
    }
}

/// Stateless parser bound to a level table
#[derive(Debug, Clone, Copy)]
pub struct ResponseParser<'a> {
    levels: &'a LevelTable,
}

impl<'a> ResponseParser<'a> {
    pub fn new(levels: &'a LevelTable) -> Self {
        Self { levels }
    }

    /// Parse `raw` in the given form into a player named `rsn`
    pub fn parse(
        &self,
        raw: &str,
        format: ResponseFormat,
        rsn: &str,
        options: &FetchOptions,
    ) -> Result<Player> {
        let player = match format {
            ResponseFormat::Structured => self.parse_structured(raw, rsn, options)?,
            ResponseFormat::Positional => self.parse_positional(raw, rsn, options)?,
        };

        tracing::debug!(
            rsn = player.rsn(),
            %format,
            skills = player.skills().len(),
            activities = player.activities().len(),
            "Parsed hiscores response"
        );

        Ok(player)
    }

    /// Parse the JSON form; entries keep their own id and name
    pub fn parse_structured(&self, raw: &str, rsn: &str, options: &FetchOptions) -> Result<Player> {
        let response = structured::decode(raw)?;

        let skills = response
            .skills
            .unwrap_or_default()
            .into_iter()
            .map(|e| self.skill(Skill::new(e.id, e.name, e.rank, e.level, e.xp), options))
            .collect();

        let activities = response
            .activities
            .unwrap_or_default()
            .into_iter()
            .map(|e| Activity::new(e.id, e.name, e.rank, e.score))
            .collect();

        Ok(Player::from_parts(rsn, skills, activities))
    }

    /// Parse the text form; id and name come from line position
    pub fn parse_positional(&self, raw: &str, rsn: &str, options: &FetchOptions) -> Result<Player> {
        let rows = positional::decode(raw)?;

        let skills = rows
            .skills
            .iter()
            .zip(SKILL_NAMES)
            .enumerate()
            .map(|(id, (row, name))| {
                self.skill(Skill::new(id, name, row.rank, row.level, row.xp), options)
            })
            .collect();

        let activities = rows
            .activities
            .iter()
            .zip(ACTIVITY_NAMES)
            .enumerate()
            .map(|(id, (row, name))| Activity::new(id, name, row.rank, row.score))
            .collect();

        Ok(Player::from_parts(rsn, skills, activities))
    }

    fn skill(&self, mut skill: Skill, options: &FetchOptions) -> Skill {
        if options.calculate_virtual_levels && !skill.is_overall() {
            skill.level = self.levels.level_for_experience(skill.xp, true);
        }
        skill
    }
}

impl Default for ResponseParser<'static> {
    fn default() -> Self {
        Self::new(LevelTable::shared())
    }
}

/// Parse with the process-wide level table
pub fn parse_response(
    raw: &str,
    format: ResponseFormat,
    rsn: &str,
    options: &FetchOptions,
) -> Result<Player> {
    ResponseParser::default().parse(raw, format, rsn, options)
}
