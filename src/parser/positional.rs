//! Decoder for the `index_lite.ws` text form
//!
//! One skill per line as `rank,level,xp`, followed by one activity per line
//! as `rank,score`. Rows carry no id or name; both come from position.

use std::str::FromStr;

use crate::core::error::{HiscoresError, Result};
use crate::model::{ACTIVITY_COUNT, SKILL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SkillRow {
    pub rank: i32,
    pub level: i32,
    pub xp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActivityRow {
    pub rank: i32,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PositionalRows {
    pub skills: Vec<SkillRow>,
    pub activities: Vec<ActivityRow>,
}

/// Decode the first `SKILL_COUNT + ACTIVITY_COUNT` lines
///
/// Any missing line or malformed field fails the whole decode. Lines past
/// the known activities are ignored.
pub(crate) fn decode(raw: &str) -> Result<PositionalRows> {
    let lines: Vec<&str> = raw.lines().collect();
    let needed = SKILL_COUNT + ACTIVITY_COUNT;
    if lines.len() < needed {
        return Err(HiscoresError::Decode(format!(
            "expected at least {} lines, got {}",
            needed,
            lines.len()
        )));
    }

    let skills = lines[..SKILL_COUNT]
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let [rank, level, xp] = split_fields::<3>(line, index)?;
            Ok(SkillRow {
                rank: parse_field(rank, index, "rank")?,
                level: parse_field(level, index, "level")?,
                xp: parse_field(xp, index, "xp")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let activities = lines[SKILL_COUNT..needed]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            let index = SKILL_COUNT + offset;
            let [rank, score] = split_fields::<2>(line, index)?;
            Ok(ActivityRow {
                rank: parse_field(rank, index, "rank")?,
                score: parse_field(score, index, "score")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PositionalRows { skills, activities })
}

fn split_fields<const N: usize>(line: &str, index: usize) -> Result<[&str; N]> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    <[&str; N]>::try_from(parts.as_slice()).map_err(|_| {
        HiscoresError::Decode(format!(
            "line {}: expected {} comma-separated fields, got {:?}",
            index + 1,
            N,
            line
        ))
    })
}

fn parse_field<T>(field: &str, index: usize, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|e| {
        HiscoresError::Decode(format!(
            "line {}: invalid {} {:?}: {}",
            index + 1,
            what,
            field,
            e
        ))
    })
}
