//! Experience thresholds per level
//!
//! The table is a pure function of the constants below. It is built once,
//! either explicitly with [`LevelTable::new`] or lazily through
//! [`LevelTable::shared`], and never mutated afterwards.

use std::sync::OnceLock;

/// Lowest level a skill can have
pub const MIN_LEVEL: i32 = 1;

/// Highest level reported by the hiscores service
pub const MAX_REGULAR_LEVEL: i32 = 99;

/// Highest virtual level (the level reached at 200M experience)
pub const MAX_VIRTUAL_LEVEL: i32 = 126;

const XP_MULTIPLIER: f64 = 300.0;
const XP_POWER_BASE: f64 = 2.0;
const XP_POWER_DIVISOR: f64 = 7.0;
const XP_POINTS_DIVISOR: f64 = 4.0;

const TABLE_LEN: usize = MAX_VIRTUAL_LEVEL as usize + 1;

static SHARED: OnceLock<LevelTable> = OnceLock::new();

/// Minimum cumulative experience for every level in `1..=126`
///
/// Index 0 is unused so a level can index the array directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    thresholds: [i64; TABLE_LEN],
}

impl LevelTable {
    /// Build a fresh table
    pub fn new() -> Self {
        let mut thresholds = [0i64; TABLE_LEN];
        let mut points = 0.0_f64;

        for level in MIN_LEVEL..=MAX_VIRTUAL_LEVEL {
            // points holds the sum for i in 1..level
            thresholds[level as usize] = (points / XP_POINTS_DIVISOR).floor() as i64;

            let i = level as f64;
            points += (i + XP_MULTIPLIER * XP_POWER_BASE.powf(i / XP_POWER_DIVISOR)).floor();
        }

        Self { thresholds }
    }

    /// Process-wide table, built on first use
    pub fn shared() -> &'static LevelTable {
        SHARED.get_or_init(LevelTable::new)
    }

    /// Experience needed to reach `level`, or `None` outside `1..=126`
    pub fn experience_for_level(&self, level: i32) -> Option<i64> {
        if (MIN_LEVEL..=MAX_VIRTUAL_LEVEL).contains(&level) {
            Some(self.thresholds[level as usize])
        } else {
            None
        }
    }

    /// Highest level whose threshold `xp` meets
    ///
    /// The ceiling is 126 when `extended` is set, 99 otherwise. Anything
    /// below the level 1 threshold (negative experience) maps to level 1.
    pub fn level_for_experience(&self, xp: i64, extended: bool) -> i32 {
        let ceiling = if extended {
            MAX_VIRTUAL_LEVEL
        } else {
            MAX_REGULAR_LEVEL
        };

        (MIN_LEVEL..=ceiling)
            .rev()
            .find(|&level| xp >= self.thresholds[level as usize])
            .unwrap_or(MIN_LEVEL)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new()
    }
}
