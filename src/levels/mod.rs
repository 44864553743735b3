//! Experience to level conversion, including virtual levels above 99

pub mod table;

pub use table::{LevelTable, MAX_REGULAR_LEVEL, MAX_VIRTUAL_LEVEL, MIN_LEVEL};

/// Level for `experience` using the process-wide table
///
/// `extended` raises the ceiling from 99 to the virtual cap of 126.
pub fn compute_level(experience: i64, extended: bool) -> i32 {
    LevelTable::shared().level_for_experience(experience, extended)
}
