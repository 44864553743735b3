//! Canonical skill and activity ordering
//!
//! Positional responses are indexed against these tables, and every parsed
//! player lists its skills and activities in this order.

/// Number of skill rows, including Overall
pub const SKILL_COUNT: usize = 24;

/// Number of activity rows
pub const ACTIVITY_COUNT: usize = 40;

/// Index of the aggregate skill
pub const OVERALL_SKILL_ID: usize = 0;

/// Name of the aggregate skill
pub const OVERALL_SKILL_NAME: &str = "Overall";

/// Rank reported for entries the player is not ranked in
pub const UNRANKED: i32 = -1;

pub const SKILL_NAMES: [&str; SKILL_COUNT] = [
    "Overall",
    "Attack",
    "Defence",
    "Strength",
    "Hitpoints",
    "Ranged",
    "Prayer",
    "Magic",
    "Cooking",
    "Woodcutting",
    "Fletching",
    "Fishing",
    "Firemaking",
    "Crafting",
    "Smithing",
    "Mining",
    "Herblore",
    "Agility",
    "Thieving",
    "Slayer",
    "Farming",
    "Runecrafting",
    "Hunter",
    "Construction",
];

pub const ACTIVITY_NAMES: [&str; ACTIVITY_COUNT] = [
    "League Points",
    "Bounty Hunter - Hunter",
    "Bounty Hunter - Rogue",
    "Clue Scrolls (all)",
    "Clue Scrolls (beginner)",
    "Clue Scrolls (easy)",
    "Clue Scrolls (medium)",
    "Clue Scrolls (hard)",
    "Clue Scrolls (elite)",
    "Clue Scrolls (master)",
    "LMS - Rank",
    "PvP Arena - Rank",
    "Soul Wars Zeal",
    "Rifts closed",
    "Abyssal Sire",
    "Alchemical Hydra",
    "Artio",
    "Barrows Chests",
    "Bryophyta",
    "Callisto",
    "Calvarion",
    "Cerberus",
    "Chambers of Xeric",
    "Chambers of Xeric: Challenge Mode",
    "Chaos Elemental",
    "Chaos Fanatic",
    "Commander Zilyana",
    "Corporeal Beast",
    "Crazy Archaeologist",
    "Dagannoth Prime",
    "Dagannoth Rex",
    "Dagannoth Supreme",
    "Deranged Archaeologist",
    "Duke Sucellus",
    "General Graardor",
    "Giant Mole",
    "Grotesque Guardians",
    "Hespori",
    "Kalphite Queen",
    "King Black Dragon",
];

/// Position of a skill in the canonical table
pub fn skill_id(name: &str) -> Option<usize> {
    SKILL_NAMES.iter().position(|n| *n == name)
}

/// Position of an activity in the canonical table
pub fn activity_id(name: &str) -> Option<usize> {
    ACTIVITY_NAMES.iter().position(|n| *n == name)
}
