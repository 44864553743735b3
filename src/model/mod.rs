//! Player record produced by the response parser

pub mod names;
pub mod player;
pub mod skill;

pub use names::{
    activity_id, skill_id, ACTIVITY_COUNT, ACTIVITY_NAMES, OVERALL_SKILL_ID, OVERALL_SKILL_NAME,
    SKILL_COUNT, SKILL_NAMES, UNRANKED,
};
pub use player::Player;
pub use skill::{Activity, Skill};
