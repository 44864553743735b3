//! OSRS Hiscores - player stats client with virtual level support

pub mod client;
pub mod core;
pub mod levels;
pub mod model;
pub mod parser;

pub use crate::client::{HiscoresClient, HttpService, ReqwestHttpService};
pub use crate::core::{ClientConfig, FetchOptions, HiscoresError, Result};
pub use crate::levels::{compute_level, LevelTable};
pub use crate::model::{Activity, Player, Skill, ACTIVITY_NAMES, SKILL_NAMES};
pub use crate::parser::{parse_response, ResponseFormat, ResponseParser};
