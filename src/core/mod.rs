pub mod config;
pub mod error;

pub use config::{ClientConfig, FetchOptions};
pub use error::{HiscoresError, Result};
