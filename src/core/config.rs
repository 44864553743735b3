//! Client configuration and per-call fetch options
//!
//! `ClientConfig` describes where and how the hiscores service is reached.
//! `FetchOptions` is built fresh for every lookup and never mutated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{HiscoresError, Result};
use crate::parser::ResponseFormat;

/// Base URL of the official Old School hiscores service
pub const DEFAULT_BASE_URL: &str = "https://secure.runescape.com/m=hiscore_oldschool";

/// Seconds to wait for the TCP/TLS connection before giving up
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("osrs-hiscores/", env!("CARGO_PKG_VERSION"));

/// Options applied while turning one response into a player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Derive levels from experience up to the virtual cap instead of
    /// using the level reported by the service.
    ///
    /// The Overall skill is never recomputed.
    pub calculate_virtual_levels: bool,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_virtual_levels(mut self, enabled: bool) -> Self {
        self.calculate_virtual_levels = enabled;
        self
    }
}

/// Configuration for the HTTP side of the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root; the endpoint file name is appended per format
    pub base_url: String,

    /// Which response form to request and decode
    pub format: ResponseFormat,

    /// Connection timeout in seconds
    ///
    /// Only the connect phase is bounded. There is no retry: a timeout
    /// surfaces as a transport error.
    pub connect_timeout_secs: u64,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            format: ResponseFormat::Structured,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full endpoint URL for the configured format, without the player query
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.format.endpoint()
        )
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(HiscoresError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if self.connect_timeout_secs == 0 {
            return Err(HiscoresError::Config(
                "connect_timeout_secs must be positive".into(),
            ));
        }

        Ok(())
    }

    /// Load a config from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a config from a TOML string; missing keys keep their defaults
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(content)
            .map_err(|e| HiscoresError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of this config
    ///
    /// Optional: HISCORES_BASE_URL
    /// Optional: HISCORES_FORMAT (`structured` or `positional`)
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(base_url) = std::env::var("HISCORES_BASE_URL") {
            self.base_url = base_url;
        }
        if let Ok(format) = std::env::var("HISCORES_FORMAT") {
            self.format = format.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Create a config from defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }
}
