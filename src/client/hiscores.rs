//! Fetch a player from the hiscores service
//!
//! Composition is explicit: hand the client an [`HttpService`] and a
//! [`ClientConfig`], or let [`HiscoresClient::from_config`] build the
//! reqwest-backed service.

use reqwest::Url;

use super::http::{HttpService, ReqwestHttpService};
use crate::core::config::{ClientConfig, FetchOptions};
use crate::core::error::{HiscoresError, Result};
use crate::model::Player;
use crate::parser::ResponseParser;

pub struct HiscoresClient<H = ReqwestHttpService> {
    http: H,
    config: ClientConfig,
    parser: ResponseParser<'static>,
}

impl HiscoresClient<ReqwestHttpService> {
    /// Create a client backed by reqwest
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = ReqwestHttpService::new(&config)?;
        Ok(Self::new(http, config))
    }

    /// Create a client from defaults plus `HISCORES_*` environment overrides
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }
}

impl<H: HttpService> HiscoresClient<H> {
    pub fn new(http: H, config: ClientConfig) -> Self {
        Self {
            http,
            config,
            parser: ResponseParser::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Endpoint URL for `rsn`, with the name query-encoded
    pub fn player_url(&self, rsn: &str) -> Result<String> {
        let url = Url::parse_with_params(&self.config.endpoint(), &[("player", rsn)])
            .map_err(|e| HiscoresError::Config(format!("invalid endpoint URL: {}", e)))?;
        Ok(url.to_string())
    }

    /// Fetch a player with default options
    pub async fn get_player_by_rsn(&self, rsn: &str) -> Result<Player> {
        self.get_player_by_rsn_with(rsn, &FetchOptions::default()).await
    }

    /// Fetch a player, applying `options` while parsing
    ///
    /// Transport failures are returned as they came from the HTTP service.
    pub async fn get_player_by_rsn_with(&self, rsn: &str, options: &FetchOptions) -> Result<Player> {
        let url = self.player_url(rsn)?;
        let raw = self.http.get(&url).await?;
        self.parser.parse(&raw, self.config.format, rsn, options)
    }
}
