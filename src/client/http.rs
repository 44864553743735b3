//! HTTP collaborator used to fetch raw response text
//!
//! The parser never sees transport problems: a failed request or a
//! non-success status is returned from here and propagated unchanged.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::core::config::ClientConfig;
use crate::core::error::{HiscoresError, Result};

/// Something that can GET a URL and hand back the body
pub trait HttpService: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// reqwest-backed implementation
#[derive(Debug, Clone)]
pub struct ReqwestHttpService {
    client: Client,
}

impl ReqwestHttpService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HiscoresError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpService for ReqwestHttpService {
    async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Requesting hiscores");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HiscoresError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HiscoresError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| HiscoresError::Transport(e.to_string()))
    }
}
