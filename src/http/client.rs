use crate::config::ScraperSettings;
use crate::errors::fetch_context;
use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client with built-in rate limiting
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        let rate_limiter = RateLimiter::new(settings.rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    /// GET a page and return its body, failing on non-success statuses
    pub async fn fetch_text(&mut self, url: &str) -> Result<String> {
        self.rate_limiter.wait().await;
        let response = self.send_get_request(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} from {}", response.status(), url);
        }

        response
            .text()
            .await
            .with_context(|| fetch_context(url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }
}
