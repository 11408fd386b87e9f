use crate::adapters::http::{HEALTH_PATH, SUBMIT_QUOTE_PATH};
use crate::core::{QuoteAck, QuoteRequest};
use crate::domain::model::HealthStatus;
use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Small reqwest wrapper for talking to a running quote backend.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn submit(&self, request: &QuoteRequest) -> Result<QuoteAck> {
        let url = format!("{}{}", self.base_url, SUBMIT_QUOTE_PATH);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let ack = response.error_for_status()?.json::<QuoteAck>().await?;
        Ok(ack)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let status = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<HealthStatus>()
            .await?;
        Ok(status)
    }
}
