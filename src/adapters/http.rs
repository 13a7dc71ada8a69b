use crate::core::{Candidate, CandidateSource, ConfigProvider};
use crate::utils::error::{HiringError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";

/// Fetches the candidate list with a single `GET`.
#[derive(Debug, Clone)]
pub struct HttpCandidateSource {
    client: Client,
    endpoint: String,
}

impl HttpCandidateSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CandidateSource for HttpCandidateSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(HiringError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        // `null` is a valid JSON document but not a candidate list
        let candidates: Option<Vec<Candidate>> = serde_json::from_slice(&body)?;
        let candidates = candidates.ok_or(HiringError::EmptyBody)?;

        tracing::debug!("Received {} candidates", candidates.len());
        Ok(candidates)
    }
}
