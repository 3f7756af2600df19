use super::types::{DefinitionRequest, DefinitionResponse};

use anyhow::Result;
use std::time::Duration;

/// HTTP client for the remote definition service.
pub struct DefinitionClient {
    http_client: reqwest::Client,
    service_url: String,
}

impl DefinitionClient {
    pub fn new(service_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            service_url: service_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Looks up a term's dictionary definitions.
    pub async fn define(&self, term: &str) -> Result<DefinitionResponse> {
        let request = DefinitionRequest {
            term: term.to_string(),
        };

        let response = self
            .send_with_backoff(&self.service_url, &request, Duration::from_millis(500), 3)
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Definition lookup failed: {}",
                response.status()
            ));
        }

        let definition_response: DefinitionResponse = response.json().await?;
        Ok(definition_response)
    }

    async fn send_with_backoff<T: serde::Serialize>(
        &self,
        url: &str,
        payload: &T,
        timeout: Duration,
        max_attempts: usize,
    ) -> Result<reqwest::Response> {
        let mut attempt = 1;
        loop {
            let result = self
                .http_client
                .post(url)
                .json(payload)
                .timeout(timeout)
                .send()
                .await;

            match result {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_attempts => {
                    // Stagger retries so concurrent lookups don't realign
                    let wait = retry_delay_ms(attempt) + rand::random::<u64>() % 50;
                    tracing::warn!(
                        "Definition request attempt {} failed ({}), retrying in {}ms",
                        attempt,
                        e,
                        wait
                    );
                    tokio::time::sleep(Duration::from_millis(wait)).await;
                    attempt += 1;
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }
}

/// Base delay for the n-th retry, doubling from 150ms up to a 1200ms cap.
pub(super) fn retry_delay_ms(attempt: usize) -> u64 {
    let doubled = 150u64.saturating_mul(1 << (attempt.saturating_sub(1)).min(16));
    doubled.min(1200)
}
