//! HTTP client for the Answer Provider.

use book_common::{AnswerPayload, AskRequest, HealthResponse};
use thiserror::Error;

/// Failures talking to the provider.
///
/// The submission flow logs these and moves on; nothing retries or
/// escalates.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure reaching the provider.
    #[error("cannot reach the answer provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("answer provider returned status {status}")]
    BadStatus { status: u16 },
}

/// Client for the provider's ask and health endpoints.
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a question and parse the answer payload.
    pub async fn ask(&self, question: &str) -> Result<AnswerPayload, ProviderError> {
        let request = AskRequest {
            question: Some(question.to_string()),
        };

        let response = self
            .http
            .post(format!("{}/api/ask", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Probe the provider's health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, ProviderError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = ProviderClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base_url, "http://127.0.0.1:3000");
    }
}
