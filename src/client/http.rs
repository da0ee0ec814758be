//! HTTP implementation of `AnswerClient` over reqwest.
//!
//! One POST per question, JSON in and JSON out. No timeout and no retry:
//! the request runs until the transport settles it.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::client::{AnswerClient, AskError, AskRequest, AskResponse};

pub struct HttpAnswerClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnswerClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerClient for HttpAnswerClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, question: &str) -> Result<String, AskError> {
        info!(
            "POST {} (question_len={})",
            self.endpoint,
            question.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest::new(question))
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Answer service status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Answer service error: {} - {}", status.as_u16(), message);
            return Err(AskError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;
        debug!("Answer body: {} bytes", body.len());

        let parsed: AskResponse =
            serde_json::from_str(&body).map_err(|e| AskError::Parse(e.to_string()))?;
        Ok(parsed.answer)
    }
}
