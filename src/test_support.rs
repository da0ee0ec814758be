//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{AnswerClient, AskError};

/// An in-memory client that returns a canned outcome and records questions.
pub struct StubClient {
    outcome: Result<String, AskError>,
    asked: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn answering(answer: &str) -> Self {
        Self {
            outcome: Ok(answer.to_string()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: AskError) -> Self {
        Self {
            outcome: Err(err),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions received so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerClient for StubClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn ask(&self, question: &str) -> Result<String, AskError> {
        self.asked.lock().unwrap().push(question.to_string());
        self.outcome.clone()
    }
}
