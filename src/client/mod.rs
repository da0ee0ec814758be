//! # Answer Client
//!
//! The one external collaborator: a remote service that takes a question
//! and returns an answer. The core only sees the `AnswerClient` trait, so
//! tests can swap in a stub and the TUI never touches reqwest directly.

pub mod http;
pub mod types;

use std::fmt;

use async_trait::async_trait;

pub use http::HttpAnswerClient;
pub use types::{AskRequest, AskResponse};

/// Errors from a single ask round-trip.
///
/// The session controller collapses all of these into one user-visible
/// notice; the variants exist for the log.
#[derive(Debug, Clone, PartialEq)]
pub enum AskError {
    /// The call could not complete (DNS, refused connection, reset, body read).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not JSON, or had no string `answer` field.
    Parse(String),
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskError::Network(msg) => write!(f, "network error: {msg}"),
            AskError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            AskError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AskError {}

#[async_trait]
pub trait AnswerClient: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Sends one question and waits for its answer. Never retries.
    async fn ask(&self, question: &str) -> Result<String, AskError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AskError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            AskError::Api {
                status: 502,
                message: "bad gateway".into()
            }
            .to_string(),
            "API error (HTTP 502): bad gateway"
        );
        assert_eq!(
            AskError::Parse("missing field `answer`".into()).to_string(),
            "parse error: missing field `answer`"
        );
    }
}
