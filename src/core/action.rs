//! # Actions
//!
//! Everything that can change the session becomes an `Action`.
//! User edits the draft? That's `Action::DraftChanged(text)`.
//! User submits? That's `Action::Submit(text)`.
//! The answer service settles? That's `Action::Settled(result)`.
//!
//! `update()` applies one action and returns the `Effect` the caller must
//! run. No I/O here: spawning the request is the caller's job.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```
//!
//! One submission cycle, as seen through this reducer:
//!
//! ```text
//! Submit(text) ──► [user msg appended, Pending] ──► Effect::SpawnRequest(text)
//!                                                        │
//! Settled(Ok(answer)) / Settled(Err(_)) ◄────────────────┘
//!     └─► [outcome msg appended, Idle] ──► Effect::None
//! ```

use log::{debug, info, warn};

use crate::client::AskError;
use crate::core::message::Message;
use crate::core::state::Session;

/// Shown as the assistant's reply when the call fails for any reason.
pub const ERROR_NOTICE: &str =
    "Sorry, something went wrong while fetching the answer. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The input box text changed.
    DraftChanged(String),
    /// Submit this text as a question.
    Submit(String),
    /// The in-flight request finished.
    Settled(Result<String, AskError>),
    Quit,
}

/// Side effect requested by `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue exactly one outbound call with this question.
    SpawnRequest(String),
    Quit,
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    match action {
        Action::DraftChanged(text) => {
            session.set_draft(text);
            Effect::None
        }
        Action::Submit(text) => {
            if session.is_pending() {
                debug!("Submit ignored: a request is already in flight");
                return Effect::None;
            }
            if text.trim().is_empty() {
                debug!("Submit ignored: empty question");
                return Effect::None;
            }
            info!("Question accepted ({} bytes)", text.len());
            session.begin(text.clone());
            Effect::SpawnRequest(text)
        }
        Action::Settled(result) => {
            if !session.is_pending() {
                warn!("Settlement arrived with no request in flight; dropped");
                return Effect::None;
            }
            let outcome = match result {
                Ok(answer) => {
                    info!("Answer received ({} bytes)", answer.len());
                    Message::assistant(answer)
                }
                Err(e) => {
                    warn!("Request failed: {}", e);
                    Message::assistant(ERROR_NOTICE)
                }
            };
            session.settle(outcome);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
