//! # Session State
//!
//! Everything the controller owns for the lifetime of the process.
//! No TUI types here; presentation state (scroll position, cursor) lives
//! in the `tui` module.
//!
//! ```text
//! Session
//! ├── history: History   // append-only transcript
//! ├── draft: String      // uncommitted input text
//! └── phase: Phase       // Idle | Pending
//! ```
//!
//! Fields are private. Reads go through accessors, writes only happen
//! through `update(session, action)` in action.rs.

use crate::core::message::{History, Message};

/// Submission cycle state. `Pending` means exactly one request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
}

#[derive(Debug, Default)]
pub struct Session {
    history: History,
    draft: String,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn messages(&self) -> &[Message] {
        self.history.snapshot()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub(super) fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Idle → Pending. Appends the question and clears the draft.
    pub(super) fn begin(&mut self, question: String) {
        debug_assert_eq!(self.phase, Phase::Idle);
        self.history.append(Message::user(question));
        self.draft.clear();
        self.phase = Phase::Pending;
    }

    /// Pending → Idle. Appends the outcome message.
    pub(super) fn settle(&mut self, outcome: Message) {
        debug_assert_eq!(self.phase, Phase::Pending);
        self.history.append(outcome);
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;

    #[test]
    fn test_session_new_defaults() {
        let session = Session::new();
        assert!(session.messages().is_empty());
        assert_eq!(session.draft(), "");
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_begin_then_settle_round_trips_phase() {
        let mut session = Session::new();
        session.set_draft("why?".to_string());

        session.begin("why?".to_string());
        assert!(session.is_pending());
        assert_eq!(session.draft(), "");
        assert_eq!(session.messages().len(), 1);

        session.settle(Message::assistant("because"));
        assert!(!session.is_pending());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role(), Role::Assistant);
    }
}
