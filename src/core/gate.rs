//! # Submission Gate
//!
//! Decides what a submit trigger means given the current phase.
//! This is the only backpressure in the app: while a request is in flight,
//! nothing gets through.
//!
//! | Trigger                       | Idle          | Pending |
//! |-------------------------------|---------------|---------|
//! | Enter                         | Submit        | Reject  |
//! | Enter + modifier              | InsertNewline | InsertNewline |
//! | Submit control (button)       | Submit        | Reject  |
//!
//! Plain Enter never inserts a newline, even when rejected.

/// Something the user did that might mean "send".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The submit key. `modifier_held` is true for Shift/Alt+Enter (or Ctrl+J).
    SubmitKey { modifier_held: bool },
    /// The submit button, by click or shortcut.
    SubmitControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Forward the current draft to `Action::Submit`.
    Submit,
    /// Let the key do its normal job: add a newline to the draft.
    InsertNewline,
    /// Swallow the trigger.
    Reject,
}

pub fn decide(trigger: Trigger, pending: bool) -> Decision {
    match trigger {
        Trigger::SubmitKey {
            modifier_held: true,
        } => Decision::InsertNewline,
        Trigger::SubmitKey {
            modifier_held: false,
        }
        | Trigger::SubmitControl => {
            if pending {
                Decision::Reject
            } else {
                Decision::Submit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_ENTER: Trigger = Trigger::SubmitKey {
        modifier_held: false,
    };
    const MODIFIED_ENTER: Trigger = Trigger::SubmitKey {
        modifier_held: true,
    };

    #[test]
    fn test_plain_enter_submits_when_idle() {
        assert_eq!(decide(PLAIN_ENTER, false), Decision::Submit);
    }

    #[test]
    fn test_modified_enter_never_submits() {
        assert_eq!(decide(MODIFIED_ENTER, false), Decision::InsertNewline);
        assert_eq!(decide(MODIFIED_ENTER, true), Decision::InsertNewline);
    }

    #[test]
    fn test_button_submits_when_idle() {
        assert_eq!(decide(Trigger::SubmitControl, false), Decision::Submit);
    }

    #[test]
    fn test_everything_that_submits_is_rejected_while_pending() {
        assert_eq!(decide(PLAIN_ENTER, true), Decision::Reject);
        assert_eq!(decide(Trigger::SubmitControl, true), Decision::Reject);
    }

    #[test]
    fn test_plain_enter_matches_button() {
        for pending in [false, true] {
            assert_eq!(
                decide(PLAIN_ENTER, pending),
                decide(Trigger::SubmitControl, pending)
            );
        }
    }
}
