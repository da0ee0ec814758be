//! # Messages and History
//!
//! A `Message` is one entry in the transcript. Once appended it never
//! changes. `History` is the append-only log that owns them.
//!
//! ```text
//! History
//! ├── messages: Vec<Message>   // chronological, top-to-bottom render order
//! └── revision: u64            // bumped on every append
//! ```
//!
//! The revision is how the view notices a change without diffing the whole
//! list: it remembers the last revision it scrolled for and compares.

use serde::Serialize;

/// Who authored a message.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label shown on the message card border.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Answer",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only, ordered conversation log.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    messages: Vec<Message>,
    revision: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message at the end and bumps the revision.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.revision += 1;
    }

    /// Current messages in append order.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    /// Monotonic counter, one tick per append. Starts at 0.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.revision(), 0);
        assert!(history.last().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut history = History::new();
        history.append(Message::user("first"));
        history.append(Message::assistant("second"));
        history.append(Message::user("third"));

        let contents: Vec<&str> = history.snapshot().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(history.last().map(|m| m.role()), Some(Role::User));
    }

    #[test]
    fn test_every_append_bumps_revision() {
        let mut history = History::new();
        history.append(Message::user("q"));
        assert_eq!(history.revision(), 1);
        history.append(Message::assistant("a"));
        assert_eq!(history.revision(), 2);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "You");
        assert_eq!(Role::Assistant.label(), "Answer");
    }
}
