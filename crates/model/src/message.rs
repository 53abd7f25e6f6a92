use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Identifier of a transcript message.
///
/// Ids are handed out by the transcript in append order, so comparing two
/// ids tells which message came first.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates an id from its raw ordinal.
    #[inline]
    pub const fn new(ordinal: u64) -> Self {
        Self(ordinal)
    }

    /// Returns the raw ordinal.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Text typed by the visitor.
    User,
    /// Text produced by the concierge.
    Assistant,
}

/// A single entry of the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Unique, increasing identifier.
    pub id: MessageId,
    /// Author of the message.
    pub role: Role,
    /// Displayed text.
    pub text: String,
    /// Whether the message is rendered as a "chat with a human" control
    /// instead of a text bubble.
    #[serde(default)]
    pub is_action: bool,
}

impl Message {
    /// Returns `true` if the message was written by the visitor.
    #[inline]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_ordered() {
        let first = MessageId::new(1);
        assert!(first < first.next());
        assert_eq!(first.next().get(), 2);
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn test_action_flag_defaults_to_false() {
        let msg: Message = serde_json::from_str(
            r#"{ "id": 3, "role": "assistant", "text": "Hi" }"#,
        )
        .unwrap();
        assert_eq!(msg.id, MessageId::new(3));
        assert_eq!(msg.role, Role::Assistant);
        assert!(!msg.is_action);
        assert!(!msg.is_user());
    }
}
