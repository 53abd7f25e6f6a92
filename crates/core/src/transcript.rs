//! The append-only message log of a session.

use concierge_model::{Message, MessageId, Role};

/// Ordered messages of one session.
///
/// Messages can only be appended. Ids start at 1 and grow by one with
/// every append, so id order and display order agree.
#[derive(Clone, Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: MessageId,
}

impl Transcript {
    /// Creates an empty transcript.
    #[inline]
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId::new(1),
        }
    }

    /// Appends a message and returns it.
    pub fn push<S: Into<String>>(
        &mut self,
        role: Role,
        text: S,
        is_action: bool,
    ) -> &Message {
        let id = self.next_id;
        self.next_id = id.next();
        self.messages.push(Message {
            id,
            role,
            text: text.into(),
            is_action,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Returns all messages, oldest first.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Looks a message up by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        // Ids are dense and start at 1.
        let index = usize::try_from(id.get()).ok()?.checked_sub(1)?;
        self.messages.get(index)
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Transcript {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_append_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        let first = transcript.push(Role::Assistant, "Halo", false).id;
        let second = transcript.push(Role::User, "Hai", false).id;
        let third = transcript.push(Role::Assistant, "Klik", true).id;

        assert_eq!(first, MessageId::new(1));
        assert!(first < second && second < third);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.get(second).map(|m| m.text.as_str()), Some("Hai"));
        assert!(transcript.get(third).unwrap().is_action);
        assert!(transcript.get(MessageId::new(0)).is_none());
        assert!(transcript.get(MessageId::new(4)).is_none());
    }
}
