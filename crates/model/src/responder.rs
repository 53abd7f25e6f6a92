use std::sync::Arc;

/// What a responder produced for one input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reply {
    /// Text of the assistant message.
    pub text: String,
    /// Set when no topic matched and the visitor should be offered a
    /// human contact.
    pub escalate: bool,
}

impl Reply {
    /// A reply that answered the question.
    #[inline]
    pub fn answer<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            escalate: false,
        }
    }

    /// A reply that could not answer and asks for escalation.
    #[inline]
    pub fn escalation<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            escalate: true,
        }
    }
}

/// Turns visitor text into a reply.
///
/// Responders are total: every input, including text no rule understands,
/// produces a reply. Callers are expected to filter out blank input before
/// asking.
pub trait Responder: Send + Sync {
    /// Computes the reply for `input`.
    fn respond(&self, input: &str) -> Reply;
}

impl<R: Responder + ?Sized> Responder for Box<R> {
    #[inline]
    fn respond(&self, input: &str) -> Reply {
        (**self).respond(input)
    }
}

impl<R: Responder + ?Sized> Responder for Arc<R> {
    #[inline]
    fn respond(&self, input: &str) -> Reply {
        (**self).respond(input)
    }
}
