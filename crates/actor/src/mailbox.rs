use std::fmt::Debug;

use tokio::sync::mpsc;

use crate::{Actor, ActorDeadError};

/// Helper trait for handling boxed messages.
pub trait BoxMessage<S>: Send + Debug + 'static {
    fn handle_box(self: Box<Self>, state: &mut S, handle: &Actor<S>);
}

/// A message the actor handles on its event loop.
///
/// Handlers run one at a time with exclusive access to the state, so
/// nothing inside a handler needs locking.
pub trait Message<S>: BoxMessage<S> {
    /// Handles the message with mutable access to the actor's state.
    fn handle(self, state: &mut S, handle: &Actor<S>);
}

impl<S, M: Message<S>> BoxMessage<S> for M {
    #[inline]
    fn handle_box(self: Box<Self>, state: &mut S, handle: &Actor<S>) {
        (*self).handle(state, handle)
    }
}

impl<S, M: Message<S> + ?Sized> Message<S> for Box<M> {
    #[inline]
    fn handle(self, state: &mut S, handle: &Actor<S>) {
        self.handle_box(state, handle)
    }
}

/// What travels through the mailbox channel.
pub enum Envelope<S> {
    Deliver(Box<dyn Message<S>>),
    Stop,
}

pub struct Mailbox<S> {
    tx: mpsc::UnboundedSender<Envelope<S>>,
}

impl<S: Send + 'static> Mailbox<S> {
    #[inline]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Envelope<S>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Mailbox { tx }, rx)
    }

    #[inline]
    pub fn send(&self, msg: Box<dyn Message<S>>) -> Result<(), ActorDeadError> {
        self.tx
            .send(Envelope::Deliver(msg))
            .map_err(|_| ActorDeadError)
    }

    #[inline]
    pub fn stop(&self) {
        self.tx.send(Envelope::Stop).ok();
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
