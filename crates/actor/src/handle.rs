use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::mailbox::Mailbox;
use crate::scheduler::run_actor;
use crate::{ActorDeadError, Message};

/// Handle to an actor.
pub struct Actor<S> {
    mailbox: Arc<Mailbox<S>>,
}

impl<S: Send + 'static> Actor<S> {
    /// Spawns the event loop of a new actor owning `state`.
    ///
    /// Must be called within a tokio runtime. The label only shows up in
    /// tracing spans.
    pub fn spawn(state: S, label: Option<&str>) -> Self {
        let (mailbox, rx) = Mailbox::new();
        let mailbox = Arc::new(mailbox);
        tokio::spawn(
            run_actor(Arc::downgrade(&mailbox), state, rx)
                .instrument(trace_span!("actor", label = label)),
        );
        Self { mailbox }
    }

    #[inline]
    pub(crate) fn from_mailbox(mailbox: Arc<Mailbox<S>>) -> Self {
        Self { mailbox }
    }

    /// Sends a message to the actor.
    #[inline]
    pub fn send<M: Message<S> + 'static>(
        &self,
        msg: M,
    ) -> Result<(), ActorDeadError> {
        self.mailbox.send(Box::new(msg))
    }

    /// Delivers `msg` to the actor once `delay` has elapsed.
    ///
    /// The timer cannot be cancelled. It keeps the actor alive until it
    /// fires, after which the message is delivered unless the actor has
    /// been stopped in the meantime.
    pub fn send_after<M: Message<S> + 'static>(&self, msg: M, delay: Duration) {
        let handle = self.clone();
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                if handle.send(msg).is_err() {
                    debug!("actor stopped before the timer fired");
                }
            }
            .in_current_span(),
        );
    }

    /// Asks the actor to stop.
    ///
    /// Messages queued before the request are still handled; anything
    /// sent afterwards is dropped.
    #[inline]
    pub fn stop(&self) {
        self.mailbox.stop();
    }

    /// Returns `true` if the event loop has terminated.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.mailbox.is_closed()
    }
}

impl<S> Clone for Actor<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}
