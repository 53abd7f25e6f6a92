use std::sync::Weak;

use tokio::sync::mpsc;

use crate::mailbox::{Envelope, Mailbox};
use crate::{Actor, Message};

/// Drives the actor until it is stopped or every handle is gone.
pub async fn run_actor<S: Send + 'static>(
    mailbox: Weak<Mailbox<S>>,
    mut state: S,
    mut rx: mpsc::UnboundedReceiver<Envelope<S>>,
) {
    debug!("started");
    while let Some(envelope) = rx.recv().await {
        let msg = match envelope {
            Envelope::Deliver(msg) => msg,
            Envelope::Stop => {
                debug!("stop requested");
                break;
            }
        };
        trace!("received message: {msg:?}");

        let Some(mailbox) = mailbox.upgrade() else {
            warn!("all handles have been dropped, discard the message");
            break;
        };

        let span = trace_span!("proc msg");
        span.in_scope(|| {
            msg.handle(&mut state, &Actor::from_mailbox(mailbox));
            trace!("finished");
        });
    }
    debug!("will terminate");
}
