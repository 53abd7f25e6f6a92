mod builder;
mod state;
#[cfg(test)]
mod tests;

use concierge_actor::{Actor, ActorDeadError, Message as ActorMessage};
use concierge_model::{Message, MessageId, Responder};
use tokio::sync::oneshot;

use crate::config::ConciergeConfig;
use crate::handoff::{HandoffKind, LinkOpener};
use crate::transcript::Transcript;
pub use builder::ConciergeBuilder;
use state::{
    ActivateAction, HandOff, SetWidget, SubmitInput, TakeSnapshot,
    ToggleWidget,
};

/// Visibility of the chat widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetState {
    /// Only the launcher button is visible.
    #[default]
    Closed,
    /// The transcript and the input box are visible.
    Open,
}

/// A copy of the session at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConciergeSnapshot {
    /// Visibility of the widget.
    pub widget: WidgetState,
    /// Whether a reply is still being "typed".
    pub awaiting_reply: bool,
    /// The transcript, oldest first.
    pub messages: Vec<Message>,
}

pub(crate) struct ConciergeState {
    responder: Box<dyn Responder>,
    config: ConciergeConfig,
    opener: Box<dyn LinkOpener>,
    transcript: Transcript,
    widget: WidgetState,
    pending_replies: usize,
    pending_actions: usize,

    on_message: Option<Box<dyn Fn(&Message) + Send + Sync>>,
    on_typing: Option<Box<dyn Fn(bool) + Send + Sync>>,
    on_idle: Option<Box<dyn Fn() + Send + Sync>>,
}

/// A chat session with the concierge.
///
/// The session owns its transcript and is the only thing that writes to
/// it. Every operation is queued to the session's event loop and handled
/// in order. Replies are delivered after a fixed typing delay by timers
/// that cannot be cancelled: closing the widget does not stop them.
///
/// The session ends when [`Concierge::end`] is called, or when the last
/// handle is dropped and no timer is pending.
pub struct Concierge {
    handle: Actor<ConciergeState>,
}

impl Concierge {
    /// Opens the widget.
    #[inline]
    pub fn open(&self) {
        self.send(SetWidget(WidgetState::Open));
    }

    /// Closes the widget. Pending replies still land in the transcript.
    #[inline]
    pub fn close(&self) {
        self.send(SetWidget(WidgetState::Closed));
    }

    /// Flips the widget between open and closed.
    #[inline]
    pub fn toggle(&self) {
        self.send(ToggleWidget);
    }

    /// Submits visitor text.
    ///
    /// Blank text is ignored, as is anything submitted while the widget is
    /// closed. Otherwise the trimmed text is appended and the reply
    /// follows after the typing delay.
    pub fn submit_input<S: Into<String>>(&self, input: S) {
        self.send(SubmitInput(input.into()));
    }

    /// Activates the "chat with a human" control of action message `id`.
    ///
    /// Ids of messages that are not actions are ignored.
    #[inline]
    pub fn activate_action(&self, id: MessageId) {
        self.send(ActivateAction(id));
    }

    /// Asks for a consultation from the navigation bar.
    #[inline]
    pub fn request_consult(&self) {
        self.send(HandOff(HandoffKind::Consult));
    }

    /// Starts booking the named package.
    #[inline]
    pub fn book_package<S: Into<String>>(&self, package: S) {
        self.send(HandOff(HandoffKind::Booking {
            package: package.into(),
        }));
    }

    /// Sends the custom availability form. Blank fields are filled in
    /// with a placeholder.
    #[inline]
    pub fn check_availability<D: Into<String>, P: Into<String>>(
        &self,
        date: D,
        pax: P,
    ) {
        self.send(HandOff(HandoffKind::Availability {
            date: date.into(),
            pax: pax.into(),
        }));
    }

    /// Returns a copy of the current session.
    pub async fn snapshot(&self) -> Result<ConciergeSnapshot, ActorDeadError> {
        let (tx, rx) = oneshot::channel();
        self.handle.send(TakeSnapshot(tx))?;
        rx.await.map_err(|_| ActorDeadError)
    }

    /// Ends the session. Operations already queued are still handled,
    /// pending timers are dropped.
    #[inline]
    pub fn end(self) {
        self.handle.stop();
    }

    #[inline]
    fn send<M: ActorMessage<ConciergeState> + 'static>(&self, msg: M) {
        if self.handle.send(msg).is_err() {
            warn!("concierge session has ended, operation dropped");
        }
    }
}

impl Concierge {
    fn spawn_from_builder(builder: ConciergeBuilder) -> Self {
        let ConciergeBuilder {
            responder,
            config,
            opener,
            on_message,
            on_typing,
            on_idle,
        } = builder;

        let mut state = ConciergeState {
            responder,
            config,
            opener,
            transcript: Transcript::new(),
            widget: WidgetState::default(),
            pending_replies: 0,
            pending_actions: 0,
            on_message,
            on_typing,
            on_idle,
        };
        state.greet();
        let handle = Actor::spawn(state, Some("concierge"));
        Self { handle }
    }
}
