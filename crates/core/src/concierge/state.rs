use concierge_actor::{Actor, Message};
use concierge_model::{MessageId, Reply, Role};
use tokio::sync::oneshot;

use super::{ConciergeSnapshot, ConciergeState, WidgetState};
use crate::handoff::{HandoffKind, HandoffLink};

impl ConciergeState {
    fn append(&mut self, role: Role, text: String, is_action: bool) {
        let msg = self.transcript.push(role, text, is_action);
        trace!("appended {} ({:?})", msg.id, msg.role);
        if let Some(on_message) = &self.on_message {
            on_message(msg);
        }
    }

    pub(super) fn greet(&mut self) {
        let greeting = self.config.greeting.clone();
        self.append(Role::Assistant, greeting, false);
    }

    fn set_widget(&mut self, widget: WidgetState) {
        if self.widget != widget {
            debug!("widget {:?} -> {:?}", self.widget, widget);
            self.widget = widget;
        }
    }

    fn submit_input(&mut self, input: String, handle: &Actor<Self>) {
        if self.widget == WidgetState::Closed {
            debug!("input submitted while closed, ignored");
            return;
        }
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        self.append(Role::User, text.to_owned(), false);
        let reply = self.responder.respond(text);

        self.pending_replies += 1;
        if self.pending_replies == 1 {
            self.set_typing(true);
        }
        handle.send_after(DeliverReply(reply), self.config.typing_delay);
    }

    fn deliver_reply(&mut self, reply: Reply, handle: &Actor<Self>) {
        self.pending_replies -= 1;
        if self.pending_replies == 0 {
            self.set_typing(false);
        }

        let Reply { text, escalate } = reply;
        self.append(Role::Assistant, text, false);
        if escalate {
            self.pending_actions += 1;
            handle.send_after(DeliverAction, self.config.action_delay);
        }
        self.notify_if_idle();
    }

    fn deliver_action(&mut self) {
        self.pending_actions -= 1;
        let prompt = self.config.action_prompt.clone();
        self.append(Role::Assistant, prompt, true);
        self.notify_if_idle();
    }

    fn set_typing(&self, typing: bool) {
        if let Some(on_typing) = &self.on_typing {
            on_typing(typing);
        }
    }

    fn notify_if_idle(&self) {
        if self.pending_replies > 0 || self.pending_actions > 0 {
            return;
        }
        if let Some(on_idle) = &self.on_idle {
            on_idle();
        }
    }

    fn activate_action(&mut self, id: MessageId) {
        let is_action = self
            .transcript
            .get(id)
            .is_some_and(|msg| msg.is_action);
        if !is_action {
            warn!("message {id} is not an action, ignored");
            return;
        }
        self.hand_off(HandoffKind::ChatEscalation);
    }

    fn hand_off(&self, kind: HandoffKind) {
        let link = HandoffLink::new(&self.config.contact, kind);
        debug!("handing off: {:?}", link.kind());
        self.opener.open(&link);
    }

    fn snapshot(&self) -> ConciergeSnapshot {
        ConciergeSnapshot {
            widget: self.widget,
            awaiting_reply: self.pending_replies > 0,
            messages: self.transcript.messages().to_vec(),
        }
    }
}

#[derive(Debug)]
pub struct SetWidget(pub WidgetState);

impl Message<ConciergeState> for SetWidget {
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        state.set_widget(self.0);
    }
}

#[derive(Debug)]
pub struct ToggleWidget;

impl Message<ConciergeState> for ToggleWidget {
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        let next = match state.widget {
            WidgetState::Closed => WidgetState::Open,
            WidgetState::Open => WidgetState::Closed,
        };
        state.set_widget(next);
    }
}

#[derive(Debug)]
pub struct SubmitInput(pub String);

impl Message<ConciergeState> for SubmitInput {
    fn handle(self, state: &mut ConciergeState, handle: &Actor<ConciergeState>) {
        state.submit_input(self.0, handle);
    }
}

#[derive(Debug)]
struct DeliverReply(Reply);

impl Message<ConciergeState> for DeliverReply {
    fn handle(self, state: &mut ConciergeState, handle: &Actor<ConciergeState>) {
        state.deliver_reply(self.0, handle);
    }
}

#[derive(Debug)]
struct DeliverAction;

impl Message<ConciergeState> for DeliverAction {
    #[inline]
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        state.deliver_action();
    }
}

#[derive(Debug)]
pub struct ActivateAction(pub MessageId);

impl Message<ConciergeState> for ActivateAction {
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        state.activate_action(self.0);
    }
}

#[derive(Debug)]
pub struct HandOff(pub HandoffKind);

impl Message<ConciergeState> for HandOff {
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        state.hand_off(self.0);
    }
}

#[derive(Debug)]
pub struct TakeSnapshot(pub oneshot::Sender<ConciergeSnapshot>);

impl Message<ConciergeState> for TakeSnapshot {
    fn handle(self, state: &mut ConciergeState, _handle: &Actor<ConciergeState>) {
        self.0.send(state.snapshot()).ok();
    }
}
