//! A scripted fake responder for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use concierge_model::{Reply, Responder};

pub use preset::*;

#[derive(Default)]
struct Inner {
    script: VecDeque<PresetReply>,
    inputs: Vec<String>,
}

/// A responder that plays back preset replies in order and records every
/// input it was asked about.
///
/// Clones share the same script and record, so a test can keep one clone
/// for inspection after handing the other to a session. Once the script
/// runs out, every further input is answered with an escalation echoing
/// the input.
///
/// # Note
///
/// The internal lock makes this type unsuitable for anything but tests.
#[derive(Clone, Default)]
pub struct ScriptedResponder {
    inner: Arc<Mutex<Inner>>,
}

impl ScriptedResponder {
    /// Queues an answering reply.
    #[inline]
    pub fn add_answer<S: Into<String>>(&self, text: S) {
        self.push(PresetReply::Answer(text.into()));
    }

    /// Queues an escalating reply.
    #[inline]
    pub fn add_escalation<S: Into<String>>(&self, text: S) {
        self.push(PresetReply::Escalate(text.into()));
    }

    /// Queues a preset reply.
    pub fn push(&self, preset: PresetReply) {
        self.lock().script.push_back(preset);
    }

    /// Returns the inputs seen so far, oldest first.
    pub fn inputs(&self) -> Vec<String> {
        self.lock().inputs.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A panicking test thread must not hide the record from others.
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl Responder for ScriptedResponder {
    fn respond(&self, input: &str) -> Reply {
        let mut inner = self.lock();
        inner.inputs.push(input.to_owned());
        match inner.script.pop_front() {
            Some(preset) => preset.into(),
            None => Reply::escalation(format!("unscripted: {input}")),
        }
    }
}
