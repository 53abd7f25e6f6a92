use concierge_model::{Message, Responder};

use super::Concierge;
use crate::config::ConciergeConfig;
use crate::handoff::{LinkOpener, LogOpener};

/// [`Concierge`] builder.
pub struct ConciergeBuilder {
    pub(crate) responder: Box<dyn Responder>,
    pub(crate) config: ConciergeConfig,
    pub(crate) opener: Box<dyn LinkOpener>,
    pub(crate) on_message: Option<Box<dyn Fn(&Message) + Send + Sync>>,
    pub(crate) on_typing: Option<Box<dyn Fn(bool) + Send + Sync>>,
    pub(crate) on_idle: Option<Box<dyn Fn() + Send + Sync>>,
}

impl ConciergeBuilder {
    /// Creates a new builder with the specified responder.
    #[inline]
    pub fn with_responder<R: Responder + 'static>(responder: R) -> Self {
        Self {
            responder: Box::new(responder),
            config: ConciergeConfig::default(),
            opener: Box::new(LogOpener),
            on_message: None,
            on_typing: None,
            on_idle: None,
        }
    }

    /// Replaces the default configuration.
    #[inline]
    pub fn with_config(mut self, config: ConciergeConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets what receives handoff links. Links are only logged by default.
    #[inline]
    pub fn with_opener<O: LinkOpener + 'static>(mut self, opener: O) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Attaches a callback to be invoked for every appended message,
    /// including the greeting.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.on_message = Some(Box::new(on_message));
        self
    }

    /// Attaches a callback to be invoked when the typing indicator turns
    /// on or off.
    #[inline]
    pub fn on_typing(
        mut self,
        on_typing: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.on_typing = Some(Box::new(on_typing));
        self
    }

    /// Attaches a callback to be invoked when every scheduled message has
    /// been delivered.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Builds the concierge and starts its session.
    ///
    /// Must be called within a tokio runtime.
    #[inline]
    pub fn build(self) -> Concierge {
        Concierge::spawn_from_builder(self)
    }
}
