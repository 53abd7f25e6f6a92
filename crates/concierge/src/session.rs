use concierge_core::catalog::{Catalog, Package};
use concierge_core::handoff::LinkOpener;
use concierge_core::{
    ActorDeadError, Concierge, ConciergeBuilder, ConciergeConfig,
    ConciergeSnapshot,
};
use concierge_keyword::KeywordResponder;
use concierge_model::{Message, MessageId};

use crate::settings::Settings;

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    concierge_builder: ConciergeBuilder,
    catalog: Catalog,
}

impl SessionBuilder {
    /// Creates a session builder answering with the built-in rules.
    pub fn new() -> Self {
        Self::with_responder(KeywordResponder::default())
    }

    /// Creates a session builder with a custom rule set.
    pub fn with_responder(responder: KeywordResponder) -> Self {
        Self {
            concierge_builder: ConciergeBuilder::with_responder(responder),
            catalog: Catalog::default(),
        }
    }

    /// Creates a session builder from loaded settings, reading the rule
    /// file if one is configured.
    pub fn from_settings(
        settings: &Settings,
    ) -> Result<Self, concierge_keyword::Error> {
        let responder = match &settings.rules_path {
            Some(path) => KeywordResponder::from_json_file(path)?,
            None => KeywordResponder::default(),
        };
        Ok(Self::with_responder(responder).with_config(settings.config.clone()))
    }

    /// Replaces the session configuration.
    #[inline]
    pub fn with_config(mut self, config: ConciergeConfig) -> Self {
        self.concierge_builder = self.concierge_builder.with_config(config);
        self
    }

    /// Replaces the package catalog.
    #[inline]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets what receives handoff links.
    #[inline]
    pub fn with_opener<O: LinkOpener + 'static>(mut self, opener: O) -> Self {
        self.concierge_builder = self.concierge_builder.with_opener(opener);
        self
    }

    /// Attaches a callback to be invoked for every appended message.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.concierge_builder = self.concierge_builder.on_message(on_message);
        self
    }

    /// Attaches a callback to be invoked when the typing indicator changes.
    #[inline]
    pub fn on_typing(
        mut self,
        on_typing: impl Fn(bool) + Send + Sync + 'static,
    ) -> Self {
        self.concierge_builder = self.concierge_builder.on_typing(on_typing);
        self
    }

    /// Attaches a callback to be invoked when no message is pending.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.concierge_builder = self.concierge_builder.on_idle(on_idle);
        self
    }

    /// Builds a new session.
    pub fn build(self) -> Session {
        let concierge = self.concierge_builder.build();
        Session {
            concierge,
            catalog: self.catalog,
        }
    }
}

impl Default for SessionBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A chat session, like the widget in the corner of the landing page.
///
/// The session is basically a wrapper around [`Concierge`] that also knows
/// the package catalog, so packages can be booked by tier.
pub struct Session {
    concierge: Concierge,
    catalog: Catalog,
}

impl Session {
    /// Opens the chat widget.
    #[inline]
    pub fn open(&self) {
        self.concierge.open();
    }

    /// Closes the chat widget.
    #[inline]
    pub fn close(&self) {
        self.concierge.close();
    }

    /// Sends a message to the session.
    #[inline]
    pub fn send_message(&self, message: &str) {
        self.concierge.submit_input(message);
    }

    /// Presses the "chat via WhatsApp" control of an action message.
    #[inline]
    pub fn activate_action(&self, id: MessageId) {
        self.concierge.activate_action(id);
    }

    /// Asks for a consultation.
    #[inline]
    pub fn consult(&self) {
        self.concierge.request_consult();
    }

    /// Books a package by tier or full name. Returns the booked package,
    /// or `None` if the catalog has no such package.
    pub fn book(&self, query: &str) -> Option<&Package> {
        let package = self.catalog.find(query)?;
        self.concierge.book_package(package.name.clone());
        Some(package)
    }

    /// Sends the custom availability form.
    #[inline]
    pub fn check_availability(&self, date: &str, pax: &str) {
        self.concierge.check_availability(date, pax);
    }

    /// Returns the package catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns a copy of the session state.
    #[inline]
    pub async fn snapshot(&self) -> Result<ConciergeSnapshot, ActorDeadError> {
        self.concierge.snapshot().await
    }
}
