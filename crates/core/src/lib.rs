//! Core logic of the concierge chat: the session, its transcript, the
//! handoff links and the package catalog.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod catalog;
mod concierge;
pub mod config;
pub mod handoff;
pub mod transcript;

pub use concierge_actor::ActorDeadError;
pub use concierge::{
    Concierge, ConciergeBuilder, ConciergeSnapshot, WidgetState,
};
pub use config::{ConciergeConfig, ConciergeConfigBuilder, ContactConfig};
