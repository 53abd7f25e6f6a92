//! The Al-Haramain concierge, ready to embed.
//!
//! The crate wires the keyword responder, the package catalog and the
//! session together. It also ships a terminal front end, the `concierge`
//! binary.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

pub mod command;
mod session;
pub mod settings;

pub use session::{Session, SessionBuilder};

/// Re-exports of [`concierge_core`] crate.
pub mod core {
    pub use concierge_core::*;
}

/// Re-exports of [`concierge_model`] crate.
pub mod model {
    pub use concierge_model::*;
}
