//! Shared vocabulary for the concierge chat.
//!
//! This crate holds the transcript message types and the [`Responder`]
//! seam that turns a user's text into a canned reply. It defines no
//! behavior of its own; the keyword matcher and the session live in their
//! own crates.

#![deny(missing_docs)]

mod message;
mod responder;

pub use message::*;
pub use responder::*;
