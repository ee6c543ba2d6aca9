//! Conversation domain.
//!
//! - [`message::Message`]: a single role-tagged message
//! - [`message::Role`]: who authored a message

pub mod message;
