//! Memory domain.
//!
//! Memory entries are owned by a memory store; the chat flow only reads
//! their text and scopes every operation by [`entry::UserId`].

pub mod entry;
