//! Interactive session domain.
//!
//! - [`state::SessionState`]: authenticated user, chat history and banner
//! - [`notice::Notice`]: one-cycle user-facing message

pub mod notice;
pub mod state;
