//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod authenticate;
pub mod chat_turn;
pub mod session_controller;

#[cfg(test)]
pub(crate) mod test_support;
