//! Core domain primitives shared across bounded contexts.

pub mod error;
