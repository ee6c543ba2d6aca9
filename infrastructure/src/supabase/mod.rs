//! Supabase Auth (GoTrue) adapter

pub mod auth;
pub mod error;
mod protocol;

pub use auth::SupabaseAuthProvider;
pub use error::SupabaseError;
