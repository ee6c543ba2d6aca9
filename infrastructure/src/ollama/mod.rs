//! Ollama adapter
//!
//! Talks to a local Ollama runtime over its REST API: `/api/chat` for
//! replies and `/api/embed` for memory embeddings.

pub mod client;
pub mod embedder;
pub mod error;
pub mod gateway;
pub mod protocol;
