//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod auth_provider;
pub mod llm_gateway;
pub mod memory_store;
pub mod progress;
