//! Memory store adapters
//!
//! Stores embed each remembered message with an [`Embedder`] and retrieve
//! the nearest ones for a query. `supabase` and `pgvector` use Postgres
//! with the `vector` extension; `memory` keeps everything in process.

pub mod embedder;
pub mod factory;
pub mod in_memory;
pub mod pgvector;
pub mod record;

pub use embedder::Embedder;
pub use factory::{build_embedder, build_memory, build_store};
pub use in_memory::InMemoryMemoryStore;
pub use pgvector::PgVectorMemoryStore;
