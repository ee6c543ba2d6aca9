//! Application-level configuration.
//!
//! - [`ChatParams`]: how chat turns are executed (memory limit, default user)

pub mod chat_params;

pub use chat_params::ChatParams;
