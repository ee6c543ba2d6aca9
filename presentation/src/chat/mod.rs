//! Interactive chat module
//!
//! Provides a readline-based terminal chat with memory.

mod reader;
mod repl;

pub use reader::{LineReader, ReadOutcome, RustylineReader};
pub use repl::{ChatRepl, ReplError, is_exit_command};
