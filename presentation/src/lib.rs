//! Presentation layer for memchat
//!
//! This crate contains the CLI definition, the line-based chat REPL,
//! spinner progress, console formatting and the interactive TUI.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod tui;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplError};
pub use cli::commands::{Cli, Command};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use tui::TuiApp;
