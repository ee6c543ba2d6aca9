//! Console output formatter for the terminal chat

use colored::Colorize;

pub const WELCOME: &str = "Chat with your local AI (type 'exit' to quit)";
pub const PROMPT: &str = "You: ";
pub const GOODBYE: &str = "Goodbye!";

/// Formats chat lines for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The assistant reply line: `AI: <response>`
    pub fn reply(response: &str) -> String {
        format!("{} {}", "AI:".green().bold(), response)
    }

    /// Section title used by `--show-config`
    pub fn section(title: &str) -> String {
        format!("\n{}\n{}", title.cyan().bold(), "-".repeat(40))
    }
}
