//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for memchat
#[derive(Parser, Debug)]
#[command(name = "memchat")]
#[command(author, version, about = "Chat with a local model that remembers you")]
#[command(long_about = r#"
memchat chats with a local Ollama model and remembers earlier turns.

Each message is answered with the three most relevant memories of the
user in the system prompt; the turn is then stored as new memories.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./memchat.toml      Project-level config
3. ~/.config/memchat/config.toml   Global config
Environment variables (DATABASE_URL, SUPABASE_URL, SUPABASE_KEY, MEMCHAT_*)
override every file. A .env file in the working directory is loaded first.

Example:
  memchat                       Terminal chat as 'local_user'
  memchat --user-id alice chat  Terminal chat with alice's memories
  memchat app                   Full-screen app with Supabase login
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the chat model (e.g. qwen3:8b)
    #[arg(short, long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// User id of the terminal chat
    #[arg(short, long, value_name = "ID", global = true)]
    pub user_id: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Terminal chat loop (default)
    Chat,
    /// Full-screen app with login, chat history and memory controls
    App,
}

impl Cli {
    /// The selected subcommand, `chat` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or(Command::Chat)
    }
}
