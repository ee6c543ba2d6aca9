//! REPL (Read-Eval-Print Loop) for the terminal chat

use super::reader::{LineReader, ReadOutcome, RustylineReader};
use crate::output::console::{ConsoleFormatter, GOODBYE, PROMPT, WELCOME};
use crate::progress::reporter::ProgressReporter;
use crate::config::ReplConfig;
use memchat_application::{ChatTurnError, ChatTurnInput, ChatTurnUseCase, NoProgress};
use memchat_domain::UserId;
use rustyline::error::ReadlineError;
use std::io::{self, Write};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    ChatTurn(#[from] ChatTurnError),
}

/// `exit`, in any letter case, after trimming
pub fn is_exit_command(line: &str) -> bool {
    line.trim().to_lowercase() == "exit"
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ChatTurnUseCase,
    user_id: UserId,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(use_case: ChatTurnUseCase, user_id: UserId) -> Self {
        Self {
            use_case,
            user_id,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL on the terminal
    pub async fn run(&self) -> Result<(), ReplError> {
        let mut reader = RustylineReader::new(self.config.history_file.clone())?;
        let result = self.run_with(&mut reader, &mut io::stdout()).await;
        reader.save_history();
        result
    }

    /// Run the loop over any line source and output.
    ///
    /// A failed turn ends the loop and is returned.
    pub async fn run_with<R: LineReader, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<(), ReplError> {
        info!(user_id = %self.user_id, "starting terminal chat");
        writeln!(out, "{}", WELCOME)?;

        loop {
            out.flush()?;
            let line = match reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    writeln!(out, "{}", GOODBYE)?;
                    return Ok(());
                }
            };

            let line = line.trim();
            if is_exit_command(line) {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(());
            }
            reader.add_history(line);

            let response = self.process_message(line).await?;
            writeln!(out, "{}", ConsoleFormatter::reply(&response))?;
        }
    }

    async fn process_message(&self, message: &str) -> Result<String, ReplError> {
        let input = ChatTurnInput::new(message, self.user_id.clone());
        let output = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(input, &progress).await
        } else {
            self.use_case.execute_with_progress(input, &NoProgress).await
        }?;
        Ok(output.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeLlm, FakeStore};
    use memchat_application::Memory;
    use std::collections::VecDeque;
    use std::sync::Arc;

    struct ScriptedReader {
        outcomes: VecDeque<ReadOutcome>,
        prompts: usize,
    }

    impl ScriptedReader {
        fn lines(lines: &[&str]) -> Self {
            Self::outcomes(
                lines
                    .iter()
                    .map(|l| ReadOutcome::Line(l.to_string()))
                    .collect(),
            )
        }

        fn outcomes(outcomes: Vec<ReadOutcome>) -> Self {
            Self {
                outcomes: outcomes.into(),
                prompts: 0,
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReplError> {
            assert_eq!(prompt, "You: ");
            self.prompts += 1;
            Ok(self.outcomes.pop_front().unwrap_or(ReadOutcome::Eof))
        }
    }

    fn repl(store: Arc<FakeStore>, llm: FakeLlm) -> ChatRepl {
        let memory = Arc::new(Memory::new(store, Arc::new(llm)));
        ChatRepl::new(ChatTurnUseCase::new(memory), UserId::default())
            .with_config(ReplConfig::default().with_progress(false))
    }

    async fn run(repl: &ChatRepl, reader: &mut ScriptedReader) -> (Result<(), ReplError>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let result = repl.run_with(reader, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_detection() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("  Exit  "));
        assert!(!is_exit_command("exiting"));
        assert!(!is_exit_command("quit"));
        assert!(!is_exit_command(""));
        assert!(!is_exit_command("ex it"));
    }

    #[tokio::test]
    async fn test_turn_then_exit() {
        let store = Arc::new(FakeStore::default());
        let repl = repl(store.clone(), FakeLlm::replying(&["Hi there!"]));
        let mut reader = ScriptedReader::lines(&["  hello  ", "Exit"]);

        let (result, out) = run(&repl, &mut reader).await;

        assert!(result.is_ok());
        assert_eq!(
            out,
            "Chat with your local AI (type 'exit' to quit)\nAI: Hi there!\nGoodbye!\n"
        );
        let added = store.added.lock().unwrap();
        assert_eq!(added[0].0[1].content, "hello");
        assert_eq!(added[0].1.as_str(), "local_user");
    }

    #[tokio::test]
    async fn test_non_exit_words_are_sent() {
        let store = Arc::new(FakeStore::default());
        let repl = repl(store.clone(), FakeLlm::replying(&["a", "b"]));
        let mut reader = ScriptedReader::lines(&["exiting", "", "exit"]);

        let (result, out) = run(&repl, &mut reader).await;

        assert!(result.is_ok());
        assert_eq!(out.matches("AI: ").count(), 2);
        assert_eq!(store.added.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_interrupt_reprompts_and_eof_exits() {
        let repl = repl(Arc::new(FakeStore::default()), FakeLlm::replying(&[]));
        let mut reader = ScriptedReader::outcomes(vec![ReadOutcome::Interrupted, ReadOutcome::Eof]);

        let (result, out) = run(&repl, &mut reader).await;

        assert!(result.is_ok());
        assert_eq!(reader.prompts, 2);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_turn_error_ends_loop() {
        let repl = repl(Arc::new(FakeStore::default()), FakeLlm::failing());
        let mut reader = ScriptedReader::lines(&["hello", "exit"]);

        let (result, out) = run(&repl, &mut reader).await;

        assert!(matches!(result, Err(ReplError::ChatTurn(_))));
        assert!(!out.contains("Goodbye!"));
        assert_eq!(reader.prompts, 1);
    }
}
