//! Line input for the chat loop

use super::repl::ReplError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or closed input
    Eof,
}

/// Source of user lines
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReplError>;

    fn add_history(&mut self, _line: &str) {}
}

/// Create the directory holding the history file; false when that fails
fn ensure_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("failed to create history dir {}: {}", parent.display(), e);
            false
        }
    }
}

/// Line editor backed by rustyline, with optional persistent history
pub struct RustylineReader {
    editor: DefaultEditor,
    history: Option<PathBuf>,
}

impl RustylineReader {
    pub fn new(history: Option<PathBuf>) -> Result<Self, ReplError> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history {
            ensure_parent_dir(path);
            if editor.load_history(path).is_err() {
                debug!("no history at {}", path.display());
            }
        }
        Ok(Self { editor, history })
    }

    pub fn save_history(&mut self) {
        if let Some(path) = &self.history {
            if let Err(e) = self.editor.save_history(path) {
                debug!("failed to save history to {}: {}", path.display(), e);
            }
        }
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReplError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        if self.history.is_some() && !line.is_empty() {
            if let Err(e) = self.editor.add_history_entry(line) {
                debug!("failed to record history entry: {}", e);
            }
        }
    }
}
