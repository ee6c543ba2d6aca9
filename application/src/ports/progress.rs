//! Progress notification port
//!
//! Lets the presentation layer show a "thinking" indicator while a chat
//! turn waits on the memory store and the model.

/// Callback for progress updates during a chat turn
pub trait TurnProgressNotifier: Send + Sync {
    /// Called before the memory search starts
    fn on_thinking_start(&self) {}

    /// Called once the turn finished, successfully or not
    fn on_thinking_end(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {}
