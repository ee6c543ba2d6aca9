//! Interactive terminal application
//!
//! A sidebar handles sign-in, sign-up and memory management; the main
//! pane shows the conversation of the signed-in user.

mod app;
mod keys;
mod state;
mod widgets;

pub use app::{TuiApp, render};
pub use keys::{KeyAction, KeyHandler};
pub use state::{AuthTab, Focus, LoginForm, SignUpForm, TuiState};
