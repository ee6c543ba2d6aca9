//! Output formatting for the terminal chat

pub mod console;
