//! UI utilities for terminal output
//!
//! Progress spinners and confirmation prompts used by the CLI.

mod confirm;
mod spinner;

pub use confirm::{confirm_action, confirm_destructive, Confirmation};
pub use spinner::{create_spinner, finish_spinner};
