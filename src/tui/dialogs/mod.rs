//! Dialog modules for the TUI

pub mod confirm;

/// Question asked before clearing the budget
pub const RESET_QUESTION: &str = "Reset income and delete every expense?";
