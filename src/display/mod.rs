//! Display formatting for terminal output
//!
//! Turns the budget into presentation values (formatted amounts, tones,
//! sanitised descriptions) and renders those as plain text for the CLI.
//! The TUI draws from the same presentation values.

pub mod currency;
pub mod sanitize;
pub mod text;
pub mod view;

pub use currency::CurrencyFormat;
pub use sanitize::SafeText;
pub use text::{format_budget, format_expense_list, format_summary};
pub use view::{present, BudgetView, ExpenseRow, RemainingTone, SummaryView, EMPTY_MESSAGE};
