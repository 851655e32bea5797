//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the command dispatcher.
//! Every mutating command prints the refreshed summary afterwards.

pub mod expense;
pub mod income;

use std::io::{self, BufRead, IsTerminal, Write};

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};

use crate::commands::{dispatch, Command};
use crate::config::settings::Settings;
use crate::display::{format_budget, present};
use crate::error::TrackerResult;
use crate::services::{BudgetStore, Confirmation};

/// Print totals and the expense list
pub fn print_summary(store: &BudgetStore, settings: &Settings) {
    let view = present(store.budget(), &store.totals(), settings);
    let color = io::stdout().is_terminal();
    print!("{}", format_budget(&view, color));
}

/// Reset the budget after confirmation
///
/// With `assume_yes` the prompt is skipped. Otherwise the answer is read
/// from stdin; anything but `y`/`yes` declines.
pub fn handle_reset_command(
    store: &mut BudgetStore,
    settings: &Settings,
    assume_yes: bool,
) -> TrackerResult<()> {
    let confirmation = if assume_yes {
        Confirmation::Confirmed
    } else {
        let stdin = io::stdin();
        ask_confirmation(
            &mut stdin.lock(),
            &mut io::stdout(),
            "Reset income and all expenses?",
        )?
    };

    let outcome = dispatch(store, Command::Reset { confirmation })?;
    if outcome.is_applied() {
        println!("Budget reset.");
        print_summary(store, settings);
    } else {
        println!("Reset cancelled.");
    }

    Ok(())
}

/// Ask a yes/no question, defaulting to no
pub fn ask_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Confirmation> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let confirmed = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
    Ok(Confirmation::from(confirmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> Confirmation {
        let mut input = answer.as_bytes();
        let mut output = Vec::new();
        let confirmation = ask_confirmation(&mut input, &mut output, "Sure?").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Sure? [y/N] ");
        confirmation
    }

    #[test]
    fn test_confirmation_answers() {
        assert_eq!(ask("y\n"), Confirmation::Confirmed);
        assert_eq!(ask("YES\n"), Confirmation::Confirmed);
        assert_eq!(ask("n\n"), Confirmation::Declined);
        assert_eq!(ask("\n"), Confirmation::Declined);
        assert_eq!(ask(""), Confirmation::Declined);
        assert_eq!(ask("yep\n"), Confirmation::Declined);
    }
}
