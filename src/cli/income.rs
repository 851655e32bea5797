//! Income CLI commands
//!
//! Implements CLI commands for the single income figure.

use clap::Subcommand;

use crate::commands::{dispatch, Command};
use crate::config::settings::Settings;
use crate::display::CurrencyFormat;
use crate::error::TrackerResult;
use crate::services::BudgetStore;

use super::print_summary;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the income (replaces the previous value)
    Set {
        /// Income amount (e.g. "2000" or "2000,50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current income
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    match cmd {
        IncomeCommands::Set { amount } => {
            if !dispatch(store, Command::SubmitIncome { amount })?.is_applied() {
                println!("Income not changed: expected a non-negative amount.");
            }
            print_summary(store, settings);
        }

        IncomeCommands::Show => {
            let fmt = CurrencyFormat::from_settings(settings);
            println!("Income: {}", fmt.format(store.budget().income));
        }
    }

    Ok(())
}
