//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing and removing expenses.

use clap::{Subcommand, ValueEnum};

use crate::commands::{dispatch, Command};
use crate::config::settings::Settings;
use crate::display::{format_expense_list, present};
use crate::error::TrackerResult;
use crate::models::ExpenseType;
use crate::services::BudgetStore;

use super::print_summary;

/// Split type as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    /// You pay the full amount
    Personal,
    /// Split 50/50, you pay half
    Shared,
}

impl From<SplitArg> for ExpenseType {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Personal => ExpenseType::Personal,
            SplitArg::Shared => ExpenseType::Shared,
        }
    }
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the expense was for
        description: String,

        /// Full amount of the expense (e.g. "40" or "39,90")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// How the expense is split
        #[arg(short = 't', long = "type", value_enum, default_value_t = SplitArg::Personal)]
        kind: SplitArg,

        /// Shorthand for --type shared
        #[arg(short, long, conflicts_with = "kind")]
        shared: bool,
    },

    /// List expenses in the order they were added
    #[command(alias = "ls")]
    List,

    /// Remove an expense by id (as shown by `expense list`)
    #[command(alias = "rm")]
    Remove {
        /// Expense id: full UUID or the short `exp-xxxxxxxx` form
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &mut BudgetStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            kind,
            shared,
        } => {
            let kind = if shared {
                ExpenseType::Shared
            } else {
                kind.into()
            };
            let outcome = dispatch(
                store,
                Command::SubmitExpense {
                    description,
                    amount,
                    kind: Some(kind),
                },
            )?;
            if !outcome.is_applied() {
                println!("Expense not recorded: needs a description and a positive amount.");
            }
            print_summary(store, settings);
        }

        ExpenseCommands::List => {
            let view = present(store.budget(), &store.totals(), settings);
            print!("{}", format_expense_list(&view));
        }

        ExpenseCommands::Remove { id } => match store.resolve_id(&id) {
            Ok(id) => {
                dispatch(store, Command::DeleteExpense { id })?;
                print_summary(store, settings);
            }
            Err(e) if e.is_not_found() => {
                println!("No expense matches '{}'.", id.trim());
            }
            Err(e) if e.is_validation() => {
                println!("{}", e);
            }
            Err(e) => return Err(e),
        },
    }

    Ok(())
}
