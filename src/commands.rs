//! User commands
//!
//! Each command is one discrete user action. Dispatching a command parses
//! the raw form input, applies it to the store (which persists), and reports
//! whether anything changed. Invalid input is never an error: it is
//! reported as [`Outcome::Ignored`] and the front end keeps its fields as
//! they are so the user can correct them.

use tracing::debug;

use crate::error::TrackerResult;
use crate::models::{ExpenseId, ExpenseType, Money};
use crate::services::{BudgetStore, Confirmation};

/// A single user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The income form was submitted
    SubmitIncome { amount: String },
    /// The expense form was submitted
    SubmitExpense {
        description: String,
        amount: String,
        kind: Option<ExpenseType>,
    },
    /// A delete affordance was used
    DeleteExpense { id: ExpenseId },
    /// The reset action went through its confirmation step
    Reset { confirmation: Confirmation },
}

/// Result of dispatching a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store changed and was persisted
    Applied,
    /// The input was invalid or the action was declined
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

/// Apply a command to the store
///
/// Only storage failures are returned as errors.
pub fn dispatch(store: &mut BudgetStore, command: Command) -> TrackerResult<Outcome> {
    match command {
        Command::SubmitIncome { amount } => match Money::parse(&amount) {
            Ok(amount) => store.set_income(amount).map(Outcome::from),
            Err(e) => {
                debug!(error = %e, "ignoring income input");
                Ok(Outcome::Ignored)
            }
        },

        Command::SubmitExpense {
            description,
            amount,
            kind,
        } => {
            let Some(kind) = kind else {
                debug!("ignoring expense without a type");
                return Ok(Outcome::Ignored);
            };
            match Money::parse(&amount) {
                Ok(amount) => store
                    .add_expense(&description, amount, kind)
                    .map(|id| Outcome::from(id.is_some())),
                Err(e) => {
                    debug!(error = %e, "ignoring expense amount");
                    Ok(Outcome::Ignored)
                }
            }
        }

        Command::DeleteExpense { id } => {
            store.remove_expense(id)?;
            Ok(Outcome::Applied)
        }

        Command::Reset { confirmation } => store.reset(confirmation).map(Outcome::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlots;

    fn create_test_store() -> BudgetStore {
        BudgetStore::new(MemorySlots::new())
    }

    fn income(amount: &str) -> Command {
        Command::SubmitIncome {
            amount: amount.to_string(),
        }
    }

    fn expense(description: &str, amount: &str, kind: Option<ExpenseType>) -> Command {
        Command::SubmitExpense {
            description: description.to_string(),
            amount: amount.to_string(),
            kind,
        }
    }

    #[test]
    fn test_submit_income() {
        let mut store = create_test_store();

        assert_eq!(dispatch(&mut store, income("2000")).unwrap(), Outcome::Applied);
        assert_eq!(store.budget().income, Money::from_units(2000));
    }

    #[test]
    fn test_invalid_income_ignored() {
        let mut store = create_test_store();
        dispatch(&mut store, income("2000")).unwrap();

        for bad in ["", "abc", "-5", "1,2,3", "NaN"] {
            assert_eq!(dispatch(&mut store, income(bad)).unwrap(), Outcome::Ignored);
        }
        assert_eq!(store.budget().income, Money::from_units(2000));
    }

    #[test]
    fn test_submit_expense_scenario() {
        let mut store = create_test_store();

        dispatch(&mut store, income("2000.00")).unwrap();
        dispatch(&mut store, expense("Rent", "1000.00", Some(ExpenseType::Personal))).unwrap();
        dispatch(&mut store, expense("Internet", "40.00", Some(ExpenseType::Shared))).unwrap();

        let totals = store.totals();
        assert_eq!(totals.owed_expenses, Money::from_units(1020));
        assert_eq!(totals.remaining, Money::from_units(980));
    }

    #[test]
    fn test_invalid_expense_ignored() {
        let mut store = create_test_store();

        let cases = [
            expense("", "10", Some(ExpenseType::Personal)),
            expense("   ", "10", Some(ExpenseType::Personal)),
            expense("Gift", "0", Some(ExpenseType::Shared)),
            expense("Gift", "-3", Some(ExpenseType::Shared)),
            expense("Gift", "ten", Some(ExpenseType::Shared)),
            expense("Gift", "10", None),
        ];
        for case in cases {
            assert_eq!(dispatch(&mut store, case).unwrap(), Outcome::Ignored);
        }
        assert!(store.budget().expenses.is_empty());
    }

    #[test]
    fn test_oversized_amounts_ignored() {
        let mut store = create_test_store();
        let huge = "79228162514264337593543950335";

        for _ in 0..2 {
            let outcome = dispatch(&mut store, expense("Yacht", huge, Some(ExpenseType::Personal)));
            assert_eq!(outcome.unwrap(), Outcome::Ignored);
        }
        assert_eq!(dispatch(&mut store, income(huge)).unwrap(), Outcome::Ignored);

        assert!(store.budget().is_empty());
        assert_eq!(store.totals().remaining, Money::zero());
    }

    #[test]
    fn test_delete_expense() {
        let mut store = create_test_store();
        dispatch(&mut store, expense("Rent", "1000", Some(ExpenseType::Personal))).unwrap();
        let id = store.budget().expenses[0].id;

        let outcome = dispatch(&mut store, Command::DeleteExpense { id }).unwrap();
        assert_eq!(outcome, Outcome::Applied);
        assert!(store.budget().expenses.is_empty());

        // Deleting again is harmless
        dispatch(&mut store, Command::DeleteExpense { id }).unwrap();
    }

    #[test]
    fn test_reset_only_when_confirmed() {
        let mut store = create_test_store();
        dispatch(&mut store, income("150")).unwrap();

        let declined = Command::Reset {
            confirmation: Confirmation::Declined,
        };
        assert_eq!(dispatch(&mut store, declined).unwrap(), Outcome::Ignored);
        assert_eq!(store.budget().income, Money::from_units(150));

        let confirmed = Command::Reset {
            confirmation: Confirmation::Confirmed,
        };
        assert_eq!(dispatch(&mut store, confirmed).unwrap(), Outcome::Applied);
        assert!(store.budget().is_empty());
    }
}
