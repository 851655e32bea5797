//! Presentation model
//!
//! Projects a budget and its totals into ready-to-render values. Both the
//! TUI and the plain CLI output draw from a [`BudgetView`]; neither does any
//! arithmetic of its own.

use crate::config::Settings;
use crate::models::{Budget, ExpenseId, ExpenseType, Money};
use crate::services::Totals;

use super::currency::CurrencyFormat;
use super::sanitize::SafeText;

/// Shown instead of the list when there are no expenses
pub const EMPTY_MESSAGE: &str = "No expenses recorded yet.";

/// How the remaining budget should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingTone {
    /// Spending exceeds income
    Alert,
    /// Not negative, but under the warning threshold
    Warning,
    /// At or above the warning threshold
    Normal,
}

impl RemainingTone {
    pub fn for_remaining(remaining: Money, warning_threshold: Money) -> Self {
        if remaining.is_negative() {
            Self::Alert
        } else if remaining < warning_threshold {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// The three headline figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub income: String,
    pub owed_expenses: String,
    pub remaining: String,
    pub tone: RemainingTone,
}

/// One line of the expense list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    /// Target of the delete action
    pub id: ExpenseId,
    pub description: SafeText,
    pub kind: ExpenseType,
    pub badge: &'static str,
    /// Full amount
    pub amount: String,
    /// The user's half, for shared expenses only
    pub share: Option<String>,
}

/// Everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetView {
    pub summary: SummaryView,
    pub rows: Vec<ExpenseRow>,
}

impl BudgetView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Placeholder text for an empty list
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }
}

/// Build the view for a budget and its totals
pub fn present(budget: &Budget, totals: &Totals, settings: &Settings) -> BudgetView {
    let fmt = CurrencyFormat::from_settings(settings);

    let summary = SummaryView {
        income: fmt.format(totals.income),
        owed_expenses: fmt.format(totals.owed_expenses),
        remaining: fmt.format(totals.remaining),
        tone: RemainingTone::for_remaining(totals.remaining, settings.warning_threshold),
    };

    let rows = budget
        .expenses
        .iter()
        .map(|expense| ExpenseRow {
            id: expense.id,
            description: SafeText::new(&expense.description),
            kind: expense.kind,
            badge: expense.kind.badge(),
            amount: fmt.format(expense.amount),
            share: expense
                .is_shared()
                .then(|| fmt.format(expense.owed_amount())),
        })
        .collect();

    BudgetView { summary, rows }
}
