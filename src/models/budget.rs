//! Budget model
//!
//! The root aggregate: one income figure and the ordered list of expenses.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::expense::{Expense, ExpenseValidationError};
use super::ids::ExpenseId;
use super::money::Money;

/// Reasons a budget can fail its invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeIncome,
    IncomeTooLarge,
    InvalidExpense {
        index: usize,
        reason: ExpenseValidationError,
    },
    DuplicateId(ExpenseId),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeIncome => write!(f, "Income cannot be negative"),
            Self::IncomeTooLarge => write!(
                f,
                "Income cannot exceed {}",
                Money::max_amount().rounded()
            ),
            Self::InvalidExpense { index, reason } => {
                write!(f, "Expense #{} is invalid: {}", index + 1, reason)
            }
            Self::DuplicateId(id) => write!(f, "Duplicate expense id: {}", id),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// Income plus the expenses charged against it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub income: Money,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Budget {
    /// An empty budget: zero income and no expenses
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Position of the expense with this id
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Check every invariant of the aggregate
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.income.is_negative() {
            return Err(BudgetValidationError::NegativeIncome);
        }
        if !self.income.is_within_limit() {
            return Err(BudgetValidationError::IncomeTooLarge);
        }

        let mut seen = HashSet::with_capacity(self.expenses.len());
        for (index, expense) in self.expenses.iter().enumerate() {
            expense
                .validate()
                .map_err(|reason| BudgetValidationError::InvalidExpense { index, reason })?;
            if !seen.insert(expense.id) {
                return Err(BudgetValidationError::DuplicateId(expense.id));
            }
        }

        Ok(())
    }
}
