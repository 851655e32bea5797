//! Expense model
//!
//! An expense is a single recorded cost. It is either personal (the tracked
//! user pays all of it) or shared 50/50 with another party.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// How an expense is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    /// The tracked user owes the full amount
    #[default]
    Personal,
    /// The tracked user owes exactly half
    Shared,
}

impl ExpenseType {
    /// The other split type
    pub fn toggled(self) -> Self {
        match self {
            Self::Personal => Self::Shared,
            Self::Shared => Self::Personal,
        }
    }

    /// Short badge shown next to the expense
    pub fn badge(self) -> &'static str {
        match self {
            Self::Personal => "100%",
            Self::Shared => "50%",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

impl FromStr for ExpenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" | "p" | "100" | "100%" => Ok(Self::Personal),
            "shared" | "s" | "50" | "50%" => Ok(Self::Shared),
            other => Err(format!("Unknown expense type: {}", other)),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount,
    AmountTooLarge,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be greater than zero"),
            Self::AmountTooLarge => write!(
                f,
                "Expense amount cannot exceed {}",
                Money::max_amount().rounded()
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
}

impl Expense {
    /// Create a validated expense with a fresh id
    ///
    /// The description is stored trimmed.
    pub fn new(
        description: &str,
        amount: Money,
        kind: ExpenseType,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            id: ExpenseId::new(),
            description: description.trim().to_string(),
            amount,
            kind,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Check the per-expense invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }
        Ok(())
    }

    /// The part of this expense the tracked user actually owes
    pub fn owed_amount(&self) -> Money {
        match self.kind {
            ExpenseType::Personal => self.amount,
            ExpenseType::Shared => self.amount.half(),
        }
    }

    pub fn is_shared(&self) -> bool {
        self.kind == ExpenseType::Shared
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.description, self.amount, self.kind)
    }
}
