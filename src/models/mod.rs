//! Core data models for the expense tracker
//!
//! This module contains the data structures of the budgeting domain: the
//! budget aggregate, its expenses, money amounts and identifiers.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{Budget, BudgetValidationError};
pub use expense::{Expense, ExpenseType, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
