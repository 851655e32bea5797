//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! the budget store with its validation rules, and the totals computed from
//! the stored budget.

pub mod store;
pub mod totals;

pub use store::{BudgetStore, Confirmation, LoadStatus};
pub use totals::{compute_totals, Totals};
