//! Budget store
//!
//! The store is the only owner of the in-memory budget. Every accepted
//! mutation is applied to a copy, written to the durable slot, and only then
//! swapped in. Rejected input and failed writes leave both memory and disk
//! untouched.

use tracing::{debug, info, warn};

use crate::config::paths::STORAGE_KEY;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Expense, ExpenseId, ExpenseType, Money};
use crate::storage::SlotStorage;

use super::totals::{compute_totals, Totals};

/// Answer given at the reset confirmation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// What `load` found in the durable slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A valid snapshot replaced the in-memory budget
    Loaded,
    /// Nothing stored yet; the empty budget is kept
    Missing,
    /// The stored snapshot was unusable; the empty budget is used instead
    Recovered(String),
}

/// Owner of the budget and its durable copy
pub struct BudgetStore {
    slots: Box<dyn SlotStorage>,
    key: String,
    budget: Budget,
}

impl BudgetStore {
    /// Create a store with an empty budget, bound to the default slot key
    pub fn new(slots: impl SlotStorage + 'static) -> Self {
        Self::with_key(slots, STORAGE_KEY)
    }

    /// Create a store bound to a specific slot key
    pub fn with_key(slots: impl SlotStorage + 'static, key: impl Into<String>) -> Self {
        Self {
            slots: Box::new(slots),
            key: key.into(),
            budget: Budget::default(),
        }
    }

    /// Create a store and load whatever the slot holds
    pub fn open(slots: impl SlotStorage + 'static) -> TrackerResult<(Self, LoadStatus)> {
        let mut store = Self::new(slots);
        let status = store.load()?;
        Ok((store, status))
    }

    /// The current budget
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Totals for the current budget
    pub fn totals(&self) -> Totals {
        compute_totals(&self.budget)
    }

    /// Read the durable slot into memory
    ///
    /// A snapshot that is not UTF-8, does not parse, or parses but breaks a
    /// budget invariant is discarded and the empty budget is used. Only a
    /// failure to read the slot at all is an error.
    pub fn load(&mut self) -> TrackerResult<LoadStatus> {
        let Some(raw) = self.slots.read(&self.key)? else {
            debug!(key = %self.key, "no stored budget, starting empty");
            return Ok(LoadStatus::Missing);
        };

        let parsed = String::from_utf8(raw)
            .map_err(|e| format!("not valid UTF-8: {}", e.utf8_error()))
            .and_then(|text| serde_json::from_str::<Budget>(&text).map_err(|e| e.to_string()))
            .and_then(|budget| budget.validate().map(|()| budget).map_err(|e| e.to_string()));

        match parsed {
            Ok(budget) => {
                info!(
                    key = %self.key,
                    expenses = budget.expenses.len(),
                    "loaded budget"
                );
                self.budget = budget;
                Ok(LoadStatus::Loaded)
            }
            Err(reason) => {
                warn!(key = %self.key, %reason, "stored budget is invalid, starting empty");
                self.budget = Budget::default();
                Ok(LoadStatus::Recovered(reason))
            }
        }
    }

    /// Replace the income
    ///
    /// Returns `false` without touching anything if the amount is negative
    /// or above [`Money::max_amount`].
    pub fn set_income(&mut self, amount: Money) -> TrackerResult<bool> {
        if amount.is_negative() {
            debug!(%amount, "rejected negative income");
            return Ok(false);
        }
        if !amount.is_within_limit() {
            debug!(%amount, "rejected oversized income");
            return Ok(false);
        }

        let mut candidate = self.budget.clone();
        candidate.income = amount;
        self.commit(candidate)?;
        info!(%amount, "income set");
        Ok(true)
    }

    /// Append a new expense and return its id
    ///
    /// Returns `None` without touching anything if the description is blank
    /// or the amount is not positive or too large.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
        kind: ExpenseType,
    ) -> TrackerResult<Option<ExpenseId>> {
        let mut expense = match Expense::new(description, amount, kind) {
            Ok(expense) => expense,
            Err(reason) => {
                debug!(%reason, "rejected expense");
                return Ok(None);
            }
        };

        while self.budget.get(expense.id).is_some() {
            expense.id = ExpenseId::new();
        }

        let id = expense.id;
        let mut candidate = self.budget.clone();
        candidate.expenses.push(expense);
        self.commit(candidate)?;
        info!(%id, %amount, %kind, "expense added");
        Ok(Some(id))
    }

    /// Remove the expense with this id
    ///
    /// A missing id is not an error; the budget is persisted either way.
    pub fn remove_expense(&mut self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let mut candidate = self.budget.clone();
        let removed = candidate
            .position(id)
            .map(|index| candidate.expenses.remove(index));

        self.commit(candidate)?;
        match &removed {
            Some(_) => info!(%id, "expense removed"),
            None => debug!(%id, "no expense to remove"),
        }
        Ok(removed)
    }

    /// Clear income and expenses, only if the user confirmed
    pub fn reset(&mut self, confirmation: Confirmation) -> TrackerResult<bool> {
        if confirmation == Confirmation::Declined {
            debug!("reset declined");
            return Ok(false);
        }

        self.commit(Budget::default())?;
        info!("budget reset");
        Ok(true)
    }

    /// Resolve user input (full UUID or short id) to an expense id
    pub fn resolve_id(&self, input: &str) -> TrackerResult<ExpenseId> {
        let mut matches = self
            .budget
            .expenses
            .iter()
            .filter(|e| e.id.matches(input))
            .map(|e| e.id);

        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Expense id '{}' is ambiguous; use the full id",
                input.trim()
            ))),
            (None, _) => Err(TrackerError::expense_not_found(input.trim())),
        }
    }

    /// Write `candidate` to the durable slot, then make it the current budget
    fn commit(&mut self, candidate: Budget) -> TrackerResult<()> {
        let json = serde_json::to_string_pretty(&candidate)?;
        if let Err(e) = self.slots.write(&self.key, &json) {
            warn!(key = %self.key, error = %e, "write failed, budget unchanged");
            return Err(e);
        }
        self.budget = candidate;
        Ok(())
    }
}
