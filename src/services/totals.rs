//! Budget totals
//!
//! Pure aggregation over a budget. Nothing here is cached; callers recompute
//! on every render.

use crate::models::{Budget, Money};

/// Figures derived from a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// The recorded income
    pub income: Money,
    /// What the tracked user owes after applying split rules
    pub owed_expenses: Money,
    /// Income minus owed expenses
    pub remaining: Money,
}

/// Compute the totals for a budget
///
/// Sums saturate instead of overflowing. Validated budgets stay far below
/// the saturation point, so this only matters for hand-built ones.
pub fn compute_totals(budget: &Budget) -> Totals {
    let owed_expenses: Money = budget.expenses.iter().map(|e| e.owed_amount()).sum();

    Totals {
        income: budget.income,
        owed_expenses,
        remaining: budget.income.saturating_sub(owed_expenses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseType};

    fn budget(income_cents: i64, expenses: &[(&str, i64, ExpenseType)]) -> Budget {
        Budget {
            income: Money::from_cents(income_cents),
            expenses: expenses
                .iter()
                .map(|(d, cents, kind)| Expense::new(d, Money::from_cents(*cents), *kind).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_empty_budget() {
        let totals = compute_totals(&Budget::default());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_rent_and_shared_internet() {
        let b = budget(
            200000,
            &[
                ("Rent", 100000, ExpenseType::Personal),
                ("Internet", 4000, ExpenseType::Shared),
            ],
        );

        let totals = compute_totals(&b);
        assert_eq!(totals.income, Money::from_units(2000));
        assert_eq!(totals.owed_expenses, Money::from_units(1020));
        assert_eq!(totals.remaining, Money::from_units(980));
    }

    #[test]
    fn test_shared_gift_goes_negative() {
        let b = budget(0, &[("Gift", 5000, ExpenseType::Shared)]);

        let totals = compute_totals(&b);
        assert_eq!(totals.owed_expenses, Money::from_units(25));
        assert_eq!(totals.remaining, Money::from_units(-25));
    }

    #[test]
    fn test_odd_cents_stay_exact() {
        let b = budget(
            100,
            &[
                ("Coffee", 1, ExpenseType::Shared),
                ("Tea", 1, ExpenseType::Shared),
                ("Cake", 3, ExpenseType::Shared),
            ],
        );

        let totals = compute_totals(&b);
        assert_eq!(totals.owed_expenses, Money::from_cents(5).half());
        assert_eq!(totals.remaining + totals.owed_expenses, totals.income);
    }

    #[test]
    fn test_remaining_matches_definition() {
        let b = budget(
            12345,
            &[
                ("A", 999, ExpenseType::Personal),
                ("B", 1001, ExpenseType::Shared),
                ("C", 77, ExpenseType::Shared),
                ("D", 5000, ExpenseType::Personal),
            ],
        );

        let expected_owed: Money = b
            .expenses
            .iter()
            .map(|e| if e.is_shared() { e.amount.half() } else { e.amount })
            .sum();

        let totals = compute_totals(&b);
        assert_eq!(totals.remaining, b.income - expected_owed);
    }
}
