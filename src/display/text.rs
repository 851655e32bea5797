//! Plain-text rendering for CLI output
//!
//! Renders a [`BudgetView`] as a summary block and a table. Colors are raw
//! ANSI codes and only emitted when the caller asks for them.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::view::{BudgetView, ExpenseRow, RemainingTone, SummaryView};

#[derive(Tabled)]
struct ExpenseTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Split")]
    badge: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "My share")]
    share: String,
}

impl From<&ExpenseRow> for ExpenseTableRow {
    fn from(row: &ExpenseRow) -> Self {
        Self {
            id: row.id.to_string(),
            description: row.description.to_string(),
            badge: row.badge,
            amount: row.amount.clone(),
            share: row.share.clone().unwrap_or_default(),
        }
    }
}

/// ANSI color for a tone
fn tone_code(tone: RemainingTone) -> &'static str {
    match tone {
        RemainingTone::Alert => "\x1b[31m",
        RemainingTone::Warning => "\x1b[33m",
        RemainingTone::Normal => "\x1b[34m",
    }
}

/// Format the three headline figures
pub fn format_summary(summary: &SummaryView, color: bool) -> String {
    let remaining = if color {
        format!("{}{}\x1b[0m", tone_code(summary.tone), summary.remaining)
    } else {
        summary.remaining.clone()
    };

    let mut output = String::new();
    output.push_str(&format!("Income:         {}\n", summary.income));
    output.push_str(&format!("Owed expenses:  {}\n", summary.owed_expenses));
    output.push_str(&format!("Remaining:      {}\n", remaining));
    output
}

/// Format the expense list, or the placeholder when it is empty
pub fn format_expense_list(view: &BudgetView) -> String {
    if let Some(message) = view.empty_message() {
        return format!("{}\n", message);
    }

    let rows: Vec<ExpenseTableRow> = view.rows.iter().map(ExpenseTableRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::new(3..), Alignment::right());

    format!("{}\n", table)
}

/// Format the summary followed by the expense list
pub fn format_budget(view: &BudgetView, color: bool) -> String {
    let mut output = format_summary(&view.summary, color);
    output.push('\n');
    output.push_str(&format_expense_list(view));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::display::view::{present, EMPTY_MESSAGE};
    use crate::models::{Budget, Expense, ExpenseType, Money};
    use crate::services::compute_totals;

    fn view_for(budget: &Budget) -> BudgetView {
        let settings = Settings {
            thousands_separator: ' ',
            ..Settings::default()
        };
        present(budget, &compute_totals(budget), &settings)
    }

    #[test]
    fn test_empty_budget_shows_placeholder() {
        let output = format_budget(&view_for(&Budget::default()), false);
        assert!(output.contains("Income:         0,00 €"));
        assert!(output.contains(EMPTY_MESSAGE));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_table_lists_expenses() {
        let mut budget = Budget::default();
        budget.income = Money::from_units(2000);
        let rent = Expense::new("Rent", Money::from_units(1000), ExpenseType::Personal).unwrap();
        let internet = Expense::new("Internet", Money::from_units(40), ExpenseType::Shared).unwrap();
        budget.expenses = vec![rent.clone(), internet];

        let output = format_budget(&view_for(&budget), false);
        assert!(output.contains("Remaining:      980,00 €"));
        assert!(output.contains(&rent.id.to_string()));
        assert!(output.contains("100%"));
        assert!(output.contains("50%"));
        assert!(output.contains("20,00 €"));
        assert!(output.find("Rent").unwrap() < output.find("Internet").unwrap());
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_color_only_on_request() {
        let budget = Budget {
            income: Money::from_units(50),
            expenses: Vec::new(),
        };
        let view = view_for(&budget);

        let colored = format_summary(&view.summary, true);
        assert!(colored.contains("\x1b[33m50,00 €\x1b[0m"));
        assert!(!format_summary(&view.summary, false).contains('\x1b'));
    }

    #[test]
    fn test_hostile_description_cannot_inject_escapes() {
        let mut budget = Budget::default();
        budget.expenses.push(
            Expense::new("\x1b[2JRent", Money::from_units(5), ExpenseType::Personal).unwrap(),
        );

        let output = format_expense_list(&view_for(&budget));
        assert!(!output.contains('\x1b'));
    }
}
