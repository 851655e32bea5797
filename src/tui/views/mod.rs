//! TUI Views module
//!
//! Contains the summary, the two forms, the expense list and the status bar.

pub mod expense_list;
pub mod forms;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let view = app.view();

    summary::render(frame, &view.summary, layout.summary);
    forms::render_income(frame, app, layout.income_form);
    forms::render_expense(frame, app, layout.expense_form);
    expense_list::render(frame, app, &view, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::ConfirmReset => {
            let detail = format!(
                "Income {} and {} expense(s) will be cleared.",
                view.summary.income,
                view.rows.len()
            );
            dialogs::confirm::render(frame, dialogs::RESET_QUESTION, &detail);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::settings::Settings;
    use crate::models::{ExpenseType, Money};
    use crate::services::BudgetStore;
    use crate::storage::MemorySlots;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn plain_settings() -> Settings {
        Settings {
            thousands_separator: ' ',
            ..Settings::default()
        }
    }

    #[test]
    fn test_empty_state() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = plain_settings();
        let app = App::new(&mut store, &settings);

        let text = screen(&app);
        assert!(text.contains("No expenses recorded yet."));
        assert!(text.contains("0,00 €"));
    }

    #[test]
    fn test_rows_and_totals() {
        let mut store = BudgetStore::new(MemorySlots::new());
        store.set_income(Money::from_units(2000)).unwrap();
        store
            .add_expense("Rent", Money::from_units(1000), ExpenseType::Personal)
            .unwrap();
        store
            .add_expense("Internet", Money::from_units(40), ExpenseType::Shared)
            .unwrap();
        let settings = plain_settings();
        let app = App::new(&mut store, &settings);

        let text = screen(&app);
        assert!(text.contains("Internet"));
        assert!(text.contains("50%"));
        assert!(text.contains("100%"));
        assert!(text.contains("20,00 €"));
        assert!(text.contains("1 020,00 €"));
        assert!(text.contains("980,00 €"));
        assert!(!text.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_control_characters_never_reach_the_screen() {
        let mut store = BudgetStore::new(MemorySlots::new());
        store
            .add_expense("Evil\u{1b}[2Jname", Money::from_units(5), ExpenseType::Personal)
            .unwrap();
        let settings = plain_settings();
        let app = App::new(&mut store, &settings);

        let text = screen(&app);
        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Evil"));
    }

    #[test]
    fn test_reset_dialog_rendered() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = plain_settings();
        let mut app = App::new(&mut store, &settings);
        app.request_reset();

        let text = screen(&app);
        assert!(text.contains("Reset budget"));
        assert!(text.contains("0 expense(s) will be cleared."));
    }
}
