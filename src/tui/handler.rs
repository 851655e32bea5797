//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state: dialog first, then the focused element.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.tick(),
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Some platforms report releases as well
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Income | Focus::Description | Focus::Amount => handle_text_field_key(app, key),
        Focus::ExpenseType => handle_type_selector_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// Handle keys while a text field is focused
fn handle_text_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.focus == Focus::Income {
                app.submit_income();
            } else {
                app.submit_expense();
            }
            return;
        }
        KeyCode::Esc => {
            app.set_focus(Focus::List);
            return;
        }
        _ => {}
    }

    let Some(input) = app.focused_input() else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

/// Handle keys while the split type selector is focused
fn handle_type_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('t') | KeyCode::Left | KeyCode::Right => {
            app.toggle_expense_type();
        }
        KeyCode::Enter => {
            app.submit_expense();
        }
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Esc => app.set_focus(Focus::List),
        _ => {}
    }
}

/// Handle keys while the expense list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('R') => app.request_reset(),
        KeyCode::Char('t') | KeyCode::Char(' ') => app.toggle_expense_type(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Handle keys while the reset confirmation dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.resolve_reset(true);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.resolve_reset(false);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{ExpenseType, Money};
    use crate::services::BudgetStore;
    use crate::storage::MemorySlots;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn test_typing_q_in_a_field_does_not_quit() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "quiz");
        assert!(!app.should_quit);
        assert_eq!(app.description_input.value(), "quiz");
    }

    #[test]
    fn test_keyboard_flow() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        type_text(&mut app, "2000");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.budget().income, Money::from_units(2000));

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Internet");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "40");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.expense_type, ExpenseType::Shared);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.totals().remaining, Money::from_units(1980));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.expense_count(), 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_reset_confirmation_keys() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        type_text(&mut app, "500");
        press(&mut app, KeyCode::Enter);
        app.set_focus(Focus::List);

        press(&mut app, KeyCode::Char('R'));
        assert!(app.has_dialog());
        // Other keys are swallowed while the dialog is open
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert_eq!(app.store.budget().income, Money::from_units(500));

        press(&mut app, KeyCode::Char('R'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.budget().income, Money::zero());
    }

    #[test]
    fn test_key_release_ignored() {
        let mut store = BudgetStore::new(MemorySlots::new());
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.income_input.value(), "");
    }
}
