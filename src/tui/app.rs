//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every user action goes through [`dispatch`], so the TUI and the CLI share
//! the same validation and persistence path.

use std::time::{Duration, Instant};

use tracing::error;

use crate::commands::{dispatch, Command, Outcome};
use crate::config::settings::Settings;
use crate::display::{present, BudgetView};
use crate::error::TrackerResult;
use crate::models::ExpenseType;
use crate::services::BudgetStore;

use super::keybindings::KeyContext;
use super::widgets::TextInput;

/// How long a status message stays visible
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which element currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Income,
    Description,
    Amount,
    ExpenseType,
    List,
}

impl Focus {
    /// Next element in tab order
    pub fn next(self) -> Self {
        match self {
            Self::Income => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::ExpenseType,
            Self::ExpenseType => Self::List,
            Self::List => Self::Income,
        }
    }

    /// Previous element in tab order
    pub fn prev(self) -> Self {
        match self {
            Self::Income => Self::List,
            Self::Description => Self::Income,
            Self::Amount => Self::Description,
            Self::ExpenseType => Self::Amount,
            Self::List => Self::ExpenseType,
        }
    }

    /// Whether this element takes free text
    pub fn is_text_field(self) -> bool {
        matches!(self, Self::Income | Self::Description | Self::Amount)
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ConfirmReset,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= STATUS_TTL
    }
}

/// Main application state
pub struct App<'a> {
    /// The budget store
    pub store: &'a mut BudgetStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which element has focus
    pub focus: Focus,

    /// Income form field
    pub income_input: TextInput,

    /// Expense form fields
    pub description_input: TextInput,
    pub amount_input: TextInput,

    /// Split type for the next expense; survives submissions
    pub expense_type: ExpenseType,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a mut BudgetStore, settings: &'a Settings) -> Self {
        let mut app = Self {
            store,
            settings,
            should_quit: false,
            focus: Focus::default(),
            income_input: TextInput::new().label("Income").placeholder("e.g. 2000"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Rent"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 39,90"),
            expense_type: ExpenseType::default(),
            selected_index: 0,
            active_dialog: ActiveDialog::default(),
            status_message: None,
        };
        app.sync_focus();
        app
    }

    /// Presentation of the current budget
    pub fn view(&self) -> BudgetView {
        present(self.store.budget(), &self.store.totals(), self.settings)
    }

    /// Number of expenses in the list
    pub fn expense_count(&self) -> usize {
        self.store.budget().expenses.len()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set an informational status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(message, StatusKind::Info));
    }

    /// Set an error status message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(message, StatusKind::Error));
    }

    /// Drop the status message once it has been shown long enough
    pub fn tick(&mut self) {
        if self.status_message.as_ref().is_some_and(StatusMessage::is_expired) {
            self.status_message = None;
        }
    }

    /// Move focus to a specific element
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    /// Move focus forward in tab order
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus backward in tab order
    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    fn sync_focus(&mut self) {
        self.income_input.focused = self.focus == Focus::Income;
        self.description_input.focused = self.focus == Focus::Description;
        self.amount_input.focused = self.focus == Focus::Amount;
    }

    /// The text field that has focus, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Income => Some(&mut self.income_input),
            Focus::Description => Some(&mut self.description_input),
            Focus::Amount => Some(&mut self.amount_input),
            Focus::ExpenseType | Focus::List => None,
        }
    }

    /// Key context used for hints
    pub fn key_context(&self) -> KeyContext {
        if self.has_dialog() {
            KeyContext::Dialog
        } else if self.focus.is_text_field() {
            KeyContext::TextField
        } else if self.focus == Focus::ExpenseType {
            KeyContext::TypeSelector
        } else {
            KeyContext::List
        }
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Switch the split type of the next expense
    pub fn toggle_expense_type(&mut self) {
        self.expense_type = self.expense_type.toggled();
    }

    /// Move selection up in the expense list
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the expense list
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expense_count() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.expense_count().saturating_sub(1));
    }

    /// Run a command, turning a storage failure into a status message
    fn run(&mut self, command: Command) -> Outcome {
        let result: TrackerResult<Outcome> = dispatch(&mut *self.store, command);
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "command failed");
                self.set_error(format!("Could not save: {}", e));
                Outcome::Ignored
            }
        }
    }

    /// Submit the income form
    ///
    /// The field is cleared only when the income was accepted.
    pub fn submit_income(&mut self) -> Outcome {
        let amount = self.income_input.value().to_string();
        let outcome = self.run(Command::SubmitIncome { amount });
        if outcome.is_applied() {
            self.income_input.clear();
            self.set_status("Income updated");
        }
        outcome
    }

    /// Submit the expense form
    ///
    /// Description and amount are cleared when the expense was accepted;
    /// the split type is kept for the next entry.
    pub fn submit_expense(&mut self) -> Outcome {
        let description = self.description_input.value().to_string();
        let amount = self.amount_input.value().to_string();
        let outcome = self.run(Command::SubmitExpense {
            description,
            amount,
            kind: Some(self.expense_type),
        });
        if outcome.is_applied() {
            self.description_input.clear();
            self.amount_input.clear();
            self.set_status("Expense added");
        }
        outcome
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) -> Outcome {
        let Some(id) = self
            .store
            .budget()
            .expenses
            .get(self.selected_index)
            .map(|expense| expense.id)
        else {
            return Outcome::Ignored;
        };

        let outcome = self.run(Command::DeleteExpense { id });
        if outcome.is_applied() {
            self.clamp_selection();
            self.set_status("Expense deleted");
        }
        outcome
    }

    /// Open the reset confirmation dialog
    pub fn request_reset(&mut self) {
        self.active_dialog = ActiveDialog::ConfirmReset;
    }

    /// Answer the reset confirmation dialog
    pub fn resolve_reset(&mut self, confirmed: bool) -> Outcome {
        self.active_dialog = ActiveDialog::None;
        let outcome = self.run(Command::Reset {
            confirmation: confirmed.into(),
        });
        if outcome.is_applied() {
            self.selected_index = 0;
            self.set_status("Budget reset");
        }
        outcome
    }
}
