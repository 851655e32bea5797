//! Terminal User Interface module
//!
//! The interactive front end, built on ratatui: a summary header, the income
//! and expense forms, the expense list and a status bar, plus the reset
//! confirmation dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
