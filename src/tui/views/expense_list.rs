//! Expense list view
//!
//! One row per expense in insertion order: split badge, description, full
//! amount and, for shared expenses, the user's half.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{BudgetView, ExpenseRow};
use crate::models::ExpenseType;
use crate::tui::app::{App, Focus};

fn badge_style(kind: ExpenseType) -> Style {
    match kind {
        ExpenseType::Shared => Style::default().fg(Color::Magenta),
        ExpenseType::Personal => Style::default().fg(Color::Cyan),
    }
}

fn row(expense: &ExpenseRow) -> Row<'_> {
    Row::new(vec![
        Cell::from(expense.badge).style(badge_style(expense.kind)),
        Cell::from(expense.description.as_str()),
        Cell::from(expense.amount.as_str()),
        Cell::from(expense.share.as_deref().unwrap_or("")).style(Style::default().fg(Color::Gray)),
    ])
}

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, view: &BudgetView, area: Rect) {
    let focused = app.focus == Focus::List;
    let border_color = if focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", view.rows.len()))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = view.empty_message() {
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec!["Split", "Description", "Amount", "My share"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let widths = [
        Constraint::Length(6),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let highlight = if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(view.rows.iter().map(row), widths)
        .header(header)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if focused { "▶ " } else { "  " });

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(view.rows.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}
