//! Income and expense forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ExpenseType;
use crate::tui::app::{App, Focus};

fn form_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::White };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Render the income form
pub fn render_income(frame: &mut Frame, app: &App, area: Rect) {
    let block = form_block(" Income ", app.focus == Focus::Income);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(&app.income_input, rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter to set",
            Style::default().fg(Color::DarkGray),
        )),
        rows[2],
    );
}

/// Render the expense form
pub fn render_expense(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(
        app.focus,
        Focus::Description | Focus::Amount | Focus::ExpenseType
    );
    let block = form_block(" New expense ", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(&app.description_input, rows[0]);
    frame.render_widget(&app.amount_input, rows[1]);
    frame.render_widget(
        Paragraph::new(type_selector(app.expense_type, app.focus == Focus::ExpenseType)),
        rows[2],
    );
}

/// The personal/shared toggle, with the active choice highlighted
fn type_selector(selected: ExpenseType, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let option = |kind: ExpenseType| {
        let text = format!(" {} ({}) ", kind, kind.badge());
        if kind == selected {
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(if focused { Color::Cyan } else { Color::Gray }),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::DarkGray))
        }
    };

    Line::from(vec![
        Span::styled("Split", label_style),
        Span::raw(": "),
        option(ExpenseType::Personal),
        Span::raw(" "),
        option(ExpenseType::Shared),
    ])
}
