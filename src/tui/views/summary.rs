//! Summary view
//!
//! Income, owed expenses and what remains, with the remaining figure
//! coloured by its tone.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{RemainingTone, SummaryView};

/// Colour for the remaining figure
pub fn tone_color(tone: RemainingTone) -> Color {
    match tone {
        RemainingTone::Alert => Color::Red,
        RemainingTone::Warning => Color::Yellow,
        RemainingTone::Normal => Color::Blue,
    }
}

fn figure<'a>(label: &'a str, value: &'a str, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::White)),
        Span::styled(value, style),
    ])
}

/// Render the summary block
pub fn render(frame: &mut Frame, summary: &SummaryView, area: Rect) {
    let block = Block::default()
        .title(" Summary ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let remaining_style = Style::default()
        .fg(tone_color(summary.tone))
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        figure("Income", &summary.income, Style::default().fg(Color::Green)),
        figure(
            "Owed expenses",
            &summary.owed_expenses,
            Style::default().fg(Color::White),
        ),
        figure("Remaining", &summary.remaining, remaining_style),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
