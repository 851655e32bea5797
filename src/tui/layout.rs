//! Layout definitions for the TUI
//!
//! Summary on top, the two forms side by side, the expense list, and a
//! status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income, owed expenses and remaining
    pub summary: Rect,
    /// Income form
    pub income_form: Rect,
    /// Expense form
    pub expense_form: Rect,
    /// Expense table
    pub list: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Summary
                Constraint::Length(5), // Forms
                Constraint::Min(3),    // Expense list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let forms = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35), // Income form
                Constraint::Percentage(65), // Expense form
            ])
            .split(vertical[1]);

        Self {
            summary: vertical[0],
            income_form: forms[0],
            expense_form: forms[1],
            list: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.summary.height, 5);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.list.height, 30 - 5 - 5 - 1);
        assert_eq!(layout.income_form.width + layout.expense_form.width, 100);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let outer = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect_fixed(20, 4, outer), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect_fixed(60, 20, outer), Rect::new(0, 0, 40, 10));
    }
}
