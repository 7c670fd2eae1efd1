//! Layout helpers — split the terminal area into dashboard regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: backdrop header, KPI row, chart column with its
/// tab bar, valuation + growth side column, and a bottom status bar.
pub struct AppLayout {
    pub scene_area: Rect,
    pub kpi_area: Rect,
    pub tabs_area: Rect,
    pub chart_area: Rect,
    pub valuation_area: Rect,
    pub growth_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // backdrop scene + title
                Constraint::Length(4),  // KPI cards
                Constraint::Min(12),    // main panels
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);

        let chart_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(8)])
            .split(columns[0]);

        let side_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(9)])
            .split(columns[1]);

        Self {
            scene_area: rows[0],
            kpi_area: rows[1],
            tabs_area: chart_column[0],
            chart_area: chart_column[1],
            valuation_area: side_column[0],
            growth_area: side_column[1],
            status_area: rows[3],
        }
    }
}
