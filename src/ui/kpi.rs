//! Headline KPI cards shown under the title.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::Theme;

/// One headline figure.
struct Kpi {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    positive: bool,
}

/// Q3 headline figures from the report.
const KPIS: &[Kpi] = &[
    Kpi {
        label: "TOTAL REVENUE",
        value: "$28.1B",
        change: "+12% YoY",
        positive: true,
    },
    Kpi {
        label: "NET INCOME",
        value: "$1.37B",
        change: "-37% YoY",
        positive: false,
    },
    Kpi {
        label: "ENERGY GROWTH",
        value: "+44%",
        change: "7x automotive",
        positive: true,
    },
];

pub struct KpiCards;

impl Widget for KpiCards {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, KPIS.len() as u32);
                KPIS.len()
            ])
            .split(area);

        for (kpi, column) in KPIS.iter().zip(columns.iter()) {
            // Accent edge on the left of each card.
            for dy in 0..3.min(column.height) {
                buf.set_string(column.x, column.y + dy, "▌", Theme::value_style(true));
            }
            let x = column.x + 2;
            let width = column.width.saturating_sub(2);
            buf.set_stringn(x, column.y, kpi.label, width as usize, Theme::kpi_label_style());
            buf.set_stringn(x, column.y + 1, kpi.value, width as usize, Theme::kpi_value_style());
            let (arrow, style) = if kpi.positive {
                ("▲ ", Theme::positive_style())
            } else {
                ("▼ ", Theme::negative_style())
            };
            let change = Line::from(vec![
                Span::styled(arrow, style),
                Span::styled(kpi.change, style),
            ]);
            buf.set_line(x, column.y + 2, &change, width);
        }
    }
}
