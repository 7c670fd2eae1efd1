//! Year-over-year growth gauges — horizontal bars revealed on startup.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::core::growth::GrowthSeries;

use super::theme::Theme;

pub struct GrowthGauges<'a> {
    series: &'a GrowthSeries,
    block: Option<Block<'a>>,
}

impl<'a> GrowthGauges<'a> {
    pub fn new(series: &'a GrowthSeries) -> Self {
        Self { series, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for GrowthGauges<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.width < 8 || inner.height < 2 {
            return;
        }

        let mut y = inner.y;
        for bar in self.series.bars() {
            if y + 1 >= inner.y + inner.height {
                break;
            }

            // Header: segment name left, growth figure right.
            let pct = format!("+{:.0}%", bar.entry.yoy_pct);
            let name_style = if bar.entry.accent {
                Theme::value_style(true)
            } else {
                Theme::category_style(false)
            };
            let header = Line::from(vec![Span::styled(bar.entry.name, name_style)]);
            buf.set_line(inner.x, y, &header, inner.width);
            let pct_x = inner.x + inner.width - pct.len() as u16;
            buf.set_string(pct_x, y, &pct, name_style);

            // Track + eased fill.
            let fill_cells = (bar.fill * inner.width as f64).round() as u16;
            let fill_cells = fill_cells.min(inner.width);
            let track = "░".repeat((inner.width - fill_cells) as usize);
            let fill = "█".repeat(fill_cells as usize);
            buf.set_string(inner.x, y + 1, &fill, Theme::gauge_fill_style(bar.entry.accent));
            buf.set_string(inner.x + fill_cells, y + 1, &track, Theme::gauge_track_style());
            y += 2;

            if let Some(note) = bar.entry.note {
                if y < inner.y + inner.height {
                    buf.set_string(inner.x + 1, y, note, Theme::caption_style());
                    y += 1;
                }
            }
        }
    }
}
