//! The animated scenario bar chart.
//!
//! Samples the animator's interpolated [`VisualState`] per category and
//! draws a vertical bar with sub-cell resolution (eighth-block characters
//! for the fractional top cell).  The caption line shows the selected
//! category's description for the active scenario.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::core::{animator::Animator, dataset::Dataset};

use super::theme::Theme;

/// Partial top-cell characters, from 1/8 to 7/8 of a cell.
const EIGHTHS: [&str; 7] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇"];

/// Widest a single bar gets, in cells.
const MAX_BAR_WIDTH: u16 = 9;

pub struct ScenarioBars<'a> {
    dataset: &'a Dataset,
    animator: &'a Animator,
    /// Active scenario index (for captions and accent flags).
    active: usize,
    /// Category highlighted in the label row and caption.
    selected: usize,
    block: Option<Block<'a>>,
}

impl<'a> ScenarioBars<'a> {
    pub fn new(dataset: &'a Dataset, animator: &'a Animator, active: usize) -> Self {
        Self {
            dataset,
            animator,
            active,
            selected: 0,
            block: None,
        }
    }

    pub fn selected(mut self, category: usize) -> Self {
        self.selected = category;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ScenarioBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        let categories = &self.dataset.categories;
        // One row for values above the bars, one for labels, one for the
        // caption underneath.
        if categories.is_empty() || inner.height < 5 || inner.width < 4 {
            return;
        }
        let plot_height = (inner.height - 3) as usize;
        let column_width = inner.width / categories.len() as u16;
        if column_width == 0 {
            return;
        }

        let scenario = self.dataset.scenario(self.active);
        let label_y = inner.y + inner.height - 2;
        let caption_y = inner.y + inner.height - 1;
        let baseline = label_y - 1;

        for (c, name) in categories.iter().enumerate() {
            let visual = self.animator.visual(c);
            let entry = &scenario.entries[c];

            let column_x = inner.x + c as u16 * column_width;
            let bar_width = column_width.saturating_sub(2).clamp(1, MAX_BAR_WIDTH);
            let bar_x = column_x + (column_width - bar_width) / 2;

            // Height in eighth-cells, clamped to the plot.
            let frac = (visual.height / 100.0).clamp(0.0, 1.0);
            let eighths = (frac * plot_height as f64 * 8.0).round() as usize;
            let full_cells = (eighths / 8).min(plot_height);
            let remainder = eighths % 8;

            let style = Theme::bar_style(entry.accent, visual.opacity);
            let segment = "█".repeat(bar_width as usize);
            for row in 0..full_cells {
                buf.set_string(bar_x, baseline - row as u16, &segment, style);
            }
            if remainder > 0 && full_cells < plot_height {
                let cap = EIGHTHS[remainder - 1].repeat(bar_width as usize);
                buf.set_string(bar_x, baseline - full_cells as u16, &cap, style);
            }

            // Interpolated value above the bar (or at the top of the plot).
            let value = format!("{:.0}%", visual.height);
            let bar_cells = full_cells + usize::from(remainder > 0);
            let value_y = baseline - (bar_cells.min(plot_height) as u16);
            let value_x = centered_x(column_x, column_width, value.len());
            buf.set_string(value_x, value_y, &value, Theme::value_style(entry.accent));

            // Category label under the bar.
            let label_x = centered_x(column_x, column_width, name.chars().count());
            buf.set_string(label_x, label_y, name, Theme::category_style(c == self.selected));
        }

        // Caption: the selected category's description for the active tab.
        let description = &scenario.entries[self.selected].description;
        let caption = Line::from(vec![
            Span::styled("▸ ", Theme::value_style(false)),
            Span::styled(description.as_str(), Theme::caption_style()),
        ]);
        buf.set_line(inner.x + 1, caption_y, &caption, inner.width.saturating_sub(1));
    }
}

/// X position that centres `len` characters within a column, clipped left.
fn centered_x(column_x: u16, column_width: u16, len: usize) -> u16 {
    let len = len.min(column_width as usize) as u16;
    column_x + (column_width - len) / 2
}
