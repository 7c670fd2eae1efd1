//! The interactive sum-of-the-parts valuation panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::core::valuation::{Stance, ValuationModel, MARKET_CAP_NOTE};

use super::theme::Theme;

pub struct ValuationPanel<'a> {
    model: &'a ValuationModel,
    block: Option<Block<'a>>,
}

impl<'a> ValuationPanel<'a> {
    pub fn new(model: &'a ValuationModel) -> Self {
        Self { model, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn stance_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, stance) in [Stance::Base, Stance::Bull].into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if stance == self.model.stance() {
                Theme::tab_active_style(stance == Stance::Bull)
            } else {
                Theme::tab_inactive_style()
            };
            spans.push(Span::styled(format!(" {} ", stance.label()), style));
        }
        spans.push(Span::styled(
            "  (s / click to toggle)",
            Theme::caption_style(),
        ));
        Line::from(spans)
    }
}

impl Widget for ValuationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        if inner.width < 20 || inner.height < 6 {
            return;
        }

        let mut y = inner.y;
        buf.set_line(inner.x, y, &self.stance_line(), inner.width);
        y += 2;

        // Segment rows: name, animated value, method tag.
        for row in self.model.rows() {
            if y >= inner.y + inner.height {
                return;
            }
            let value = format!("${:>4.0}B", row.displayed);
            let method = format!("  {}", row.method);
            let line = Line::from(vec![
                Span::styled(format!(" {:<20}", row.name), Theme::category_style(false)),
                Span::styled(value, Theme::value_style(row.accent)),
                Span::styled(method, Theme::caption_style()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        // Total + market-cap reference.
        if y + 1 < inner.y + inner.height {
            y += 1;
            let total = Line::from(vec![
                Span::styled(" Implied total       ", Theme::panel_title_style()),
                Span::styled(
                    format!("${:>5.0}B", self.model.displayed_total()),
                    Theme::value_style(self.model.stance() == Stance::Bull),
                ),
                Span::styled(
                    format!("  vs. ~${MARKET_CAP_NOTE:.0}B market cap"),
                    Theme::caption_style(),
                ),
            ]);
            buf.set_line(inner.x, y, &total, inner.width);
            y += 2;
        }

        // Stance commentary, wrapped into whatever space remains.
        if y < inner.y + inner.height {
            let remaining = Rect {
                x: inner.x + 1,
                y,
                width: inner.width.saturating_sub(2),
                height: inner.y + inner.height - y,
            };
            Paragraph::new(self.model.analysis())
                .style(Theme::caption_style())
                .wrap(Wrap { trim: true })
                .render(remaining, buf);
        }
    }
}
