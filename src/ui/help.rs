//! Keybinding help overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::config::{Action, AppConfig};

use super::theme::Theme;

/// Centered popup listing every configurable binding.
pub struct HelpPopup<'a> {
    pub config: &'a AppConfig,
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = Action::ALL.len() as u16 + 7;
        let popup = centered_fixed(46, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Keys ")
            .title_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());

        let inner = block.inner(popup);
        block.render(popup, buf);

        let bottom = inner.y + inner.height;
        let mut y = inner.y + 1;
        for &action in Action::ALL {
            if y >= bottom {
                return;
            }
            let line = Line::from(vec![
                Span::styled(format!("  {:<20}", action.label()), Style::default().fg(Color::White)),
                Span::styled(self.config.display_bindings(action), Theme::caption_style()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        y += 1;
        for extra in [
            "  1-9: jump straight to a scenario tab",
            "  mouse: click tabs / valuation, scroll to cycle",
        ] {
            if y >= bottom {
                return;
            }
            buf.set_string(inner.x, y, extra, Theme::caption_style());
            y += 1;
        }
    }
}

/// A fixed-size rect centered within `area`, clipped to fit.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
