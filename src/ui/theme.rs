//! Colour palette and text styles used across the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// The report's accent red.
pub const ACCENT: Color = Color::Rgb(227, 25, 55);

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── chrome ─────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn border_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn panel_title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    // ── tabs ───────────────────────────────────────────────────
    pub fn tab_active_style(accent: bool) -> Style {
        let bg = if accent { ACCENT } else { Color::Rgb(70, 70, 70) };
        Style::default()
            .bg(bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive_style() -> Style {
        Style::default().fg(Color::Rgb(120, 120, 120))
    }

    // ── bars ───────────────────────────────────────────────────
    /// Bar fill style.  Neutral bars map opacity to a grey brightness;
    /// accent bars stay red and modulate brightness instead.
    pub fn bar_style(accent: bool, opacity: f64) -> Style {
        let opacity = opacity.clamp(0.0, 1.0);
        let color = if accent {
            let scale = 0.45 + 0.55 * opacity;
            Color::Rgb(
                (227.0 * scale) as u8,
                (25.0 * scale) as u8,
                (55.0 * scale) as u8,
            )
        } else {
            let level = (70.0 + 150.0 * opacity) as u8;
            Color::Rgb(level, level, level)
        };
        Style::default().fg(color)
    }

    pub fn value_style(accent: bool) -> Style {
        let fg = if accent { ACCENT } else { Color::White };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn category_style(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn caption_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── gauges & KPIs ──────────────────────────────────────────
    pub fn gauge_fill_style(accent: bool) -> Style {
        let fg = if accent { ACCENT } else { Color::Rgb(150, 150, 150) };
        Style::default().fg(fg)
    }

    pub fn gauge_track_style() -> Style {
        Style::default().fg(Color::Rgb(45, 45, 45))
    }

    pub fn positive_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn negative_style() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn kpi_label_style() -> Style {
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn kpi_value_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    // ── backdrop scene ─────────────────────────────────────────
    pub fn particle_style(accent: bool, near: bool) -> Style {
        let fg = if accent {
            ACCENT
        } else if near {
            Color::Rgb(130, 130, 130)
        } else {
            Color::Rgb(70, 70, 70)
        };
        Style::default().fg(fg)
    }

    pub fn node_style(accent: bool) -> Style {
        let fg = if accent { ACCENT } else { Color::Rgb(90, 90, 90) };
        Style::default().fg(fg)
    }

    pub fn edge_style() -> Style {
        Style::default().fg(Color::Rgb(50, 50, 50))
    }
}
