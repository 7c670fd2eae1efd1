//! Scenario tab bar — one clickable label per dataset scenario.
//!
//! [`hit_areas`] reproduces the render geometry so the mouse handler can
//! hit-test without re-rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::Widget,
};

use crate::core::dataset::Dataset;

use super::theme::Theme;

const GAP: u16 = 1;

/// The tab bar widget — created fresh each frame.
pub struct ScenarioTabs<'a> {
    dataset: &'a Dataset,
    active: usize,
}

impl<'a> ScenarioTabs<'a> {
    pub fn new(dataset: &'a Dataset, active: usize) -> Self {
        Self { dataset, active }
    }
}

impl Widget for ScenarioTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        for (index, rect) in hit_areas(area, self.dataset).iter().enumerate() {
            let scenario = self.dataset.scenario(index);
            let style = if index == self.active {
                // The vision/bull style scenario gets the accent tab, matching
                // its accented entries.
                let accent = scenario.entries.iter().any(|e| e.accent);
                Theme::tab_active_style(accent)
            } else {
                Theme::tab_inactive_style()
            };
            let label = format!(" {} ", scenario.label);
            buf.set_span(rect.x, rect.y, &Span::styled(label, style), rect.width);
        }
    }
}

/// The screen rectangle of each tab, in scenario order.  Tabs that overflow
/// the area are clipped to zero width (and thus unclickable).
pub fn hit_areas(area: Rect, dataset: &Dataset) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(dataset.scenario_count());
    let mut x = area.x;
    let right = area.x + area.width;

    for scenario in &dataset.scenarios {
        let width = (scenario.label.chars().count() as u16 + 2).min(right.saturating_sub(x));
        rects.push(Rect {
            x,
            y: area.y,
            width,
            height: 1,
        });
        x = x.saturating_add(width + GAP);
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_areas_are_disjoint_and_ordered() {
        let d = Dataset::builtin();
        let area = Rect::new(2, 5, 60, 1);
        let rects = hit_areas(area, &d);
        assert_eq!(rects.len(), d.scenario_count());
        for pair in rects.windows(2) {
            assert!(pair[0].x + pair[0].width <= pair[1].x);
        }
        for r in &rects {
            assert_eq!(r.y, 5);
            assert_eq!(r.height, 1);
        }
    }
}
