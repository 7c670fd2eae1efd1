//! Year-over-year segment growth bars with a one-shot entry animation.
//!
//! Bars are normalized against the fastest-growing segment, then revealed by
//! a single progress tween running 0 → 1 after mount.  Display width is
//! `fraction × progress`, so all bars grow together and settle at their
//! exact normalized widths.

use std::time::Duration;

use super::animator::Tween;

/// One segment's growth figure.
#[derive(Debug, Clone, Copy)]
pub struct GrowthEntry {
    pub name: &'static str,
    /// Year-over-year growth, percent.
    pub yoy_pct: f64,
    /// Optional footnote shown under the bar.
    pub note: Option<&'static str>,
    /// Accent colour for the headline segment.
    pub accent: bool,
}

/// Built-in YoY figures.  Energy grows ~7x faster than auto.
const ENTRIES: &[GrowthEntry] = &[
    GrowthEntry {
        name: "Energy generation & storage",
        yoy_pct: 44.0,
        note: Some("High margin (Megapack-driven)"),
        accent: true,
    },
    GrowthEntry {
        name: "Services & other",
        yoy_pct: 25.0,
        note: None,
        accent: false,
    },
    GrowthEntry {
        name: "Automotive",
        yoy_pct: 6.0,
        note: Some("Volume-led, margins compressed"),
        accent: false,
    },
];

/// A bar ready for display.
#[derive(Debug, Clone, Copy)]
pub struct GrowthBar {
    pub entry: GrowthEntry,
    /// Current bar width as a fraction of the panel, `0.0..=1.0`.
    pub fill: f64,
}

/// The growth panel state: static figures + entry-animation progress.
#[derive(Debug, Clone)]
pub struct GrowthSeries {
    progress: Tween,
    max_pct: f64,
}

impl GrowthSeries {
    pub fn new(duration: Duration) -> Self {
        let max_pct = ENTRIES
            .iter()
            .map(|e| e.yoy_pct)
            .fold(f64::MIN, f64::max)
            .max(1.0);
        let mut progress = Tween::new(0.0, duration);
        progress.retarget(1.0);
        Self { progress, max_pct }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.progress.tick(dt);
    }

    pub fn bars(&self) -> Vec<GrowthBar> {
        let p = self.progress.value();
        ENTRIES
            .iter()
            .map(|&entry| GrowthBar {
                entry,
                fill: (entry.yoy_pct / self.max_pct) * p,
            })
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        !self.progress.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUR: Duration = Duration::from_millis(1000);

    #[test]
    fn bars_start_collapsed_and_settle_normalized() {
        let mut g = GrowthSeries::new(DUR);
        for bar in g.bars() {
            assert_eq!(bar.fill, 0.0);
        }
        assert!(g.is_animating());

        g.tick(DUR);
        let bars = g.bars();
        assert!(!g.is_animating());
        assert_eq!(bars[0].fill, 1.0); // energy is the max
        assert!((bars[1].fill - 25.0 / 44.0).abs() < 1e-12);
        assert!((bars[2].fill - 6.0 / 44.0).abs() < 1e-12);
    }

    #[test]
    fn fills_never_exceed_unity_while_animating() {
        let mut g = GrowthSeries::new(DUR);
        for _ in 0..50 {
            g.tick(Duration::from_millis(33));
            for bar in g.bars() {
                assert!((0.0..=1.0).contains(&bar.fill));
            }
        }
    }
}
