//! Sum-of-the-parts valuation model with an animated base/bull toggle.
//!
//! Three business segments, each with a per-stance value and valuation
//! method.  Segment values roll toward their targets on the shared [`Tween`]
//! machinery, so toggling the stance mid-animation behaves exactly like
//! switching chart scenarios: no snapping, values within endpoint bounds.

use std::time::Duration;

use super::animator::Tween;

/// Valuation stance — conservative fundamentals vs. the AI bull case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Base,
    Bull,
}

impl Stance {
    pub fn toggled(self) -> Self {
        match self {
            Stance::Base => Stance::Bull,
            Stance::Bull => Stance::Base,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stance::Base => "Base",
            Stance::Bull => "Bull",
        }
    }
}

/// One business segment's per-stance valuation (in $B).
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub name: &'static str,
    base_value: f64,
    bull_value: f64,
    base_method: &'static str,
    bull_method: &'static str,
}

impl Segment {
    pub fn value(&self, stance: Stance) -> f64 {
        match stance {
            Stance::Base => self.base_value,
            Stance::Bull => self.bull_value,
        }
    }

    pub fn method(&self, stance: Stance) -> &'static str {
        match stance {
            Stance::Base => self.base_method,
            Stance::Bull => self.bull_method,
        }
    }
}

/// Segment table for the built-in report (values in $B).
const SEGMENTS: &[Segment] = &[
    Segment {
        name: "Automotive",
        base_value: 400.0,
        bull_value: 550.0,
        base_method: "20x EV/EBIT",
        bull_method: "30x EV/EBIT",
    },
    Segment {
        name: "Energy",
        base_value: 100.0,
        bull_value: 200.0,
        base_method: "5x P/S",
        bull_method: "10x P/S",
    },
    Segment {
        name: "AI / FSD / Robotics",
        base_value: 200.0,
        bull_value: 800.0,
        base_method: "Option value",
        bull_method: "Discounted TAM",
    },
];

/// Reference market cap shown under the implied total, $B.
pub const MARKET_CAP_NOTE: f64 = 800.0;

/// A row ready for display.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRow {
    pub name: &'static str,
    /// Animated (possibly mid-interpolation) value, $B.
    pub displayed: f64,
    pub method: &'static str,
    /// Whether this segment carries the accent treatment (the AI segment in
    /// the bull stance).
    pub accent: bool,
}

/// The interactive SOTP panel state.
#[derive(Debug, Clone)]
pub struct ValuationModel {
    stance: Stance,
    tweens: Vec<Tween>,
}

impl ValuationModel {
    pub fn new(duration: Duration) -> Self {
        let stance = Stance::default();
        let tweens = SEGMENTS
            .iter()
            .map(|s| Tween::new(s.value(stance), duration))
            .collect();
        Self { stance, tweens }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Flip between base and bull, retargeting every segment tween from its
    /// current displayed value.
    pub fn toggle(&mut self) {
        self.set_stance(self.stance.toggled());
    }

    /// Idempotent: setting the active stance again does not re-animate.
    pub fn set_stance(&mut self, stance: Stance) {
        self.stance = stance;
        for (tween, segment) in self.tweens.iter_mut().zip(SEGMENTS) {
            tween.retarget(segment.value(stance));
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for tween in &mut self.tweens {
            tween.tick(dt);
        }
    }

    pub fn rows(&self) -> Vec<SegmentRow> {
        SEGMENTS
            .iter()
            .zip(&self.tweens)
            .map(|(segment, tween)| SegmentRow {
                name: segment.name,
                displayed: tween.value(),
                method: segment.method(self.stance),
                accent: self.stance == Stance::Bull && segment.name.starts_with("AI"),
            })
            .collect()
    }

    /// The animated total (sum of displayed segment values).
    pub fn displayed_total(&self) -> f64 {
        self.tweens.iter().map(Tween::value).sum()
    }

    /// The settled total for the active stance.
    pub fn total_target(&self) -> f64 {
        SEGMENTS.iter().map(|s| s.value(self.stance)).sum()
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(|t| !t.is_idle())
    }

    /// Stance-specific commentary shown under the table.
    pub fn analysis(&self) -> &'static str {
        match self.stance {
            Stance::Base => {
                "The base stance treats the company as a mature automaker plus an \
                 energy utility. The gap to the current market cap is the premium \
                 already paid for AI execution."
            }
            Stance::Bull => {
                "The bull stance assumes L4/L5 autonomy is solved, unlocking the \
                 robotaxi and humanoid TAM and earning big-tech multiples on the \
                 AI segment."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUR: Duration = Duration::from_millis(600);

    #[test]
    fn totals_match_segment_sums() {
        let mut m = ValuationModel::new(DUR);
        assert_eq!(m.total_target(), 700.0);
        assert_eq!(m.displayed_total(), 700.0);

        m.toggle();
        assert_eq!(m.stance(), Stance::Bull);
        assert_eq!(m.total_target(), 1550.0);

        m.tick(DUR);
        assert_eq!(m.displayed_total(), 1550.0);
        assert!(!m.is_animating());
    }

    #[test]
    fn setting_active_stance_again_does_not_animate() {
        let mut m = ValuationModel::new(DUR);
        m.set_stance(Stance::Base);
        assert!(!m.is_animating());
    }

    #[test]
    fn toggle_midflight_keeps_displayed_values_continuous() {
        let mut m = ValuationModel::new(DUR);
        m.toggle();
        m.tick(Duration::from_millis(150));
        let mid = m.displayed_total();
        m.toggle();
        // Reversal starts from the rendered values, not the old targets.
        assert_eq!(m.displayed_total(), mid);
        m.tick(DUR);
        assert_eq!(m.displayed_total(), 700.0);
    }

    #[test]
    fn accent_follows_the_bull_ai_segment() {
        let mut m = ValuationModel::new(DUR);
        assert!(m.rows().iter().all(|r| !r.accent));
        m.toggle();
        let rows = m.rows();
        assert!(rows.iter().filter(|r| r.accent).count() == 1);
        assert!(rows.iter().find(|r| r.accent).unwrap().name.starts_with("AI"));
    }
}
