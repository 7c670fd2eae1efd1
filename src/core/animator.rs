//! Transition animation — eased interpolation between scenario targets.
//!
//! Every animated scalar is a [`Tween`]: either settled (`Idle`) or moving
//! (`Transitioning`) with an explicit `from`/`to`/`elapsed` record.  Ticking
//! is a pure function of elapsed time, so the whole module is unit-testable
//! without a terminal or a real clock.
//!
//! Retargeting mid-flight restarts the transition *from the last rendered
//! value*, never from a stale target — switching tabs rapidly slides bars
//! around smoothly instead of snapping.

use std::time::Duration;

use super::dataset::Scenario;

/// Cubic ease-out: fast start, gentle settle.  Monotonic on `[0, 1]` with
/// `ease(0) = 0` and `ease(1) = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

// ───────────────────────────────────────── tween ─────────────

/// Animator state for a single scalar.
#[derive(Debug, Clone, PartialEq)]
enum TweenState {
    /// Settled at a value.
    Idle(f64),
    /// Interpolating from `from` toward `to`; `elapsed` in seconds.
    Transitioning { from: f64, to: f64, elapsed: f64 },
}

/// A single eased scalar transition.
#[derive(Debug, Clone)]
pub struct Tween {
    state: TweenState,
    /// Transition length in seconds.  Fixed at construction.
    duration: f64,
}

impl Tween {
    pub fn new(value: f64, duration: Duration) -> Self {
        Self {
            state: TweenState::Idle(value),
            duration: duration.as_secs_f64(),
        }
    }

    /// The currently rendered (possibly mid-interpolation) value.
    pub fn value(&self) -> f64 {
        match self.state {
            TweenState::Idle(v) => v,
            TweenState::Transitioning { from, to, elapsed } => {
                from + (to - from) * ease_out_cubic(elapsed / self.duration)
            }
        }
    }

    /// The value this tween is heading toward (equal to [`value`](Self::value)
    /// when idle).
    pub fn target(&self) -> f64 {
        match self.state {
            TweenState::Idle(v) => v,
            TweenState::Transitioning { to, .. } => to,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, TweenState::Idle(_))
    }

    /// Begin a transition toward `to`.
    ///
    /// Retargeting toward the current target is a no-op (no re-animation);
    /// otherwise a fresh transition starts from the last rendered value.
    pub fn retarget(&mut self, to: f64) {
        if to == self.target() {
            return;
        }
        let from = self.value();
        if from == to || self.duration <= 0.0 {
            self.state = TweenState::Idle(to);
            return;
        }
        self.state = TweenState::Transitioning {
            from,
            to,
            elapsed: 0.0,
        };
    }

    /// Advance the transition.  Once `elapsed` reaches the duration the
    /// tween snaps to `Idle(to)` — the endpoint is reached exactly, with no
    /// floating-point residue.
    pub fn tick(&mut self, dt: Duration) {
        if let TweenState::Transitioning { to, elapsed, .. } = &mut self.state {
            *elapsed += dt.as_secs_f64();
            if *elapsed >= self.duration {
                self.state = TweenState::Idle(*to);
            }
        }
    }
}

// ───────────────────────────────────────── animator ──────────

/// The live, possibly mid-interpolation, rendered values for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub height: f64,
    pub opacity: f64,
}

/// Height + opacity tweens for one category.
#[derive(Debug, Clone)]
struct CategoryTracks {
    height: Tween,
    opacity: Tween,
}

/// Interpolates every category's visual state toward the active scenario's
/// entries.  Owns all [`VisualState`] — widgets only sample it.
#[derive(Debug, Clone)]
pub struct Animator {
    tracks: Vec<CategoryTracks>,
}

impl Animator {
    /// Start settled at `initial`'s entries (no mount animation).
    pub fn new(initial: &Scenario, duration: Duration) -> Self {
        let tracks = initial
            .entries
            .iter()
            .map(|e| CategoryTracks {
                height: Tween::new(e.height, duration),
                opacity: Tween::new(e.opacity, duration),
            })
            .collect();
        Self { tracks }
    }

    /// Retarget every category whose entry differs from its current target.
    /// Applied atomically: no frame can observe a half-updated from/to pair.
    pub fn set_target(&mut self, scenario: &Scenario) {
        for (track, entry) in self.tracks.iter_mut().zip(&scenario.entries) {
            track.height.retarget(entry.height);
            track.opacity.retarget(entry.opacity);
        }
    }

    /// Advance all in-flight transitions by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for track in &mut self.tracks {
            track.height.tick(dt);
            track.opacity.tick(dt);
        }
    }

    /// Sample the rendered value for one category.
    pub fn visual(&self, category: usize) -> VisualState {
        let track = &self.tracks[category];
        VisualState {
            height: track.height.value(),
            opacity: track.opacity.value(),
        }
    }

    pub fn category_count(&self) -> usize {
        self.tracks.len()
    }

    /// True while any category is still interpolating.
    pub fn is_animating(&self) -> bool {
        self.tracks
            .iter()
            .any(|t| !t.height.is_idle() || !t.opacity.is_idle())
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    const DUR: Duration = Duration::from_millis(800);

    fn builtin_animator() -> (Dataset, Animator) {
        let d = Dataset::builtin();
        let a = Animator::new(d.scenario(0), DUR);
        (d, a)
    }

    #[test]
    fn easing_is_monotonic_with_fixed_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_out_cubic(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn settles_exactly_on_target_after_duration() {
        // Worked example: current.auto.height = 45, future.auto.height = 30.
        let (d, mut a) = builtin_animator();
        a.set_target(d.scenario(1));
        a.tick(DUR);
        assert_eq!(a.visual(0).height, 30.0);
        assert!(!a.is_animating());
        for (c, entry) in d.scenario(1).entries.iter().enumerate() {
            assert_eq!(a.visual(c).height, entry.height);
            assert_eq!(a.visual(c).opacity, entry.opacity);
        }
    }

    #[test]
    fn retargeting_to_current_target_does_not_reanimate() {
        let (d, mut a) = builtin_animator();
        a.set_target(d.scenario(0));
        assert!(!a.is_animating());

        // Mid-flight: retargeting the same destination keeps the transition.
        a.set_target(d.scenario(1));
        a.tick(Duration::from_millis(100));
        let before = a.visual(0);
        a.set_target(d.scenario(1));
        assert_eq!(a.visual(0), before);
    }

    #[test]
    fn midflight_reversal_stays_within_endpoint_hull() {
        let (d, mut a) = builtin_animator();
        let hi = d.scenario(0).entries[0].height.max(d.scenario(1).entries[0].height);
        let lo = d.scenario(0).entries[0].height.min(d.scenario(1).entries[0].height);

        a.set_target(d.scenario(1));
        for _ in 0..4 {
            a.tick(Duration::from_millis(50));
            let h = a.visual(0).height;
            assert!(h >= lo && h <= hi, "height {h} escaped [{lo}, {hi}]");
        }
        // Reverse before the transition completes.
        a.set_target(d.scenario(0));
        for _ in 0..30 {
            a.tick(Duration::from_millis(50));
            let h = a.visual(0).height;
            assert!(h >= lo && h <= hi, "height {h} escaped [{lo}, {hi}]");
        }
        assert_eq!(a.visual(0).height, d.scenario(0).entries[0].height);
    }

    #[test]
    fn reversal_starts_from_last_rendered_value() {
        let (d, mut a) = builtin_animator();
        a.set_target(d.scenario(1));
        a.tick(Duration::from_millis(200));
        let mid = a.visual(0).height;

        // Immediately after reversing, the rendered value must still be the
        // mid-interpolation value — no visual snap.
        a.set_target(d.scenario(0));
        assert_eq!(a.visual(0).height, mid);
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let mut t = Tween::new(10.0, Duration::ZERO);
        t.retarget(42.0);
        assert!(t.is_idle());
        assert_eq!(t.value(), 42.0);
    }
}
