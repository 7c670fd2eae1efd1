//! Central application state.
//!
//! All mutable state lives here so the rest of the app can be pure functions
//! over `&AppState` (rendering) or `&mut AppState` (event handling).  The
//! dataset itself is immutable; only the selector, animators, and view flags
//! change at runtime.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    animator::Animator,
    constellation::Constellation,
    dataset::Dataset,
    growth::GrowthSeries,
    particles::ParticleField,
    selector::ScenarioSelector,
    valuation::ValuationModel,
};

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    Help,
}

/// Top-level application state.
pub struct AppState {
    /// The report data.  Constant for the process lifetime.
    pub dataset: Dataset,
    /// The active scenario tab.
    pub selector: ScenarioSelector,
    /// Per-category height/opacity interpolation toward the active scenario.
    pub animator: Animator,
    /// The SOTP valuation panel (base/bull).
    pub valuation: ValuationModel,
    /// YoY growth bars with their entry animation.
    pub growth: GrowthSeries,
    /// Backdrop point cloud (generated once at startup).
    pub particles: ParticleField,
    /// Backdrop node mesh.
    pub constellation: Constellation,
    /// Category highlighted for the caption line.
    pub selected_category: usize,
    /// Whether the backdrop scene is drawn.
    pub show_particles: bool,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// User-configurable keybindings + display settings.
    pub config: AppConfig,
    /// Scene clock epoch — drives the deterministic backdrop motion.
    pub started: Instant,
    /// Last frame timestamp, for computing per-tick `dt`.
    pub last_frame: Instant,
    /// Tab bar area from the last draw, for mouse hit-testing.
    pub tabs_area: Rect,
    /// Valuation panel area from the last draw (click toggles stance).
    pub valuation_area: Rect,
}

impl AppState {
    pub fn new(dataset: Dataset, config: AppConfig, initial_scenario: Option<&str>) -> Self {
        let selector = ScenarioSelector::new(&dataset, initial_scenario);
        let duration = config.transition();
        let animator = Animator::new(dataset.scenario(selector.active()), duration);
        let valuation = ValuationModel::new(duration);
        let growth = GrowthSeries::new(duration);

        // One-time unseeded draw; tests inject a seeded generator instead.
        let mut rng = rand::rngs::StdRng::from_entropy();
        let particles = ParticleField::generate(&mut rng, config.particle_count);

        let show_particles = config.particles_enabled;
        let now = Instant::now();
        Self {
            dataset,
            selector,
            animator,
            valuation,
            growth,
            particles,
            constellation: Constellation::new(),
            selected_category: 0,
            show_particles,
            active_view: ActiveView::default(),
            should_quit: false,
            status_message: None,
            config,
            started: now,
            last_frame: now,
            tabs_area: Rect::default(),
            valuation_area: Rect::default(),
        }
    }

    /// Seconds since startup — the decorative scene clock.
    pub fn scene_elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Switch to the scenario at `index`.  Retargets the animator only when
    /// the selection actually changed, so re-selecting the active tab never
    /// re-animates.
    pub fn select_scenario(&mut self, index: usize) {
        if self.selector.select_index(&self.dataset, index) {
            self.apply_selection();
        }
    }

    pub fn next_scenario(&mut self) {
        if self.selector.next(&self.dataset) {
            self.apply_selection();
        }
    }

    pub fn prev_scenario(&mut self) {
        if self.selector.prev(&self.dataset) {
            self.apply_selection();
        }
    }

    fn apply_selection(&mut self) {
        // Resolve by key through the fallback path so an animator target
        // can never be silently undefined.
        let key = self.selector.active_key(&self.dataset).to_string();
        let scenario = self.dataset.visual_target(&key);
        self.animator.set_target(scenario);
        self.status_message = Some(format!("Scenario: {}", scenario.label));
    }

    pub fn next_category(&mut self) {
        let n = self.dataset.categories.len();
        self.selected_category = (self.selected_category + 1) % n;
    }

    pub fn prev_category(&mut self) {
        let n = self.dataset.categories.len();
        self.selected_category = (self.selected_category + n - 1) % n;
    }

    pub fn toggle_stance(&mut self) {
        self.valuation.toggle();
        self.status_message = Some(format!("Valuation: {} case", self.valuation.stance().label()));
    }

    pub fn toggle_particles(&mut self) {
        self.show_particles = !self.show_particles;
        self.status_message = Some(if self.show_particles {
            "Backdrop on".into()
        } else {
            "Backdrop off".into()
        });
    }

    /// Advance every animation by `dt`.  Called once per frame tick.
    pub fn tick(&mut self, dt: Duration) {
        self.animator.tick(dt);
        self.valuation.tick(dt);
        self.growth.tick(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        let mut config = AppConfig::load();
        config.transition_ms = 400;
        config.particle_count = 200;
        AppState::new(Dataset::builtin(), config, None)
    }

    #[test]
    fn selecting_active_tab_does_not_reanimate() {
        let mut state = test_state();
        state.select_scenario(0);
        assert!(!state.animator.is_animating());
    }

    #[test]
    fn scenario_switch_settles_on_dataset_entries() {
        let mut state = test_state();
        state.next_scenario();
        assert!(state.animator.is_animating());
        state.tick(Duration::from_millis(400));
        assert!(!state.animator.is_animating());
        let target = state.dataset.scenario(1).entries[0].height;
        assert_eq!(state.animator.visual(0).height, target);
    }

    #[test]
    fn category_selection_wraps() {
        let mut state = test_state();
        let n = state.dataset.categories.len();
        for _ in 0..n {
            state.next_category();
        }
        assert_eq!(state.selected_category, 0);
        state.prev_category();
        assert_eq!(state.selected_category, n - 1);
    }
}
