//! Scenario selection — the one piece of state that drives the charts.
//!
//! The selector holds the active scenario index explicitly rather than
//! letting each widget carry its own notion of "current tab".  All scenario
//! changes flow through [`ScenarioSelector::select`] and friends, which are
//! the only triggers for retargeting the animator.

use super::dataset::Dataset;

/// The active scenario, as an index into [`Dataset::scenarios`].
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSelector {
    active: usize,
}

impl ScenarioSelector {
    /// Select the initial scenario by key, defaulting to the first tab when
    /// `initial` is `None` or names an unknown key.
    pub fn new(dataset: &Dataset, initial: Option<&str>) -> Self {
        let active = match initial {
            Some(key) => dataset.index_of(key).unwrap_or_else(|| {
                tracing::warn!(key, "unknown initial scenario, using default");
                0
            }),
            None => 0,
        };
        Self { active }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_key<'a>(&self, dataset: &'a Dataset) -> &'a str {
        dataset.scenario(self.active).key.as_str()
    }

    /// Select a scenario by key.  Returns `true` if the active scenario
    /// changed.  Unknown keys are rejected (prior state retained); selecting
    /// the already-active key is a no-op.
    pub fn select(&mut self, dataset: &Dataset, key: &str) -> bool {
        match dataset.index_of(key) {
            Some(index) => self.select_index(dataset, index),
            None => {
                tracing::warn!(key, "rejected selection of unknown scenario key");
                false
            }
        }
    }

    /// Select a scenario by index.  Out-of-range indices are rejected.
    pub fn select_index(&mut self, dataset: &Dataset, index: usize) -> bool {
        if index >= dataset.scenario_count() || index == self.active {
            return false;
        }
        self.active = index;
        tracing::debug!(key = %dataset.scenario(index).key, "scenario selected");
        true
    }

    /// Cycle to the next tab (wraps).  Always a change when there is more
    /// than one scenario.
    pub fn next(&mut self, dataset: &Dataset) -> bool {
        let n = dataset.scenario_count();
        self.select_index(dataset, (self.active + 1) % n)
    }

    /// Cycle to the previous tab (wraps).
    pub fn prev(&mut self, dataset: &Dataset) -> bool {
        let n = dataset.scenario_count();
        self.select_index(dataset, (self.active + n - 1) % n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_active_key_is_idempotent() {
        let d = Dataset::builtin();
        let mut sel = ScenarioSelector::new(&d, None);
        assert_eq!(sel.active(), 0);
        assert!(!sel.select(&d, "current"));
        assert_eq!(sel.active(), 0);
    }

    #[test]
    fn unknown_key_is_rejected_without_corrupting_state() {
        let d = Dataset::builtin();
        let mut sel = ScenarioSelector::new(&d, Some("future"));
        assert_eq!(sel.active(), 1);
        assert!(!sel.select(&d, "bogus"));
        assert_eq!(sel.active(), 1);
    }

    #[test]
    fn next_and_prev_wrap() {
        let d = Dataset::builtin();
        let mut sel = ScenarioSelector::new(&d, None);
        assert!(sel.next(&d));
        assert_eq!(sel.active(), 1);
        assert!(sel.next(&d));
        assert_eq!(sel.active(), 0);
        assert!(sel.prev(&d));
        assert_eq!(sel.active(), 1);
    }
}
