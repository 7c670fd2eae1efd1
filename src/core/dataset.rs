//! The scenario dataset — the immutable numbers behind every chart.
//!
//! A [`Dataset`] maps scenario keys (e.g. `"current"` / `"future"`) to one
//! [`MetricEntry`] per category.  It is built once at startup (either the
//! built-in report or a JSON file) and never mutated afterwards; everything
//! the animator and widgets display is derived from it.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

// ───────────────────────────────────────── errors ────────────

/// Problems loading or validating a dataset file.
///
/// Out-of-range heights/opacities are *not* errors — they are clamped so the
/// report stays renderable.  Only structural problems are fatal to loading.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON")]
    Parse(#[from] serde_json::Error),

    #[error("dataset has no scenarios")]
    NoScenarios,

    #[error("dataset has no categories")]
    NoCategories,

    #[error("scenario `{key}` has {found} entries but there are {expected} categories")]
    CategoryMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate scenario key `{0}`")]
    DuplicateKey(String),
}

// ───────────────────────────────────────── scenario key ──────

/// The discrete tag selecting which dataset view is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ScenarioKey(String);

impl ScenarioKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ───────────────────────────────────────── entries ───────────

/// One category's visual parameters for a given scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricEntry {
    /// Bar height as a percentage of the full chart, `0.0..=100.0`.
    pub height: f64,
    /// Bar opacity, `0.0..=1.0`.  Rendered as a brightness level.
    pub opacity: f64,
    /// Tooltip/caption text shown for the selected category.
    pub description: String,
    /// Highlight this entry with the accent colour (and glow, where the
    /// rendering surface supports it).
    #[serde(default)]
    pub accent: bool,
}

impl MetricEntry {
    pub fn new(height: f64, opacity: f64, description: impl Into<String>) -> Self {
        Self {
            height,
            opacity,
            description: description.into(),
            accent: false,
        }
        .clamped()
    }

    pub fn accented(mut self) -> Self {
        self.accent = true;
        self
    }

    /// Force both numeric fields into their valid ranges.
    pub fn clamped(mut self) -> Self {
        self.height = if self.height.is_finite() {
            self.height.clamp(0.0, 100.0)
        } else {
            0.0
        };
        self.opacity = if self.opacity.is_finite() {
            self.opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }
}

/// One selectable view of the report: a key, a human label for the tab bar,
/// and one entry per category (parallel to [`Dataset::categories`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub key: ScenarioKey,
    pub label: String,
    pub entries: Vec<MetricEntry>,
}

// ───────────────────────────────────────── dataset ───────────

/// The full report dataset.  Immutable after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Chart title, e.g. `"Capital Allocation Shift"`.
    pub title: String,
    /// One display label per category, in bar order.
    pub categories: Vec<String>,
    /// The selectable scenarios, in tab order.  The first one is the
    /// default view.
    pub scenarios: Vec<Scenario>,
}

impl Dataset {
    /// Load a dataset from a JSON file, validate its shape, and clamp all
    /// numeric fields into range.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        dataset.validated()
    }

    /// Shape validation + clamping.  Called on every construction path so
    /// the rest of the crate can rely on the invariants.
    pub fn validated(mut self) -> Result<Self, DatasetError> {
        if self.scenarios.is_empty() {
            return Err(DatasetError::NoScenarios);
        }
        if self.categories.is_empty() {
            return Err(DatasetError::NoCategories);
        }
        for i in 0..self.scenarios.len() {
            for j in (i + 1)..self.scenarios.len() {
                if self.scenarios[i].key == self.scenarios[j].key {
                    return Err(DatasetError::DuplicateKey(
                        self.scenarios[i].key.as_str().to_string(),
                    ));
                }
            }
        }
        for scenario in &mut self.scenarios {
            if scenario.entries.len() != self.categories.len() {
                return Err(DatasetError::CategoryMismatch {
                    key: scenario.key.as_str().to_string(),
                    expected: self.categories.len(),
                    found: scenario.entries.len(),
                });
            }
            for entry in &mut scenario.entries {
                *entry = entry.clone().clamped();
            }
        }
        Ok(self)
    }

    /// The default scenario key (the first tab).
    pub fn default_key(&self) -> &ScenarioKey {
        &self.scenarios[0].key
    }

    /// Index of a scenario by key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.scenarios.iter().position(|s| s.key.as_str() == key)
    }

    pub fn scenario(&self, index: usize) -> &Scenario {
        &self.scenarios[index]
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Resolve the visual target for `key`.  Unknown keys fall back to the
    /// default scenario — the renderer must never come up empty-handed.
    pub fn visual_target(&self, key: &str) -> &Scenario {
        match self.index_of(key) {
            Some(i) => &self.scenarios[i],
            None => {
                tracing::warn!(key, "unknown scenario key, falling back to default");
                &self.scenarios[0]
            }
        }
    }

    /// The built-in report: R&D capital allocation, current vs. projected.
    pub fn builtin() -> Self {
        let dataset = Dataset {
            title: "Capital Allocation Shift".into(),
            categories: vec!["Auto".into(), "Factory".into(), "AI".into()],
            scenarios: vec![
                Scenario {
                    key: ScenarioKey::new("current"),
                    label: "2024-2025".into(),
                    entries: vec![
                        MetricEntry::new(45.0, 0.8, "Legacy model refresh and cost-down"),
                        MetricEntry::new(60.0, 0.8, "Global capacity build-out (Mexico / Berlin)"),
                        MetricEntry::new(25.0, 1.0, "Early Dojo cluster assembly"),
                    ],
                },
                Scenario {
                    key: ScenarioKey::new("future"),
                    label: "2026+ (vision)".into(),
                    entries: vec![
                        MetricEntry::new(30.0, 0.4, "Maintenance-level spend"),
                        MetricEntry::new(40.0, 0.4, "Targeted line upgrades"),
                        MetricEntry::new(95.0, 1.0, "Hyperscale GPU clusters and compute centres")
                            .accented(),
                    ],
                },
            ],
        };
        // The built-in numbers are in range by construction.
        dataset.validated().expect("built-in dataset is valid")
    }
}

// ───────────────────────────────────────── tests ─────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_is_well_formed() {
        let d = Dataset::builtin();
        assert_eq!(d.default_key().as_str(), "current");
        assert_eq!(d.scenario_count(), 2);
        for s in &d.scenarios {
            assert_eq!(s.entries.len(), d.categories.len());
        }
    }

    #[test]
    fn all_entries_stay_in_range_even_with_bad_source_data() {
        let raw = r#"{
            "title": "t",
            "categories": ["a", "b"],
            "scenarios": [
                {"key": "k", "label": "K", "entries": [
                    {"height": 180.0, "opacity": -0.5, "description": "over"},
                    {"height": -20.0, "opacity": 7.0, "description": "under"}
                ]}
            ]
        }"#;
        let d: Dataset = serde_json::from_str(raw).unwrap();
        let d = d.validated().unwrap();
        for s in &d.scenarios {
            for e in &s.entries {
                assert!((0.0..=100.0).contains(&e.height));
                assert!((0.0..=1.0).contains(&e.opacity));
            }
        }
        assert_eq!(d.scenarios[0].entries[0].height, 100.0);
        assert_eq!(d.scenarios[0].entries[0].opacity, 0.0);
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let d = Dataset::builtin();
        let target = d.visual_target("no-such-scenario");
        assert_eq!(target.key, *d.default_key());
    }

    #[test]
    fn category_mismatch_is_rejected() {
        let raw = r#"{
            "title": "t",
            "categories": ["a", "b"],
            "scenarios": [
                {"key": "k", "label": "K", "entries": [
                    {"height": 10.0, "opacity": 1.0, "description": "only one"}
                ]}
            ]
        }"#;
        let d: Dataset = serde_json::from_str(raw).unwrap();
        assert!(matches!(
            d.validated(),
            Err(DatasetError::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut d = Dataset::builtin();
        d.scenarios[1].key = ScenarioKey::new("current");
        assert!(matches!(d.validated(), Err(DatasetError::DuplicateKey(_))));
    }
}
