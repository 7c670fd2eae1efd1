//! User configuration — keybindings and display settings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/chart-deck/config.toml` (default
//! `~/.config/chart-deck/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NextScenario,
    PrevScenario,
    NextCategory,
    PrevCategory,
    ToggleStance,
    ToggleParticles,
    OpenHelp,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used for the help overlay).
    pub const ALL: &[Action] = &[
        Action::NextScenario,
        Action::PrevScenario,
        Action::NextCategory,
        Action::PrevCategory,
        Action::ToggleStance,
        Action::ToggleParticles,
        Action::OpenHelp,
        Action::Quit,
    ];

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Action::NextScenario => "Next Scenario Tab",
            Action::PrevScenario => "Prev Scenario Tab",
            Action::NextCategory => "Next Category",
            Action::PrevCategory => "Prev Category",
            Action::ToggleStance => "Toggle Base/Bull",
            Action::ToggleParticles => "Toggle Particles",
            Action::OpenHelp => "Help",
            Action::Quit => "Quit",
        }
    }

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::NextScenario => "next_scenario",
            Action::PrevScenario => "prev_scenario",
            Action::NextCategory => "next_category",
            Action::PrevCategory => "prev_category",
            Action::ToggleStance => "toggle_stance",
            Action::ToggleParticles => "toggle_particles",
            Action::OpenHelp => "help",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        match s {
            "next_scenario" => Some(Action::NextScenario),
            "prev_scenario" => Some(Action::PrevScenario),
            "next_category" => Some(Action::NextCategory),
            "prev_category" => Some(Action::PrevCategory),
            "toggle_stance" => Some(Action::ToggleStance),
            "toggle_particles" => Some(Action::ToggleParticles),
            "help" => Some(Action::OpenHelp),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT are
    /// compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Tab"`, `"Ctrl+p"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&key_name(self.code, true));
        s
    }

    /// Serialise to config-file format.
    fn to_config_string(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&key_name(self.code, false));
        s
    }

    /// Parse a key string like `"Ctrl+p"`, `"Tab"`, `"q"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "space" => KeyCode::Char(' '),
            s if s.len() == 1 => KeyCode::Char(s.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

/// Display / serialisation name for the keys this app binds.
fn key_name(code: KeyCode, pretty: bool) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => if pretty { "↑".into() } else { "Up".into() },
        KeyCode::Down => if pretty { "↓".into() } else { "Down".into() },
        KeyCode::Left => if pretty { "←".into() } else { "Left".into() },
        KeyCode::Right => if pretty { "→".into() } else { "Right".into() },
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — keybindings plus display settings.
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Scenario/stance transition length, milliseconds.
    pub transition_ms: u64,
    /// Frame rate for the animation clock.
    pub fps: u32,
    /// Particle count for the backdrop scene.
    pub particle_count: usize,
    /// Whether the particle backdrop starts enabled.
    pub particles_enabled: bool,
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;
        let mut m = HashMap::new();

        m.insert(NextScenario, vec![KeyBind::new(Tab, n), KeyBind::new(Char('l'), n)]);
        m.insert(PrevScenario, vec![KeyBind::new(BackTab, shift), KeyBind::new(Char('h'), n)]);
        m.insert(NextCategory, vec![KeyBind::new(Right, n)]);
        m.insert(PrevCategory, vec![KeyBind::new(Left, n)]);
        m.insert(ToggleStance, vec![KeyBind::new(Char('s'), n)]);
        m.insert(ToggleParticles, vec![KeyBind::new(Char('p'), n)]);
        m.insert(OpenHelp, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action matching a key event.  When multiple bindings match,
    /// the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Format the binding list for a given action (e.g. `"Tab/l"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: scenario | {}: category | {}: base/bull | {}: help | {}: quit",
            self.short_binding(Action::NextScenario),
            self.short_binding(Action::NextCategory),
            self.short_binding(Action::ToggleStance),
            self.short_binding(Action::OpenHelp),
            self.short_binding(Action::Quit),
        )
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            if let Ok(contents) = std::fs::read_to_string(&path) {
                return Self::parse_config(&contents);
            }
        }
        Self::defaults()
    }

    fn defaults() -> Self {
        Self {
            bindings: Self::default_bindings(),
            transition_ms: 800,
            fps: 30,
            particle_count: crate::core::particles::DEFAULT_COUNT,
            particles_enabled: true,
        }
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::defaults();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            // Display settings.
            match key {
                "transition_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        // Keep transitions visible but snappy.
                        config.transition_ms = v.clamp(100, 5000);
                    }
                    continue;
                }
                "fps" => {
                    if let Ok(v) = value.parse::<u32>() {
                        config.fps = v.clamp(10, 60);
                    }
                    continue;
                }
                "particle_count" => {
                    if let Ok(v) = value.parse::<usize>() {
                        config.particle_count = v.clamp(100, 10_000);
                    }
                    continue;
                }
                "particles_enabled" => {
                    config.particles_enabled = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                if let Some(bind) = KeyBind::parse(part) {
                    parsed.push(bind);
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# chart-deck configuration".to_string(),
            String::new(),
            "# Display settings".to_string(),
            format!("transition_ms = {}", self.transition_ms),
            format!("fps = {}", self.fps),
            format!("particle_count = {}", self.particle_count),
            format!("particles_enabled = {}", self.particles_enabled),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab, Space".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/chart-deck/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("chart-deck").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_serialise_and_parse() {
        let mut config = AppConfig::defaults();
        config.transition_ms = 1200;
        config.fps = 24;
        config.particles_enabled = false;

        let parsed = AppConfig::parse_config(&config.serialise());
        assert_eq!(parsed.transition_ms, 1200);
        assert_eq!(parsed.fps, 24);
        assert!(!parsed.particles_enabled);
    }

    #[test]
    fn out_of_range_settings_are_clamped() {
        let parsed = AppConfig::parse_config("transition_ms = 99999\nfps = 2\n");
        assert_eq!(parsed.transition_ms, 5000);
        assert_eq!(parsed.fps, 10);
    }

    #[test]
    fn custom_binding_overrides_default() {
        let parsed = AppConfig::parse_config("toggle_stance = b\n");
        let event = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(parsed.match_key(event), Some(Action::ToggleStance));
    }
}
