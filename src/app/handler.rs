//! Input handling — maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::ui::tabs;

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Dashboard => handle_dashboard_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

fn handle_dashboard_key(state: &mut AppState, key: KeyEvent) {
    // Number keys jump straight to a scenario tab.
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        let index = (c as usize) - ('1' as usize);
        if index < state.dataset.scenario_count() {
            state.select_scenario(index);
        }
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::NextScenario => state.next_scenario(),
        Action::PrevScenario => state.prev_scenario(),
        Action::NextCategory => state.next_category(),
        Action::PrevCategory => state.prev_category(),
        Action::ToggleStance => state.toggle_stance(),
        Action::ToggleParticles => state.toggle_particles(),
        Action::OpenHelp => state.active_view = ActiveView::Help,
    }
}

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    // Any bound dismissal key closes the overlay; quit still works.
    match state.config.match_key(key) {
        Some(Action::Quit) | Some(Action::OpenHelp) => {
            state.active_view = ActiveView::Dashboard;
        }
        _ => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                state.active_view = ActiveView::Dashboard;
            }
        }
    }
}

/// Process a mouse event.  Clicking a scenario tab selects it; clicking the
/// valuation panel toggles the stance; scrolling cycles scenarios.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Dashboard {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = (mouse.column, mouse.row);

            let hits = tabs::hit_areas(state.tabs_area, &state.dataset);
            for (index, rect) in hits.iter().enumerate() {
                if contains(*rect, x, y) {
                    state.select_scenario(index);
                    return;
                }
            }

            if contains(state.valuation_area, x, y) {
                state.toggle_stance();
            }
        }
        MouseEventKind::ScrollDown => state.next_scenario(),
        MouseEventKind::ScrollUp => state.prev_scenario(),
        _ => {}
    }
}

fn contains(rect: ratatui::layout::Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
