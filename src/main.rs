//! An animated investor-report dashboard for the terminal.
//!
//! Renders a tabbed capital-allocation chart with eased transitions, a
//! base/bull valuation panel, YoY growth gauges, and a decorative particle
//! backdrop.  Run with no arguments for the built-in report, or pass a
//! dataset JSON file.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Alignment,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::config::AppConfig;
use crate::core::dataset::Dataset;
use crate::ui::{
    bars::ScenarioBars, gauges::GrowthGauges, help::HelpPopup, kpi::KpiCards, layout::AppLayout,
    scene::SceneView, tabs::ScenarioTabs, theme::Theme, valuation::ValuationPanel,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Animated investor-report dashboard")]
struct Cli {
    /// Dataset JSON file (defaults to the built-in report).
    data: Option<PathBuf>,

    /// Initial scenario key (defaults to the dataset's first tab).
    #[arg(long)]
    scenario: Option<String>,

    /// Animation clock rate, frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Scenario transition duration, milliseconds.
    #[arg(long = "duration-ms")]
    duration_ms: Option<u64>,

    /// Backdrop particle count.
    #[arg(long)]
    particles: Option<usize>,

    /// Start with the particle backdrop disabled.
    #[arg(long)]
    no_particles: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the alternate screen
        .init();

    let cli = Cli::parse();

    // ── dataset + config ──────────────────────────────────────
    let dataset = match &cli.data {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => Dataset::builtin(),
    };

    let mut config = AppConfig::load();
    if let Some(fps) = cli.fps {
        config.fps = fps.clamp(10, 60);
    }
    if let Some(ms) = cli.duration_ms {
        config.transition_ms = ms.clamp(100, 5000);
    }
    if let Some(n) = cli.particles {
        config.particle_count = n.clamp(100, 10_000);
    }
    if cli.no_particles {
        config.particles_enabled = false;
    }

    let mut state = AppState::new(dataset, config, cli.scenario.as_deref());

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // ── event loop ────────────────────────────────────────────
    // Input arrives over a channel from a background reader; frames come
    // from a tokio interval so animation pacing is independent of input.
    let mut events = spawn_event_reader(Duration::from_millis(50));
    let mut frames = tokio::time::interval(state.config.frame_interval());
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                // Selection changes land here, strictly before the next
                // frame arm samples the animator.
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(_, _) => {}
                }
            }

            _ = frames.tick() => {
                let now = Instant::now();
                let dt = now - state.last_frame;
                state.last_frame = now;
                state.tick(dt);
            }
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

// ───────────────────────────────────────── drawing ──────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    let layout = AppLayout::from_area(frame.area());
    // Remember clickable regions for the mouse handler.
    state.tabs_area = layout.tabs_area;
    state.valuation_area = layout.valuation_area;

    // Backdrop first, title on top of it.
    let particles = state.show_particles.then_some(&state.particles);
    frame.render_widget(
        SceneView::new(particles, &state.constellation, state.scene_elapsed()),
        layout.scene_area,
    );
    let title = Paragraph::new(vec![
        Line::styled("T E S L A   I N S I G H T S", Theme::title_style()),
        Line::styled("Q3 2025 · Interactive Report", Theme::subtitle_style()),
    ])
    .alignment(Alignment::Center);
    let title_area = ratatui::layout::Rect {
        x: layout.scene_area.x,
        y: layout.scene_area.y + (layout.scene_area.height / 2).saturating_sub(1),
        width: layout.scene_area.width,
        height: 2.min(layout.scene_area.height),
    };
    frame.render_widget(title, title_area);

    frame.render_widget(KpiCards, layout.kpi_area);

    frame.render_widget(
        ScenarioTabs::new(&state.dataset, state.selector.active()),
        layout.tabs_area,
    );

    let chart_block = Block::default()
        .title(format!(" {} ", state.dataset.title))
        .title_style(Theme::panel_title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(
        ScenarioBars::new(&state.dataset, &state.animator, state.selector.active())
            .selected(state.selected_category)
            .block(chart_block),
        layout.chart_area,
    );

    let valuation_block = Block::default()
        .title(" Sum-of-the-Parts Valuation ")
        .title_style(Theme::panel_title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(
        ValuationPanel::new(&state.valuation).block(valuation_block),
        layout.valuation_area,
    );

    let growth_block = Block::default()
        .title(" Segment Growth (YoY) ")
        .title_style(Theme::panel_title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(
        GrowthGauges::new(&state.growth).block(growth_block),
        layout.growth_area,
    );

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    let status = Paragraph::new(status_text).style(Theme::status_bar_style());
    frame.render_widget(status, layout.status_area);

    if state.active_view == ActiveView::Help {
        frame.render_widget(HelpPopup { config: &state.config }, frame.area());
    }
}
