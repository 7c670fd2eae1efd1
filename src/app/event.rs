//! Terminal input abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task
//! that forwards them over a channel so the main loop stays non-blocking.
//! The animation clock is *not* here — frames come from a tokio interval in
//! the main loop, so input latency and frame pacing stay independent.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level input events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Spawns a background task that polls the terminal for input and sends it
/// through the returned channel.  The task exits when the receiver is
/// dropped (i.e. when the main loop unwinds).
pub fn spawn_event_reader(poll_timeout: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            if tx.is_closed() {
                break;
            }
            let has_event = event::poll(poll_timeout).unwrap_or(false);
            if !has_event {
                continue;
            }
            if let Ok(ev) = event::read() {
                let app_event = match ev {
                    CtEvent::Key(k) => AppEvent::Key(k),
                    CtEvent::Mouse(m) => AppEvent::Mouse(m),
                    CtEvent::Resize(w, h) => AppEvent::Resize(w, h),
                    _ => continue,
                };
                if tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
        }
    });

    rx
}
