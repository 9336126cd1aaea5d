//! Non-blocking quit detection over the crossterm event queue.

use std::time::Duration;

use crossterm::event;

use crate::engine::QuitSignal;
use crate::map::is_quit_event;

/// Drains pending terminal events on every poll; everything except a quit
/// request is discarded.
#[derive(Debug, Default)]
pub struct TerminalQuitSignal;

impl TerminalQuitSignal {
    pub fn new() -> Self {
        Self
    }
}

impl QuitSignal for TerminalQuitSignal {
    fn poll_quit(&mut self) -> bool {
        let mut quit = false;
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => match event::read() {
                    Ok(ev) => quit |= is_quit_event(&ev),
                    Err(e) => {
                        tracing::warn!(error = %e, "reading terminal event failed");
                        break;
                    }
                },
                Ok(false) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "polling terminal events failed");
                    break;
                }
            }
        }
        quit
    }
}
