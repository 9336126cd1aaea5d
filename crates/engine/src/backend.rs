//! Seams between the frame loop and the outside world.

use std::time::Duration;

use anyhow::Result;

use crate::core::Bitmap;

/// Pushes a composited frame to the display.
pub trait Present {
    fn present(&mut self, frame: &Bitmap) -> Result<()>;
}

/// Non-blocking check for a termination request.
pub trait QuitSignal {
    /// Whether a quit was requested since the last call.
    fn poll_quit(&mut self) -> bool;
}

/// Fixed-rate pacing. Each call returns after a bounded wait.
pub trait Ticker {
    /// Wait for the next frame boundary; returns the time since the previous tick.
    fn tick(&mut self) -> Duration;
}
