use std::time::{Duration, Instant};

use crate::backend::Ticker;
use crate::core::RollError;

/// Sleeps out the remainder of each frame interval.
///
/// Pacing is best effort: a frame that ran long is not made up for later.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Result<Self, RollError> {
        if fps == 0 {
            return Err(RollError::InvalidFps(fps));
        }
        Ok(Self {
            interval: Duration::from_secs(1) / fps,
            last_tick: None,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Ticker for FrameClock {
    fn tick(&mut self) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        // Never sleeps longer than one interval.
        if let Some(remaining) = self.interval.checked_sub(last.elapsed()) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now.duration_since(last)
    }
}
