//! Roll configuration.
//!
//! Environment variables:
//!
//! - `CREDITS_ROLL_STEP`: units scrolled per tick (default: 10)
//! - `CREDITS_ROLL_FPS`: target frame rate (default: 40)
//! - `CREDITS_ROLL_MARKER`: column marker character (default: `\`)
//! - `CREDITS_ROLL_EMPHASIS`: underline emphasis character (default: `_`)
//!
//! Unparsable values fall back to the default.

use crate::core::RollError;
use crate::types::{Grid, COLUMN_MARKER, DEFAULT_FPS, DEFAULT_SCROLL_STEP, EMPHASIS_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollConfig {
    /// Upward distance per tick, in units.
    pub step: i32,
    pub fps: u32,
    pub marker: char,
    pub emphasis: char,
    pub grid: Grid,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_SCROLL_STEP,
            fps: DEFAULT_FPS,
            marker: COLUMN_MARKER,
            emphasis: EMPHASIS_MARKER,
            grid: Grid::TERMINAL,
        }
    }
}

impl RollConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RollConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let step = var("CREDITS_ROLL_STEP")
            .and_then(|s| s.parse::<i32>().ok())
            .filter(|step| *step > 0)
            .unwrap_or(defaults.step);
        let fps = var("CREDITS_ROLL_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|fps| *fps > 0)
            .unwrap_or(defaults.fps);
        let marker = var("CREDITS_ROLL_MARKER")
            .and_then(|s| single_char(&s))
            .unwrap_or(defaults.marker);
        let emphasis = var("CREDITS_ROLL_EMPHASIS")
            .and_then(|s| single_char(&s))
            .unwrap_or(defaults.emphasis);

        Self {
            step,
            fps,
            marker,
            emphasis,
            grid: defaults.grid,
        }
    }

    pub fn validate(&self) -> Result<(), RollError> {
        if self.step <= 0 {
            return Err(RollError::InvalidStep(self.step));
        }
        if self.fps == 0 {
            return Err(RollError::InvalidFps(self.fps));
        }
        Ok(())
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
