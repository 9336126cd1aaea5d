use std::fmt;

use crate::types::MAX_LAYERS;

/// Errors raised while building or advancing a roll.
///
/// None of these are retried; they all propagate to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    /// The per-tick step must move the roll upward (a positive magnitude).
    InvalidStep(i32),
    InvalidFps(u32),
    /// Viewport has no area.
    EmptyViewport,
    TooManyLayers,
    /// The font could not measure this text.
    Measure { text: String, reason: &'static str },
    /// The font could not rasterize this text.
    Rasterize { text: String, reason: &'static str },
}

impl RollError {
    pub fn code(&self) -> &'static str {
        match self {
            RollError::InvalidStep(_) | RollError::InvalidFps(_) | RollError::EmptyViewport => {
                "invalid_config"
            }
            RollError::TooManyLayers => "too_many_layers",
            RollError::Measure { .. } => "measure_failed",
            RollError::Rasterize { .. } => "rasterize_failed",
        }
    }
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollError::InvalidStep(step) => {
                write!(f, "{}: scroll step must be positive, got {}", self.code(), step)
            }
            RollError::InvalidFps(fps) => {
                write!(f, "{}: frame rate must be positive, got {}", self.code(), fps)
            }
            RollError::EmptyViewport => write!(f, "{}: viewport has no area", self.code()),
            RollError::TooManyLayers => {
                write!(f, "{}: at most {} image layers", self.code(), MAX_LAYERS)
            }
            RollError::Measure { text, reason } | RollError::Rasterize { text, reason } => {
                write!(f, "{}: {:?}: {}", self.code(), text, reason)
            }
        }
    }
}

impl std::error::Error for RollError {}
