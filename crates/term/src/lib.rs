//! Terminal backend for the credits roll.
//!
//! Renders composited cell bitmaps to a real terminal through `crossterm`
//! and loads text-art images for scene layers.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only touch the terminal here, behind the engine's `Present` trait
//! - Rewrite only the cells that changed between frames

pub mod image;
pub mod renderer;

pub use credits_roll_core as core;
pub use credits_roll_engine as engine;
pub use credits_roll_types as types;

pub use image::{load_image, parse_art, solid_background};
pub use renderer::{encode_diff_into, encode_full_into, terminal_viewport, TerminalRenderer};
