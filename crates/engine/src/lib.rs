//! Roll engine: drives the core animator at a fixed rate.
//!
//! This crate owns the frame loop and everything around it that is not
//! terminal specific: pacing, configuration and scene files. The display and
//! the quit source are reached through the traits in [`backend`].
//!
//! # Frame Order
//!
//! 1. Poll the quit signal (abort if set)
//! 2. Restore the background, advance the animator, draw visible fragments
//! 3. Draw image layers at their offset-driven positions
//! 4. Wait for the next tick, then present
//!
//! After the loop exits the current frame is presented once more.

pub mod backend;
pub mod clock;
pub mod config;
pub mod frame_loop;
pub mod scene_file;

pub use credits_roll_core as core;
pub use credits_roll_types as types;

pub use backend::{Present, QuitSignal, Ticker};
pub use clock::FrameClock;
pub use config::RollConfig;
pub use frame_loop::{FrameLoop, RollOutcome};
pub use scene_file::{ColorValue, ImageSpec, PlacementSpec, SceneFile};
