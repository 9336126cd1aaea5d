//! Terminal input module (quit detection only).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events to a quit request and exposes it through the engine's
//! [`QuitSignal`](crate::engine::QuitSignal) trait without ever blocking.

pub mod map;
pub mod quit;

pub use credits_roll_engine as engine;

pub use map::{is_quit_event, should_quit};
pub use quit::TerminalQuitSignal;
