//! Credits roll (workspace facade crate).
//!
//! This package exposes `credits_roll::{core,engine,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use credits_roll_core as core;
pub use credits_roll_engine as engine;
pub use credits_roll_input as input;
pub use credits_roll_term as term;
pub use credits_roll_types as types;
