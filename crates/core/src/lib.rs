//! Credits roll core - pure, deterministic, and testable
//!
//! This crate turns a block of credits text into fragments, scrolls them up a
//! viewport one tick at a time and composites each frame over a background
//! and up to three image layers. It performs **no I/O**: text measurement
//! and rasterization come in through the [`Font`] trait, and the finished
//! frame is a [`Bitmap`] the caller presents however it likes.
//!
//! # Module Structure
//!
//! - [`markup`]: column marker and underline emphasis parsing
//! - [`layout`]: initial placement of parsed pieces below the viewport
//! - [`fragment`]: lazily rasterized fragments and their FIFO queue
//! - [`animator`]: the scroll accumulator, culling and per-frame submission
//! - [`layer`]: image layers and their offset-driven placement rules
//! - [`compositor`]: background restore and blitting onto the frame canvas
//! - [`bitmap`], [`font`]: cell bitmaps and the terminal font
//!
//! # Pipeline
//!
//! ```text
//! text -> Markup::parse -> Layout::lay_out -> ScrollAnimator::advance -> Compositor
//! ```
//!
//! # Example
//!
//! ```
//! use credits_roll_core::{CellFont, Layout, Markup, RollState, ScrollAnimator};
//! use credits_roll_core::types::{Grid, Rect, Rgb};
//!
//! let font = CellFont::new(Grid::TERMINAL);
//! let viewport = Rect::new(0, 0, 800, 500);
//! let layout = Layout::for_font(&font, viewport).unwrap();
//! let queue = layout
//!     .lay_out(&font, Markup::default().parse("REVERSE PAC-MAN\nA\\Icaro"))
//!     .unwrap();
//! let mut roll = ScrollAnimator::new(queue, viewport, Rgb::new(160, 160, 160), 10).unwrap();
//!
//! while roll.state() == RollState::Running {
//!     roll.advance(&font, |_bitmap, _rect| {}).unwrap();
//! }
//! assert!(roll.queue().is_empty());
//! ```

pub mod animator;
pub mod bitmap;
pub mod compositor;
pub mod error;
pub mod font;
pub mod fragment;
pub mod layer;
pub mod layout;
pub mod markup;
pub mod scene;

pub use credits_roll_types as types;

// Re-export commonly used types for convenience
pub use animator::{FrameReport, RollState, ScrollAnimator};
pub use bitmap::{Bitmap, Cell, CellStyle, CONTINUATION};
pub use compositor::Compositor;
pub use error::RollError;
pub use font::{CellFont, Font};
pub use fragment::{Content, Fragment, FragmentQueue, TextStyle};
pub use layer::{Layer, Layers, Placement};
pub use layout::Layout;
pub use markup::{decode_text, Column, Markup, Piece};
pub use scene::Scene;
