//! Image layers whose placement follows the scroll offset.

use arrayvec::ArrayVec;

use crate::bitmap::Bitmap;
use crate::types::{Grid, Point, Rect, Size, MAX_LAYERS};

/// Vertical placement rule of a layer. Layers are always horizontally centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Top at `offset + base`: scrolls with the text.
    Scroll { base: i32 },
    /// Like `Scroll`, but stops once the layer is vertically centered.
    Floor { base: i32 },
}

impl Placement {
    /// Top edge of a layer of `size` at scroll `offset`.
    pub fn top(&self, offset: i32, viewport: Rect, size: Size) -> i32 {
        match *self {
            Placement::Scroll { base } => offset + base,
            Placement::Floor { base } => (offset + base).max(Self::floor(viewport, size)),
        }
    }

    /// Highest top a `Floor` layer of `size` may reach.
    pub fn floor(viewport: Rect, size: Size) -> i32 {
        viewport.top() + viewport.height / 2 - size.height / 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub bitmap: Bitmap,
    pub placement: Placement,
}

/// At most [`MAX_LAYERS`] layers, drawn in order.
pub type Layers = ArrayVec<Layer, MAX_LAYERS>;

impl Layer {
    pub fn new(bitmap: Bitmap, placement: Placement) -> Self {
        Self { bitmap, placement }
    }

    pub fn scrolling(bitmap: Bitmap, base: i32) -> Self {
        Self::new(bitmap, Placement::Scroll { base })
    }

    pub fn floored(bitmap: Bitmap, base: i32) -> Self {
        Self::new(bitmap, Placement::Floor { base })
    }

    /// Top-left corner in viewport units at scroll `offset`.
    pub fn position(&self, offset: i32, viewport: Rect, grid: Grid) -> Point {
        let size = self.bitmap.size_in(grid);
        Point::new(
            viewport.center_x() - size.width / 2,
            self.placement.top(offset, viewport, size),
        )
    }
}
