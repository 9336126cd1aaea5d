//! Initial placement of parsed pieces below the viewport.

use crate::error::RollError;
use crate::font::Font;
use crate::fragment::{Fragment, FragmentQueue, TextStyle};
use crate::markup::{Column, Piece};
use crate::types::{Rect, Size, GUTTER_SPACES};

/// Column geometry derived from the width and height of one space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    viewport: Rect,
    space: Size,
}

impl Layout {
    pub fn new(viewport: Rect, space: Size) -> Self {
        Self { viewport, space }
    }

    /// Measure the font's space character once.
    pub fn for_font<F: Font>(font: &F, viewport: Rect) -> Result<Self, RollError> {
        if viewport.width <= 0 || viewport.height <= 0 {
            return Err(RollError::EmptyViewport);
        }
        Ok(Self::new(viewport, font.measure(" ")?))
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn line_height(&self) -> i32 {
        self.space.height
    }

    /// Distance from the viewport center to either column edge.
    pub fn gutter(&self) -> i32 {
        self.space.width * GUTTER_SPACES
    }

    /// Rect of a piece of measured `size`, before any scrolling.
    pub fn place(&self, piece: &Piece, size: Size) -> Rect {
        let center = self.viewport.center_x();
        let top = self.viewport.bottom() + piece.line as i32 * self.line_height();
        match piece.column {
            Column::Centered => Rect::at_mid_top(center, top, size),
            Column::Left => Rect::at_top_right(center - self.gutter(), top, size),
            Column::Right => Rect::at_top_left(center + self.gutter(), top, size),
        }
    }

    /// Measure and place every piece, keeping parse order.
    pub fn lay_out<F: Font>(&self, font: &F, pieces: Vec<Piece>) -> Result<FragmentQueue, RollError> {
        let mut queue = FragmentQueue::new();
        for piece in pieces {
            let rect = self.place(&piece, font.measure(&piece.text)?);
            let style = TextStyle {
                underline: piece.underline,
            };
            queue.push_back(Fragment::new(piece.text, style, rect));
        }
        tracing::debug!(
            fragments = queue.len(),
            line_height = self.line_height(),
            gutter = self.gutter(),
            "laid out credits"
        );
        Ok(queue)
    }
}
