//! Compositor: background, fragments, then layers, onto one canvas.
//!
//! This module is pure (no I/O). Presenting the canvas is the caller's job.

use crate::bitmap::Bitmap;
use crate::layer::Layers;
use crate::types::{Grid, Point, Rect};

pub struct Compositor {
    grid: Grid,
    viewport: Rect,
    background: Bitmap,
    canvas: Bitmap,
    layers: Layers,
}

impl Compositor {
    pub fn new(grid: Grid, viewport: Rect, background: Bitmap, layers: Layers) -> Self {
        let canvas = background.clone();
        Self {
            grid,
            viewport,
            background,
            canvas,
            layers,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// The composited frame.
    pub fn frame(&self) -> &Bitmap {
        &self.canvas
    }

    /// Start a frame from the saved background.
    pub fn begin_frame(&mut self) {
        self.canvas.copy_from(&self.background);
    }

    /// Draw `bitmap` with its top-left corner at `at` (viewport units).
    pub fn draw(&mut self, bitmap: &Bitmap, at: Point) {
        let local = Point::new(at.x - self.viewport.x, at.y - self.viewport.y);
        let (col, row) = self.grid.to_cell(local);
        self.canvas.blit(bitmap, col, row);
    }

    /// Draw every layer at its placement for scroll `offset`.
    pub fn draw_layers(&mut self, offset: i32) {
        for layer in &self.layers {
            let at = layer.position(offset, self.viewport, self.grid);
            let local = Point::new(at.x - self.viewport.x, at.y - self.viewport.y);
            let (col, row) = self.grid.to_cell(local);
            self.canvas.blit(&layer.bitmap, col, row);
        }
    }
}
