//! Text measurement and rasterization.
//!
//! [`Font`] is the seam to whatever draws glyphs. [`CellFont`] is the terminal
//! implementation: one glyph per cell (two for wide glyphs), one row tall.

use unicode_width::UnicodeWidthChar;

use crate::bitmap::{Bitmap, CellStyle, CONTINUATION};
use crate::error::RollError;
use crate::types::{Grid, Rgb, Size};

/// Cells a tab occupies.
pub const TAB_WIDTH: usize = 4;

/// Measures and rasterizes text. Both operations must be pure.
pub trait Font {
    /// Size of `text` in viewport units.
    fn measure(&self, text: &str) -> Result<Size, RollError>;

    /// Draw `text` into a new bitmap.
    fn rasterize(&self, text: &str, color: Rgb, underline: bool) -> Result<Bitmap, RollError>;
}

/// Monospace terminal font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFont {
    grid: Grid,
    bold: bool,
}

impl CellFont {
    pub fn new(grid: Grid) -> Self {
        Self { grid, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Cells taken by `ch`. Tabs become [`TAB_WIDTH`] spaces; other control
    /// characters have no width.
    fn char_columns(ch: char) -> Option<usize> {
        match ch {
            '\t' => Some(TAB_WIDTH),
            _ => ch.width(),
        }
    }

    /// Display width of `text` in cells.
    fn columns(text: &str) -> Result<usize, &'static str> {
        text.chars().try_fold(0usize, |acc, ch| match Self::char_columns(ch) {
            Some(w) => Ok(acc + w),
            None => Err("contains a control character"),
        })
    }
}

impl Font for CellFont {
    fn measure(&self, text: &str) -> Result<Size, RollError> {
        let cols = Self::columns(text).map_err(|reason| RollError::Measure {
            text: text.to_string(),
            reason,
        })?;
        let cols = u16::try_from(cols).map_err(|_| RollError::Measure {
            text: text.to_string(),
            reason: "wider than a terminal row can be",
        })?;
        Ok(self.grid.cells_to_units(cols, 1))
    }

    fn rasterize(&self, text: &str, color: Rgb, underline: bool) -> Result<Bitmap, RollError> {
        let rasterize_err = |reason| RollError::Rasterize {
            text: text.to_string(),
            reason,
        };
        let cols = Self::columns(text).map_err(rasterize_err)?;
        let cols = u16::try_from(cols).map_err(|_| rasterize_err("wider than a terminal row can be"))?;

        let mut style = CellStyle::fg(color).with_underline(underline);
        style.bold = self.bold;

        let mut bmp = Bitmap::new(cols, 1);
        let mut x = 0u16;
        for ch in text.chars() {
            match Self::char_columns(ch) {
                Some(0) | None => {}
                Some(_) if ch == '\t' => {
                    for _ in 0..TAB_WIDTH {
                        bmp.put_char(x, 0, ' ', style);
                        x += 1;
                    }
                }
                Some(1) => {
                    bmp.put_char(x, 0, ch, style);
                    x += 1;
                }
                Some(_) => {
                    bmp.put_char(x, 0, ch, style);
                    bmp.put_char(x + 1, 0, CONTINUATION, style);
                    x += 2;
                }
            }
        }
        Ok(bmp)
    }
}
