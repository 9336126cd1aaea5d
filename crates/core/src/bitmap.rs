//! Cell bitmaps: the drawable unit of the roll.
//!
//! A [`Bitmap`] is a grid of optional styled cells. `None` is transparent, so
//! glyph runs and text-art images can be blitted over a background without
//! erasing it.

use unicode_width::UnicodeWidthChar;

use crate::types::{Grid, Rgb, Size};

/// Marks the right half of a double-width glyph. Renderers skip it.
pub const CONTINUATION: char = '\0';

/// Minimal per-cell styling.
///
/// `bg: None` inherits the background of whatever the cell is blitted onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub underline: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: None,
            bold: false,
            underline: false,
        }
    }
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
            underline: false,
        }
    }

    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D grid of optional styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    /// Opaque bitmap where every cell is `cell`.
    pub fn filled(width: u16, height: u16, cell: Cell) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Some(cell); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Size in viewport units under `grid`.
    pub fn size_in(&self, grid: Grid) -> Size {
        grid.cells_to_units(self.width, self.height)
    }

    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).and_then(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Option<Cell>) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Some(Cell { ch, style }));
    }

    /// Overwrite every cell with `src`'s cells. Sizes must match; otherwise
    /// this bitmap takes `src`'s size.
    pub fn copy_from(&mut self, src: &Bitmap) {
        if self.width == src.width && self.height == src.height {
            self.cells.copy_from_slice(&src.cells);
        } else {
            self.clone_from(src);
        }
    }

    /// Draw `src` with its top-left cell at (`col`, `row`).
    ///
    /// Transparent source cells are skipped and the blit is clipped to this
    /// bitmap, so negative or oversized positions are fine. A source cell
    /// without its own background keeps the destination's background. A wide
    /// glyph half left without its partner, by clipping or by overwriting,
    /// becomes a space.
    pub fn blit(&mut self, src: &Bitmap, col: i32, row: i32) {
        let dst_w = self.width as i32;
        let dst_h = self.height as i32;

        let y0 = row.max(0);
        let y1 = (row + src.height as i32).min(dst_h);
        let x0 = col.max(0);
        let x1 = (col + src.width as i32).min(dst_w);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let sy = (y - row) as usize;
            for x in x0..x1 {
                let sx = (x - col) as usize;
                let Some(mut cell) = src.cells[sy * src.width as usize + sx] else {
                    continue;
                };
                let di = (y as usize) * (self.width as usize) + (x as usize);
                if cell.style.bg.is_none() {
                    cell.style.bg = self.cells[di].and_then(|under| under.style.bg);
                }
                self.cells[di] = Some(cell);
            }
            self.blank_split_glyphs(y as usize, x0 as usize, x1 as usize);
        }
    }

    /// Blank wide-glyph halves on `row` around `x0..x1` that lost their partner.
    fn blank_split_glyphs(&mut self, row: usize, x0: usize, x1: usize) {
        let w = self.width as usize;
        let line = &mut self.cells[row * w..(row + 1) * w];
        for x in x0.saturating_sub(1)..(x1 + 1).min(w) {
            let Some(cell) = line[x] else {
                continue;
            };
            let split = if cell.ch == CONTINUATION {
                x == 0 || !line[x - 1].is_some_and(|c| is_wide(c.ch))
            } else if is_wide(cell.ch) {
                !line.get(x + 1).copied().flatten().is_some_and(|c| c.ch == CONTINUATION)
            } else {
                false
            };
            if split {
                line[x] = Some(Cell { ch: ' ', ..cell });
            }
        }
    }
}

fn is_wide(ch: char) -> bool {
    ch != CONTINUATION && ch.width() == Some(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Cell {
        Cell {
            ch,
            style: CellStyle::default(),
        }
    }

    #[test]
    fn new_is_transparent() {
        let bmp = Bitmap::new(3, 2);
        assert_eq!(bmp.cells().len(), 6);
        assert!(bmp.cells().iter().all(Option::is_none));
        assert_eq!(bmp.get(3, 0), None);
    }

    #[test]
    fn blit_clips_negative_origin() {
        let bg = Cell {
            ch: '.',
            style: CellStyle::default().with_bg(Rgb::new(1, 2, 3)),
        };
        let mut dst = Bitmap::filled(4, 3, bg);
        let mut src = Bitmap::new(3, 3);
        src.put_char(0, 0, 'a', CellStyle::default());
        src.put_char(2, 2, 'z', CellStyle::default());

        dst.blit(&src, -2, -2);

        assert_eq!(dst.get(0, 0).unwrap().ch, 'z');
        assert_eq!(dst.get(1, 0).unwrap().ch, '.');
        // Inherits the background of the cell it lands on.
        assert_eq!(dst.get(0, 0).unwrap().style.bg, Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn blit_skips_transparent_cells() {
        let mut dst = Bitmap::filled(3, 1, glyph('.'));
        let mut src = Bitmap::new(3, 1);
        src.set(1, 0, Some(glyph('x')));
        dst.blit(&src, 0, 0);

        let row: String = (0..3).map(|x| dst.get(x, 0).unwrap().ch).collect();
        assert_eq!(row, ".x.");
    }

    #[test]
    fn blit_fully_outside_is_noop() {
        let mut dst = Bitmap::filled(2, 2, glyph('.'));
        let before = dst.clone();
        dst.blit(&Bitmap::filled(1, 1, glyph('x')), 2, 0);
        dst.blit(&Bitmap::filled(1, 1, glyph('x')), 0, -1);
        assert_eq!(dst, before);
    }

    fn wide(text: &str) -> Bitmap {
        let mut bmp = Bitmap::new(text.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum(), 1);
        let mut x = 0;
        for ch in text.chars() {
            bmp.put_char(x, 0, ch, CellStyle::default());
            x += 1;
            if is_wide(ch) {
                bmp.put_char(x, 0, CONTINUATION, CellStyle::default());
                x += 1;
            }
        }
        bmp
    }

    fn row(bmp: &Bitmap) -> String {
        (0..bmp.width())
            .map(|x| match bmp.get(x, 0).map(|c| c.ch) {
                Some(CONTINUATION) => '~',
                Some(ch) => ch,
                None => '?',
            })
            .collect()
    }

    #[test]
    fn clipped_wide_glyph_leaves_a_space() {
        let mut dst = Bitmap::filled(5, 1, glyph('.'));
        dst.blit(&wide("日本ab"), -1, 0);
        assert_eq!(row(&dst), " 本~ab");

        let mut dst = Bitmap::filled(3, 1, glyph('.'));
        dst.blit(&wide("a日"), 1, 0);
        assert_eq!(row(&dst), ".a ");
    }

    #[test]
    fn overwriting_half_a_wide_glyph_blanks_the_other_half() {
        let mut dst = Bitmap::filled(4, 1, glyph('.'));
        dst.blit(&wide("日本"), 0, 0);
        dst.blit(&wide("x"), 1, 0);
        assert_eq!(row(&dst), " x本~");

        dst.blit(&wide("y"), 2, 0);
        assert_eq!(row(&dst), " xy ");
    }

    #[test]
    fn copy_from_restores_background() {
        let bg = Bitmap::filled(2, 1, glyph('.'));
        let mut canvas = bg.clone();
        canvas.put_char(0, 0, 'x', CellStyle::default());
        canvas.copy_from(&bg);
        assert_eq!(canvas, bg);
    }
}
