//! Core types module - shared geometry, colors and constants
//!
//! This module defines the fundamental types used throughout the credits roll.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (parsing, layout, compositing, terminal output).
//!
//! # Units
//!
//! All layout and scroll arithmetic happens in abstract *units*. A [`Grid`]
//! maps units onto terminal cells; the default terminal grid is 10 units per
//! column and 20 units per row, so an 80x25 terminal is an 800x500 viewport.
//!
//! # Roll Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SCROLL_STEP` | 10 | Units scrolled upward per tick |
//! | `DEFAULT_FPS` | 40 | Target frame rate (advisory) |
//! | `COLUMN_MARKER` | `\` | Splits a line into left/right columns |
//! | `EMPHASIS_MARKER` | `_` | Wraps a part that should be underlined |
//! | `GUTTER_SPACES` | 3 | Space widths between center and each column |
//! | `MAX_LAYERS` | 3 | Image layers composited over the background |
//!
//! # Examples
//!
//! ```
//! use credits_roll_types::{Rect, Rgb, Size};
//!
//! let r = Rect::at_mid_top(400, 500, Size::new(120, 20));
//! assert_eq!(r.left(), 340);
//! assert_eq!(r.bottom(), 520);
//! assert_eq!(r.translate(0, -530).bottom(), -10);
//!
//! assert_eq!(Rgb::parse("#a0a0a0").unwrap(), Rgb::new(160, 160, 160));
//! ```

/// Units scrolled per tick (the accumulator moves by `-DEFAULT_SCROLL_STEP`).
pub const DEFAULT_SCROLL_STEP: i32 = 10;

/// Target frame rate of the roll.
pub const DEFAULT_FPS: u32 = 40;

/// Column split marker.
pub const COLUMN_MARKER: char = '\\';

/// Underline emphasis marker.
pub const EMPHASIS_MARKER: char = '_';

/// Distance between the viewport center and either column, in space widths.
pub const GUTTER_SPACES: i32 = 3;

/// Maximum number of image layers in a scene.
pub const MAX_LAYERS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_defaults() {
        assert_eq!(DEFAULT_SCROLL_STEP, 10);
        assert_eq!(DEFAULT_FPS, 40);
        assert_eq!(COLUMN_MARKER, '\\');
        assert_eq!(EMPHASIS_MARKER, '_');
        assert_eq!(GUTTER_SPACES, 3);
        assert_eq!(MAX_LAYERS, 3);
    }

    #[test]
    fn rect_anchors() {
        let size = Size::new(50, 20);
        let r = Rect::at_top_right(370, 500, size);
        assert_eq!((r.left(), r.right()), (320, 370));

        let r = Rect::at_top_left(430, 520, size);
        assert_eq!((r.left(), r.top(), r.bottom()), (430, 520, 540));

        let r = Rect::at_mid_top(400, 0, Size::new(51, 20));
        assert_eq!(r.left(), 375);
        assert_eq!(r.size(), Size::new(51, 20));
    }

    #[test]
    fn translate_keeps_size() {
        let r = Rect::new(10, 20, 30, 40);
        let moved = r.translate(-5, -100);
        assert_eq!(moved.size(), r.size());
        assert_eq!(moved.origin(), Point::new(5, -80));
    }

    #[test]
    fn grid_maps_negative_units_downward() {
        let grid = Grid::TERMINAL;
        assert_eq!(grid.to_cell(Point::new(0, 0)), (0, 0));
        assert_eq!(grid.to_cell(Point::new(19, 39)), (1, 1));
        assert_eq!(grid.to_cell(Point::new(-1, -1)), (-1, -1));
        assert_eq!(grid.to_cell(Point::new(-20, -21)), (-2, -2));
        assert_eq!(grid.cells_to_units(80, 25), Size::new(800, 500));
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Rgb::parse("#a0a0a0"), Ok(Rgb::new(160, 160, 160)));
        assert_eq!(Rgb::parse("0xa0a0a000"), Ok(Rgb::new(160, 160, 160)));
        assert_eq!(Rgb::parse("FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::parse(" white "), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(Rgb::parse(""), Err(ColorError::Empty));
        assert_eq!(Rgb::parse("#12345"), Err(ColorError::Malformed));
        assert_eq!(Rgb::parse("not-a-color"), Err(ColorError::Malformed));
        // Channel tuples are the fallback form, not a hex spec.
        assert_eq!(Rgb::parse("1,2,3"), Err(ColorError::Malformed));
    }

    #[test]
    fn channels_fallback() {
        assert_eq!(Rgb::parse_channels("160, 160, 160"), Ok(Rgb::new(160, 160, 160)));
        assert_eq!(Rgb::from_channels(&[1, 2, 3, 4]), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(Rgb::from_channels(&[1, 2]), Err(ColorError::ChannelCount));
        assert_eq!(Rgb::from_channels(&[1, 2, 256]), Err(ColorError::ChannelRange));
        assert_eq!(Rgb::parse_channels("1,x,3"), Err(ColorError::Malformed));
    }

    #[test]
    fn parse_any_tries_hex_then_channels() {
        assert_eq!(Rgb::parse_any("yellow"), Ok(Rgb::new(255, 255, 0)));
        assert_eq!(Rgb::parse_any("10, 20, 30"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::parse_any("10, 20"), Err(ColorError::ChannelCount));
    }

    #[test]
    fn packed_rgba_drops_alpha() {
        assert_eq!(Rgb::from_packed_rgba(0xa0a0_a000), Rgb::new(160, 160, 160));
        assert_eq!(Rgb::from_packed_rgba(0x1020_30ff), Rgb::new(16, 32, 48));
    }
}

/// A point in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in viewport units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in viewport units.
///
/// `right()` and `bottom()` are exclusive edges, so a rect with
/// `bottom() < 0` lies entirely above a viewport whose top is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of `size` whose top-right corner is at (`right`, `top`).
    pub const fn at_top_right(right: i32, top: i32, size: Size) -> Self {
        Self::new(right - size.width, top, size.width, size.height)
    }

    /// Rect of `size` whose top-left corner is at (`left`, `top`).
    pub const fn at_top_left(left: i32, top: i32, size: Size) -> Self {
        Self::new(left, top, size.width, size.height)
    }

    /// Rect of `size` whose top edge midpoint is at (`center_x`, `top`).
    pub const fn at_mid_top(center_x: i32, top: i32, size: Size) -> Self {
        Self::new(center_x - size.width / 2, top, size.width, size.height)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Copy of this rect moved by (`dx`, `dy`). Never changes the size.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Units-per-cell mapping between viewport units and terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub cell_width: i32,
    pub cell_height: i32,
}

impl Grid {
    /// One unit per cell (handy in tests).
    pub const UNIT: Grid = Grid::new(1, 1);

    /// Terminal default: 10 units per column, 20 units per row.
    pub const TERMINAL: Grid = Grid::new(10, 20);

    pub const fn new(cell_width: i32, cell_height: i32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Cell containing the unit point `p`. Rounds toward negative infinity.
    #[inline]
    pub fn to_cell(&self, p: Point) -> (i32, i32) {
        (
            p.x.div_euclid(self.cell_width),
            p.y.div_euclid(self.cell_height),
        )
    }

    pub fn cells_to_units(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            cols as i32 * self.cell_width,
            rows as i32 * self.cell_height,
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color parsing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    Empty,
    Malformed,
    ChannelCount,
    ChannelRange,
}

impl ColorError {
    pub fn code(self) -> &'static str {
        match self {
            ColorError::Empty | ColorError::Malformed => "invalid_color",
            ColorError::ChannelCount | ColorError::ChannelRange => "invalid_channels",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ColorError::Empty => "color spec is empty",
            ColorError::Malformed => "color spec is neither a name nor hex digits",
            ColorError::ChannelCount => "color channels must be 3 (rgb) or 4 (rgba) values",
            ColorError::ChannelRange => "color channel outside 0..=255",
        }
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for ColorError {}

const NAMED_COLORS: [(&str, Rgb); 10] = [
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("gray", Rgb::new(190, 190, 190)),
    ("grey", Rgb::new(190, 190, 190)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBBAA`; alpha is ignored.
    pub const fn from_packed_rgba(v: u32) -> Self {
        Self::new((v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8)
    }

    /// Parse a color name or hex spec (`#rrggbb`, `0xrrggbb`, `0xrrggbbaa`, `rrggbb`).
    ///
    /// Channel tuples are not accepted here; see [`Rgb::parse_channels`].
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let s = spec.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some((_, rgb)) = NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*rgb);
        }

        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Malformed);
        }

        match digits.len() {
            6 => {
                let v = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Malformed)?;
                Ok(Self::from_packed_rgba(v << 8))
            }
            8 => {
                let v = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Malformed)?;
                Ok(Self::from_packed_rgba(v))
            }
            _ => Err(ColorError::Malformed),
        }
    }

    /// Parse the decomposed form: `"r,g,b"` or `"r,g,b,a"`.
    pub fn parse_channels(spec: &str) -> Result<Self, ColorError> {
        let s = spec.trim().trim_start_matches('(').trim_end_matches(')');
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let mut channels = Vec::with_capacity(4);
        for part in s.split(',') {
            let v: i64 = part.trim().parse().map_err(|_| ColorError::Malformed)?;
            channels.push(v);
        }
        Self::from_channels(&channels)
    }

    /// Build from 3 or 4 channel values; alpha is ignored.
    pub fn from_channels(channels: &[i64]) -> Result<Self, ColorError> {
        if channels.len() != 3 && channels.len() != 4 {
            return Err(ColorError::ChannelCount);
        }
        let mut rgb = [0u8; 3];
        for (dst, &v) in rgb.iter_mut().zip(channels) {
            *dst = u8::try_from(v).map_err(|_| ColorError::ChannelRange)?;
        }
        Ok(Self::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Hex spec first, then the channel tuple form.
    pub fn parse_any(spec: &str) -> Result<Self, ColorError> {
        Self::parse(spec).or_else(|_| Self::parse_channels(spec))
    }
}
