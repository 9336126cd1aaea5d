//! TerminalRenderer: flushes a composited bitmap to a real terminal.
//!
//! The first frame is a full redraw; later frames only rewrite the runs of
//! cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{Bitmap, Cell, CellStyle, CONTINUATION};
use crate::engine::Present;
use crate::types::{Grid, Rect, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Bitmap>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a frame, diffing against the previous one.
    pub fn draw(&mut self, frame: &Bitmap) -> Result<()> {
        self.buf.clear();
        let same_size = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.width() == frame.width() && prev.height() == frame.height());

        if let (true, Some(prev)) = (same_size, self.last.as_mut()) {
            encode_diff_into(prev, frame, &mut self.buf)?;
            prev.copy_from(frame);
        } else {
            encode_full_into(frame, &mut self.buf)?;
            self.last = Some(frame.clone());
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Present for TerminalRenderer {
    fn present(&mut self, frame: &Bitmap) -> Result<()> {
        self.draw(frame)
    }
}

/// Current terminal size as a viewport in units, plus its size in cells.
pub fn terminal_viewport(grid: Grid) -> Result<(Rect, u16, u16)> {
    let (cols, rows) = terminal::size()?;
    let size = grid.cells_to_units(cols, rows);
    Ok((Rect::new(0, 0, size.width, size.height), cols, rows))
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(frame: &Bitmap, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        print_run(frame, 0, y, frame.width(), &mut current_style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &Bitmap, next: &Bitmap, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        print_run(next, x, y, len, &mut current_style, out)
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn print_run(
    frame: &Bitmap,
    x: u16,
    y: u16,
    len: u16,
    current_style: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = frame.get(x + dx, y).unwrap_or_default();
        // The wide glyph to the left already moved the cursor past it.
        if cell.ch == CONTINUATION {
            continue;
        }
        if *current_style != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current_style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(
        style.bg.map(rgb_to_color).unwrap_or(Color::Reset),
    ))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.underline {
        out.queue(SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn cell_at(frame: &Bitmap, x: u16, y: u16) -> Option<Cell> {
    frame.get(x, y)
}

fn for_each_changed_run(
    prev: &Bitmap,
    next: &Bitmap,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if cell_at(prev, x, y) == cell_at(next, x, y) {
                x += 1;
                continue;
            }

            // Start on the wide glyph, not its right half.
            let start = if x > 0 && cell_at(next, x, y).is_some_and(|c| c.ch == CONTINUATION) {
                x - 1
            } else {
                x
            };
            x += 1;
            while x < w && cell_at(prev, x, y) != cell_at(next, x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellFont, Font};

    fn text_frame(rows: &[&str]) -> Bitmap {
        let w = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u16;
        let mut bmp = Bitmap::new(w, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                bmp.put_char(x as u16, y as u16, ch, CellStyle::default());
            }
        }
        bmp
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = text_frame(&["....."]);
        let b = text_frame(&[".XXX."]);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_run_starts_on_wide_glyph() {
        let a = text_frame(&["...."]);
        let mut b = a.clone();
        b.put_char(1, 0, '日', CellStyle::default());
        b.put_char(2, 0, CONTINUATION, CellStyle::default());

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, _, len| {
            runs.push((x, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 2)]);
    }

    #[test]
    fn full_encode_skips_continuation_and_underlines() {
        let mut frame = Bitmap::new(3, 1);
        let style = CellStyle::fg(Rgb::new(160, 160, 160)).with_underline(true);
        frame.put_char(0, 0, '日', style);
        frame.put_char(1, 0, CONTINUATION, style);
        frame.put_char(2, 0, 'a', style);

        let mut out = Vec::new();
        encode_full_into(&frame, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("日a"));
        assert!(!s.contains('\0'));
        assert!(s.contains("\x1b[4m"));
    }

    #[test]
    fn clipped_wide_glyph_keeps_row_aligned() {
        let font = CellFont::new(Grid::UNIT);
        let text = font.rasterize("日本ab", Rgb::default(), false).unwrap();
        let mut frame = text_frame(&["....."]);
        frame.blit(&text, -1, 0);

        let mut out = Vec::new();
        encode_full_into(&frame, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        // All five columns are written: a space, then 本 on columns 1-2.
        assert!(s.contains(" 本ab"), "{s:?}");
    }

    #[test]
    fn diff_of_identical_frames_prints_no_cells() {
        let frame = text_frame(&["ab", "cd"]);
        let mut out = Vec::new();
        encode_diff_into(&frame, &frame, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(!s.contains('a'));
        assert!(!s.contains('d'));
    }

    #[test]
    fn transparent_cells_use_terminal_default_background() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
        let mut out = Vec::new();
        encode_full_into(&Bitmap::new(1, 1), &mut out).unwrap();
        // ESC [ 49 m resets the background.
        assert!(String::from_utf8(out).unwrap().contains("\x1b[49m"));
    }
}
