//! Text-art images.
//!
//! An image file is plain text; every non-space character becomes an opaque
//! cell and spaces are transparent, so art can sit on top of the background
//! without a box around it.

use std::path::Path;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthChar;

use crate::core::{Bitmap, Cell, CellStyle, CONTINUATION};
use crate::types::Rgb;

/// Load a text-art image drawn in `style`.
pub fn load_image(path: &Path, style: CellStyle) -> Result<Bitmap> {
    let raw = std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
    let text = crate::core::decode_text(&raw);
    let bmp = parse_art(&text, style);
    tracing::debug!(
        path = %path.display(),
        width = bmp.width(),
        height = bmp.height(),
        "loaded image"
    );
    Ok(bmp)
}

/// Rasterize text art. Lines shorter than the widest one are padded with
/// transparent cells.
pub fn parse_art(text: &str, style: CellStyle) -> Bitmap {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines
        .iter()
        .map(|l| l.chars().map(|c| c.width().unwrap_or(1)).sum::<usize>())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let mut bmp = Bitmap::new(width, height);
    for (y, line) in lines.iter().enumerate().take(height as usize) {
        let y = y as u16;
        let mut x = 0u16;
        for ch in line.chars() {
            match ch.width() {
                Some(0) => continue,
                Some(2) => {
                    bmp.put_char(x, y, ch, style);
                    bmp.put_char(x.saturating_add(1), y, CONTINUATION, style);
                    x = x.saturating_add(2);
                }
                // Spaces and control characters stay transparent.
                _ if ch.is_whitespace() || ch.is_control() => x = x.saturating_add(1),
                _ => {
                    bmp.put_char(x, y, ch, style);
                    x = x.saturating_add(1);
                }
            }
        }
    }
    bmp
}

/// Opaque background of `cols` x `rows` cells in `bg`.
pub fn solid_background(cols: u16, rows: u16, bg: Rgb) -> Bitmap {
    Bitmap::filled(
        cols,
        rows,
        Cell {
            ch: ' ',
            style: CellStyle::default().with_bg(bg),
        },
    )
}
