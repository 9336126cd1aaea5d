//! Credits markup parser.
//!
//! Two controls only:
//!
//! - the column marker (default `\`) splits a line into a left part, right
//!   aligned against the center, and a right part, left aligned against it;
//! - a part wrapped in emphasis characters (default `_`) is underlined.
//!
//! ```
//! use credits_roll_core::markup::{Column, Markup};
//!
//! let pieces = Markup::default().parse("_Developed by_\\Aeroli.to");
//! assert_eq!(pieces[0].text, "Developed by");
//! assert!(pieces[0].underline);
//! assert_eq!(pieces[0].column, Column::Left);
//! assert_eq!(pieces[1].text, "Aeroli.to");
//! assert_eq!(pieces[1].column, Column::Right);
//! ```

use std::borrow::Cow;

use crate::types::{COLUMN_MARKER, EMPHASIS_MARKER};

/// Horizontal placement class of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Whole line, centered on the viewport.
    Centered,
    /// Left half of a split line; right aligned against the gutter.
    Left,
    /// Right half of a split line; left aligned against the gutter.
    Right,
}

/// One parsed, not yet laid out, piece of credits text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub text: String,
    pub underline: bool,
    /// Source line index, blank lines included.
    pub line: usize,
    pub column: Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    marker: char,
    emphasis: char,
}

impl Default for Markup {
    fn default() -> Self {
        Self::new(COLUMN_MARKER, EMPHASIS_MARKER)
    }
}

impl Markup {
    pub fn new(marker: char, emphasis: char) -> Self {
        Self { marker, emphasis }
    }

    /// Parse a text block into pieces, in line-then-column order.
    pub fn parse(&self, text: &str) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for (line, raw) in text.lines().enumerate() {
            let (left, right) = match raw.split_once(self.marker) {
                Some((l, r)) => (l, r),
                None => (raw, ""),
            };

            let has_right = !right.is_empty();
            if !left.is_empty() {
                let (text, underline) = self.strip_emphasis(left);
                pieces.push(Piece {
                    text: text.to_string(),
                    underline,
                    line,
                    column: if has_right {
                        Column::Left
                    } else {
                        Column::Centered
                    },
                });
            }
            if has_right {
                let (text, underline) = self.strip_emphasis(right);
                pieces.push(Piece {
                    text: text.to_string(),
                    underline,
                    line,
                    column: Column::Right,
                });
            }
        }
        pieces
    }

    /// Parse raw bytes; see [`decode_text`].
    pub fn parse_bytes(&self, raw: &[u8]) -> Vec<Piece> {
        self.parse(&decode_text(raw))
    }

    /// `_part_` -> (`part`, true). Runs of emphasis characters at both ends
    /// are removed, so `_   _` becomes an underlined run of spaces and a lone
    /// `_` an empty underlined piece.
    fn strip_emphasis<'a>(&self, part: &'a str) -> (&'a str, bool) {
        let wrapped = part.starts_with(self.emphasis) && part.ends_with(self.emphasis);
        if wrapped {
            (part.trim_matches(self.emphasis), true)
        } else {
            (part, false)
        }
    }
}

/// Decode credits text. Invalid UTF-8 never fails: the bytes are read as
/// Latin-1 instead, one char per byte.
pub fn decode_text(raw: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(raw.iter().map(|&b| b as char).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(text: &str, underline: bool, line: usize, column: Column) -> Piece {
        Piece {
            text: text.to_string(),
            underline,
            line,
            column,
        }
    }

    #[test]
    fn splits_at_first_marker_only() {
        let pieces = Markup::default().parse("A\\B\\C");
        assert_eq!(
            pieces,
            vec![
                piece("A", false, 0, Column::Left),
                piece("B\\C", false, 0, Column::Right),
            ]
        );
    }

    #[test]
    fn marker_at_start_drops_left() {
        let pieces = Markup::default().parse("\\only right");
        assert_eq!(pieces, vec![piece("only right", false, 0, Column::Right)]);
    }

    #[test]
    fn trailing_marker_is_centered() {
        let pieces = Markup::default().parse("alone\\");
        assert_eq!(pieces, vec![piece("alone", false, 0, Column::Centered)]);
    }

    #[test]
    fn emphasis_needs_both_ends() {
        let m = Markup::default();
        assert_eq!(m.parse("_open")[0], piece("_open", false, 0, Column::Centered));
        assert_eq!(m.parse("close_")[0], piece("close_", false, 0, Column::Centered));
        assert_eq!(m.parse("_")[0], piece("", true, 0, Column::Centered));
        assert_eq!(m.parse("_\\_")[1], piece("", true, 0, Column::Right));
        assert_eq!(m.parse("__")[0], piece("", true, 0, Column::Centered));
    }

    #[test]
    fn underlined_spaces_make_a_rule() {
        let pieces = Markup::default().parse("_     _");
        assert_eq!(pieces, vec![piece("     ", true, 0, Column::Centered)]);
    }

    #[test]
    fn blank_lines_keep_their_index() {
        let pieces = Markup::default().parse("top\n\n\nbottom");
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[1].line, 3);
    }

    #[test]
    fn custom_markers() {
        let pieces = Markup::new('|', '*').parse("*Music*|Someone");
        assert_eq!(
            pieces,
            vec![
                piece("Music", true, 0, Column::Left),
                piece("Someone", false, 0, Column::Right),
            ]
        );
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        assert_eq!(decode_text("Reilly’s".as_bytes()), "Reilly’s");
        // 0xE9 alone is not UTF-8.
        assert_eq!(decode_text(b"Pok\xe9mon"), "Pokémon");
        let pieces = Markup::default().parse_bytes(b"caf\xe9\\ok");
        assert_eq!(pieces[0].text, "café");
    }
}
