//! Laid-out fragments and the FIFO queue the animator drains.

use std::collections::VecDeque;

use crate::bitmap::Bitmap;
use crate::error::RollError;
use crate::font::Font;
use crate::types::{Rect, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub underline: bool,
}

/// Text until first drawn, then the cached bitmap for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Unrendered(String),
    Rendered(Bitmap),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    content: Content,
    style: TextStyle,
    rect: Rect,
}

impl Fragment {
    pub fn new(text: impl Into<String>, style: TextStyle, rect: Rect) -> Self {
        Self {
            content: Content::Unrendered(text.into()),
            style,
            rect,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Rect at scroll offset zero.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Unrendered(text) => Some(text),
            Content::Rendered(_) => None,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self.content, Content::Rendered(_))
    }

    /// The fragment's bitmap, rasterizing it on first use.
    pub fn bitmap<F: Font>(&mut self, font: &F, color: Rgb) -> Result<&Bitmap, RollError> {
        let content = &mut self.content;
        if let Content::Unrendered(text) = content {
            *content = Content::Rendered(font.rasterize(text, color, self.style.underline)?);
        }
        match content {
            Content::Rendered(bmp) => Ok(bmp),
            Content::Unrendered(_) => Err(RollError::Rasterize {
                text: String::new(),
                reason: "fragment was not rasterized",
            }),
        }
    }
}

/// Fragments in line-then-column order.
///
/// Removal only happens at the front. Every fragment moves by the same offset
/// and tops never decrease along the queue, so the front is always the next
/// one to leave the viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentQueue {
    items: VecDeque<Fragment>,
}

impl FragmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, fragment: Fragment) {
        self.items.push_back(fragment);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<&Fragment> {
        self.items.front()
    }

    pub fn pop_front(&mut self) -> Option<Fragment> {
        self.items.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Fragment> {
        self.items.iter_mut()
    }

    /// Largest `bottom()` over all fragments at offset zero.
    pub fn max_bottom(&self) -> Option<i32> {
        self.items.iter().map(|f| f.rect.bottom()).max()
    }
}

impl FromIterator<Fragment> for FragmentQueue {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
