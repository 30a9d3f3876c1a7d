use unicode_bidi::{bidi_class, BidiClass};
use unicode_segmentation::UnicodeSegmentation;

use crate::element::{ElementFlags, LayoutElement};
use crate::geometry::{Point, Rect, Size};

/// A run of text with per-grapheme advance widths.
///
/// Direction is detected from the first strong character (UAX-9 classes
/// L vs R/AL); text with no strong character lays out left-to-right.
#[derive(Debug, Clone)]
pub struct TextElement {
    text: String,
    rect: Rect,
    flags: ElementFlags,
    trailing_space: bool,
    rtl: bool,
    /// Advance width per grapheme cluster. Sums to the rect width.
    advances: Vec<f32>,
}

impl TextElement {
    /// Create a text element with uniform grapheme advances derived
    /// from the overall size.
    pub fn new(text: impl Into<String>, size: Size, flags: ElementFlags) -> Self {
        let text = text.into();
        let count = text.graphemes(true).count();
        let advance = if count > 0 {
            size.width / count as f32
        } else {
            0.0
        };
        let advances = vec![advance; count];
        Self::build(text, advances, size.height, flags)
    }

    /// Create a text element from explicit per-grapheme advances, as
    /// measured by the caller's shaping layer.
    pub fn with_advances(
        text: impl Into<String>,
        advances: Vec<f32>,
        height: f32,
        flags: ElementFlags,
    ) -> Self {
        Self::build(text.into(), advances, height, flags)
    }

    /// Set whether a word gap follows this element.
    pub fn trailing_space(mut self, trailing: bool) -> Self {
        self.trailing_space = trailing;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn build(text: String, advances: Vec<f32>, height: f32, flags: ElementFlags) -> Self {
        debug_assert_eq!(advances.len(), text.graphemes(true).count());
        let width: f32 = advances.iter().sum();
        let rtl = first_strong_rtl(&text);
        Self {
            text,
            rect: Rect::new(0.0, 0.0, width, height),
            flags,
            trailing_space: false,
            rtl,
            advances,
        }
    }
}

impl LayoutElement for TextElement {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_position(&mut self, pos: Point) {
        self.rect.x = pos.x;
        self.rect.y = pos.y;
    }

    fn flags(&self) -> ElementFlags {
        self.flags
    }

    fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn has_trailing_space(&self) -> bool {
        self.trailing_space
    }

    fn selection_index_count(&self) -> usize {
        self.advances.len() + usize::from(self.trailing_space)
    }

    fn x_from_index(&self, index: usize) -> f32 {
        let clamped = index.min(self.advances.len());
        self.rect.left() + self.advances[..clamped].iter().sum::<f32>()
    }

    fn mouse_over_index(&self, point: Point) -> usize {
        if point.x < self.rect.left() {
            return 0;
        }
        let mut x = self.rect.left();
        for (i, advance) in self.advances.iter().enumerate() {
            // Snap to the nearer grapheme boundary.
            if point.x <= x + advance / 2.0 {
                return i;
            }
            x += advance;
        }
        self.advances.len()
    }

    fn append_copy_text(&self, out: &mut String, from: usize, to: usize) {
        if from >= to {
            return;
        }
        for (i, grapheme) in self.text.graphemes(true).enumerate() {
            if i >= to {
                return;
            }
            if i >= from {
                out.push_str(grapheme);
            }
        }
        if self.trailing_space && to > self.advances.len() {
            out.push(' ');
        }
    }
}

/// First-strong direction detection per UAX-9.
fn first_strong_rtl(text: &str) -> bool {
    for c in text.chars() {
        match bidi_class(c) {
            BidiClass::L => return false,
            BidiClass::R | BidiClass::AL => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin(text: &str) -> TextElement {
        let width = 10.0 * text.graphemes(true).count() as f32;
        TextElement::new(text, Size::new(width, 16.0), ElementFlags::empty())
    }

    #[test]
    fn detects_direction_from_first_strong_char() {
        assert!(!latin("hello").is_rtl());
        assert!(TextElement::new("שלום", Size::new(40.0, 16.0), ElementFlags::empty()).is_rtl());
        // Leading neutrals are skipped.
        assert!(TextElement::new("123 עברית", Size::new(90.0, 16.0), ElementFlags::empty()).is_rtl());
        // No strong character defaults to LTR.
        assert!(!latin("123!").is_rtl());
    }

    #[test]
    fn x_from_index_walks_advances() {
        let mut el = latin("abcd");
        el.set_position(Point::new(100.0, 0.0));
        assert_eq!(el.x_from_index(0), 100.0);
        assert_eq!(el.x_from_index(2), 120.0);
        assert_eq!(el.x_from_index(4), 140.0);
        // Past-the-end clamps to the right edge.
        assert_eq!(el.x_from_index(10), 140.0);
    }

    #[test]
    fn mouse_over_index_snaps_to_nearest_boundary() {
        let mut el = latin("abcd");
        el.set_position(Point::new(100.0, 0.0));
        assert_eq!(el.mouse_over_index(Point::new(50.0, 0.0)), 0);
        assert_eq!(el.mouse_over_index(Point::new(104.0, 0.0)), 0);
        assert_eq!(el.mouse_over_index(Point::new(106.0, 0.0)), 1);
        assert_eq!(el.mouse_over_index(Point::new(131.0, 0.0)), 3);
        assert_eq!(el.mouse_over_index(Point::new(500.0, 0.0)), 4);
    }

    #[test]
    fn selection_index_count_includes_trailing_space() {
        assert_eq!(latin("hello").selection_index_count(), 5);
        assert_eq!(latin("hello").trailing_space(true).selection_index_count(), 6);
    }

    #[test]
    fn copy_text_clips_to_range() {
        let el = latin("hello");
        let mut out = String::new();
        el.append_copy_text(&mut out, 1, 4);
        assert_eq!(out, "ell");

        out.clear();
        el.append_copy_text(&mut out, 0, usize::MAX);
        assert_eq!(out, "hello");
    }

    #[test]
    fn copy_text_emits_trailing_space_at_range_end() {
        let el = latin("hi").trailing_space(true);
        let mut out = String::new();
        el.append_copy_text(&mut out, 0, 3);
        assert_eq!(out, "hi ");

        out.clear();
        el.append_copy_text(&mut out, 0, 2);
        assert_eq!(out, "hi");
    }
}
