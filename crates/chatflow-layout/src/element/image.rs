use crate::element::{ElementFlags, LayoutElement};
use crate::geometry::{Point, Rect, Size};

/// An emote image placeholder.
///
/// Occupies one selection-index unit; its copy-text contribution is the
/// emote code, so copied messages read back as they were typed.
#[derive(Debug, Clone)]
pub struct ImageElement {
    code: String,
    rect: Rect,
    flags: ElementFlags,
    trailing_space: bool,
}

impl ImageElement {
    pub fn new(code: impl Into<String>, size: Size, flags: ElementFlags) -> Self {
        Self {
            code: code.into(),
            rect: Rect::new(0.0, 0.0, size.width, size.height),
            flags,
            trailing_space: false,
        }
    }

    /// Set whether a word gap follows this element.
    pub fn trailing_space(mut self, trailing: bool) -> Self {
        self.trailing_space = trailing;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl LayoutElement for ImageElement {
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
        false
    }

    fn is_rtl(&self) -> bool {
        false
    }

    fn has_trailing_space(&self) -> bool {
        self.trailing_space
    }

    fn selection_index_count(&self) -> usize {
        1 + usize::from(self.trailing_space)
    }

    fn x_from_index(&self, index: usize) -> f32 {
        if index == 0 {
            self.rect.left()
        } else {
            self.rect.right()
        }
    }

    fn mouse_over_index(&self, point: Point) -> usize {
        if point.x < self.rect.left() + self.rect.width / 2.0 {
            0
        } else {
            1
        }
    }

    fn append_copy_text(&self, out: &mut String, from: usize, to: usize) {
        // The code is atomic; emit it only when the range covers the start.
        if from == 0 && to > 0 {
            out.push_str(&self.code);
            if self.trailing_space && to > 1 {
                out.push(' ');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_text_is_atomic() {
        let emote = ImageElement::new("Kappa", Size::new(24.0, 24.0), ElementFlags::EMOTE_IMAGES);
        let mut out = String::new();
        emote.append_copy_text(&mut out, 0, usize::MAX);
        assert_eq!(out, "Kappa");

        out.clear();
        emote.append_copy_text(&mut out, 1, usize::MAX);
        assert_eq!(out, "");
    }

    #[test]
    fn trailing_space_adds_index_and_copy_space() {
        let emote = ImageElement::new("Kappa", Size::new(24.0, 24.0), ElementFlags::EMOTE_IMAGES)
            .trailing_space(true);
        assert_eq!(emote.selection_index_count(), 2);
        let mut out = String::new();
        emote.append_copy_text(&mut out, 0, 2);
        assert_eq!(out, "Kappa ");
    }

    #[test]
    fn index_maps_to_edges() {
        let mut emote =
            ImageElement::new("Kappa", Size::new(24.0, 24.0), ElementFlags::EMOTE_IMAGES);
        emote.set_position(Point::new(100.0, 0.0));
        assert_eq!(emote.x_from_index(0), 100.0);
        assert_eq!(emote.x_from_index(1), 124.0);
        assert_eq!(emote.mouse_over_index(Point::new(105.0, 0.0)), 0);
        assert_eq!(emote.mouse_over_index(Point::new(120.0, 0.0)), 1);
    }
}
