use crate::element::{ElementFlags, LayoutElement};
use crate::geometry::{Point, Rect, Size};

/// A badge icon (moderator, subscriber, channel-point reward, ...).
///
/// Occupies one selection-index unit but contributes nothing to copied
/// text.
#[derive(Debug, Clone)]
pub struct BadgeElement {
    rect: Rect,
    flags: ElementFlags,
    trailing_space: bool,
}

impl BadgeElement {
    pub fn new(size: Size, flags: ElementFlags) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, size.width, size.height),
            flags: flags | ElementFlags::BADGES,
            trailing_space: false,
        }
    }

    /// Set whether a word gap follows this element.
    pub fn trailing_space(mut self, trailing: bool) -> Self {
        self.trailing_space = trailing;
        self
    }
}

impl LayoutElement for BadgeElement {
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

    fn mouse_over_index(&self, _point: Point) -> usize {
        0
    }

    fn append_copy_text(&self, _out: &mut String, _from: usize, _to: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_carries_badges_flag() {
        let badge = BadgeElement::new(Size::new(18.0, 18.0), ElementFlags::empty());
        assert!(badge.flags().contains(ElementFlags::BADGES));
    }

    #[test]
    fn contributes_no_copy_text() {
        let badge = BadgeElement::new(Size::new(18.0, 18.0), ElementFlags::empty());
        let mut out = String::new();
        badge.append_copy_text(&mut out, 0, usize::MAX);
        assert!(out.is_empty());
        assert_eq!(badge.selection_index_count(), 1);
    }
}
