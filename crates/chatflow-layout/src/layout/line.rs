use core::ops::Range;

use crate::geometry::Rect;

/// A closed line of the message layout.
///
/// Records an element-index range into the container's arena, a
/// selection-index range, and the vertical band the line occupies. The
/// band spans the full horizontal sentinel range; the first line's top
/// and the last line's bottom are widened to sentinels in `end()` so
/// point queries at the message edges always match a line.
#[derive(Debug, Clone)]
pub struct Line {
    /// Index of the first element of this line.
    pub start_index: usize,
    /// One past the index of the last element (stamped when the next
    /// line opens, or in `end()` for the final line).
    pub end_index: usize,
    /// Selection-index units accumulated before this line.
    pub start_char_index: usize,
    /// Selection-index units accumulated through this line.
    pub end_char_index: usize,
    /// Vertical band of the line.
    pub rect: Rect,
}

impl Line {
    /// Element-index range of this line.
    pub fn element_range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Selection-index range of this line.
    pub fn char_range(&self) -> Range<usize> {
        self.start_char_index..self.end_char_index
    }

    /// Whether the line holds no elements (a break that fired before
    /// anything was placed).
    pub fn is_empty(&self) -> bool {
        self.end_index <= self.start_index
    }
}
