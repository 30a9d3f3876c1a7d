//! Selection addressing across messages.
//!
//! A selection spans one or more messages; within a message, positions
//! are flat selection-index units (see the element trait). The engine
//! translates these into per-line highlight rectangles.

/// A position inside a conversation: which message, and which
/// selection-index unit within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionPoint {
    pub message_index: usize,
    pub char_index: usize,
}

impl SelectionPoint {
    pub fn new(message_index: usize, char_index: usize) -> Self {
        Self {
            message_index,
            char_index,
        }
    }
}

/// A selection between two points, stored in normalized order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The earlier endpoint.
    pub min: SelectionPoint,
    /// The later endpoint.
    pub max: SelectionPoint,
}

impl Selection {
    /// Create a selection from two endpoints in any order.
    pub fn new(a: SelectionPoint, b: SelectionPoint) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Whether the selection covers nothing.
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Whether the given message lies strictly inside the selection.
    pub fn fully_contains_message(&self, message_index: usize) -> bool {
        self.min.message_index < message_index && self.max.message_index > message_index
    }

    /// Whether the given message is outside the selection entirely.
    pub fn misses_message(&self, message_index: usize) -> bool {
        self.min.message_index > message_index || self.max.message_index < message_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_endpoint_order() {
        let a = SelectionPoint::new(3, 10);
        let b = SelectionPoint::new(1, 25);
        let sel = Selection::new(a, b);
        assert_eq!(sel.min, b);
        assert_eq!(sel.max, a);
        assert_eq!(Selection::new(b, a), sel);
    }

    #[test]
    fn normalizes_within_one_message() {
        let sel = Selection::new(SelectionPoint::new(2, 9), SelectionPoint::new(2, 4));
        assert_eq!(sel.min.char_index, 4);
        assert_eq!(sel.max.char_index, 9);
    }

    #[test]
    fn message_containment() {
        let sel = Selection::new(SelectionPoint::new(1, 0), SelectionPoint::new(4, 2));
        assert!(sel.misses_message(0));
        assert!(!sel.misses_message(1));
        assert!(sel.fully_contains_message(2));
        assert!(sel.fully_contains_message(3));
        assert!(!sel.fully_contains_message(4));
        assert!(sel.misses_message(5));
    }
}
