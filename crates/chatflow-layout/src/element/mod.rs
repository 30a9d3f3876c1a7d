//! Visual elements laid out by the engine.
//!
//! Elements are opaque to the engine beyond the [`LayoutElement`]
//! capability set: a mutable bounding box, a text direction, a count of
//! selection-index units, creator flags and copy-text emission.

pub mod badge;
pub mod image;
pub mod text;

pub use badge::BadgeElement;
pub use image::ImageElement;
pub use text::TextElement;

use bitflags::bitflags;

use crate::geometry::{Point, Rect};

bitflags! {
    /// Categories assigned by the element's creator.
    ///
    /// The engine only inspects these for spacing adjustments and copy
    /// filtering; their meaning otherwise belongs to the caller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ElementFlags: u32 {
        const EMOTE_IMAGES = 1 << 0;
        const ZERO_WIDTH_EMOTE = 1 << 1;
        const CHANNEL_POINT_REWARD = 1 << 2;
        const TWITCH_EMOTE_IMAGE = 1 << 3;
        const USERNAME = 1 << 4;
        const TIMESTAMP = 1 << 5;
        const BADGES = 1 << 6;
        const COLLAPSED = 1 << 7;
    }
}

/// A visual unit positioned by the layout engine.
///
/// Ownership transfers to the engine on a successful add; the engine
/// positions the element during layout and answers queries against it
/// afterwards.
pub trait LayoutElement {
    /// Current bounding box in layout-local pixels.
    fn rect(&self) -> Rect;

    /// Assign a new top-left position, keeping the size.
    fn set_position(&mut self, pos: Point);

    /// Creator category flags.
    fn flags(&self) -> ElementFlags;

    /// Whether this element carries non-empty text.
    fn has_text(&self) -> bool;

    /// Whether the text direction is right-to-left. Only meaningful
    /// when [`has_text`](Self::has_text) is true.
    fn is_rtl(&self) -> bool;

    /// Whether a word gap follows this element.
    fn has_trailing_space(&self) -> bool;

    /// Number of selection-index units this element occupies (roughly:
    /// grapheme count for text, one for an emote or badge, plus one for
    /// a trailing space).
    fn selection_index_count(&self) -> usize;

    /// Pixel x of the given local selection index. Indices at or past
    /// the end map to the right edge.
    fn x_from_index(&self, index: usize) -> f32;

    /// Local selection index under the given point.
    fn mouse_over_index(&self, point: Point) -> usize;

    /// Append this element's text contribution for the local selection
    /// index range `[from, to)`. `to` may exceed the index count.
    fn append_copy_text(&self, out: &mut String, from: usize, to: usize);
}
