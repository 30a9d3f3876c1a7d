//! Directional run grouping.
//!
//! A run is a contiguous group of elements sharing one text direction.
//! Runs do not own elements; they hold an index range into the
//! container's flat element arena, which keeps the global element index
//! contiguous across runs by construction.

use core::ops::Range;

use crate::element::{ElementFlags, LayoutElement};
use crate::geometry::{Margins, Point};

/// Engine state a run needs to place an element, passed explicitly so
/// runs stay independently testable.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    /// Current layout cursor. `cursor.y` is the top of the open line;
    /// elements are placed with their bottom at `cursor.y` and pushed
    /// down by the final line height when the line closes.
    pub cursor: Point,
    /// Advance width of a space at the current scale.
    pub space_width: f32,
    /// Message scale factor.
    pub scale: f32,
    /// Unscaled message margins.
    pub margins: Margins,
}

/// A contiguous group of elements sharing one text direction.
#[derive(Debug, Clone)]
pub struct DirectionalRun {
    rtl: bool,
    start_index: usize,
    len: usize,
}

impl DirectionalRun {
    pub fn new(rtl: bool, start_index: usize) -> Self {
        Self {
            rtl,
            start_index,
            len: 0,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    /// Global index of this run's first member.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the global index of this run's last member.
    pub fn end_index(&self) -> usize {
        self.start_index + self.len
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Arena index range of this run's members.
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index()
    }

    /// Record that the arena gained one element belonging to this run.
    pub(crate) fn extend(&mut self) {
        self.len += 1;
    }

    /// Position the most recently appended member (arena index
    /// `end_index() - 1`) and return the edge point the engine adopts
    /// as its new cursor.
    ///
    /// LTR runs grow rightward from the cursor, with a space gap when
    /// the previous member carries a trailing space. RTL runs keep
    /// their left edge fixed: existing members are shifted rightward by
    /// the new element's width (plus its trailing-space gap) and the
    /// new element takes the left edge, so members read right-to-left
    /// in insertion order. Earlier runs are never moved.
    pub fn place_last(&self, ctx: &RunContext, elements: &mut [Box<dyn LayoutElement>]) -> Point {
        let index = self.end_index() - 1;
        let rect = elements[index].rect();
        let flags = elements[index].flags();

        let mut x_offset = 0.0;
        let mut y_offset = 0.0;
        // Zero-width overlays sit on top of the preceding element
        // instead of occupying new horizontal space.
        if flags.contains(ElementFlags::ZERO_WIDTH_EMOTE) {
            x_offset -= rect.width + ctx.space_width;
        }
        // Reward badges ride above the text baseline band.
        if flags.contains(ElementFlags::CHANNEL_POINT_REWARD)
            && !flags.contains(ElementFlags::TWITCH_EMOTE_IMAGE)
        {
            y_offset -= ctx.margins.top * ctx.scale;
        }

        let top = ctx.cursor.y - rect.height + y_offset;

        if self.rtl {
            if self.len == 1 {
                elements[index].set_position(Point::new(ctx.cursor.x + x_offset, top));
            } else {
                let gap = if elements[index].has_trailing_space() {
                    ctx.space_width
                } else {
                    0.0
                };
                let left = elements[index - 1].rect().left();
                shift_members(&mut elements[self.start_index..index], rect.width + gap);
                elements[index].set_position(Point::new(left + x_offset, top));
            }
            // The first member stays rightmost; its right edge is the
            // run's trailing edge.
            Point::new(elements[self.start_index].rect().right(), ctx.cursor.y)
        } else {
            let gap = if self.len > 1 && elements[index - 1].has_trailing_space() {
                ctx.space_width
            } else {
                0.0
            };
            elements[index].set_position(Point::new(ctx.cursor.x + gap + x_offset, top));
            Point::new(elements[index].rect().right(), ctx.cursor.y)
        }
    }

    /// Translate every member rightward by `dx`.
    pub fn shift(&self, elements: &mut [Box<dyn LayoutElement>], dx: f32) {
        shift_members(&mut elements[self.range()], dx);
    }
}

fn shift_members(members: &mut [Box<dyn LayoutElement>], dx: f32) {
    for member in members {
        let origin = member.rect().origin();
        member.set_position(Point::new(origin.x + dx, origin.y));
    }
}
