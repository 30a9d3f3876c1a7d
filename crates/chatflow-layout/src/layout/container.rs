//! The message layout container.
//!
//! Drives the begin / add-elements / end protocol for one message and
//! answers hit-test, selection and copy-text queries against the
//! finished layout.

use bitflags::bitflags;
use chatflow_config::{LayoutSettings, VerticalAlignment};

use crate::element::{ElementFlags, LayoutElement, TextElement};
use crate::geometry::{Margins, Point, Rect, Size, UNBOUNDED};
use crate::layout::line::Line;
use crate::layout::run::{DirectionalRun, RunContext};
use crate::layout::selection::Selection;
use crate::metrics::{FontMetricsProvider, FontStyle};

/// Vertical tightening applied to emote images in compact mode, in
/// unscaled pixels.
const COMPACT_EMOTES_OFFSET: f32 = 4.0;

bitflags! {
    /// Message-level layout flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MessageFlags: u32 {
        /// Center each line horizontally in the available width.
        const CENTERED = 1 << 0;
        /// The message may be truncated to the configured line budget.
        const COLLAPSIBLE = 1 << 1;
        /// Per-message override disabling compact emote spacing.
        const DISABLE_COMPACT_EMOTES = 1 << 2;
    }
}

/// What copy-text extraction includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Every element's contribution, including timestamps and names.
    Everything,
    /// Only message body text and emotes.
    OnlyTextAndEmotes,
}

/// Layout engine for a single message.
///
/// Lifecycle: `begin()` resets state, `add_element()` flows elements
/// into lines, `end()` finalizes. After `end()` the container is
/// read-only and serves queries. Elements are owned in a flat arena;
/// directional runs and lines hold index ranges into it.
#[derive(Default)]
pub struct LayoutContainer {
    width: f32,
    scale: f32,
    flags: MessageFlags,
    margins: Margins,
    settings: LayoutSettings,

    text_line_height: f32,
    space_width: f32,
    ellipsis_width: f32,

    elements: Vec<Box<dyn LayoutElement>>,
    runs: Vec<DirectionalRun>,
    lines: Vec<Line>,

    height: f32,
    line_number: usize,
    current_x: f32,
    current_y: f32,
    line_start: usize,
    line_height: f32,
    char_index: usize,
    accepting: bool,
    collapsed: bool,
}

impl LayoutContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start laying out a message. Resets all per-message state and
    /// snapshots the metrics and settings for this layout pass.
    pub fn begin(
        &mut self,
        width: f32,
        scale: f32,
        flags: MessageFlags,
        metrics: &dyn FontMetricsProvider,
        settings: &LayoutSettings,
    ) {
        self.clear();
        self.width = width;
        self.scale = scale;
        self.flags = flags;
        let line_metrics = metrics.metrics(FontStyle::ChatMedium, scale);
        self.text_line_height = line_metrics.line_height;
        self.space_width = line_metrics.space_width;
        // The collapse marker renders bold.
        self.ellipsis_width = metrics.metrics(FontStyle::ChatMediumBold, scale).ellipsis_width;
        self.settings = settings.clone();
        self.accepting = true;
        self.collapsed = false;
    }

    /// Discard all laid-out content.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.runs.clear();
        self.lines.clear();
        self.height = 0.0;
        self.line_number = 0;
        self.current_x = 0.0;
        self.current_y = 0.0;
        self.line_start = 0;
        self.line_height = 0.0;
        self.char_index = 0;
    }

    /// Add an element, breaking the line first if it doesn't fit.
    pub fn add_element(&mut self, element: Box<dyn LayoutElement>) {
        // Once collapsed, skip the fit check too, or every dropped
        // element would leave an empty line record behind.
        if !self.accepting {
            log::trace!("dropping element added past the collapse point");
            return;
        }
        if !self.fits_in_line(element.rect().width) {
            self.break_line();
        }
        self.push_element(element, false);
    }

    /// Add an element glued to the previous one, with no fit check.
    pub fn add_element_no_line_break(&mut self, element: Box<dyn LayoutElement>) {
        self.push_element(element, false);
    }

    /// Whether elements are still being accepted (false once the line
    /// budget was reached on a collapsible message).
    pub fn can_add_elements(&self) -> bool {
        self.accepting
    }

    /// Whether `width` fits in the remaining horizontal budget of the
    /// current line. When the next line break would hit the collapse
    /// budget, room for the trailing ellipsis is reserved.
    pub fn fits_in_line(&self, width: f32) -> bool {
        let reserve = if self.can_collapse()
            && self.line_number + 1 == self.settings.max_uncollapsed_lines as usize
        {
            self.ellipsis_width
        } else {
            0.0
        };
        self.current_x + width <= self.width - self.margins.horizontal() * self.scale - reserve
    }

    /// Finalize the layout. Appends the ellipsis marker if content was
    /// collapsed, closes the final line and widens the first/last line
    /// bounds to sentinels.
    pub fn end(&mut self) {
        if !self.accepting {
            let ellipsis = TextElement::new(
                "...",
                Size::new(self.ellipsis_width, self.text_line_height),
                ElementFlags::COLLAPSED,
            );
            self.push_element(Box::new(ellipsis), true);
            self.collapsed = true;
        }

        if !self.at_start_of_line() {
            self.break_line();
        }

        self.height += self.line_height;

        if !self.lines.is_empty() {
            let total_elements = self.elements.len();
            let total_chars = self.char_index;
            if let Some(first) = self.lines.first_mut() {
                first.rect.set_top(-UNBOUNDED);
            }
            if let Some(last) = self.lines.last_mut() {
                last.rect.set_bottom(UNBOUNDED);
                last.end_index = total_elements;
                last.end_char_index = total_chars;
            }
        }
    }

    /// Whether the cursor sits at the start of a fresh line (no
    /// unflushed elements).
    pub fn at_start_of_line(&self) -> bool {
        self.line_start == self.elements.len()
    }

    /// Whether this message is subject to the line budget.
    pub fn can_collapse(&self) -> bool {
        self.settings.max_uncollapsed_lines > 0 && self.flags.contains(MessageFlags::COLLAPSIBLE)
    }

    /// Whether truncation actually occurred during this layout.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Elements in paint order (insertion order; runs are contiguous).
    pub fn elements(&self) -> impl Iterator<Item = &dyn LayoutElement> {
        self.elements.iter().map(|e| e.as_ref())
    }

    /// Mutable paint-order walk, for embedders that update element
    /// state (e.g. animated emote frames) between paints.
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut (dyn LayoutElement + 'static)> {
        self.elements.iter_mut().map(move |e| e.as_mut())
    }

    /// Element at a global index.
    ///
    /// The index must come from this container and lie within
    /// `[0, element_count())`; anything else is a programmer error and
    /// panics.
    pub fn element_at_index(&self, index: usize) -> &dyn LayoutElement {
        self.elements[index].as_ref()
    }

    pub fn runs(&self) -> &[DirectionalRun] {
        &self.runs
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// First element whose bounding box contains the point.
    pub fn element_at(&self, point: Point) -> Option<&dyn LayoutElement> {
        self.elements
            .iter()
            .map(|e| e.as_ref())
            .find(|e| e.rect().contains(point))
    }

    /// Map a point to a selection index within this message.
    pub fn selection_index_at(&self, point: Point) -> usize {
        if self.elements.is_empty() {
            return 0;
        }

        let line_pos = self.lines.iter().position(|line| line.rect.contains(point));
        let (line_start, line_end) = match line_pos {
            Some(i) => (
                self.lines[i].start_index,
                self.lines
                    .get(i + 1)
                    .map(|line| line.start_index)
                    .unwrap_or(self.elements.len()),
            ),
            None => (
                self.lines.last().map(|line| line.start_index).unwrap_or(0),
                self.elements.len(),
            ),
        };

        let mut index = 0;
        for i in 0..line_end {
            let element = self.elements[i].as_ref();
            if i < line_start {
                index += element.selection_index_count();
                continue;
            }
            let right_margin = if element.has_trailing_space() {
                self.space_width
            } else {
                0.0
            };
            if point.x <= element.rect().right() + right_margin {
                return index + element.mouse_over_index(point);
            }
            index += element.selection_index_count();
        }
        index
    }

    /// Total selection-index span of the message.
    pub fn last_character_index(&self) -> usize {
        self.lines.last().map(|line| line.end_char_index).unwrap_or(0)
    }

    /// Selection index of the first message-content element, skipping
    /// the username/timestamp/badge prefix.
    pub fn first_message_content_index(&self) -> usize {
        let prefix = ElementFlags::USERNAME | ElementFlags::TIMESTAMP | ElementFlags::BADGES;
        let mut index = 0;
        for element in &self.elements {
            if element.flags().intersects(prefix) {
                index += element.selection_index_count();
            } else {
                break;
            }
        }
        index
    }

    /// Extract copy text for the selection-index range `[from, to)`.
    pub fn copy_text(&self, from: usize, to: usize, mode: CopyMode) -> String {
        let mut out = String::new();
        self.append_copy_text(&mut out, from, to, mode);
        out
    }

    /// Append copy text for the selection-index range `[from, to)` to
    /// an existing buffer. In `OnlyTextAndEmotes` mode the filtered
    /// elements do not consume indices.
    pub fn append_copy_text(&self, out: &mut String, from: usize, to: usize, mode: CopyMode) {
        let skipped = ElementFlags::TIMESTAMP | ElementFlags::USERNAME | ElementFlags::BADGES;
        let mut index = 0;
        let mut first = true;

        for element in &self.elements {
            if mode == CopyMode::OnlyTextAndEmotes && element.flags().intersects(skipped) {
                continue;
            }
            let count = element.selection_index_count();

            if first {
                if index + count > from {
                    element.append_copy_text(out, from - index, to.saturating_sub(index));
                    first = false;
                    if index + count > to {
                        break;
                    }
                }
            } else if index + count > to {
                element.append_copy_text(out, 0, to - index);
                break;
            } else {
                element.append_copy_text(out, 0, usize::MAX);
            }

            index += count;
        }
    }

    /// Highlight rectangles for a selection, offset vertically by
    /// `y_offset` (the message's position in the view).
    pub fn selection_rects(
        &self,
        message_index: usize,
        selection: &Selection,
        y_offset: f32,
    ) -> Vec<Rect> {
        let mut rects = Vec::new();

        if selection.misses_message(message_index) {
            return rects;
        }

        if selection.fully_contains_message(message_index) {
            for line in &self.lines {
                if let Some(rect) = self.full_line_rect(line, y_offset) {
                    rects.push(rect);
                }
            }
            return rects;
        }

        let mut line_index = 0;

        // The selection starts in this message.
        if selection.min.message_index == message_index {
            while line_index < self.lines.len()
                && self.lines[line_index].end_char_index <= selection.min.char_index
            {
                line_index += 1;
            }
            if line_index == self.lines.len() {
                return rects;
            }

            let line = &self.lines[line_index];
            let left = self.x_at_char(line, selection.min.char_index);

            let ends_in_same_line = selection.max.message_index == message_index
                && line.end_char_index > selection.max.char_index;
            if ends_in_same_line {
                let right = self.x_at_char(line, selection.max.char_index);
                rects.push(self.band_rect(line, left, right, y_offset));
                return rects;
            }

            let line_right = self.elements[line.end_index - 1].rect().right();
            rects.push(self.band_rect(line, left, line_right, y_offset));
            line_index += 1;

            if selection.max.message_index != message_index {
                for line in &self.lines[line_index..] {
                    if let Some(rect) = self.full_line_rect(line, y_offset) {
                        rects.push(rect);
                    }
                }
                return rects;
            }
        }

        // The selection ends in this message: full lines up to the
        // boundary line, then a partial rectangle.
        while line_index < self.lines.len() {
            let line = &self.lines[line_index];
            if line.is_empty() {
                line_index += 1;
                continue;
            }
            if line.end_char_index < selection.max.char_index {
                if let Some(rect) = self.full_line_rect(line, y_offset) {
                    rects.push(rect);
                }
                line_index += 1;
                continue;
            }
            let left = self.elements[line.start_index].rect().left();
            let right = self.x_at_char(line, selection.max.char_index);
            rects.push(self.band_rect(line, left, right, y_offset));
            break;
        }

        rects
    }

    fn is_compact_emote(&self, flags: ElementFlags) -> bool {
        self.settings.compact_emotes
            && !self.flags.contains(MessageFlags::DISABLE_COMPACT_EMOTES)
            && flags.contains(ElementFlags::EMOTE_IMAGES)
    }

    fn push_element(&mut self, element: Box<dyn LayoutElement>, force: bool) {
        if !self.accepting && !force {
            log::trace!("dropping element added past the collapse point");
            return;
        }

        // Top margin applies once, with the first element.
        if self.elements.is_empty() {
            self.current_y = self.margins.top * self.scale;
        }

        let mut new_line_height = element.rect().height;
        if self.is_compact_emote(element.flags()) {
            new_line_height -= COMPACT_EMOTES_OFFSET * self.scale;
        }
        self.line_height = self.line_height.max(new_line_height);

        // Only text carries meaningful direction; non-text elements
        // join the current run.
        let element_rtl = element.is_rtl();
        let needs_new_run = match self.runs.last() {
            None => true,
            Some(run) => element.has_text() && run.is_rtl() != element_rtl,
        };
        if needs_new_run {
            self.runs
                .push(DirectionalRun::new(element_rtl, self.elements.len()));
        }

        let ctx = RunContext {
            cursor: Point::new(self.current_x, self.current_y),
            space_width: self.space_width,
            scale: self.scale,
            margins: self.margins,
        };
        self.elements.push(element);
        let run_index = self.runs.len() - 1;
        self.runs[run_index].extend();
        let edge = self.runs[run_index].place_last(&ctx, &mut self.elements);
        self.current_x = edge.x;
    }

    fn break_line(&mut self) {
        let mut x_offset = 0.0;
        if self.flags.contains(MessageFlags::CENTERED) && !self.elements.is_empty() {
            let margin = self.margins.horizontal() * self.scale;
            let line_right = self.elements[self.elements.len() - 1].rect().right();
            x_offset = (self.width - margin - line_right) / 2.0;
        }

        let end = self.runs.last().map(|run| run.end_index()).unwrap_or(0);
        let left_margin = self.margins.left * self.scale;

        for i in self.line_start..end {
            let flags = self.elements[i].flags();
            let rect = self.elements[i].rect();
            // Compact emotes gain back half the removed height as top
            // padding so they stay visually centered.
            let y_extra = if self.is_compact_emote(flags) {
                COMPACT_EMOTES_OFFSET / 2.0 * self.scale
            } else {
                0.0
            };
            let y_advance = match self.settings.vertical_alignment {
                VerticalAlignment::Bottom => self.line_height + y_extra,
                VerticalAlignment::Top => rect.height,
            };
            self.elements[i].set_position(Point::new(
                rect.x + x_offset + left_margin,
                rect.y + y_advance,
            ));
        }

        if let Some(previous) = self.lines.last_mut() {
            previous.end_index = self.line_start;
            previous.end_char_index = self.char_index;
        }
        self.lines.push(Line {
            start_index: self.line_start,
            end_index: 0,
            start_char_index: self.char_index,
            end_char_index: 0,
            rect: Rect::spanning_line(self.current_y, self.line_height),
        });

        for i in self.line_start..end {
            self.char_index += self.elements[i].selection_index_count();
        }
        self.line_start = end;

        if self.can_collapse()
            && self.line_number + 1 >= self.settings.max_uncollapsed_lines as usize
        {
            log::debug!(
                "line budget of {} reached, collapsing further content",
                self.settings.max_uncollapsed_lines
            );
            self.accepting = false;
            return;
        }

        self.current_x = 0.0;
        self.current_y += self.line_height;
        self.height = self.current_y + self.margins.bottom * self.scale;
        self.line_height = 0.0;
        self.line_number += 1;
    }

    fn x_at_char(&self, line: &Line, target: usize) -> f32 {
        let mut index = line.start_char_index;
        for i in line.element_range() {
            let count = self.elements[i].selection_index_count();
            if index + count > target {
                return self.elements[i].x_from_index(target - index);
            }
            index += count;
        }
        self.elements[line.end_index - 1].rect().right()
    }

    fn band_rect(&self, line: &Line, left: f32, right: f32, y_offset: f32) -> Rect {
        let top = line.rect.top().max(0.0) + y_offset;
        let bottom = line.rect.bottom().min(self.height) + y_offset;
        Rect::new(left, top, right - left, bottom - top)
    }

    fn full_line_rect(&self, line: &Line, y_offset: f32) -> Option<Rect> {
        if line.is_empty() {
            return None;
        }
        let left = self.elements[line.start_index].rect().left();
        let right = self.elements[line.end_index - 1].rect().right();
        Some(self.band_rect(line, left, right, y_offset))
    }
}
