//! chatflow-layout: inline chat-message layout engine.
//!
//! Flows a sequence of variable-width visual elements (text runs, emote
//! images, badges, timestamps) into wrapped lines within a fixed pixel
//! width, honoring bidirectional text direction, and answers hit-test,
//! selection and copy-text queries against the finished layout.
//!
//! Painting, font metrics computation and image handling live outside
//! this crate; the engine consumes a [`metrics::FontMetricsProvider`]
//! and opaque [`element::LayoutElement`] values only.

pub mod element;
pub mod geometry;
pub mod layout;
pub mod metrics;

pub use element::{
    BadgeElement, ElementFlags, ImageElement, LayoutElement, TextElement,
};
pub use geometry::{Margins, Point, Rect, Size};
pub use layout::{
    CopyMode, DirectionalRun, LayoutContainer, Line, MessageFlags, RunContext, Selection,
    SelectionPoint,
};
pub use metrics::{FixedMetrics, FontMetricsProvider, FontStyle, LineMetrics};

pub use chatflow_config::{LayoutSettings, VerticalAlignment};
