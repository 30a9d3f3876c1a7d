//! Font metric snapshots consumed by the layout engine.
//!
//! Real metric computation (shaping, rasterization) happens outside this
//! crate; the engine only needs three numbers per message, queried once
//! at `begin()`.

/// Font style requested from the metrics provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Regular chat text.
    ChatMedium,
    /// Bold chat text (used for the collapse ellipsis).
    ChatMediumBold,
}

/// Scaled line metrics in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Height of a text line.
    pub line_height: f32,
    /// Advance width of a space character.
    pub space_width: f32,
    /// Advance width of the "..." ellipsis marker.
    pub ellipsis_width: f32,
}

/// Provider of line metrics for a given style and scale.
pub trait FontMetricsProvider {
    fn metrics(&self, style: FontStyle, scale: f32) -> LineMetrics;
}

/// Fixed-advance metrics for tests and headless layout.
///
/// Every character is `char_width` wide at scale 1.0; the ellipsis is
/// three characters.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 20.0,
        }
    }
}

impl FontMetricsProvider for FixedMetrics {
    fn metrics(&self, _style: FontStyle, scale: f32) -> LineMetrics {
        LineMetrics {
            line_height: self.line_height * scale,
            space_width: self.char_width * scale,
            ellipsis_width: 3.0 * self.char_width * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_metrics_scale() {
        let metrics = FixedMetrics::default();
        let m = metrics.metrics(FontStyle::ChatMedium, 2.0);
        assert_eq!(m.line_height, 40.0);
        assert_eq!(m.space_width, 20.0);
        assert_eq!(m.ellipsis_width, 60.0);
    }
}
