//! Pixel ⇄ value mapping for the slider track
//!
//! These are the only functions that translate between screen positions and
//! range values. They are pure so the math can be tested without a display.

use super::state::RangeBounds;

/// Horizontal extent of the track in widget-local pixels
///
/// The track is inset by the handle radius on both sides so a handle sitting
/// at `min` or `max` is drawn fully inside the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// X of the `min` end of the track
    pub start: f32,
    /// X of the `max` end of the track
    pub end: f32,
}

impl TrackGeometry {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Track for a widget of the given width with handles of `head_radius`
    pub fn from_width(width: f32, head_radius: f32) -> Self {
        Self {
            start: head_radius,
            end: width - head_radius,
        }
    }

    /// Pixel length of the track (zero when degenerate)
    pub fn length(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    /// Map a pixel x to a value
    ///
    /// Positions outside the track clamp to its ends before mapping, so the
    /// result always lies in `[bounds.min, bounds.max]`. A degenerate track
    /// maps everything to `bounds.min`.
    pub fn value_at(&self, x: f32, bounds: RangeBounds) -> f64 {
        let length = self.length();
        if length <= 0.0 || !x.is_finite() {
            return bounds.min();
        }

        let x = x.clamp(self.start, self.end);
        let ratio = f64::from(x - self.start) / f64::from(length);
        let value = bounds.min() + bounds.span() * ratio;
        value.clamp(bounds.min(), bounds.max())
    }

    /// Map a value to a pixel x on the track
    pub fn position_of(&self, value: f64, bounds: RangeBounds) -> f32 {
        let value = value.clamp(bounds.min(), bounds.max());
        let ratio = (value - bounds.min()) / bounds.span();
        self.start + self.length() * ratio as f32
    }
}
