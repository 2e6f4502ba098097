//! Toolkit-neutral range slider control
//!
//! Wraps [`RangeSliderState`] with a track geometry and a change listener so
//! hosts that deliver raw pointer coordinates (rather than iced messages) get
//! the whole control in one object.
//!
//! ```ignore
//! let mut slider = RangeSlider::new(0.0, 100.0, Some((20.0, 80.0)), track, |range| {
//!     println!("trim: {:?}", range.as_tuple());
//! })?;
//! slider.on_pointer_down(30.0, 20.0);
//! slider.on_pointer_drag(95.0, 20.0);
//! slider.on_pointer_up();
//! ```

use super::error::RangeResult;
use super::geometry::TrackGeometry;
use super::state::{BoundsChange, DragState, RangeSliderState, SelectedRange};

/// Range slider control with a change listener
pub struct RangeSlider<F>
where
    F: FnMut(SelectedRange),
{
    state: RangeSliderState,
    track: TrackGeometry,
    on_change: F,
}

impl<F> RangeSlider<F>
where
    F: FnMut(SelectedRange),
{
    /// Create a control spanning `[min, max]`
    ///
    /// `initial` defaults to the full range. Fails if `min >= max` or the
    /// initial range is inverted or outside the bounds.
    pub fn new(
        min: f64,
        max: f64,
        initial: Option<(f64, f64)>,
        track: TrackGeometry,
        on_change: F,
    ) -> RangeResult<Self> {
        let (low, high) = initial.unwrap_or((min, max));
        let state = RangeSliderState::with_range(min, max, low, high)?;
        Ok(Self {
            state,
            track,
            on_change,
        })
    }

    pub fn state(&self) -> &RangeSliderState {
        &self.state
    }

    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    /// Update the track after the host resized the widget
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.track = track;
    }

    /// Pick up the handle nearest to the pointer
    ///
    /// Only the horizontal position matters.
    pub fn on_pointer_down(&mut self, x: f32, _y: f32) -> DragState {
        let value = self.track.value_at(x, self.state.bounds());
        self.state.pointer_down(value)
    }

    /// Move the active handle to follow the pointer
    pub fn on_pointer_drag(&mut self, x: f32, _y: f32) {
        let value = self.track.value_at(x, self.state.bounds());
        if let Some(range) = self.state.pointer_drag(value) {
            (self.on_change)(range);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.state.pointer_up();
    }

    /// Set the range programmatically, notifying only on an actual change
    pub fn set_range(&mut self, low: f64, high: f64) -> RangeResult<()> {
        if let Some(range) = self.state.set_range(low, high)? {
            (self.on_change)(range);
        }
        Ok(())
    }

    /// Replace the bounds, notifying if the selection moved
    pub fn change_bounds(&mut self, min: f64, max: f64, change: BoundsChange) -> RangeResult<()> {
        if let Some(range) = self.state.change_bounds(min, max, change)? {
            (self.on_change)(range);
        }
        Ok(())
    }

    /// Current `(low, high)`
    pub fn get_range(&self) -> (f64, f64) {
        self.state.range().as_tuple()
    }
}
