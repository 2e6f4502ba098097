//! State structures for the range slider widget
//!
//! Pure data plus the value-space drag rules. Nothing here knows about
//! pixels or iced; the canvas converts pointer positions to values through
//! [`TrackGeometry`](super::geometry::TrackGeometry) first.

use super::error::{RangeError, RangeResult};

/// The `[min, max]` interval a slider spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    min: f64,
    max: f64,
}

impl RangeBounds {
    /// Validate and create bounds (`min < max`, both finite)
    pub fn new(min: f64, max: f64) -> RangeResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NonFinite);
        }
        if min >= max {
            return Err(RangeError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Distance between `min` and `max` (always positive)
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// The user-selected `(low, high)` sub-range ("in" and "out" marks)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedRange {
    pub low: f64,
    pub high: f64,
}

impl SelectedRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Length of the selection
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

impl From<SelectedRange> for (f64, f64) {
    fn from(range: SelectedRange) -> Self {
        range.as_tuple()
    }
}

/// One of the two slider handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The "in" handle (`low`)
    Low,
    /// The "out" handle (`high`)
    High,
}

/// Drag gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer went down on coincident handles; the first movement decides
    /// which one follows
    Undecided,
    /// A handle is following the pointer
    Dragging(Handle),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// The handle being moved, if already decided
    pub fn handle(&self) -> Option<Handle> {
        match self {
            DragState::Dragging(handle) => Some(*handle),
            _ => None,
        }
    }
}

/// What happens to the selection when the bounds are replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsChange {
    /// Move both handles to the new `min`/`max`
    #[default]
    Reset,
    /// Keep the current values, clamped into the new bounds
    Keep,
}

/// State for a range slider
///
/// Owns the bounds, the selected range and the in-progress drag. Every
/// mutating method keeps `min <= low <= high <= max` and returns the new
/// range only when it actually changed, which is what hosts forward to
/// their change listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderState {
    bounds: RangeBounds,
    range: SelectedRange,
    drag: DragState,
}

impl RangeSliderState {
    /// Slider spanning `[min, max]` with the whole range selected
    pub fn new(min: f64, max: f64) -> RangeResult<Self> {
        Self::with_range(min, max, min, max)
    }

    /// Slider spanning `[min, max]` with `(low, high)` selected
    pub fn with_range(min: f64, max: f64, low: f64, high: f64) -> RangeResult<Self> {
        let bounds = RangeBounds::new(min, max)?;
        let range = validate_range(bounds, low, high)?;
        Ok(Self {
            bounds,
            range,
            drag: DragState::Idle,
        })
    }

    pub fn bounds(&self) -> RangeBounds {
        self.bounds
    }

    /// Current `(low, high)`
    pub fn range(&self) -> SelectedRange {
        self.range
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Which handle a press at `value` would pick up
    ///
    /// The closer handle wins; an exact tie between distinct handles picks
    /// `Low`. Coincident handles cannot be told apart yet, so the result is
    /// [`DragState::Undecided`].
    pub fn grab(&self, value: f64) -> DragState {
        let SelectedRange { low, high } = self.range;
        if low == high {
            return DragState::Undecided;
        }

        if (value - high).abs() < (value - low).abs() {
            DragState::Dragging(Handle::High)
        } else {
            DragState::Dragging(Handle::Low)
        }
    }

    /// Range that results from moving the pointer to `value` during `drag`
    ///
    /// Returns the (possibly resolved) drag state alongside the new range.
    /// The moving handle is clamped to the bounds and to the other handle.
    pub fn drag_to(&self, drag: DragState, value: f64) -> (DragState, SelectedRange) {
        if value.is_nan() {
            return (drag, self.range);
        }

        let value = self.bounds.clamp(value);
        let SelectedRange { low, high } = self.range;

        let handle = match drag {
            DragState::Idle => return (drag, self.range),
            DragState::Dragging(handle) => handle,
            DragState::Undecided => {
                if value > high {
                    Handle::High
                } else if value < low {
                    Handle::Low
                } else {
                    return (drag, self.range);
                }
            }
        };

        let range = match handle {
            Handle::Low => SelectedRange::new(value.min(high), high),
            Handle::High => SelectedRange::new(low, value.max(low)),
        };

        (DragState::Dragging(handle), range)
    }

    /// Start a drag gesture at `value`
    pub fn pointer_down(&mut self, value: f64) -> DragState {
        self.drag = self.grab(value);
        log::debug!("range slider: pointer down at {:.4} -> {:?}", value, self.drag);
        self.drag
    }

    /// Move the active handle towards `value`
    ///
    /// Returns the new range if it changed.
    pub fn pointer_drag(&mut self, value: f64) -> Option<SelectedRange> {
        let (drag, range) = self.drag_to(self.drag, value);
        self.drag = drag;
        self.replace_range(range)
    }

    /// End the drag gesture
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Set the selected range programmatically
    ///
    /// Same validation as construction. On error the range is unchanged.
    /// Returns the new range if it differs from the current one.
    pub fn set_range(&mut self, low: f64, high: f64) -> RangeResult<Option<SelectedRange>> {
        let range = validate_range(self.bounds, low, high)?;
        Ok(self.replace_range(range))
    }

    /// Replace the bounds
    ///
    /// Identical bounds leave everything untouched. Returns the new range if
    /// the selection moved as a result.
    pub fn change_bounds(
        &mut self,
        min: f64,
        max: f64,
        change: BoundsChange,
    ) -> RangeResult<Option<SelectedRange>> {
        let bounds = RangeBounds::new(min, max)?;
        if bounds == self.bounds {
            return Ok(None);
        }

        let range = match change {
            BoundsChange::Reset => SelectedRange::new(bounds.min(), bounds.max()),
            BoundsChange::Keep => SelectedRange::new(
                bounds.clamp(self.range.low),
                bounds.clamp(self.range.high),
            ),
        };

        log::debug!(
            "range slider: bounds [{}, {}] -> [{}, {}] ({:?})",
            self.bounds.min(),
            self.bounds.max(),
            min,
            max,
            change
        );
        self.bounds = bounds;
        Ok(self.replace_range(range))
    }

    fn replace_range(&mut self, range: SelectedRange) -> Option<SelectedRange> {
        if range == self.range {
            return None;
        }
        self.range = range;
        log::debug!("range slider: range -> ({}, {})", range.low, range.high);
        Some(range)
    }
}

/// Check `min <= low <= high <= max` for a candidate range
pub fn validate_range(bounds: RangeBounds, low: f64, high: f64) -> RangeResult<SelectedRange> {
    if !low.is_finite() || !high.is_finite() {
        return Err(RangeError::NonFinite);
    }
    if low > high {
        return Err(RangeError::Inverted { low, high });
    }
    if !bounds.contains(low) || !bounds.contains(high) {
        return Err(RangeError::OutOfBounds {
            low,
            high,
            min: bounds.min(),
            max: bounds.max(),
        });
    }
    Ok(SelectedRange::new(low, high))
}
