//! Two-handle range slider
//!
//! Lets the user mark an "in" and "out" point along a continuous range,
//! e.g. the trim region of a clip.
//!
//! ```text
//!   ○━━━━━━━━━◉═══════════════════◉━━━━━━━○
//!  min       low                 high    max
//!  0:01:05                          0:42:10
//! ```
//!
//! ## Layers
//!
//! - `geometry`: pixel ⇄ value mapping (pure)
//! - `state`: bounds, selection, drag rules (pure)
//! - `controller`: state + change listener for raw pointer hosts
//! - `canvas` / `view`: iced rendering and event translation

mod canvas;
mod controller;
mod error;
mod format;
mod geometry;
mod state;
mod view;

pub use canvas::{RangeSliderCanvas, RangeSliderInteraction};
pub use controller::RangeSlider;
pub use error::{RangeError, RangeResult};
pub use format::ValueFormat;
pub use geometry::TrackGeometry;
pub use state::{
    validate_range, BoundsChange, DragState, Handle, RangeBounds, RangeSliderState, SelectedRange,
};
pub use view::{range_labels, range_slider, range_slider_canvas, range_slider_with_labels};
