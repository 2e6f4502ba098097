//! Range slider widgets for iced applications
//!
//! This crate provides a two-handle range slider for selecting a `(low, high)`
//! sub-range of `[min, max]`, such as the in/out points of a media clip.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct**: `RangeSliderState`, pure data plus clamping rules
//! - **View functions**: `range_slider` takes state + callback, returns `Element<Message>`
//! - **Canvas Program**: `RangeSliderCanvas` handles drawing and event-to-callback translation
//!
//! Hosts without an iced message loop can use `RangeSlider`, which feeds raw
//! pointer coordinates through the same state and calls a change listener.

pub mod range_slider;
pub mod theme;

// Re-export commonly used items
pub use theme::{parse_hex_color, SliderStyle, SliderStyleConfig};

pub use range_slider::{
    range_labels, range_slider, range_slider_canvas, range_slider_with_labels, BoundsChange,
    DragState, Handle, RangeBounds, RangeError, RangeResult, RangeSlider, RangeSliderState,
    SelectedRange, TrackGeometry, ValueFormat,
};
