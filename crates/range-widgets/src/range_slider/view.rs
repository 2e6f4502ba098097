//! Range slider view function
//!
//! Follows the iced 0.14 pattern: a plain function taking state and a
//! callback closure, returning an `Element`.
//!
//! ## Usage
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     range_slider(
//!         &self.trim,
//!         SliderStyle::default(),
//!         ValueFormat::timestamp(self.clip_seconds),
//!         |low, high| Message::TrimChanged(low, high),
//!     )
//! }
//!
//! fn update(&mut self, message: Message) {
//!     match message {
//!         Message::TrimChanged(low, high) => {
//!             if let Err(e) = self.trim.set_range(low, high) {
//!                 log::warn!("rejected trim range: {}", e);
//!             }
//!         }
//!     }
//! }
//! ```

use super::canvas::RangeSliderCanvas;
use super::format::ValueFormat;
use super::state::RangeSliderState;
use crate::theme::SliderStyle;
use iced::widget::{column, row, text, Canvas, Space};
use iced::{Element, Length};

/// Gap between the canvas and the value labels
const LABEL_SPACING: f32 = 2.0;

/// Create a range slider element with "in"/"out" value labels
///
/// # Arguments
///
/// * `state` - Bounds and selected range to display
/// * `style` - Colors and sizes
/// * `format` - How the low/high labels are rendered
/// * `on_change` - Called with the new `(low, high)` while a handle is dragged
pub fn range_slider<'a, Message>(
    state: &'a RangeSliderState,
    style: SliderStyle,
    format: ValueFormat,
    on_change: impl Fn(f64, f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    range_slider_with_labels(state, style, move |value| format.format(value), on_change)
}

/// Same as [`range_slider`], with label text produced by `label`
///
/// For hosts whose labels don't fit [`ValueFormat`], e.g. frame numbers or
/// musical bars.
pub fn range_slider_with_labels<'a, Message>(
    state: &'a RangeSliderState,
    style: SliderStyle,
    label: impl Fn(f64) -> String,
    on_change: impl Fn(f64, f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let (low_label, high_label) = range_labels(state, label);

    let labels = row![
        text(low_label)
            .size(style.label_size)
            .color(style.label_color),
        Space::new().width(Length::Fill),
        text(high_label)
            .size(style.label_size)
            .color(style.label_color),
    ]
    .width(Length::Fixed(style.width));

    column![range_slider_canvas(state, style, on_change), labels]
        .spacing(LABEL_SPACING)
        .into()
}

/// Text for the `(low, high)` labels under the track
pub fn range_labels(
    state: &RangeSliderState,
    label: impl Fn(f64) -> String,
) -> (String, String) {
    let range = state.range();
    (label(range.low), label(range.high))
}

/// Create the bare slider canvas (track and handles, no labels)
pub fn range_slider_canvas<'a, Message>(
    state: &'a RangeSliderState,
    style: SliderStyle,
    on_change: impl Fn(f64, f64) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(RangeSliderCanvas {
        state,
        style,
        on_change,
    })
    .width(Length::Fixed(style.width))
    .height(Length::Fixed(style.height))
    .into()
}
