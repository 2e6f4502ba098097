//! Canvas Program implementation for the range slider
//!
//! Draws the track and both handles, and turns pointer events into
//! `on_change(low, high)` messages. All value math goes through
//! [`TrackGeometry`] and [`RangeSliderState`]; this file only deals with
//! iced events and drawing.

use super::geometry::TrackGeometry;
use super::state::{DragState, Handle, RangeSliderState};
use crate::theme::SliderStyle;
use iced::widget::canvas::{self, Event, Frame, Geometry, LineCap, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Theme};

/// Canvas state for tracking the drag gesture between events
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSliderInteraction {
    pub drag: DragState,
}

/// Canvas program for a two-handle range slider
///
/// Publishes `on_change(low, high)` while a handle is dragged. The host is
/// expected to apply the new range to its [`RangeSliderState`].
pub struct RangeSliderCanvas<'a, F> {
    pub state: &'a RangeSliderState,
    pub style: SliderStyle,
    pub on_change: F,
}

impl<'a, F> RangeSliderCanvas<'a, F> {
    fn track(&self, bounds: Rectangle) -> TrackGeometry {
        TrackGeometry::from_width(bounds.width, self.style.head_radius)
    }

    /// Handle under a widget-local point, if any
    fn handle_at(&self, track: TrackGeometry, bounds: Rectangle, point: Point) -> Option<Handle> {
        let center_y = bounds.height / 2.0;
        let range = self.state.range();
        let slider_bounds = self.state.bounds();

        [(Handle::High, range.high), (Handle::Low, range.low)]
            .into_iter()
            .find(|&(_, value)| {
                let center = Point::new(track.position_of(value, slider_bounds), center_y);
                center.distance(point) <= self.style.head_radius
            })
            .map(|(handle, _)| handle)
    }
}

impl<'a, Message, F> Program<Message> for RangeSliderCanvas<'a, F>
where
    Message: Clone,
    F: Fn(f64, f64) -> Message,
{
    type State = RangeSliderInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let track = self.track(bounds);
        let slider_bounds = self.state.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let value = track.value_at(position.x, slider_bounds);
                interaction.drag = self.state.grab(value);
                return Some(canvas::Action::request_redraw().and_capture());
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if !interaction.drag.is_dragging() {
                    return None;
                }

                // Absolute position so the handle keeps following (and
                // clamping) once the pointer leaves the widget
                let x = cursor.position()?.x - bounds.x;
                let value = track.value_at(x, slider_bounds);
                let (drag, range) = self.state.drag_to(interaction.drag, value);
                interaction.drag = drag;

                if range != self.state.range() {
                    return Some(
                        canvas::Action::publish((self.on_change)(range.low, range.high))
                            .and_capture(),
                    );
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if interaction.drag.is_dragging() {
                    interaction.drag = DragState::Idle;
                    return Some(canvas::Action::request_redraw());
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.drag.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        match cursor.position_in(bounds) {
            Some(point) if self.handle_at(self.track(bounds), bounds, point).is_some() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }

    fn draw(
        &self,
        interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let style = &self.style;
        let track = self.track(bounds);
        let center_y = bounds.height / 2.0;
        let range = self.state.range();
        let slider_bounds = self.state.bounds();

        // Track
        frame.stroke(
            &Path::line(
                Point::new(track.start, center_y),
                Point::new(track.end, center_y),
            ),
            Stroke::default()
                .with_color(style.track_color)
                .with_width(style.track_width)
                .with_line_cap(LineCap::Round),
        );

        let low_x = track.position_of(range.low, slider_bounds);
        let high_x = track.position_of(range.high, slider_bounds);

        // Selected segment
        if high_x > low_x {
            frame.stroke(
                &Path::line(Point::new(low_x, center_y), Point::new(high_x, center_y)),
                Stroke::default()
                    .with_color(style.head_color_inner)
                    .with_width(style.track_width),
            );
        }

        let active = |handle: Handle| match interaction.drag {
            DragState::Dragging(dragged) => dragged == handle,
            DragState::Undecided => true,
            DragState::Idle => false,
        };

        draw_head(&mut frame, style, Point::new(low_x, center_y), active(Handle::Low));
        draw_head(&mut frame, style, Point::new(high_x, center_y), active(Handle::High));

        vec![frame.into_geometry()]
    }
}

/// Draw one handle: outer disc with an inner dot
fn draw_head(frame: &mut Frame, style: &SliderStyle, center: Point, active: bool) {
    frame.fill(&Path::circle(center, style.head_radius), style.head_color_outer);

    let inner: Color = if active {
        style.active_color
    } else {
        style.head_color_inner
    };
    frame.fill(&Path::circle(center, style.head_radius_inner), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::event;
    use iced::Size;

    /// 120px wide at (50, 50): with the default 10px heads the track runs
    /// from x=60 to x=160, so absolute x maps to `value = x - 60` on [0, 100]
    fn widget_bounds() -> Rectangle {
        Rectangle::new(Point::new(50.0, 50.0), Size::new(120.0, 40.0))
    }

    fn slider(state: &RangeSliderState) -> RangeSliderCanvas<'_, fn(f64, f64) -> (f64, f64)> {
        RangeSliderCanvas {
            state,
            style: SliderStyle::default(),
            on_change: |low, high| (low, high),
        }
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn published(action: Option<canvas::Action<(f64, f64)>>) -> Option<(f64, f64)> {
        action.and_then(|action| action.into_inner().0)
    }

    #[test]
    fn test_press_grabs_nearest_handle_and_captures() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);
        let mut interaction = RangeSliderInteraction::default();

        let action = program.update(&mut interaction, &press(), widget_bounds(), at(80.0, 70.0));
        let (message, _, status) = action.unwrap().into_inner();
        assert_eq!(message, None);
        assert_eq!(status, event::Status::Captured);
        assert_eq!(interaction.drag, DragState::Dragging(Handle::Low));
    }

    #[test]
    fn test_drag_low_past_high_publishes_clamped_range() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);
        let mut interaction = RangeSliderInteraction::default();

        program.update(&mut interaction, &press(), widget_bounds(), at(80.0, 70.0));

        // Value 90 is beyond the high handle
        let action = program.update(&mut interaction, &moved(150.0, 70.0), widget_bounds(), at(150.0, 70.0));
        assert_eq!(published(action), Some((80.0, 80.0)));
    }

    #[test]
    fn test_drag_outside_widget_clamps_to_track_ends() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);

        let mut interaction = RangeSliderInteraction::default();
        program.update(&mut interaction, &press(), widget_bounds(), at(135.0, 70.0));
        assert_eq!(interaction.drag, DragState::Dragging(Handle::High));
        let action = program.update(
            &mut interaction,
            &moved(5_000.0, -300.0),
            widget_bounds(),
            at(5_000.0, -300.0),
        );
        assert_eq!(published(action), Some((20.0, 100.0)));

        let mut interaction = RangeSliderInteraction::default();
        program.update(&mut interaction, &press(), widget_bounds(), at(85.0, 70.0));
        let action = program.update(
            &mut interaction,
            &moved(-5_000.0, 900.0),
            widget_bounds(),
            at(-5_000.0, 900.0),
        );
        assert_eq!(published(action), Some((0.0, 80.0)));
    }

    #[test]
    fn test_press_outside_widget_is_ignored() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);
        let mut interaction = RangeSliderInteraction::default();

        let action = program.update(&mut interaction, &press(), widget_bounds(), at(10.0, 10.0));
        assert!(action.is_none());
        assert_eq!(interaction.drag, DragState::Idle);
    }

    #[test]
    fn test_coincident_handles_resolve_on_first_move() {
        let state = RangeSliderState::with_range(0.0, 100.0, 50.0, 50.0).unwrap();
        let program = slider(&state);

        let mut interaction = RangeSliderInteraction::default();
        program.update(&mut interaction, &press(), widget_bounds(), at(110.0, 70.0));
        assert_eq!(interaction.drag, DragState::Undecided);

        // Moving vertically over the handles decides nothing
        let action = program.update(&mut interaction, &moved(110.0, 80.0), widget_bounds(), at(110.0, 80.0));
        assert!(action.is_none());
        assert_eq!(interaction.drag, DragState::Undecided);

        let action = program.update(&mut interaction, &moved(135.0, 70.0), widget_bounds(), at(135.0, 70.0));
        assert_eq!(published(action), Some((50.0, 75.0)));
        assert_eq!(interaction.drag, DragState::Dragging(Handle::High));

        let mut interaction = RangeSliderInteraction::default();
        program.update(&mut interaction, &press(), widget_bounds(), at(110.0, 70.0));
        let action = program.update(&mut interaction, &moved(85.0, 70.0), widget_bounds(), at(85.0, 70.0));
        assert_eq!(published(action), Some((25.0, 50.0)));
        assert_eq!(interaction.drag, DragState::Dragging(Handle::Low));
    }

    #[test]
    fn test_unchanged_range_publishes_nothing() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);
        let mut interaction = RangeSliderInteraction::default();

        program.update(&mut interaction, &press(), widget_bounds(), at(80.0, 70.0));
        let action = program.update(&mut interaction, &moved(80.0, 75.0), widget_bounds(), at(80.0, 75.0));
        assert!(action.is_none());
        assert!(interaction.drag.is_dragging());
    }

    #[test]
    fn test_release_ends_drag() {
        let state = RangeSliderState::with_range(0.0, 100.0, 20.0, 80.0).unwrap();
        let program = slider(&state);
        let mut interaction = RangeSliderInteraction::default();

        program.update(&mut interaction, &press(), widget_bounds(), at(80.0, 70.0));

        // Released outside the widget still counts
        let action = program.update(&mut interaction, &release(), widget_bounds(), at(400.0, 400.0));
        assert!(action.is_some());
        assert_eq!(interaction.drag, DragState::Idle);

        let action = program.update(&mut interaction, &moved(150.0, 70.0), widget_bounds(), at(150.0, 70.0));
        assert!(action.is_none());

        // A second release with nothing held is not captured
        let action = program.update(&mut interaction, &release(), widget_bounds(), at(80.0, 70.0));
        assert!(action.is_none());
    }
}
