//! Demo application state and iced implementation

use crate::config::Config;
use iced::widget::{column, container, mouse_area, text, Column};
use iced::{Color, Element, Length, Task, Theme};
use range_widgets::{range_slider, RangeSliderState, SliderStyle, ValueFormat};

const HINT_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.6);

/// A labelled slider in the window
#[derive(Debug, Clone)]
pub struct SliderEntry {
    pub label: String,
    pub state: RangeSliderState,
    pub format: ValueFormat,
}

impl SliderEntry {
    /// Log line for the current selection, e.g. `Timestamp: in=01:05 out=50:00`
    pub fn describe(&self) -> String {
        let range = self.state.range();
        format!(
            "{}: in={} out={}",
            self.label,
            self.format.format(range.low),
            self.format.format(range.high)
        )
    }
}

/// Messages produced by the demo window
#[derive(Debug, Clone)]
pub enum Message {
    /// Slider `index` was dragged to `(low, high)`
    RangeChanged(usize, f64, f64),
    /// Right click: dump every slider's in/out values to the log
    LogValues,
}

/// Demo window with one or more range sliders
pub struct RangeDemoApp {
    sliders: Vec<SliderEntry>,
    style: SliderStyle,
}

impl RangeDemoApp {
    /// Build the window from configuration
    ///
    /// Slider definitions with invalid bounds or initial values are skipped
    /// with a warning.
    pub fn new(config: Config) -> Self {
        let sliders = config
            .sliders
            .iter()
            .filter_map(|slider| {
                match slider.to_state() {
                    Ok(state) => Some(SliderEntry {
                        label: slider.label.clone(),
                        state,
                        format: slider.format,
                    }),
                    Err(e) => {
                        log::warn!("Skipping slider '{}': {}", slider.label, e);
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        log::info!("Range demo ready with {} slider(s)", sliders.len());

        Self {
            sliders,
            style: config.style.to_style(),
        }
    }

    pub fn sliders(&self) -> &[SliderEntry] {
        &self.sliders
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RangeChanged(index, low, high) => {
                let Some(entry) = self.sliders.get_mut(index) else {
                    log::warn!("Range change for unknown slider {}", index);
                    return Task::none();
                };

                match entry.state.set_range(low, high) {
                    Ok(Some(_)) => log::info!("{}", entry.describe()),
                    Ok(None) => {}
                    Err(e) => log::warn!("{} slider rejected range: {}", entry.label, e),
                }
            }
            Message::LogValues => {
                for entry in &self.sliders {
                    log::info!("{} {:?}", entry.describe(), entry.state.range().as_tuple());
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new().spacing(16).padding(20);

        for (index, entry) in self.sliders.iter().enumerate() {
            content = content.push(
                column![
                    text(entry.label.as_str()).size(14),
                    range_slider(&entry.state, self.style, entry.format, move |low, high| {
                        Message::RangeChanged(index, low, high)
                    }),
                ]
                .spacing(4),
            );
        }

        content = content.push(
            text("Right-click anywhere to log the in/out values")
                .size(11)
                .color(HINT_COLOR),
        );

        mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_right_press(Message::LogValues)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;

    fn demo() -> RangeDemoApp {
        RangeDemoApp::new(Config::default())
    }

    #[test]
    fn test_default_sliders_select_full_range() {
        let app = demo();
        assert_eq!(app.sliders().len(), 2);
        assert_eq!(app.sliders()[0].state.range().as_tuple(), (0.0, 1.0));
        assert_eq!(app.sliders()[1].state.range().as_tuple(), (0.0, 3065.0));
    }

    #[test]
    fn test_range_changed_updates_slider() {
        let mut app = demo();
        let _ = app.update(Message::RangeChanged(1, 65.0, 3000.0));
        assert_eq!(app.sliders()[1].state.range().as_tuple(), (65.0, 3000.0));
        assert_eq!(app.sliders()[0].state.range().as_tuple(), (0.0, 1.0));
    }

    #[test]
    fn test_describe_uses_slider_format() {
        let mut app = demo();
        let _ = app.update(Message::RangeChanged(1, 65.0, 3000.0));
        let _ = app.update(Message::RangeChanged(0, 0.25, 0.5));
        assert_eq!(app.sliders()[1].describe(), "Timestamp: in=01:05 out=50:00");
        assert_eq!(app.sliders()[0].describe(), "Value: in=0.25 out=0.50");
    }

    #[test]
    fn test_invalid_range_is_ignored() {
        let mut app = demo();
        let _ = app.update(Message::RangeChanged(0, 0.8, 0.2));
        let _ = app.update(Message::RangeChanged(7, 0.1, 0.2));
        assert_eq!(app.sliders()[0].state.range().as_tuple(), (0.0, 1.0));
    }

    #[test]
    fn test_invalid_slider_definitions_are_skipped() {
        let mut config = Config::default();
        config.sliders.push(SliderConfig {
            label: String::from("Broken"),
            min: 5.0,
            max: 1.0,
            low: None,
            high: None,
            format: ValueFormat::default(),
        });
        config.sliders.push(SliderConfig {
            label: String::from("Out of bounds"),
            min: 0.0,
            max: 1.0,
            low: Some(-1.0),
            high: None,
            format: ValueFormat::default(),
        });

        let app = RangeDemoApp::new(config);
        assert_eq!(app.sliders().len(), 2);
    }
}
