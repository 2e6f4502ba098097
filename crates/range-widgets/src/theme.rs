//! Shared theme constants for range slider components
//!
//! Colors and sizes for the track and handles, plus a YAML-friendly
//! configuration form where colors are hex strings.

use iced::Color;
use serde::{Deserialize, Serialize};

/// Track line color (#476b6b)
pub const TRACK_COLOR: Color = Color::from_rgb(0.278, 0.420, 0.420);
/// Outer handle circle color (#c2d6d6)
pub const HEAD_COLOR_OUTER: Color = Color::from_rgb(0.761, 0.839, 0.839);
/// Inner handle circle color (#5c8a8a)
pub const HEAD_COLOR_INNER: Color = Color::from_rgb(0.361, 0.541, 0.541);
/// Inner dot of the handle being dragged
pub const ACTIVE_COLOR: Color = Color::from_rgb(0.9, 0.75, 0.35);
/// Value label color
pub const LABEL_COLOR: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Visual parameters for a range slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    /// Widget width in pixels
    pub width: f32,
    /// Canvas height in pixels (labels are added below)
    pub height: f32,
    pub track_color: Color,
    pub track_width: f32,
    pub head_color_outer: Color,
    pub head_color_inner: Color,
    /// Outer circle radius; also the track inset on both ends
    pub head_radius: f32,
    pub head_radius_inner: f32,
    pub active_color: Color,
    pub label_color: Color,
    pub label_size: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 40.0,
            track_color: TRACK_COLOR,
            track_width: 3.0,
            head_color_outer: HEAD_COLOR_OUTER,
            head_color_inner: HEAD_COLOR_INNER,
            head_radius: 10.0,
            head_radius_inner: 5.0,
            active_color: ACTIVE_COLOR,
            label_color: LABEL_COLOR,
            label_size: 12.0,
        }
    }
}

/// Serializable slider style
///
/// Colors are specified as hex strings (e.g., "#476b6b")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyleConfig {
    pub width: f32,
    pub height: f32,
    pub track_color: String,
    pub track_width: f32,
    pub head_color_outer: String,
    pub head_color_inner: String,
    pub head_radius: f32,
    pub head_radius_inner: f32,
    pub active_color: String,
    pub label_color: String,
    pub label_size: f32,
}

impl Default for SliderStyleConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 40.0,
            track_color: "#476b6b".to_string(),
            track_width: 3.0,
            head_color_outer: "#c2d6d6".to_string(),
            head_color_inner: "#5c8a8a".to_string(),
            head_radius: 10.0,
            head_radius_inner: 5.0,
            active_color: "#e6bf59".to_string(),
            label_color: "#cccccc".to_string(),
            label_size: 12.0,
        }
    }
}

impl SliderStyleConfig {
    /// Resolve into a drawable style
    ///
    /// Sizes are sanitised so the widget always has room for its handles.
    /// A color that doesn't parse falls back to that field's default.
    pub fn to_style(&self) -> SliderStyle {
        let defaults = SliderStyle::default();
        let head_radius = self.head_radius.max(1.0);
        SliderStyle {
            width: self.width.max(head_radius * 2.0),
            height: self.height.max(head_radius * 2.0),
            track_color: color_or("track_color", &self.track_color, defaults.track_color),
            track_width: self.track_width.max(0.5),
            head_color_outer: color_or(
                "head_color_outer",
                &self.head_color_outer,
                defaults.head_color_outer,
            ),
            head_color_inner: color_or(
                "head_color_inner",
                &self.head_color_inner,
                defaults.head_color_inner,
            ),
            head_radius,
            head_radius_inner: self.head_radius_inner.clamp(0.0, head_radius),
            active_color: color_or("active_color", &self.active_color, defaults.active_color),
            label_color: color_or("label_color", &self.label_color, defaults.label_color),
            label_size: self.label_size.max(1.0),
        }
    }
}

fn color_or(field: &str, hex: &str, fallback: Color) -> Color {
    parse_hex_color(hex).unwrap_or_else(|| {
        log::warn!("Invalid {} '{}', keeping the default", field, hex);
        fallback
    })
}

/// Parse a hex color string to an iced Color
///
/// Accepts "#RGB", "#RRGGBB" and "#RRGGBBAA", with or without the leading '#'.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => {
            let mut nibbles = digits.chars().filter_map(|c| c.to_digit(16)).map(|n| (n * 17) as u8);
            Some(Color::from_rgb8(nibbles.next()?, nibbles.next()?, nibbles.next()?))
        }
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            f32::from(channel(6)?) / 255.0,
        )),
        _ => None,
    }
}
