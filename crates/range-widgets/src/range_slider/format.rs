//! Label text for slider values

use serde::{Deserialize, Serialize};

/// Seconds above which timestamps need an hours field
const MAX_SECONDS_WITHOUT_HOURS: f64 = 3599.0;

/// How the value labels under the track are rendered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Fixed number of decimal places, e.g. `0.25`
    Decimal { places: usize },
    /// Values are seconds, shown as `H:MM:SS` or `MM:SS`
    ///
    /// `max_seconds` picks the layout: without it, or above one hour, the
    /// hours field is always shown. Otherwise minutes are zero-padded and
    /// hours are folded into them.
    Timestamp { max_seconds: Option<f64> },
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Decimal { places: 2 }
    }
}

impl ValueFormat {
    /// Timestamp format sized for a clip of `max_seconds`
    pub fn timestamp(max_seconds: f64) -> Self {
        ValueFormat::Timestamp {
            max_seconds: Some(max_seconds),
        }
    }

    /// Render a value as label text
    pub fn format(&self, value: f64) -> String {
        match *self {
            ValueFormat::Decimal { places } => format!("{:.*}", places, value),
            ValueFormat::Timestamp { max_seconds } => format_timestamp(value, max_seconds),
        }
    }
}

fn format_timestamp(total_seconds: f64, max_seconds: Option<f64>) -> String {
    // Fractions are dropped, as are negative values
    let total = if total_seconds.is_finite() && total_seconds > 0.0 {
        total_seconds as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    match max_seconds {
        Some(max) if max > 0.0 && max <= MAX_SECONDS_WITHOUT_HOURS => {
            format!("{:02}:{:02}", hours * 60 + minutes, seconds)
        }
        _ => format!("{}:{:02}:{:02}", hours, minutes, seconds),
    }
}
