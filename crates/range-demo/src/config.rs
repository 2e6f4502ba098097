//! Configuration for range-demo
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/range-demo/config.yaml

use anyhow::{Context, Result};
use range_widgets::{RangeResult, RangeSliderState, SliderStyleConfig, ValueFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Length of the demo clip on the timestamp slider (51:05)
pub const DEMO_MAXIMUM_TIME_IN_SECONDS: f64 = 3065.0;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Look of every slider in the window
    pub style: SliderStyleConfig,
    /// Sliders shown in the window, top to bottom
    pub sliders: Vec<SliderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: SliderStyleConfig::default(),
            sliders: vec![
                SliderConfig {
                    label: String::from("Value"),
                    min: 0.0,
                    max: 1.0,
                    low: None,
                    high: None,
                    format: ValueFormat::default(),
                },
                SliderConfig {
                    label: String::from("Timestamp"),
                    min: 0.0,
                    max: DEMO_MAXIMUM_TIME_IN_SECONDS,
                    low: None,
                    high: None,
                    format: ValueFormat::timestamp(DEMO_MAXIMUM_TIME_IN_SECONDS),
                },
            ],
        }
    }
}

/// One slider definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Initial "in" value (defaults to `min`)
    #[serde(default)]
    pub low: Option<f64>,
    /// Initial "out" value (defaults to `max`)
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub format: ValueFormat,
}

impl SliderConfig {
    /// Initial `(low, high)`, falling back to the bounds
    pub fn initial_range(&self) -> (f64, f64) {
        (self.low.unwrap_or(self.min), self.high.unwrap_or(self.max))
    }

    /// Widget state for this definition, or why the widget rejects it
    pub fn to_state(&self) -> RangeResult<RangeSliderState> {
        let (low, high) = self.initial_range();
        RangeSliderState::with_range(self.min, self.max, low, high)
    }
}

impl Config {
    /// Drop slider definitions the widget would reject
    ///
    /// If that leaves nothing to show, the default sliders are restored.
    pub fn validated(mut self) -> Self {
        let defined = self.sliders.len();
        self.sliders.retain(|slider| match slider.to_state() {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Ignoring slider '{}': {}", slider.label, e);
                false
            }
        });

        if defined > 0 && self.sliders.is_empty() {
            log::warn!("No usable slider definitions, showing the default sliders");
            self.sliders = Config::default().sliders;
        }
        self
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/range-demo/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("range-demo")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// A missing or unparsable file gives the default config. Slider
/// definitions with bad bounds or initial values are dropped with a warning.
pub fn load_config(path: &Path) -> Config {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {:?}, using the default sliders", path);
            return Config::default();
        }
        Err(e) => {
            log::warn!("Could not read {:?}: {}, using defaults", path, e);
            return Config::default();
        }
    };

    match serde_yaml::from_str::<Config>(&contents) {
        Ok(config) => {
            let config = config.validated();
            log::info!("Loaded {} slider(s) from {:?}", config.sliders.len(), path);
            config
        }
        Err(e) => {
            log::warn!("Could not parse {:?}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Refuses to write slider definitions that could not be loaded back.
/// Creates parent directories if they don't exist.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    for slider in &config.sliders {
        slider
            .to_state()
            .with_context(|| format!("Slider '{}' cannot be saved", slider.label))?;
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("Saved {} slider(s) to {:?}", config.sliders.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sliders.len(), 2);
        assert_eq!(config.sliders[0].initial_range(), (0.0, 1.0));
        assert_eq!(config.sliders[1].max, DEMO_MAXIMUM_TIME_IN_SECONDS);
        assert_eq!(config.sliders[1].format.format(3065.0), "51:05");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("missing.yaml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "sliders: [this is not: valid").unwrap();
        assert_eq!(load_config(&path), Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.sliders.push(SliderConfig {
            label: String::from("Trim"),
            min: 10.0,
            max: 20.0,
            low: Some(12.0),
            high: Some(18.0),
            format: ValueFormat::Decimal { places: 1 },
        });
        config.style.track_color = String::from("#102030");

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_partial_slider_definition() {
        let yaml = "sliders:\n  - label: Gain\n    min: -12.0\n    max: 12.0\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sliders.len(), 1);
        assert_eq!(config.sliders[0].initial_range(), (-12.0, 12.0));
        assert_eq!(config.sliders[0].format, ValueFormat::default());
        assert_eq!(config.style, SliderStyleConfig::default());
    }

    fn slider(label: &str, min: f64, max: f64, low: Option<f64>) -> SliderConfig {
        SliderConfig {
            label: String::from(label),
            min,
            max,
            low,
            high: None,
            format: ValueFormat::default(),
        }
    }

    #[test]
    fn test_load_drops_invalid_sliders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "sliders:\n  - label: Gain\n    min: -12.0\n    max: 12.0\n  - label: Upside down\n    min: 5.0\n    max: 1.0\n  - label: Early\n    min: 0.0\n    max: 1.0\n    low: -0.5\n",
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.sliders.len(), 1);
        assert_eq!(config.sliders[0].label, "Gain");
    }

    #[test]
    fn test_all_invalid_sliders_restore_defaults() {
        let config = Config {
            style: SliderStyleConfig::default(),
            sliders: vec![slider("Flat", 3.0, 3.0, None)],
        }
        .validated();
        assert_eq!(config.sliders, Config::default().sliders);
    }

    #[test]
    fn test_empty_slider_list_is_kept() {
        let config = Config {
            style: SliderStyleConfig::default(),
            sliders: Vec::new(),
        }
        .validated();
        assert!(config.sliders.is_empty());
    }

    #[test]
    fn test_save_rejects_invalid_slider() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.sliders.push(slider("Late", 0.0, 1.0, Some(2.0)));

        let err = save_config(&config, &path).unwrap_err();
        assert!(format!("{:#}", err).contains("Late"));
        assert!(!path.exists());
    }
}
