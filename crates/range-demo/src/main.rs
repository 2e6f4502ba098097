//! Range Slider demo - two-handle in/out sliders in a small window
//!
//! Shows a plain 0..1 slider and a timestamp slider for a 51:05 clip.
//! Dragging logs the new range at info level; right-clicking the window
//! logs every slider's in/out values.
//!
//! ## Command line flags
//!
//! - `--config <path>`: Read sliders and style from this YAML file
//! - `--write-default-config`: Write the default configuration and exit

mod app;
mod config;

use std::path::PathBuf;

use iced::{Size, Task};

use app::{Message, RangeDemoApp};

fn main() -> iced::Result {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let write_default = args.iter().any(|arg| arg == "--write-default-config");
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);

    // Initialize logger - set RUST_LOG=debug for widget internals
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("range-demo starting up");

    if write_default {
        if let Err(e) = config::save_config(&config::Config::default(), &config_path) {
            log::error!("Could not write default config: {:#}", e);
            std::process::exit(1);
        }
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let config = config::load_config(&config_path);

    iced::application(
        move || (RangeDemoApp::new(config.clone()), Task::none()),
        update,
        view,
    )
    .theme(theme)
    .title("range-demo - Range Slider")
    .window_size(Size::new(460.0, 300.0))
    .run()
}

/// Update function for iced
fn update(app: &mut RangeDemoApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &RangeDemoApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Theme function for iced
fn theme(app: &RangeDemoApp) -> iced::Theme {
    app.theme()
}
