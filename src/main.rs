mod app;
mod booking;
mod catalog;
mod config;
mod data;
mod dates;
mod forms;
mod models;
mod records;
mod route;
mod schedule;
mod screens;
mod ui;

use iced::{Size, Task};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use app::App;
use config::load_config;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let loaded = load_config();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&config.log_filter);
    if let Err(err) = &loaded {
        warn!(error = %err, "using default configuration");
    }
    info!(theme = %config.theme_name, "starting EduPlatform");

    let window = Size::new(config.window_width, config.window_height);
    iced::application("EduPlatform", App::update, App::view)
        .theme(|app: &App| app.theme.clone())
        .subscription(App::subscription)
        .window_size(window)
        .run_with(move || (App::new(config), Task::none()))
}
