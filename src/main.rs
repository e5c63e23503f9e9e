// Regular Calendar Application
// Main entry point

use anyhow::{anyhow, Result};
use regular_calendar::services::settings::SettingsService;
use regular_calendar::ui_egui::{CalendarApp, CalendarCard, WINDOW_TITLE};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Regular Calendar");

    let settings_service = SettingsService::from_env();
    log::info!("Using config file {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let min_size = CalendarCard::outer_size() + egui::Vec2::splat(32.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size(min_size),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow!("Calendar window failed: {}", e))
}
