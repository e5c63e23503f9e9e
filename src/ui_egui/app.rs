use super::regular_calendar::RegularCalendar;
use super::theme::CalendarTheme;
use crate::models::settings::Settings;

/// Window title and accessible name of the screen
pub const WINDOW_TITLE: &str = "Calendar Screen Regular";

pub struct CalendarApp {
    settings: Settings,
    calendar: RegularCalendar,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.calendar.show(ui);
        });
    }
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        // The page itself is always light; each card paints its own theme.
        CalendarTheme::light().apply_to_context(&cc.egui_ctx);
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        log::info!("Mounting {} calendar card(s)", settings.cards.len());
        let calendar = RegularCalendar::from_settings(&settings);
        Self { settings, calendar }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn calendar(&self) -> &RegularCalendar {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut RegularCalendar {
        &mut self.calendar
    }

    /// Rebuild every card, dropping their selections.
    pub fn remount(&mut self) {
        log::info!("Remounting calendar cards");
        self.calendar = RegularCalendar::from_settings(&self.settings);
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // F5 resets the screen like a page reload
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.remount();
        }
    }
}
