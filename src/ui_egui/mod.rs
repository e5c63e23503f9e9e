mod app;
pub mod calendar_card;
pub mod nudge;
mod palette;
pub mod regular_calendar;
pub mod theme;

pub use app::{CalendarApp, WINDOW_TITLE};
pub use calendar_card::CalendarCard;
pub use regular_calendar::RegularCalendar;
