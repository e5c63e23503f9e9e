// Module exports for models

pub mod card;
pub mod day_grid;
pub mod selection;
pub mod settings;
