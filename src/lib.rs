pub mod config;
pub mod converter;
pub mod egui_frontend;
pub mod math;
pub mod state;
pub mod term_frontend;
