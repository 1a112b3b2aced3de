use self::app::AppState;
use eframe::egui;

pub mod app;
pub mod config;

pub fn egui_main() -> Result<(), eframe::Error> {
    let app = AppState::default();
    let min_size = app.config.min_window_size as f32;

    let mut viewport = egui::ViewportBuilder::default()
        .with_decorations(app.config.window_decorated)
        .with_title("radixcalc")
        .with_inner_size([min_size * 1.6, min_size])
        .with_min_inner_size([min_size, min_size * 0.6])
        .with_resizable(true);

    if app.config.always_on_top {
        viewport = viewport.with_always_on_top();
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native("radixcalc", options, Box::new(|_cc| Box::new(app)))
}
