use crate::math::{base::NumberBase, bmi::Bmi};
use crate::state::{State, copy_to_clipboard};
use super::config::EguiConfig;
use eframe::{
    egui::{self, FontId, Grid, RichText, TextEdit, Visuals},
    epaint::Color32,
};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Converter,
    Bmi,
}

pub struct AppState {
    pub state: State,
    pub config: EguiConfig,
    pub tab: Tab,
    pub copied: Option<(NumberBase, f64)>,// field and the time it was copied at
    pub weight: String,
    pub height: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            state: State::default(),
            config: EguiConfig::load(),
            tab: Tab::Converter,
            copied: None,
            weight: String::new(),
            height: String::new(),
        }
    }
}

impl AppState {
    /// Drop the copy notice once it has been shown long enough.
    fn expire_copied(&mut self, now: f64) {
        if matches!(self.copied, Some((_, at)) if now - at >= self.config.copy_alert_time as f64) {
            self.copied = None;
        }
    }

    fn bmi(&self) -> Option<Result<Bmi, String>> {
        if self.weight.trim().is_empty() || self.height.trim().is_empty() {
            return None;
        }
        let weight = self.weight.trim().parse::<f64>();
        let height = self.height.trim().parse::<f64>();
        Some(match (weight, height) {
            (Ok(w), Ok(h)) => Bmi::from_metric(w, h).map_err(|e| e.to_string()),
            _ => Err("enter numbers only".to_owned()),
        })
    }

    fn converter_ui(&mut self, ui: &mut egui::Ui, now: f64) {
        let font = FontId::monospace(self.config.font_size);
        Grid::new("radix_fields").num_columns(3).spacing([12., 8.]).show(ui, |ui| {
            for base in NumberBase::ALL {
                ui.label(RichText::new(base.label()).size(self.config.font_size));
                let mut text = self.state.display(base);
                let edit = TextEdit::singleline(&mut text)
                    .font(font.clone())
                    .desired_width(f32::INFINITY);
                let response = ui.add(edit);
                if response.changed() {
                    // a rejected edit reverts on the next frame
                    self.state.converter.set_from(base, &text);
                }
                if response.has_focus() {
                    self.state.focus = base;
                }
                let copied = matches!(self.copied, Some((b, at)) if b == base
                    && now - at < self.config.copy_alert_time as f64);
                let label = if copied { "Copied" } else { "Copy" };
                if ui.button(label).clicked() && copy_to_clipboard(&self.state.display(base)) {
                    self.copied = Some((base, now));
                }
                ui.end_row();
            }
        });
        ui.add_space(8.);
        if ui.button("Clear").clicked() {
            self.state.converter.clear();
        }
    }

    fn bmi_ui(&mut self, ui: &mut egui::Ui) {
        let font = FontId::proportional(self.config.font_size);
        Grid::new("bmi_fields").num_columns(2).spacing([12., 8.]).show(ui, |ui| {
            ui.label(RichText::new("Weight (kg)").size(self.config.font_size));
            ui.add(TextEdit::singleline(&mut self.weight).font(font.clone()));
            ui.end_row();
            ui.label(RichText::new("Height (cm)").size(self.config.font_size));
            ui.add(TextEdit::singleline(&mut self.height).font(font.clone()));
            ui.end_row();
        });
        ui.add_space(8.);
        match self.bmi() {
            Some(Ok(bmi)) => {
                ui.label(RichText::new(format!("BMI {bmi}")).size(self.config.font_size * 1.4));
            },
            Some(Err(e)) => {
                ui.label(RichText::new(e).color(Color32::LIGHT_RED));
            },
            None => {},
        }
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = Visuals {
            panel_fill: Color32::BLACK,
            override_text_color: Some(Color32::WHITE),
            ..Visuals::dark()
        };
        ctx.set_visuals(visuals);
        let now = ctx.input(|i| i.time);
        self.expire_copied(now);

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Converter, "Converter");
                ui.selectable_value(&mut self.tab, Tab::Bmi, "BMI");
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.tab {
                Tab::Converter => self.converter_ui(ui, now),
                Tab::Bmi => self.bmi_ui(ui),
            }
        });

        if let Some((_, at)) = self.copied {
            // repaint once more so the copy notice goes away
            let remaining = (at + self.config.copy_alert_time as f64 - now).max(0.);
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn app() -> AppState {
        AppState {
            state: State::with_config(Config::default()),
            config: EguiConfig::default(),
            tab: Tab::Bmi,
            copied: None,
            weight: String::new(),
            height: String::new(),
        }
    }

    #[test]
    fn bmi_waits_for_both_fields() {
        let mut a = app();
        a.weight = "70".to_owned();
        assert!(a.bmi().is_none());
        a.height = "175".to_owned();
        assert_eq!(a.bmi().unwrap().unwrap().to_string(), "22.9 (normal)");
    }

    #[test]
    fn copy_notice_expires() {
        let mut a = app();
        a.copied = Some((NumberBase::Hexadecimal, 10.));
        a.expire_copied(10.5);
        assert_eq!(a.copied, Some((NumberBase::Hexadecimal, 10.)));
        a.expire_copied(10. + a.config.copy_alert_time as f64);
        assert_eq!(a.copied, None);
    }

    #[test]
    fn bmi_reports_bad_input() {
        let mut a = app();
        a.weight = "seventy".to_owned();
        a.height = "175".to_owned();
        assert_eq!(a.bmi(), Some(Err("enter numbers only".to_owned())));
        a.weight = "0".to_owned();
        assert_eq!(a.bmi(), Some(Err("weight must be a positive number".to_owned())));
    }
}
