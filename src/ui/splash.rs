// src/ui/splash.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_splash_view(ui: &mut egui::Ui, state: &mut AppState) {
    let progress = state.splash.progress();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);

        ui.label(egui::RichText::new("🧭").size(64.0));
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("Career Compass").size(30.0).strong());
        ui.label(
            egui::RichText::new("Find your path. Build your skills. Shape your future.").weak(),
        );
        ui.add_space(24.0);

        ui.add(
            egui::ProgressBar::new(progress as f32 / 100.0)
                .desired_width(320.0)
                .show_percentage(),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(state.splash.status_line()).italics().weak());
    });
}
