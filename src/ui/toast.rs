// src/ui/toast.rs
use eframe::egui;

use crate::state::{ToastKind, Toasts};

/// Draws the notification stack in the bottom-right corner, on top of
/// whatever screen is showing. Purely informational; clicks pass through.
pub fn show_toasts(ctx: &egui::Context, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toast_stack"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                let accent = match toast.kind {
                    ToastKind::Info => egui::Color32::LIGHT_GREEN,
                    ToastKind::Destructive => egui::Color32::LIGHT_RED,
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.colored_label(accent, egui::RichText::new(&toast.title).strong());
                    ui.label(egui::RichText::new(&toast.description).weak());
                });
                ui.add_space(6.0);
            }
        });
}
