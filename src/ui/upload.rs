// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;
use std::time::Instant;

use crate::file;
use crate::state::{AppState, ToastKind, UploadPhase};

pub fn show_upload_view(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading("Upload Your Resume");
        ui.label(egui::RichText::new("Get personalized career insights in seconds").weak());
        ui.add_space(16.0);
    });

    let max_width = ui.available_width().min(560.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(max_width);
        match state.upload.phase() {
            UploadPhase::Idle => {
                show_drop_target(ui, state, now);
                ui.add_space(16.0);
                show_tips_card(ui);
            }
            UploadPhase::Transferring => show_transfer_card(ui, state),
            UploadPhase::Complete => show_complete_card(ui, state),
        }
    });
}

fn show_drop_target(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    ui.group(|ui| {
        ui.set_min_height(200.0);
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(egui::RichText::new("📄").size(40.0));
            ui.add_space(8.0);
            if hovering_files {
                ui.strong("Drop to upload");
            } else {
                ui.strong("Drag and drop your resume here");
                ui.label(egui::RichText::new("or browse for a file").weak());
            }
            ui.add_space(12.0);

            if ui
                .add(egui::Button::new("Choose File...").min_size(egui::vec2(140.0, 32.0)))
                .clicked()
            {
                pick_resume_file(state, now);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                // Center the format chips by hand
                let chips_width = 150.0;
                ui.add_space((ui.available_width() - chips_width).max(0.0) / 2.0);
                for chip in ["PDF", "DOCX", "TXT"] {
                    ui.small(chip);
                    ui.add_space(8.0);
                }
            });
            ui.small("Maximum file size: 10 MB");
            ui.add_space(16.0);
        });
    });
}

/// Opens the native picker and submits the chosen file. Runs on the UI
/// thread; the window blocks until the dialog closes.
fn pick_resume_file(state: &mut AppState, now: Instant) {
    let file_dialog = FileDialog::new()
        .add_filter("Resume files", &["pdf", "docx", "txt"])
        .set_title("Choose a resume");

    if let Some(path) = file_dialog.pick_file() {
        match file::inspect(&path) {
            Ok(uploaded) => state.submit_upload(uploaded, now),
            Err(e) => {
                tracing::warn!("Could not read picked file: {e:#}");
                state.toasts.notify(
                    now,
                    "Could not read file",
                    "The selected file could not be opened. Please try another file.",
                    ToastKind::Destructive,
                );
            }
        }
    }
}

fn show_transfer_card(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_min_height(200.0);
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.strong("Uploading your resume...");
            if let Some(name) = state.upload.file_name() {
                ui.label(egui::RichText::new(name).weak());
            }
            ui.add_space(16.0);
            ui.add(
                egui::ProgressBar::new(state.upload.progress() / 100.0).desired_width(360.0),
            );
            ui.add_space(8.0);
            ui.label(format!("{}% complete", state.upload.display_percent()));
            ui.add_space(24.0);
        });
    });
}

fn show_complete_card(ui: &mut egui::Ui, state: &mut AppState) {
    ui.group(|ui| {
        ui.set_min_height(200.0);
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("✔")
                    .size(40.0)
                    .color(egui::Color32::GREEN),
            );
            ui.add_space(8.0);
            ui.strong("Upload Complete!");
            if let Some(name) = state.upload.file_name() {
                ui.label(egui::RichText::new(name).weak());
            }
            ui.add_space(8.0);
            ui.label("Analyzing your resume...");
            ui.add(egui::Spinner::new());
            ui.add_space(24.0);
        });
    });
}

fn show_tips_card(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.strong("Tips for best results");
            ui.add_space(4.0);
            ui.label("• Use your most recent resume");
            ui.label("• Include your technical skills and tools");
            ui.label("• List concrete projects and outcomes");
        });
    });
}
