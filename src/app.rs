// src/app.rs
use eframe::egui;
use std::time::Instant;

use crate::config::Settings;
use crate::file;
use crate::state::{AppState, Screen, ToastKind};
use crate::ui;

pub struct CompassApp {
    state: AppState,
}

impl CompassApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings, Instant::now()),
        }
    }

    /// Files dropped onto the window count as submissions, but only while
    /// the upload screen is showing.
    fn handle_dropped_files(&mut self, ctx: &egui::Context, now: Instant) {
        if self.state.current_screen != Screen::Upload {
            return;
        }
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for dropped_file in dropped {
            let described = match &dropped_file.path {
                Some(path) => file::inspect(path),
                // Some platforms deliver bytes without a path
                None => Ok(file::UploadedFile::new(
                    dropped_file.name.clone(),
                    dropped_file.bytes.as_ref().map_or(0, |bytes| bytes.len() as u64),
                    file::mime_for_name(&dropped_file.name),
                )),
            };
            match described {
                Ok(uploaded) => self.state.submit_upload(uploaded, now),
                Err(e) => {
                    tracing::warn!("Could not read dropped file: {e:#}");
                    self.state.toasts.notify(
                        now,
                        "Could not read file",
                        "The dropped file could not be opened. Please try another file.",
                        ToastKind::Destructive,
                    );
                }
            }
        }
    }
}

impl eframe::App for CompassApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.poll(now);
        self.handle_dropped_files(ctx, now);

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Splash => {
                    ui::splash::show_splash_view(ui, &mut self.state);
                },
                Screen::Landing => {
                    ui::landing::show_landing_view(ui, &mut self.state);
                },
                Screen::Upload => {
                    ui::upload::show_upload_view(ui, &mut self.state, now);
                },
                Screen::Dashboard => {
                    ui::dashboard::show_dashboard_view(ui, &mut self.state, now);
                },
            }
        });

        ui::toast::show_toasts(ctx, &self.state.toasts);

        // Wake up exactly when the next timer becomes due
        if let Some(deadline) = self.state.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
