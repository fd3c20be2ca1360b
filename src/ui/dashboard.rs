// src/ui/dashboard.rs
use eframe::egui;
use rfd::FileDialog;
use std::time::Instant;

use crate::analysis::{AnalysisResult, ScoreBand};
use crate::file::export;
use crate::state::{AppState, DashboardState, DashboardTab, ToastKind, Toasts};

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let AppState {
        analysis,
        dashboard,
        toasts,
        ..
    } = state;
    let result = match analysis.as_ref() {
        Some(result) => result,
        None => {
            debug_assert!(false, "dashboard drawn without an analysis result");
            return;
        }
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            show_header(ui, result, dashboard, toasts, now);
            ui.add_space(12.0);
            show_stats_cards(ui, result, dashboard);
            ui.add_space(16.0);

            // Tab selection
            ui.horizontal(|ui| {
                let tabs = [
                    (DashboardTab::Roadmap, "Roadmap"),
                    (DashboardTab::Skills, "Skills"),
                    (DashboardTab::Careers, "Career Paths"),
                    (DashboardTab::Advisor, "Career Advisor"),
                ];
                for (tab, label) in tabs {
                    if ui.selectable_label(dashboard.tab == tab, label).clicked() {
                        dashboard.tab = tab;
                    }
                }
            });
            ui.separator();
            ui.add_space(8.0);

            match dashboard.tab {
                DashboardTab::Roadmap => show_roadmap_tab(ui, result, dashboard),
                DashboardTab::Skills => show_skills_tab(ui, result),
                DashboardTab::Careers => show_careers_tab(ui, result),
                DashboardTab::Advisor => show_advisor_tab(ui),
            }
            ui.add_space(24.0);
        });
}

fn show_header(
    ui: &mut egui::Ui,
    result: &AnalysisResult,
    dashboard: &mut DashboardState,
    toasts: &mut Toasts,
    now: Instant,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new("Your Career Dashboard").size(26.0).strong());
            ui.label(
                egui::RichText::new(format!(
                    "Resume: {} · analyzed {}",
                    result.file_name,
                    result.analyzed_at.format("%Y-%m-%d %H:%M")
                ))
                .weak(),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export Roadmap").clicked() {
                export_roadmap(result, dashboard, toasts, now);
            }
            if ui.button("Career Advisor").clicked() {
                dashboard.tab = DashboardTab::Advisor;
            }
        });
    });
}

fn export_roadmap(
    result: &AnalysisResult,
    dashboard: &DashboardState,
    toasts: &mut Toasts,
    now: Instant,
) {
    let file_dialog = FileDialog::new()
        .add_filter("CSV files", &["csv"])
        .set_file_name("roadmap.csv")
        .set_title("Export Roadmap");

    if let Some(path) = file_dialog.save_file() {
        match export::write_roadmap_csv(&path, &result.roadmap, dashboard) {
            Ok(()) => {
                tracing::info!("Exported roadmap to {}", path.display());
                toasts.notify(
                    now,
                    "Roadmap exported",
                    format!("Saved to {}.", path.display()),
                    ToastKind::Info,
                );
            }
            Err(e) => {
                tracing::warn!("Roadmap export failed: {e:#}");
                toasts.notify(
                    now,
                    "Export failed",
                    "The roadmap could not be written. Please try a different location.",
                    ToastKind::Destructive,
                );
            }
        }
    }
}

fn show_stats_cards(ui: &mut egui::Ui, result: &AnalysisResult, dashboard: &DashboardState) {
    let band = ScoreBand::for_score(result.score);
    let progress_percentage = dashboard.completion_percentage();

    ui.columns(4, |columns| {
        // Resume score
        columns[0].group(|ui| {
            ui.set_min_height(96.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Resume Score").weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(band_color(band), band.label());
                });
            });
            ui.strong(egui::RichText::new(format!("{}%", result.score)).size(24.0));
            ui.add(
                egui::ProgressBar::new(result.score as f32 / 100.0)
                    .fill(band_color(band))
                    .desired_width(ui.available_width()),
            );
        });

        // Roadmap progress
        columns[1].group(|ui| {
            ui.set_min_height(96.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Progress").weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{}/{}",
                        dashboard.completed_count(),
                        dashboard.milestone_count()
                    ));
                });
            });
            ui.strong(
                egui::RichText::new(format!("{}%", progress_percentage.round() as u32)).size(24.0),
            );
            ui.add(
                egui::ProgressBar::new(progress_percentage / 100.0)
                    .desired_width(ui.available_width()),
            );
        });

        // Skills gap
        columns[2].group(|ui| {
            ui.set_min_height(96.0);
            ui.label(egui::RichText::new("Skills to Learn").weak());
            ui.strong(egui::RichText::new(result.missing_skills.len().to_string()).size(24.0));
            ui.label(egui::RichText::new("in-demand skills").weak());
        });

        // Time estimate
        columns[3].group(|ui| {
            ui.set_min_height(96.0);
            ui.label(egui::RichText::new("To Completion").weak());
            ui.strong(egui::RichText::new("3-6 mo").size(24.0));
            ui.label(egui::RichText::new("estimated").weak());
        });
    });
}

fn show_roadmap_tab(ui: &mut egui::Ui, result: &AnalysisResult, dashboard: &mut DashboardState) {
    ui.horizontal(|ui| {
        ui.strong(egui::RichText::new("Your Learning Roadmap").size(18.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{} of {} completed",
                dashboard.completed_count(),
                dashboard.milestone_count()
            ));
        });
    });
    ui.add_space(8.0);

    for (index, milestone) in result.roadmap.iter().enumerate() {
        let completed = dashboard.is_completed(index);
        ui.horizontal(|ui| {
            let marker = if completed { "✔" } else { "○" };
            let marker = if completed {
                egui::RichText::new(marker).color(egui::Color32::GREEN).size(18.0)
            } else {
                egui::RichText::new(marker).size(18.0)
            };
            if ui
                .add(egui::Button::new(marker).frame(false))
                .on_hover_text("Toggle milestone")
                .clicked()
            {
                dashboard.toggle(index);
            }

            ui.vertical(|ui| {
                let title = egui::RichText::new(&milestone.title).strong();
                let title = if completed { title.strikethrough().weak() } else { title };
                ui.label(title);
                ui.label(egui::RichText::new(&milestone.description).weak());
                ui.horizontal_wrapped(|ui| {
                    for resource in &milestone.resources {
                        ui.small(format!("[{resource}]"));
                    }
                });
            });
        });
        ui.add_space(10.0);
    }
}

fn show_skills_tab(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.strong(egui::RichText::new("Skills to Develop").size(18.0));
    ui.add_space(8.0);

    for row in result.missing_skills.chunks(3) {
        ui.columns(3, |columns| {
            for (column, skill) in columns.iter_mut().zip(row) {
                column.group(|ui| {
                    ui.set_min_height(60.0);
                    ui.horizontal(|ui| {
                        ui.strong(skill.as_str());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(egui::Color32::YELLOW, "High Priority");
                        });
                    });
                    ui.label(egui::RichText::new("In-demand skill for your target roles").weak());
                });
            }
        });
        ui.add_space(8.0);
    }
}

fn show_careers_tab(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.strong(egui::RichText::new("Recommended Career Paths").size(18.0));
    ui.add_space(8.0);

    for row in result.career_paths.chunks(2) {
        ui.columns(2, |columns| {
            for (column, path) in columns.iter_mut().zip(row) {
                column.group(|ui| {
                    ui.set_min_height(80.0);
                    ui.horizontal(|ui| {
                        ui.strong(egui::RichText::new(path).size(16.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(egui::Color32::GOLD, "★");
                        });
                    });
                    ui.label(
                        egui::RichText::new(
                            "Strong match based on your current skills and experience.",
                        )
                        .weak(),
                    );
                    ui.horizontal(|ui| {
                        ui.small("High Match");
                        ui.small("·");
                        ui.small("Growing Field");
                    });
                });
            }
        });
        ui.add_space(8.0);
    }
}

fn show_advisor_tab(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(egui::RichText::new("🧭").size(40.0));
        ui.add_space(8.0);
        ui.strong(egui::RichText::new("Career Advisor").size(18.0));
        ui.add_space(8.0);
        ui.label(
            "Chat with your personal career coach. Get instant answers to career \
             questions, strategic advice, and personalized recommendations.",
        );
        ui.add_space(12.0);
        ui.add_enabled(false, egui::Button::new("Start Conversation"))
            .on_disabled_hover_text("The advisor is not part of this prototype");
        ui.add_space(32.0);
    });
}

fn band_color(band: ScoreBand) -> egui::Color32 {
    match band {
        ScoreBand::Excellent => egui::Color32::GREEN,
        ScoreBand::Good => egui::Color32::YELLOW,
        ScoreBand::NeedsWork => egui::Color32::RED,
    }
}
