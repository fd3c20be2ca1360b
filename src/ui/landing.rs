// src/ui/landing.rs
use eframe::egui;

use crate::state::AppState;

const FEATURES: [(&str, &str); 6] = [
    (
        "Smart Resume Analysis",
        "Get instant feedback on your resume with detailed scoring and improvement suggestions.",
    ),
    (
        "Personalized Roadmaps",
        "Receive a step-by-step learning path tailored to the career you want.",
    ),
    (
        "24/7 Career Advisor",
        "Ask career questions anytime and get guidance when you need it.",
    ),
    (
        "Progress Tracking",
        "Check off milestones as you complete them and watch your momentum build.",
    ),
    (
        "Skill Gap Analysis",
        "See exactly which skills are missing for your target roles.",
    ),
    (
        "Industry Insights",
        "Understand which paths fit your background before you commit.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    ("Upload Resume", "Drop in your resume as a PDF, DOCX, or TXT file."),
    ("Smart Analysis", "Your experience and skills are scored in seconds."),
    ("Get Your Roadmap", "Follow a personalized plan toward your next role."),
];

const BENEFITS: [&str; 6] = [
    "Clear picture of your strengths",
    "Skills ranked by market demand",
    "Actionable next steps, not platitudes",
    "Curated learning resources",
    "Progress you can see",
    "A plan that fits your goals",
];

pub fn show_landing_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Header bar
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("🧭").size(20.0));
        ui.strong("Career Compass");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled(false, egui::Button::new("Sign In"))
                .on_disabled_hover_text("Accounts are not part of this prototype");
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Hero
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.label(egui::RichText::new("✨ Career guidance that keeps up with you").weak());
                ui.add_space(8.0);
                ui.heading(
                    egui::RichText::new("Find your path. Build your skills.\nShape your future.")
                        .size(32.0)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label(
                    "Upload your resume, get instant feedback, and follow a personalized \
                     roadmap to the career you want.",
                );
                ui.add_space(16.0);

                let cta = egui::Button::new(
                    egui::RichText::new("Get Started Free").size(18.0).strong(),
                )
                .min_size(egui::vec2(220.0, 44.0));
                if ui.add(cta).clicked() {
                    state.advance_from_landing();
                }
                ui.add_space(4.0);
                ui.small("No sign-up required • Get results in minutes");
                ui.add_space(32.0);
            });

            ui.separator();

            // Features
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Everything you need to level up");
            });
            ui.add_space(12.0);
            for row in FEATURES.chunks(3) {
                ui.columns(3, |columns| {
                    for (column, (title, blurb)) in columns.iter_mut().zip(row) {
                        feature_card(column, title, blurb);
                    }
                });
                ui.add_space(8.0);
            }

            ui.add_space(16.0);
            ui.separator();

            // How it works
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("How it works");
            });
            ui.add_space(12.0);
            ui.columns(3, |columns| {
                for (index, (column, (title, blurb))) in
                    columns.iter_mut().zip(STEPS).enumerate()
                {
                    column.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(format!("{}", index + 1)).size(28.0).strong());
                        ui.strong(title);
                        ui.label(egui::RichText::new(blurb).weak());
                    });
                }
            });

            ui.add_space(16.0);
            ui.separator();

            // Benefits
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Why it works");
            });
            ui.add_space(12.0);
            ui.columns(2, |columns| {
                for (column, chunk) in columns.iter_mut().zip(BENEFITS.chunks(3)) {
                    for benefit in chunk {
                        column.label(format!("✔ {benefit}"));
                    }
                }
            });

            ui.add_space(24.0);
            ui.separator();

            // Closing call to action
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.heading("Ready to find your path?");
                ui.add_space(12.0);
                let cta = egui::Button::new(
                    egui::RichText::new("Start Your Journey Now").size(16.0).strong(),
                )
                .min_size(egui::vec2(220.0, 40.0));
                if ui.add(cta).clicked() {
                    state.advance_from_landing();
                }
                ui.add_space(24.0);
                ui.small("Career Compass: career guidance, without the guesswork");
                ui.add_space(16.0);
            });
        });
}

fn feature_card(ui: &mut egui::Ui, title: &str, blurb: &str) {
    ui.group(|ui| {
        ui.set_min_height(90.0);
        ui.vertical(|ui| {
            ui.strong(title);
            ui.add_space(4.0);
            ui.label(egui::RichText::new(blurb).weak());
        });
    });
}
