//! Training screen: the recommended move for one exercise type.

use egui::{Color32, RichText, Stroke, Ui, Vec2};

use crate::coaching::{
    level_options, resolve, ConfigurationError, ExerciseType, LevelOption, Recommendations,
    ResolvedRecommendation, TrainingConfig, TrainingGuide,
};
use crate::ui::theme::{exercise_color, StatusColors};

/// Everything the training screen renders for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingPlan {
    /// Recommended move and level
    pub recommendation: ResolvedRecommendation,
    /// All tiers, easiest first
    pub levels: Vec<LevelOption>,
    /// Guidance bullets
    pub guide: TrainingGuide,
}

impl TrainingPlan {
    /// Resolve the plan for `exercise`.
    pub fn build(
        exercise: ExerciseType,
        recommendations: &Recommendations,
        config: &TrainingConfig,
    ) -> Result<Self, ConfigurationError> {
        let recommendation = resolve(exercise, recommendations, config)?;
        let levels = level_options(exercise, recommendation.level, config)?;

        Ok(Self {
            recommendation,
            levels,
            guide: TrainingGuide::for_exercise(exercise),
        })
    }
}

/// Training screen UI.
pub struct TrainingScreen;

impl TrainingScreen {
    /// Render the training screen for `exercise`.
    pub fn show(
        ui: &mut Ui,
        exercise: ExerciseType,
        recommendations: &Recommendations,
        config: &TrainingConfig,
    ) {
        let accent = exercise_color(exercise);

        render_banner(ui, exercise, accent);
        ui.add_space(16.0);

        match TrainingPlan::build(exercise, recommendations, config) {
            Ok(plan) => {
                ui.horizontal_top(|ui| {
                    render_recommendation(ui, &plan, accent);
                    ui.add_space(16.0);
                    render_level_panel(ui, &plan.levels, accent);
                });
            }
            Err(err) => {
                tracing::error!("Cannot build training plan for {}: {}", exercise, err);
                render_configuration_error(ui, &err);
            }
        }
    }
}

/// Colored header naming the exercise.
fn render_banner(ui: &mut Ui, exercise: ExerciseType, accent: Color32) {
    egui::Frame::new()
        .fill(accent)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("TODAY'S FOCUS").size(12.0).color(Color32::WHITE));
            ui.label(
                RichText::new(format!("{} Training", exercise.label()))
                    .size(32.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(
                RichText::new(
                    "Your difficulty has been tailored to your training history.",
                )
                .color(Color32::WHITE),
            );
        });
}

/// Recommended move card with the training guide.
fn render_recommendation(ui: &mut Ui, plan: &TrainingPlan, accent: Color32) {
    let recommendation = &plan.recommendation;

    ui.group(|ui| {
        ui.set_width((ui.available_width() * 0.62).max(320.0));

        ui.horizontal(|ui| {
            ui.label(RichText::new("Recommended:").size(18.0).strong());
            ui.label(
                RichText::new(&recommendation.move_name)
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} Level", recommendation.level.label().to_uppercase()))
                        .size(11.0)
                        .strong()
                        .color(accent),
                );
            });
        });

        if recommendation.defaulted {
            ui.label(
                RichText::new("No recommendation on file yet; showing the default level.")
                    .size(11.0)
                    .weak(),
            );
        }

        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Training Guide").size(16.0).strong());
        for tip in plan.guide.tips() {
            ui.horizontal(|ui| {
                ui.label(RichText::new("•").color(accent));
                ui.label(tip);
            });
        }

        ui.add_space(12.0);

        if ui
            .add_sized(
                Vec2::new(ui.available_width(), 44.0),
                egui::Button::new(RichText::new("Start Training").size(16.0).color(Color32::WHITE))
                    .fill(accent),
            )
            .clicked()
        {
            tracing::info!(
                "Training started: {} ({} level)",
                recommendation.move_name,
                recommendation.level
            );
        }
    });
}

/// Every tier of the exercise with the active one highlighted.
fn render_level_panel(ui: &mut Ui, levels: &[LevelOption], accent: Color32) {
    ui.group(|ui| {
        ui.set_min_width(220.0);
        ui.label(RichText::new("ℹ Levels").size(16.0).strong());
        ui.add_space(8.0);

        for option in levels {
            let stroke = if option.active {
                Stroke::new(2.0, accent)
            } else {
                Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
            };

            egui::Frame::new()
                .stroke(stroke)
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(option.level.label().to_uppercase())
                                .size(11.0)
                                .weak(),
                        );
                        if option.active {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(
                                        RichText::new("Current")
                                            .size(11.0)
                                            .strong()
                                            .color(accent),
                                    );
                                },
                            );
                        }
                    });
                    let name = RichText::new(&option.move_name).strong();
                    ui.label(if option.active { name } else { name.weak() });
                });
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Levels adjust automatically from your accuracy and posture stability. \
                 Ask your coach to change them manually.",
            )
            .size(11.0)
            .weak(),
        );
    });
}

/// Visible placeholder for an incomplete move table.
fn render_configuration_error(ui: &mut Ui, err: &ConfigurationError) {
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(2.0, StatusColors::ERROR))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("⚠ Training plan unavailable")
                    .size(18.0)
                    .strong()
                    .color(StatusColors::ERROR),
            );
            ui.label(err.to_string());
            ui.label(RichText::new("Check the move table in the seed data.").weak());
        });
}
