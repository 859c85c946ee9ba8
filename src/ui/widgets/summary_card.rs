//! Per-exercise summary card.

use egui::{RichText, Stroke, Ui};

use crate::coaching::{ExerciseTally, ExerciseType};
use crate::ui::theme::{exercise_color, StatusColors};

/// Correct/error totals and the standing tip for one exercise type.
pub struct SummaryCard {
    exercise: ExerciseType,
    tally: ExerciseTally,
    dimmed: bool,
}

impl SummaryCard {
    /// Create a card for `exercise`.
    pub fn new(exercise: ExerciseType, tally: ExerciseTally) -> Self {
        Self {
            exercise,
            tally,
            dimmed: false,
        }
    }

    /// Render faded, for exercises outside the active filter.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// Show the card.
    pub fn show(self, ui: &mut Ui) {
        let accent = exercise_color(self.exercise);

        ui.add_enabled_ui(!self.dimmed, |ui| {
            egui::Frame::group(ui.style())
                .stroke(Stroke::new(2.0, accent))
                .show(ui, |ui| {
                    ui.set_min_width(220.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new(self.exercise.label()).size(16.0).strong());
                        ui.label(
                            RichText::new(self.exercise.native_name())
                                .size(11.0)
                                .color(accent),
                        );
                    });

                    ui.add_space(6.0);

                    egui::Grid::new(format!("summary_{}", self.exercise.label()))
                        .num_columns(2)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("✔ Correct").color(StatusColors::SUCCESS));
                            ui.label(RichText::new(self.tally.correct.to_string()).strong());
                            ui.end_row();

                            ui.label(RichText::new("✖ Errors").color(StatusColors::ERROR));
                            ui.label(RichText::new(self.tally.errors.to_string()).strong());
                            ui.end_row();
                        });

                    ui.separator();
                    ui.label(RichText::new("Coach's tip:").size(11.0).weak());
                    ui.label(RichText::new(self.exercise.coaching_tip()).italics());
                });
        });
    }
}
