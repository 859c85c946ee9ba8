//! Session history table.

use egui::{RichText, ScrollArea, Ui};

use crate::coaching::TrainingSession;
use crate::ui::theme::{result_color, StatusColors};

/// Column headers in display order.
const COLUMNS: [&str; 5] = ["Time", "Exercise / Pose", "Result", "Correct / Errors", "Coach's note"];

/// Table of sessions, newest last.
pub struct SessionTable<'a> {
    sessions: &'a [&'a TrainingSession],
}

impl<'a> SessionTable<'a> {
    /// Create a table over `sessions`.
    pub fn new(sessions: &'a [&'a TrainingSession]) -> Self {
        Self { sessions }
    }

    /// Show the table.
    pub fn show(self, ui: &mut Ui) {
        if self.sessions.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("No matching sessions found").size(16.0).weak());
                ui.add_space(24.0);
            });
            return;
        }

        ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("session_table")
                .num_columns(COLUMNS.len())
                .striped(true)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for column in COLUMNS {
                        ui.label(RichText::new(column).size(11.0).strong().weak());
                    }
                    ui.end_row();

                    for session in self.sessions {
                        ui.label(RichText::new(&session.date).weak());

                        ui.horizontal(|ui| {
                            ui.label(RichText::new(session.exercise.label()).strong());
                            ui.label(RichText::new("|").weak());
                            ui.label(&session.pose);
                        });

                        ui.label(
                            RichText::new(session.result.label())
                                .strong()
                                .color(result_color(session.result)),
                        );

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(session.correct_count.to_string())
                                    .strong()
                                    .color(StatusColors::SUCCESS),
                            );
                            ui.label("/");
                            ui.label(
                                RichText::new(session.error_count.to_string())
                                    .strong()
                                    .color(StatusColors::ERROR),
                            );
                        });

                        ui.horizontal(|ui| {
                            ui.label(RichText::new("💡").color(StatusColors::HINT));
                            ui.label(&session.suggestion);
                        });

                        ui.end_row();
                    }
                });
        });
    }
}
