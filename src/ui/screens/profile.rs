//! Profile screen: training statistics and session history.

use egui::{RichText, ScrollArea, Ui};

use crate::coaching::{ExerciseType, ProfileSnapshot, SessionSelector, UserProfileData};
use crate::ui::widgets::{RadarChart, SessionTable, SummaryCard};

/// Profile screen state.
#[derive(Debug, Default)]
pub struct ProfileScreen {
    /// Active session filter
    selector: SessionSelector,
}

impl ProfileScreen {
    /// Create a new profile screen showing every session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active session filter.
    pub fn selector(&self) -> SessionSelector {
        self.selector
    }

    /// Change the session filter.
    pub fn set_selector(&mut self, selector: SessionSelector) {
        if self.selector != selector {
            tracing::debug!("Profile filter changed to {:?}", selector);
            self.selector = selector;
        }
    }

    /// Render the profile screen.
    pub fn show(&mut self, ui: &mut Ui, profile: &UserProfileData) {
        ScrollArea::vertical().show(ui, |ui| {
            self.render_header(ui, profile);

            ui.add_space(16.0);

            let snapshot = ProfileSnapshot::compute(profile, self.selector);

            ui.horizontal_top(|ui| {
                render_radar(ui, &snapshot);
                ui.add_space(16.0);
                render_summary_cards(ui, &snapshot);
            });

            ui.add_space(16.0);
            ui.separator();

            ui.heading("Recent Sessions");
            ui.add_space(8.0);
            SessionTable::new(&snapshot.sessions).show(ui);
        });
    }

    /// Title, greeting, and the session filter.
    fn render_header(&mut self, ui: &mut Ui, profile: &UserProfileData) {
        let mut selector = self.selector;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Training Profile").size(28.0).strong());
                ui.label(RichText::new(format!("Welcome back, {}", profile.name)).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("session_filter")
                    .selected_text(selector.label())
                    .show_ui(ui, |ui| {
                        for option in SessionSelector::OPTIONS {
                            ui.selectable_value(&mut selector, option, option.label());
                        }
                    });
                ui.label("Show:");
            });
        });

        self.set_selector(selector);
    }
}

/// Radar chart with a caption naming what it covers.
fn render_radar(ui: &mut Ui, snapshot: &ProfileSnapshot<'_>) {
    ui.group(|ui| {
        ui.set_width(340.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Overall Ability").size(18.0).strong());
            let stats = snapshot.scores.radar_stats();
            RadarChart::new(&stats).height(300.0).show(ui);

            let scope = match snapshot.selector {
                SessionSelector::All => "all".to_string(),
                SessionSelector::Only(exercise) => exercise.label().to_lowercase(),
            };
            ui.label(RichText::new(format!("Based on {} training records", scope)).weak());
        });
    });
}

/// One card per exercise; cards outside the filter are dimmed.
fn render_summary_cards(ui: &mut Ui, snapshot: &ProfileSnapshot<'_>) {
    ui.vertical(|ui| {
        for row in ExerciseType::ALL.chunks(2) {
            ui.horizontal_top(|ui| {
                for exercise in row {
                    SummaryCard::new(*exercise, snapshot.tally.get(*exercise))
                        .dimmed(!snapshot.selector.includes(*exercise))
                        .show(ui);
                }
            });
            ui.add_space(8.0);
        }
    });
}
