//! Home screen implementation.

use egui::{Align, Layout, RichText, Ui, Vec2};

use super::Screen;

/// Feature highlights shown under the title.
const FEATURES: [(&str, &str); 3] = [
    (
        "Form analysis",
        "Every repetition is checked for posture errors as you train.",
    ),
    (
        "Progress profile",
        "Accuracy, mastery, and consistency scores across all your sessions.",
    ),
    (
        "Adaptive levels",
        "Each exercise is recommended at the tier that matches your history.",
    ),
];

/// Home screen UI.
pub struct HomeScreen;

impl HomeScreen {
    /// Render the home screen and return the next screen if navigation requested.
    pub fn show(ui: &mut Ui) -> Option<Screen> {
        let mut next_screen = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            // Title
            ui.label(RichText::new("PoseCoach").size(48.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new("Smart posture coaching for squats, kettlebells, and seated training")
                    .size(18.0)
                    .weak(),
            );

            ui.add_space(48.0);

            let button_size = Vec2::new(280.0, 60.0);

            if ui
                .add_sized(
                    button_size,
                    egui::Button::new(RichText::new("Get Started").size(20.0)),
                )
                .clicked()
            {
                next_screen = Some(Screen::Profile);
            }

            ui.add_space(48.0);
            ui.separator();
            ui.add_space(24.0);

            ui.with_layout(Layout::left_to_right(Align::Min), |ui| {
                let card_width = 240.0;
                ui.add_space((ui.available_width() - card_width * 3.0 - 48.0).max(0.0) / 2.0);

                for (title, body) in FEATURES {
                    ui.group(|ui| {
                        ui.set_width(card_width);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(title).size(16.0).strong());
                            ui.add_space(4.0);
                            ui.label(RichText::new(body).weak());
                        });
                    });
                    ui.add_space(16.0);
                }
            });
        });

        next_screen
    }
}
