//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::coaching::{ExerciseType, SessionResult};
use crate::storage::config;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl From<config::Theme> for Theme {
    fn from(preference: config::Theme) -> Self {
        match preference {
            config::Theme::Dark => Theme::Dark,
            config::Theme::Light => Theme::Light,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 23, 42);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(30, 41, 59);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(51, 65, 85);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(71, 85, 105);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(241, 245, 249);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 41, 59);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 116, 139);
    /// Accent color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
}

/// Status colors shared by both themes.
pub struct StatusColors;

impl StatusColors {
    /// Correct repetitions
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Form errors
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hints and tips
    pub const HINT: Color32 = Color32::from_rgb(234, 179, 8);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Accent color for an exercise type (blue, orange, purple).
pub fn exercise_color(exercise: ExerciseType) -> Color32 {
    match exercise {
        ExerciseType::Squat => Color32::from_rgb(37, 99, 235),
        ExerciseType::Kettlebell => Color32::from_rgb(234, 88, 12),
        ExerciseType::Seated => Color32::from_rgb(147, 51, 234),
    }
}

/// Badge color for a session result.
pub fn result_color(result: SessionResult) -> Color32 {
    match result {
        SessionResult::Excellent => Color32::from_rgb(22, 101, 52),
        SessionResult::Good => Color32::from_rgb(30, 64, 175),
        SessionResult::Fair => Color32::from_rgb(133, 77, 14),
        SessionResult::Poor => Color32::from_rgb(153, 27, 27),
    }
}
