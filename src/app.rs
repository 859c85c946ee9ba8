//! Main application state and egui integration.

use std::path::Path;
use std::sync::Arc;

use eframe::egui;

use posecoach::coaching::ExerciseType;
use posecoach::storage::config::AppConfig;
use posecoach::storage::{load_seed, SeedData, SeedError};
use posecoach::ui::screens::{HomeScreen, Navigator, ProfileScreen, Screen, TrainingScreen};
use posecoach::ui::theme::Theme;

/// Font family entry name for the configured CJK fallback font.
const CJK_FONT_NAME: &str = "cjk-fallback";

/// Main application state.
pub struct PoseCoachApp {
    /// Current screen and training target
    navigator: Navigator,
    /// UI theme
    theme: Theme,
    /// Static profile and move table
    seed: SeedData,
    /// Profile screen state
    profile_screen: ProfileScreen,
}

impl PoseCoachApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SeedError> {
        let config = posecoach::storage::config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.effective_font_scale());

        if let Some(path) = &config.ui.cjk_font_path {
            install_fallback_font(&cc.egui_ctx, path);
        }

        let seed = match load_seed(&config.seed) {
            Ok(seed) => seed,
            Err(e) if config.seed.profile_path.is_some() => {
                tracing::warn!("Failed to load seed file, using bundled data: {}", e);
                SeedData::embedded()?
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Loaded profile for {} with {} sessions",
            seed.profile.name,
            seed.profile.sessions.len()
        );

        Ok(Self {
            navigator: Navigator::new(),
            theme,
            seed,
            profile_screen: ProfileScreen::new(),
        })
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen, exercise: Option<ExerciseType>) {
        self.navigator.navigate(screen, exercise);
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
    }

    /// Top bar with screen links and the training menu.
    fn render_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("PoseCoach");
                ui.separator();

                let current = self.navigator.current();

                for screen in [Screen::Home, Screen::Profile] {
                    if ui
                        .selectable_label(current == screen, screen.label())
                        .clicked()
                    {
                        self.navigate(screen, None);
                    }
                }

                let training_label = if current == Screen::Training {
                    format!("Training: {}", self.navigator.training_exercise())
                } else {
                    Screen::Training.label().to_string()
                };
                ui.menu_button(training_label, |ui| {
                    for exercise in ExerciseType::ALL {
                        if ui.button(format!("{} training", exercise.label())).clicked() {
                            self.navigate(Screen::Training, Some(exercise));
                            ui.close();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }

                    ui.label(&self.seed.profile.name);
                });
            });
        });
    }
}

/// Add the font at `path` as the last fallback of every family.
fn install_fallback_font(ctx: &egui::Context, path: &Path) {
    match std::fs::read(path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                CJK_FONT_NAME.to_owned(),
                Arc::new(egui::FontData::from_owned(bytes)),
            );
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .push(CJK_FONT_NAME.to_owned());
            }
            ctx.set_fonts(fonts);
            tracing::info!("Installed fallback font from {}", path.display());
        }
        Err(e) => {
            tracing::warn!("Failed to read font {}: {}", path.display(), e);
        }
    }
}

impl eframe::App for PoseCoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::Escape))
            && self.navigator.current() != Screen::Home
        {
            self.navigate(Screen::Home, None);
        }

        self.render_nav_bar(ctx);

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.navigator.current() {
            Screen::Home => {
                if let Some(next) = HomeScreen::show(ui) {
                    self.navigate(next, None);
                }
            }
            Screen::Profile => {
                self.profile_screen.show(ui, &self.seed.profile);
            }
            Screen::Training => {
                TrainingScreen::show(
                    ui,
                    self.navigator.training_exercise(),
                    &self.seed.profile.recommendations,
                    &self.seed.moves,
                );
            }
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(format!("{} sessions on record", self.seed.profile.sessions.len()));
            });
        });
    }
}
