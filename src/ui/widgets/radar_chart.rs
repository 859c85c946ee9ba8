//! Radar chart widget using egui_plot.
//!
//! Axes start at twelve o'clock and run clockwise. Each value is scaled by its
//! axis' full mark so the outer ring is 100%.

use std::f64::consts::{FRAC_PI_2, TAU};

use egui::{Color32, Response, RichText, Stroke, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::coaching::RadarStat;

/// Grid rings as fractions of the full mark.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Distance of axis labels from the center.
const LABEL_RADIUS: f64 = 1.22;

/// Radar chart over a fixed set of axes.
pub struct RadarChart<'a> {
    /// Axis records
    stats: &'a [RadarStat],
    /// Chart height
    height: f32,
    /// Series color
    color: Color32,
}

impl<'a> RadarChart<'a> {
    /// Create a new radar chart.
    pub fn new(stats: &'a [RadarStat]) -> Self {
        Self {
            stats,
            height: 300.0,
            color: Color32::from_rgb(37, 99, 235),
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Set series color.
    pub fn color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        if self.stats.len() < 3 {
            return ui.label("Not enough axes to draw a radar chart.");
        }

        let axes = self.stats.len();
        let fractions: Vec<f64> = self.stats.iter().map(axis_fraction).collect();
        let grid_color = ui.visuals().weak_text_color();

        Plot::new("radar_chart")
            .height(self.height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(-1.5)
            .include_x(1.5)
            .include_y(-1.4)
            .include_y(1.4)
            .show(ui, |plot_ui| {
                for ring in RINGS {
                    let mut outline = radar_vertices(&vec![ring; axes]);
                    outline.push(outline[0]);
                    plot_ui.line(
                        Line::new(format!("{:.0}%", ring * 100.0), PlotPoints::new(outline))
                            .color(grid_color)
                            .width(0.5),
                    );
                }

                let spokes = radar_vertices(&vec![1.0; axes]);
                for (i, tip) in spokes.iter().enumerate() {
                    plot_ui.line(
                        Line::new(format!("axis-{}", i), PlotPoints::new(vec![[0.0, 0.0], *tip]))
                            .color(grid_color)
                            .width(0.5),
                    );
                }

                plot_ui.polygon(
                    Polygon::new("My Stats", PlotPoints::new(radar_vertices(&fractions)))
                        .fill_color(self.color.linear_multiply(0.4))
                        .stroke(Stroke::new(2.0, self.color)),
                );

                let labels = radar_vertices(&vec![LABEL_RADIUS; axes]);
                for (stat, [x, y]) in self.stats.iter().zip(labels) {
                    plot_ui.text(Text::new(
                        stat.subject.clone(),
                        PlotPoint::new(x, y),
                        RichText::new(format!("{}\n{}", stat.subject, stat.value)).size(12.0),
                    ));
                }
            })
            .response
    }
}

/// Value as a fraction of its full mark, clamped to 0..=1.
fn axis_fraction(stat: &RadarStat) -> f64 {
    if stat.full_mark == 0 {
        return 0.0;
    }
    (f64::from(stat.value) / f64::from(stat.full_mark)).clamp(0.0, 1.0)
}

/// Plot coordinates for one radius per axis.
fn radar_vertices(radii: &[f64]) -> Vec<[f64; 2]> {
    let step = TAU / radii.len() as f64;
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let angle = FRAC_PI_2 - step * i as f64;
            [r * angle.cos(), r * angle.sin()]
        })
        .collect()
}
