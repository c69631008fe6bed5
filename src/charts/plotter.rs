//! Chart Plotter Module
//! Paints chart artifacts with egui_plot.

use crate::charts::artifact::{BarMark, ChartArtifact, ChartBody, SeriesMarks, Wedge};
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{
    Bar, BarChart, GridInput, GridMark, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};
use std::ops::RangeInclusive;

const EDGE_COLOR: Color32 = Color32::WHITE;

/// Draws a [`ChartArtifact`] into the available space.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn draw(ui: &mut egui::Ui, artifact: &ChartArtifact) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&artifact.title).size(16.0).strong());
        });
        ui.add_space(6.0);

        match &artifact.body {
            ChartBody::Empty => Self::draw_empty(ui, artifact),
            ChartBody::Series(marks) => Self::draw_series(ui, artifact, marks),
            ChartBody::Bars(bars) => Self::draw_bars(ui, artifact, bars),
            ChartBody::Pie(wedges) => Self::draw_pie(ui, artifact, wedges),
        }
    }

    fn draw_empty(ui: &mut egui::Ui, artifact: &ChartArtifact) {
        Plot::new(Self::plot_id(artifact))
            .allow_scroll(false)
            .x_axis_label(artifact.x_label.clone())
            .y_axis_label(artifact.y_label.clone())
            .show(ui, |_plot_ui| {});
    }

    fn plot_id(artifact: &ChartArtifact) -> String {
        format!("chart_{:?}", artifact.kind)
    }

    /// One grid mark per category so every month gets a tick label.
    fn category_marks(count: usize) -> impl Fn(GridInput) -> Vec<GridMark> {
        move |_input| {
            (0..count)
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        }
    }

    fn category_labels(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
        move |mark, _range| {
            let idx = mark.value.round();
            if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                labels.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        }
    }

    fn draw_series(ui: &mut egui::Ui, artifact: &ChartArtifact, marks: &SeriesMarks) {
        Plot::new(Self::plot_id(artifact))
            .allow_scroll(false)
            .x_axis_label(artifact.x_label.clone())
            .y_axis_label(artifact.y_label.clone())
            .x_grid_spacer(Self::category_marks(marks.x_ticks.len()))
            .x_axis_formatter(Self::category_labels(marks.x_ticks.clone()))
            .include_y(marks.y_bounds.0)
            .include_y(marks.y_bounds.1)
            .show(ui, |plot_ui| {
                for piece in &marks.fill {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(piece.clone()))
                            .fill_color(marks.fill_color)
                            .stroke(Stroke::NONE),
                    );
                }

                plot_ui.line(
                    Line::new(PlotPoints::from(marks.points.clone()))
                        .color(marks.line_color)
                        .width(2.0)
                        .name("Revenue"),
                );

                if marks.show_markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from(marks.points.clone()))
                            .radius(4.0)
                            .color(marks.line_color),
                    );
                }
            });
    }

    fn draw_bars(ui: &mut egui::Ui, artifact: &ChartArtifact, bars: &[BarMark]) {
        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

        let chart = BarChart::new(
            bars.iter()
                .map(|b| {
                    Bar::new(b.x, b.height)
                        .width(b.width)
                        .name(&b.label)
                        .fill(b.color)
                })
                .collect(),
        );

        Plot::new(Self::plot_id(artifact))
            .allow_scroll(false)
            .x_axis_label(artifact.x_label.clone())
            .y_axis_label(artifact.y_label.clone())
            .x_grid_spacer(Self::category_marks(labels.len()))
            .x_axis_formatter(Self::category_labels(labels))
            .include_y(0.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    fn draw_pie(ui: &mut egui::Ui, artifact: &ChartArtifact, wedges: &[Wedge]) {
        Plot::new(Self::plot_id(artifact))
            .allow_scroll(false)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .include_x(-1.4)
            .include_x(1.4)
            .include_y(-1.3)
            .include_y(1.3)
            .show(ui, |plot_ui| {
                for wedge in wedges {
                    for piece in &wedge.pieces {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(piece.clone()))
                                .fill_color(wedge.color)
                                .stroke(Stroke::NONE)
                                .name(&wedge.label),
                        );
                    }

                    // Radial edge between neighbouring wedges.
                    if wedges.len() > 1 {
                        let rad = wedge.start_angle.to_radians();
                        plot_ui.line(
                            Line::new(PlotPoints::from(vec![[0.0, 0.0], [rad.cos(), rad.sin()]]))
                                .color(EDGE_COLOR)
                                .width(1.5),
                        );
                    }

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(wedge.caption_anchor[0], wedge.caption_anchor[1]),
                            RichText::new(&wedge.caption).size(12.0).color(Color32::BLACK),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(wedge.label_anchor[0], wedge.label_anchor[1]),
                            RichText::new(&wedge.label).size(13.0).strong(),
                        )
                        .anchor(Align2::CENTER_CENTER),
                    );
                }
            });
    }
}
