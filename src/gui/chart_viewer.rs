//! Chart Viewer Widget
//! Display region showing exactly one chart at a time.

use crate::charts::{ChartPlotter, RenderError};
use crate::dashboard::ActiveView;
use egui::{Color32, RichText};

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, active: Option<&ActiveView>, error: Option<&RenderError>) {
        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(egui::Stroke::new(2.0, Color32::from_gray(60)))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());

                if let Some(err) = error {
                    ui.label(
                        RichText::new(format!("⚠ Could not draw chart: {}", err))
                            .size(13.0)
                            .color(ERROR_COLOR),
                    );
                    ui.add_space(6.0);
                }

                match active {
                    Some(view) => ChartPlotter::draw(ui, &view.artifact),
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.label(
                                RichText::new("Select a chart on the left")
                                    .size(20.0)
                                    .color(Color32::GRAY),
                            );
                        });
                    }
                }
            });
    }
}
