//! Sales Table Widget
//! Read-only, scrollable listing of every loaded row.

use crate::data::Table;
use crate::stats::SalesSummary;
use egui::{RichText, ScrollArea};

const TABLE_HEIGHT: f32 = 220.0;
const COLUMN_WIDTH: f32 = 120.0;

#[derive(Default)]
pub struct TableView;

impl TableView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, table: &Table, summary: &SalesSummary) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📋 Monthly Sales Data").size(16.0).strong());
                });
                ui.add_space(4.0);
                Self::summary_strip(ui, summary);
                ui.add_space(6.0);

                ScrollArea::both()
                    .max_height(TABLE_HEIGHT)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        egui::Grid::new("sales_table")
                            .striped(true)
                            .min_col_width(COLUMN_WIDTH)
                            .spacing([8.0, 4.0])
                            .show(ui, |ui| {
                                for header in table.headers() {
                                    ui.label(RichText::new(header).strong());
                                }
                                ui.end_row();

                                for index in 0..table.len() {
                                    if let Some(cells) = table.cells(index) {
                                        for cell in cells {
                                            ui.label(cell.as_str());
                                        }
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    fn summary_strip(ui: &mut egui::Ui, summary: &SalesSummary) {
        let money = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());

        ui.horizontal_wrapped(|ui| {
            ui.label(format!("Rows: {}", summary.row_count));
            ui.separator();
            ui.label(format!("Total revenue: {:.2}", summary.total_revenue));
            ui.separator();
            ui.label(format!("Mean: {}", money(summary.mean_revenue)));
            ui.separator();
            ui.label(format!("Min: {}", money(summary.min_revenue)));
            ui.separator();
            ui.label(format!("Max: {}", money(summary.max_revenue)));
            ui.separator();
            ui.label(match summary.total_quantity {
                Some(units) => format!("Units sold: {}", units),
                None => "Units sold: overflow".to_string(),
            });
        });
    }
}
