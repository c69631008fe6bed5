//! Sales Dashboard Main Application
//! Title banner, data table, chart buttons and chart display region.

use crate::dashboard::Dashboard;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, TableView};
use egui::{Color32, RichText, SidePanel, TopBottomPanel};

const TITLE_COLOR: Color32 = Color32::from_rgb(31, 78, 121);

/// Main application window.
pub struct SalesDashboardApp {
    title: String,
    dashboard: Dashboard,
    table_view: TableView,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl SalesDashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, title: String, dashboard: Dashboard) -> Self {
        Self {
            title,
            dashboard,
            table_view: TableView::new(),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        }
    }
}

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("title_banner").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(&self.title).size(22.0).strong().color(TITLE_COLOR));
                ui.add_space(6.0);
            });
        });

        TopBottomPanel::top("sales_table_panel").show(ctx, |ui| {
            self.table_view
                .show(ui, self.dashboard.table(), self.dashboard.summary());
            ui.add_space(6.0);
        });

        SidePanel::left("control_panel")
            .resizable(false)
            .min_width(270.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui, self.dashboard.state());

                match action {
                    // Errors are kept on the dashboard and shown by the viewer.
                    ControlPanelAction::Select(kind) => {
                        let _ = self.dashboard.select(kind);
                    }
                    ControlPanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer
                .show(ui, self.dashboard.active(), self.dashboard.last_error());
        });
    }
}
