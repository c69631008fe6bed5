//! Sales Dashboard - table and chart views over a sales CSV file.

use anyhow::{anyhow, Result};
use clap::Parser;
use eframe::egui;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use sales_dashboard::data::{DataLoader, LoaderError};
use sales_dashboard::gui::SalesDashboardApp;
use sales_dashboard::{Dashboard, DashboardConfig};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let config = DashboardConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // No window is shown unless the whole dataset loads.
    let table = match DataLoader::load_csv(&config.data) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "failed to load dataset");
            show_load_error(&err);
            return Err(err.into());
        }
    };

    let dashboard = Dashboard::new(table);
    info!(title = %config.title, "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| Ok(Box::new(SalesDashboardApp::new(cc, title, dashboard)))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}

/// Blocking modal describing why the dashboard cannot open.
fn show_load_error(err: &LoaderError) {
    let (title, description) = match err {
        LoaderError::DataSourceMissing(path) => (
            "File Error",
            format!(
                "{} not found! Please place it in the same folder.",
                path.display()
            ),
        ),
        other => ("Data Error", other.to_string()),
    };

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
