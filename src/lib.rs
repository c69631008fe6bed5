//! Sales Dashboard - CSV sales data shown as a table and four chart views.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod gui;
pub mod stats;

pub use config::DashboardConfig;
pub use dashboard::{ActiveView, Dashboard, ViewState};
