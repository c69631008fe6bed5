//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_DATA_FILE: &str = "sales_data.csv";
pub const DEFAULT_TITLE: &str = "Sales Analysis Dashboard";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "sales-dashboard",
    about = "Sales dashboard: data table plus line, area, bar and pie chart views"
)]
pub struct DashboardConfig {
    /// Sales CSV with Month, Revenue, Quantity, Category and CustomerSegment columns.
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Window and banner title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            title: DEFAULT_TITLE.to_string(),
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bare_invocation() {
        let parsed = DashboardConfig::try_parse_from(["sales-dashboard"]).unwrap();
        let defaults = DashboardConfig::default();

        assert_eq!(parsed.data, defaults.data);
        assert_eq!(parsed.title, defaults.title);
        assert_eq!(parsed.log_level, defaults.log_level);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = DashboardConfig::try_parse_from([
            "sales-dashboard",
            "--data",
            "q3.csv",
            "--title",
            "Q3 Sales",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(parsed.data, PathBuf::from("q3.csv"));
        assert_eq!(parsed.title, "Q3 Sales");
        assert_eq!(parsed.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(DashboardConfig::try_parse_from(["sales-dashboard", "--log-level", "loud"]).is_err());
    }
}
