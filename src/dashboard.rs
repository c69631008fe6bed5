//! Dashboard Controller
//! Owns the dataset, its aggregates and the single active chart.

use crate::charts::{ChartArtifact, ChartKind, ChartRenderer, RenderError};
use crate::data::{Aggregates, Table};
use crate::stats::SalesSummary;
use tracing::{info, warn};

/// Which chart, if any, is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    NoneShown,
    Shown(ChartKind),
}

/// The chart currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveView {
    pub kind: ChartKind,
    pub artifact: ChartArtifact,
}

pub struct Dashboard {
    table: Table,
    aggregates: Aggregates,
    summary: SalesSummary,
    active: Option<ActiveView>,
    last_error: Option<RenderError>,
}

impl Dashboard {
    /// Compute every aggregate once; they are read-only from here on.
    pub fn new(table: Table) -> Self {
        let aggregates = Aggregates::compute(&table);
        let summary = SalesSummary::compute(&table);
        Self::from_parts(table, aggregates, summary)
    }

    pub(crate) fn from_parts(table: Table, aggregates: Aggregates, summary: SalesSummary) -> Self {
        Self {
            table,
            aggregates,
            summary,
            active: None,
            last_error: None,
        }
    }

    /// Render `kind` and make it the active view.
    ///
    /// On failure the previous view stays on screen and the error is kept for display.
    pub fn select(&mut self, kind: ChartKind) -> Result<(), RenderError> {
        match ChartRenderer::render(kind, &self.aggregates) {
            Ok(artifact) => {
                info!(?kind, "chart selected");
                self.active = Some(ActiveView { kind, artifact });
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!(?kind, error = %err, "chart render failed, keeping previous view");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn state(&self) -> ViewState {
        match &self.active {
            Some(view) => ViewState::Shown(view.kind),
            None => ViewState::NoneShown,
        }
    }

    pub fn active(&self) -> Option<&ActiveView> {
        self.active.as_ref()
    }

    pub fn last_error(&self) -> Option<&RenderError> {
        self.last_error.as_ref()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn aggregates(&self) -> &Aggregates {
        &self.aggregates
    }

    pub fn summary(&self) -> &SalesSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GroupSum, Row};

    fn sample_dashboard() -> Dashboard {
        Dashboard::new(Table::from_rows(vec![
            Row::new("Jan", 100.0, 5, "Electronics", "Retail"),
            Row::new("Feb", 200.0, 7, "Clothing", "Retail"),
            Row::new("Mar", 150.0, 2, "Electronics", "Wholesale"),
        ]))
    }

    #[test]
    fn starts_with_nothing_shown() {
        let dashboard = sample_dashboard();
        assert_eq!(dashboard.state(), ViewState::NoneShown);
        assert!(dashboard.active().is_none());
        assert!(dashboard.last_error().is_none());
    }

    #[test]
    fn every_kind_is_reachable_from_every_state() {
        let mut dashboard = sample_dashboard();
        for from in ChartKind::ALL {
            for to in ChartKind::ALL {
                dashboard.select(from).unwrap();
                dashboard.select(to).unwrap();
                assert_eq!(dashboard.state(), ViewState::Shown(to));
                assert_eq!(dashboard.active().unwrap().artifact.kind, to);
            }
        }
    }

    #[test]
    fn reselecting_redraws_identically() {
        let mut dashboard = sample_dashboard();

        dashboard.select(ChartKind::Pie).unwrap();
        let first = dashboard.active().cloned();
        dashboard.select(ChartKind::Pie).unwrap();

        assert_eq!(dashboard.active().cloned(), first);
    }

    #[test]
    fn failed_render_keeps_last_good_view() {
        let table = Table::from_rows(vec![Row::new("Jan", 100.0, 1, "Toys", "Retail")]);
        let summary = SalesSummary::compute(&table);
        let mut aggregates = Aggregates::compute(&table);
        aggregates.by_segment = [("Retail".to_string(), 0.0)].into_iter().collect::<GroupSum>();
        let mut dashboard = Dashboard::from_parts(table, aggregates, summary);

        dashboard.select(ChartKind::Bar).unwrap();
        let shown = dashboard.active().cloned();

        let err = dashboard.select(ChartKind::Pie).unwrap_err();

        assert_eq!(err, RenderError::ZeroTotal);
        assert_eq!(dashboard.state(), ViewState::Shown(ChartKind::Bar));
        assert_eq!(dashboard.active().cloned(), shown);
        assert_eq!(dashboard.last_error(), Some(&RenderError::ZeroTotal));

        dashboard.select(ChartKind::Line).unwrap();
        assert!(dashboard.last_error().is_none());
    }

    #[test]
    fn failure_before_first_chart_leaves_nothing_shown() {
        let table = Table::from_rows(Vec::new());
        let summary = SalesSummary::compute(&table);
        let aggregates = Aggregates {
            by_segment: [("Online".to_string(), -1.0)].into_iter().collect(),
            ..Aggregates::default()
        };
        let mut dashboard = Dashboard::from_parts(table, aggregates, summary);

        assert!(dashboard.select(ChartKind::Pie).is_err());
        assert_eq!(dashboard.state(), ViewState::NoneShown);
    }
}
