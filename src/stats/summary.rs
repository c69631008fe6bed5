//! Summary Statistics Module
//! Headline numbers shown above the sales table.

use crate::data::Table;
use statrs::statistics::Statistics;

/// Revenue figures are `None` for an empty table; `total_quantity` is `None` on overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub row_count: usize,
    pub total_revenue: f64,
    pub mean_revenue: Option<f64>,
    pub min_revenue: Option<f64>,
    pub max_revenue: Option<f64>,
    pub total_quantity: Option<i64>,
}

impl SalesSummary {
    pub fn compute(table: &Table) -> Self {
        let revenues: Vec<f64> = table.rows().iter().map(|r| r.revenue).collect();
        let total_quantity = table
            .rows()
            .iter()
            .try_fold(0i64, |acc, r| acc.checked_add(r.quantity));

        if revenues.is_empty() {
            return Self {
                row_count: 0,
                total_revenue: 0.0,
                mean_revenue: None,
                min_revenue: None,
                max_revenue: None,
                total_quantity,
            };
        }

        Self {
            row_count: revenues.len(),
            total_revenue: revenues.iter().sum(),
            mean_revenue: Some(Statistics::mean(revenues.iter())),
            min_revenue: Some(Statistics::min(revenues.iter())),
            max_revenue: Some(Statistics::max(revenues.iter())),
            total_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    #[test]
    fn summarises_revenue_and_quantity() {
        let table = Table::from_rows(vec![
            Row::new("Jan", 100.0, 5, "Electronics", "Retail"),
            Row::new("Feb", 200.0, 7, "Clothing", "Retail"),
            Row::new("Mar", 150.0, 2, "Electronics", "Wholesale"),
        ]);

        let summary = SalesSummary::compute(&table);

        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.total_revenue, 450.0);
        assert_eq!(summary.mean_revenue, Some(150.0));
        assert_eq!(summary.min_revenue, Some(100.0));
        assert_eq!(summary.max_revenue, Some(200.0));
        assert_eq!(summary.total_quantity, Some(14));
    }

    #[test]
    fn empty_table_has_no_revenue_figures() {
        let summary = SalesSummary::compute(&Table::from_rows(Vec::new()));

        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert!(summary.mean_revenue.is_none());
        assert!(summary.max_revenue.is_none());
        assert_eq!(summary.total_quantity, Some(0));
    }

    #[test]
    fn quantity_overflow_is_reported_not_panicked() {
        let table = Table::from_rows(vec![
            Row::new("Jan", 1.0, i64::MAX, "Electronics", "Retail"),
            Row::new("Feb", 2.0, 1, "Clothing", "Retail"),
        ]);

        let summary = SalesSummary::compute(&table);

        assert_eq!(summary.total_quantity, None);
        assert_eq!(summary.total_revenue, 3.0);
    }
}
