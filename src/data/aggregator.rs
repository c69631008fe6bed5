//! Aggregator Module
//! Derives the presentation series from a loaded table.

use crate::data::table::{GroupKey, Table};
use std::collections::HashMap;
use tracing::debug;

/// (Month, Revenue) pairs in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<(String, f64)>,
}

impl TimeSeries {
    pub fn points(&self) -> &[(String, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(String, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Revenue summed per distinct key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSum {
    entries: Vec<(String, f64)>,
}

impl GroupSum {
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for GroupSum {
    /// Entries with a repeated key are merged into the first occurrence.
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut entries: Vec<(String, f64)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (key, value) in iter {
            match index.get(&key) {
                Some(&pos) => entries[pos].1 += value,
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, value));
                }
            }
        }

        Self { entries }
    }
}

/// Everything the charts need, computed once after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub time_series: TimeSeries,
    pub by_category: GroupSum,
    pub by_segment: GroupSum,
}

impl Aggregates {
    pub fn compute(table: &Table) -> Self {
        let aggregates = Self {
            time_series: Aggregator::time_series(table),
            by_category: Aggregator::group_sum(table, GroupKey::Category),
            by_segment: Aggregator::group_sum(table, GroupKey::CustomerSegment),
        };

        debug!(
            points = aggregates.time_series.len(),
            categories = aggregates.by_category.len(),
            segments = aggregates.by_segment.len(),
            "aggregates computed"
        );

        aggregates
    }
}

/// Pure functions over a [`Table`].
pub struct Aggregator;

impl Aggregator {
    /// Project (Month, Revenue) without re-sorting or gap filling.
    pub fn time_series(table: &Table) -> TimeSeries {
        table
            .rows()
            .iter()
            .map(|row| (row.month.clone(), row.revenue))
            .collect()
    }

    /// Sum revenue per distinct value of `key`.
    pub fn group_sum(table: &Table, key: GroupKey) -> GroupSum {
        table
            .rows()
            .iter()
            .map(|row| (row.key(key).to_string(), row.revenue))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::Row;
    use proptest::prelude::*;

    fn sample_table() -> Table {
        Table::from_rows(vec![
            Row::new("Jan", 100.0, 5, "Electronics", "Retail"),
            Row::new("Feb", 200.0, 7, "Clothing", "Retail"),
            Row::new("Mar", 150.0, 2, "Electronics", "Wholesale"),
        ])
    }

    #[test]
    fn three_row_scenario() {
        let aggregates = Aggregates::compute(&sample_table());

        assert_eq!(
            aggregates.by_category.entries(),
            [("Electronics".to_string(), 250.0), ("Clothing".to_string(), 200.0)]
        );
        assert_eq!(
            aggregates.by_segment.entries(),
            [("Retail".to_string(), 300.0), ("Wholesale".to_string(), 150.0)]
        );
        assert_eq!(
            aggregates.time_series.points(),
            [
                ("Jan".to_string(), 100.0),
                ("Feb".to_string(), 200.0),
                ("Mar".to_string(), 150.0)
            ]
        );
    }

    #[test]
    fn time_series_is_not_resorted() {
        let table = Table::from_rows(vec![
            Row::new("Mar", 3.0, 1, "A", "X"),
            Row::new("Jan", 1.0, 1, "A", "X"),
            Row::new("Mar", 2.0, 1, "A", "X"),
        ]);

        let series = Aggregator::time_series(&table);
        let months: Vec<&str> = series
            .points()
            .iter()
            .map(|(m, _)| m.as_str())
            .collect();

        assert_eq!(months, ["Mar", "Jan", "Mar"]);
    }

    #[test]
    fn empty_table_gives_empty_aggregates() {
        let aggregates = Aggregates::compute(&Table::from_rows(Vec::new()));
        assert_eq!(aggregates, Aggregates::default());
    }

    #[test]
    fn empty_key_forms_its_own_group() {
        let table = Table::from_rows(vec![
            Row::new("Jan", 10.0, 1, "", "Retail"),
            Row::new("Feb", 5.0, 1, "Toys", "Retail"),
            Row::new("Mar", 1.0, 1, "", "Retail"),
        ]);

        let sums = Aggregator::group_sum(&table, GroupKey::Category);

        assert_eq!(sums.get(""), Some(11.0));
        assert_eq!(sums.total(), table.total_revenue());
    }

    #[test]
    fn get_and_total() {
        let sums = Aggregator::group_sum(&sample_table(), GroupKey::Category);
        assert_eq!(sums.get("Electronics"), Some(250.0));
        assert_eq!(sums.get("Toys"), None);
        assert_eq!(sums.total(), 450.0);
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["Jan", "Feb", "Mar", "Apr"]),
                -1_000.0f64..10_000.0,
                0i64..100,
                prop::sample::select(vec!["Electronics", "Clothing", "Toys"]),
                prop::sample::select(vec!["Retail", "Wholesale", "Online"]),
            )
                .prop_map(|(m, r, q, c, s)| Row::new(m, r, q, c, s)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn group_sums_conserve_total(rows in arb_rows()) {
            let table = Table::from_rows(rows);
            let total = table.total_revenue();
            let tolerance = 1e-6 * (1.0 + total.abs());

            for key in [GroupKey::Category, GroupKey::CustomerSegment] {
                let sums = Aggregator::group_sum(&table, key);
                prop_assert!((sums.total() - total).abs() <= tolerance);
            }
        }

        #[test]
        fn group_keys_are_distinct_observed_values(rows in arb_rows()) {
            let table = Table::from_rows(rows);
            let sums = Aggregator::group_sum(&table, GroupKey::Category);

            let mut first_seen: Vec<&str> = Vec::new();
            for row in table.rows() {
                if !first_seen.contains(&row.category.as_str()) {
                    first_seen.push(&row.category);
                }
            }
            let keys: Vec<&str> = sums.entries().iter().map(|(k, _)| k.as_str()).collect();
            prop_assert_eq!(keys, first_seen);
        }

        #[test]
        fn time_series_preserves_rows(rows in arb_rows()) {
            let table = Table::from_rows(rows);
            let series = Aggregator::time_series(&table);

            prop_assert_eq!(series.len(), table.len());
            for ((month, revenue), row) in series.points().iter().zip(table.rows()) {
                prop_assert_eq!(month, &row.month);
                prop_assert_eq!(*revenue, row.revenue);
            }
        }
    }
}
