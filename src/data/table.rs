//! Sales Table Module
//! Row-oriented, read-only view of the loaded dataset.

use std::path::{Path, PathBuf};

/// Columns every sales file must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Month", "Revenue", "Quantity", "Category", "CustomerSegment"];

/// Categorical columns a `GroupSum` can partition by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Category,
    CustomerSegment,
}

impl GroupKey {
    pub fn column_name(self) -> &'static str {
        match self {
            GroupKey::Category => "Category",
            GroupKey::CustomerSegment => "CustomerSegment",
        }
    }
}

/// One sales record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub month: String,
    pub revenue: f64,
    pub quantity: i64,
    pub category: String,
    pub customer_segment: String,
}

impl Row {
    pub fn new(
        month: impl Into<String>,
        revenue: f64,
        quantity: i64,
        category: impl Into<String>,
        customer_segment: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            revenue,
            quantity,
            category: category.into(),
            customer_segment: customer_segment.into(),
        }
    }

    /// Value of a categorical column.
    pub fn key(&self, key: GroupKey) -> &str {
        match key {
            GroupKey::Category => &self.category,
            GroupKey::CustomerSegment => &self.customer_segment,
        }
    }

    fn display_cells(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            self.revenue.to_string(),
            self.quantity.to_string(),
            self.category.clone(),
            self.customer_segment.clone(),
        ]
    }
}

/// The full in-memory dataset. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Table {
    source: Option<PathBuf>,
    headers: Vec<String>,
    rows: Vec<Row>,
    /// Cell text exactly as read, one entry per header.
    cells: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from file contents already split into typed rows and raw cells.
    pub(crate) fn from_parts(
        source: PathBuf,
        headers: Vec<String>,
        rows: Vec<Row>,
        cells: Vec<Vec<String>>,
    ) -> Self {
        debug_assert_eq!(rows.len(), cells.len());
        Self {
            source: Some(source),
            headers,
            rows,
            cells,
        }
    }

    /// Build a table directly from rows, using the canonical column order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let cells = rows.iter().map(Row::display_cells).collect();
        Self {
            source: None,
            headers: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
            cells,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Verbatim cell text for row `index`, aligned with `headers()`.
    pub fn cells(&self, index: usize) -> Option<&[String]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn total_revenue(&self) -> f64 {
        self.rows.iter().map(|r| r.revenue).sum()
    }
}
