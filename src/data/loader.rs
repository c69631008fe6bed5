//! CSV Data Loader Module
//! Reads the sales file with Polars and types each row.

use crate::data::table::{Row, Table, REQUIRED_COLUMNS};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("data source not found: {}", .0.display())]
    DataSourceMissing(PathBuf),
    #[error("required column '{0}' is missing from the header")]
    MissingColumn(&'static str),
    #[error("line {line}: column '{column}' has invalid value '{value}'")]
    MalformedRow {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Loads a sales CSV file into a [`Table`].
pub struct DataLoader;

impl DataLoader {
    /// Load and type every row of `file_path`.
    ///
    /// Fails on the first malformed numeric cell; no partial table is returned.
    pub fn load_csv(file_path: &Path) -> Result<Table, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::DataSourceMissing(file_path.to_path_buf()));
        }

        // Read every column as text so typing errors can be reported per line.
        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        debug!(rows = df.height(), columns = df.width(), "csv read");

        let headers: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        let month = Self::text_column(&df, "Month")?;
        let revenue = Self::text_column(&df, "Revenue")?;
        let quantity = Self::text_column(&df, "Quantity")?;
        let category = Self::text_column(&df, "Category")?;
        let segment = Self::text_column(&df, "CustomerSegment")?;

        let all_columns = df
            .get_columns()
            .iter()
            .map(|col| col.str().cloned())
            .collect::<Result<Vec<StringChunked>, PolarsError>>()?;

        let mut rows = Vec::with_capacity(df.height());
        let mut cells = Vec::with_capacity(df.height());

        for i in 0..df.height() {
            // Header occupies line 1; blank lines still count toward the numbering.
            let line = i + 2;

            if Self::is_blank_row(&all_columns, i) {
                debug!(line, "skipping blank line");
                continue;
            }

            rows.push(Row {
                month: Self::text_cell(month, i),
                revenue: Self::parse_revenue(revenue.get(i), line)?,
                quantity: Self::parse_quantity(quantity.get(i), line)?,
                category: Self::text_cell(category, i),
                customer_segment: Self::text_cell(segment, i),
            });

            cells.push(
                all_columns
                    .iter()
                    .map(|col| col.get(i).unwrap_or_default().to_string())
                    .collect(),
            );
        }

        info!(path = %file_path.display(), rows = rows.len(), "dataset loaded");

        Ok(Table::from_parts(file_path.to_path_buf(), headers, rows, cells))
    }

    /// Find a required column, tolerating whitespace around header names.
    fn text_column<'a>(df: &'a DataFrame, name: &'static str) -> Result<&'a StringChunked, LoaderError> {
        debug_assert!(REQUIRED_COLUMNS.contains(&name));

        let column = df
            .get_columns()
            .iter()
            .find(|col| col.name().trim() == name)
            .ok_or(LoaderError::MissingColumn(name))?;

        Ok(column.str()?)
    }

    fn is_blank_row(columns: &[StringChunked], index: usize) -> bool {
        columns
            .iter()
            .all(|col| col.get(index).map_or(true, |v| v.trim().is_empty()))
    }

    fn text_cell(column: &StringChunked, index: usize) -> String {
        column.get(index).unwrap_or_default().trim().to_string()
    }

    fn parse_revenue(raw: Option<&str>, line: usize) -> Result<f64, LoaderError> {
        let text = raw.unwrap_or_default().trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(LoaderError::MalformedRow {
                line,
                column: "Revenue",
                value: text.to_string(),
            }),
        }
    }

    fn parse_quantity(raw: Option<&str>, line: usize) -> Result<i64, LoaderError> {
        let text = raw.unwrap_or_default().trim();
        text.parse::<i64>().map_err(|_| LoaderError::MalformedRow {
            line,
            column: "Quantity",
            value: text.to_string(),
        })
    }
}
