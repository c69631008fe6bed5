//! Data module - CSV loading and aggregation

mod aggregator;
mod loader;
mod table;

pub use aggregator::{Aggregates, Aggregator, GroupSum, TimeSeries};
pub use loader::{DataLoader, LoaderError};
pub use table::{GroupKey, Row, Table, REQUIRED_COLUMNS};
