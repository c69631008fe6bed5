//! Stats module - headline figures for the dashboard

mod summary;

pub use summary::SalesSummary;
