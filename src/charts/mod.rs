//! Charts module - Chart rendering

mod artifact;
mod plotter;
mod renderer;

pub use artifact::{BarMark, ChartArtifact, ChartBody, ChartKind, SeriesMarks, Wedge};
pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderError, PIE_PALETTE};
