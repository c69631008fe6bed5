//! Chart Renderer
//! Turns an aggregate into a [`ChartArtifact`].
//!
//! Layout per kind:
//! - Line: markers joined over (month index, revenue)
//! - Area: the same curve with the region down to zero filled
//! - Bar: one bar per category, height = summed revenue
//! - Pie: one wedge per customer segment, starting at twelve o'clock

use crate::charts::artifact::{BarMark, ChartArtifact, ChartBody, ChartKind, SeriesMarks, Wedge};
use crate::data::{Aggregates, GroupSum, TimeSeries};
use egui::Color32;
use thiserror::Error;
use tracing::debug;

// Colors
const BLUE: Color32 = Color32::from_rgb(0, 0, 255);
const SKY_BLUE: Color32 = Color32::from_rgb(135, 206, 235);
const SKY_BLUE_FILL: Color32 = Color32::from_rgba_premultiplied(68, 103, 118, 128);
const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);

pub const PIE_PALETTE: [Color32; 4] = [
    Color32::from_rgb(240, 128, 128), // Light coral
    Color32::from_rgb(255, 215, 0),   // Gold
    SKY_BLUE,
    Color32::from_rgb(144, 238, 144), // Light green
];

const BAR_WIDTH: f64 = 0.6;
const PIE_START_ANGLE: f64 = 90.0;
const ARC_STEP_DEGREES: f64 = 3.0;
const CAPTION_RADIUS: f64 = 0.6;
const LABEL_RADIUS: f64 = 1.15;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("value for '{label}' is not a finite number")]
    NonFiniteValue { label: String },
    #[error("pie wedge '{label}' has a negative value")]
    NegativeWedge { label: String },
    #[error("pie values sum to zero")]
    ZeroTotal,
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render `kind` from the aggregate it is defined over.
    pub fn render(kind: ChartKind, aggregates: &Aggregates) -> Result<ChartArtifact, RenderError> {
        let artifact = match kind {
            ChartKind::Line => Self::render_line(&aggregates.time_series),
            ChartKind::Area => Self::render_area(&aggregates.time_series),
            ChartKind::Bar => Self::render_bar(&aggregates.by_category),
            ChartKind::Pie => Self::render_pie(&aggregates.by_segment),
        }?;

        debug!(?kind, empty = matches!(artifact.body, ChartBody::Empty), "chart rendered");
        Ok(artifact)
    }

    pub fn render_line(series: &TimeSeries) -> Result<ChartArtifact, RenderError> {
        Ok(ChartArtifact {
            kind: ChartKind::Line,
            title: "Sales Trend Over Time".to_string(),
            x_label: "Month".to_string(),
            y_label: "Revenue ($)".to_string(),
            body: Self::series_body(series, false)?,
        })
    }

    pub fn render_area(series: &TimeSeries) -> Result<ChartArtifact, RenderError> {
        Ok(ChartArtifact {
            kind: ChartKind::Area,
            title: "Area Chart - Sales Growth".to_string(),
            x_label: "Month".to_string(),
            y_label: "Revenue ($)".to_string(),
            body: Self::series_body(series, true)?,
        })
    }

    pub fn render_bar(sums: &GroupSum) -> Result<ChartArtifact, RenderError> {
        Self::check_finite(sums.entries())?;

        let bars: Vec<BarMark> = sums
            .entries()
            .iter()
            .enumerate()
            .map(|(i, (label, value))| BarMark {
                label: label.clone(),
                x: i as f64,
                height: *value,
                width: BAR_WIDTH,
                color: ORANGE,
            })
            .collect();

        Ok(ChartArtifact {
            kind: ChartKind::Bar,
            title: "Sales by Product Category".to_string(),
            x_label: "Product Category".to_string(),
            y_label: "Total Sales ($)".to_string(),
            body: if bars.is_empty() {
                ChartBody::Empty
            } else {
                ChartBody::Bars(bars)
            },
        })
    }

    pub fn render_pie(sums: &GroupSum) -> Result<ChartArtifact, RenderError> {
        Self::check_finite(sums.entries())?;
        if let Some((label, _)) = sums.entries().iter().find(|(_, v)| *v < 0.0) {
            return Err(RenderError::NegativeWedge {
                label: label.clone(),
            });
        }

        let body = if sums.is_empty() {
            ChartBody::Empty
        } else {
            let total = sums.total();
            if total <= 0.0 {
                return Err(RenderError::ZeroTotal);
            }

            let mut start = PIE_START_ANGLE;
            let wedges = sums
                .entries()
                .iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    let percent = value / total * 100.0;
                    let end = start + percent * 3.6;
                    let wedge = Self::wedge(label, *value, percent, start, end, PIE_PALETTE[i % PIE_PALETTE.len()]);
                    start = end;
                    wedge
                })
                .collect();
            ChartBody::Pie(wedges)
        };

        Ok(ChartArtifact {
            kind: ChartKind::Pie,
            title: "Sales Distribution by Customer Segment".to_string(),
            x_label: String::new(),
            y_label: String::new(),
            body,
        })
    }

    fn series_body(series: &TimeSeries, filled: bool) -> Result<ChartBody, RenderError> {
        Self::check_finite(series.points())?;
        if series.is_empty() {
            return Ok(ChartBody::Empty);
        }

        let points: Vec<[f64; 2]> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, (_, revenue))| [i as f64, *revenue])
            .collect();

        let fill = if filled {
            points
                .windows(2)
                .flat_map(|pair| Self::fill_segment(pair[0], pair[1]))
                .collect()
        } else {
            Vec::new()
        };

        Ok(ChartBody::Series(SeriesMarks {
            x_ticks: series.points().iter().map(|(m, _)| m.clone()).collect(),
            y_bounds: Self::y_range(&points, filled),
            points,
            line_color: BLUE,
            show_markers: !filled,
            fill,
            fill_color: SKY_BLUE_FILL,
        }))
    }

    /// Region between one curve segment and the zero baseline, split where the
    /// segment crosses zero so every piece stays convex.
    fn fill_segment(a: [f64; 2], b: [f64; 2]) -> Vec<Vec<[f64; 2]>> {
        let [x0, y0] = a;
        let [x1, y1] = b;

        if y0 * y1 >= 0.0 {
            return vec![vec![[x0, 0.0], [x1, 0.0], [x1, y1], [x0, y0]]];
        }

        let xc = x0 + (x1 - x0) * y0 / (y0 - y1);
        vec![
            vec![[x0, 0.0], [xc, 0.0], [x0, y0]],
            vec![[xc, 0.0], [x1, 0.0], [x1, y1]],
        ]
    }

    fn y_range(points: &[[f64; 2]], include_zero: bool) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &[_, y] in points {
            min = min.min(y);
            max = max.max(y);
        }
        if include_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.1
        } else {
            (max.abs() * 0.1).max(1.0)
        };
        (min - pad, max + pad)
    }

    fn wedge(label: &str, value: f64, percent: f64, start: f64, end: f64, color: Color32) -> Wedge {
        let mid = (start + end) / 2.0;

        Wedge {
            label: label.to_string(),
            value,
            percent,
            start_angle: start,
            end_angle: end,
            color,
            caption: format!("{:.2}\n{:.1}%", value, percent),
            caption_anchor: Self::polar(CAPTION_RADIUS, mid),
            label_anchor: Self::polar(LABEL_RADIUS, mid),
            pieces: Self::wedge_pieces(start, end),
        }
    }

    fn wedge_pieces(start: f64, end: f64) -> Vec<Vec<[f64; 2]>> {
        let sweep = end - start;
        let count = (sweep / 90.0).ceil() as usize;

        (0..count)
            .map(|i| {
                let a0 = start + sweep * i as f64 / count as f64;
                let a1 = start + sweep * (i + 1) as f64 / count as f64;
                let steps = ((a1 - a0) / ARC_STEP_DEGREES).ceil().max(1.0) as usize;

                let mut piece = Vec::with_capacity(steps + 2);
                piece.push([0.0, 0.0]);
                for s in 0..=steps {
                    piece.push(Self::polar(1.0, a0 + (a1 - a0) * s as f64 / steps as f64));
                }
                piece
            })
            .collect()
    }

    fn polar(radius: f64, degrees: f64) -> [f64; 2] {
        let rad = degrees.to_radians();
        [radius * rad.cos(), radius * rad.sin()]
    }

    fn check_finite(entries: &[(String, f64)]) -> Result<(), RenderError> {
        match entries.iter().find(|(_, v)| !v.is_finite()) {
            Some((label, _)) => Err(RenderError::NonFiniteValue {
                label: label.clone(),
            }),
            None => Ok(()),
        }
    }
}
