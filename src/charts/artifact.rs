//! Chart Artifact Module
//! Plain-data description of a rendered chart, ready for painting.

use egui::Color32;

/// The four chart views the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Line, ChartKind::Area, ChartKind::Bar, ChartKind::Pie];

    /// Text for the command button that selects this view.
    pub fn button_label(self) -> &'static str {
        match self {
            ChartKind::Line => "📈 Line Chart - Sales Trend",
            ChartKind::Area => "🌄 Area Chart - Sales Growth",
            ChartKind::Bar => "📊 Bar Chart - Product Category",
            ChartKind::Pie => "🥧 Pie Chart - Customer Segment",
        }
    }

    /// Button fill colour.
    pub fn accent(self) -> Color32 {
        match self {
            ChartKind::Line => Color32::from_rgb(30, 144, 255),
            ChartKind::Area => Color32::from_rgb(60, 179, 113),
            ChartKind::Bar => Color32::from_rgb(255, 140, 0),
            ChartKind::Pie => Color32::from_rgb(220, 20, 60),
        }
    }
}

/// A rendered chart. Equal inputs always produce equal artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub body: ChartBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    /// Nothing to draw; shown as a blank chart.
    Empty,
    Series(SeriesMarks),
    Bars(Vec<BarMark>),
    Pie(Vec<Wedge>),
}

/// Line or area drawing over categorical months.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMarks {
    /// Tick label for each integer x position.
    pub x_ticks: Vec<String>,
    pub points: Vec<[f64; 2]>,
    pub line_color: Color32,
    pub show_markers: bool,
    /// Convex pieces of the region between the curve and zero.
    pub fill: Vec<Vec<[f64; 2]>>,
    pub fill_color: Color32,
    pub y_bounds: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub label: String,
    pub x: f64,
    pub height: f64,
    pub width: f64,
    pub color: Color32,
}

/// One pie slice on the unit circle. Angles are degrees, counter-clockwise from +x.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub value: f64,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color32,
    /// Value and percentage, e.g. `"300.00\n66.7%"`.
    pub caption: String,
    pub caption_anchor: [f64; 2],
    pub label_anchor: [f64; 2],
    /// Convex fan pieces covering the slice, each at most a quarter turn.
    pub pieces: Vec<Vec<[f64; 2]>>,
}

impl Wedge {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}
