//! Renderer-neutral chart description.
//!
//! Builders produce these structs and a rendering layer consumes them; nothing
//! here knows about a particular plotting library. All structs derive
//! `Serialize` so a chart can be dumped as JSON.

use ars_data::histogram::HistogramBin;
use ars_data::scatter::ScatterPoint;
use serde::Serialize;

/// A complete chart: a title, one or more side-by-side panels and layout options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub panels: Vec<Panel>,
    pub layout: Layout,
}

/// Options that apply to the whole chart.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Layout {
    /// Fraction of each bar slot left empty.
    pub bar_gap: Option<f64>,
    pub show_legend: bool,
    pub legend_title: Option<String>,
}

/// One plotting area with its own axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    /// Fixed visible window; `None` lets the renderer pick.
    pub range: Option<[f64; 2]>,
    /// Force the automatic range to include zero.
    pub range_to_zero: bool,
}

impl Axis {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
            range_to_zero: false,
        }
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range = Some([range.0, range.1]);
        self
    }

    pub fn from_zero(mut self) -> Self {
        self.range_to_zero = true;
        self
    }
}

/// The data drawn in a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Series {
    Histogram {
        name: String,
        bins: Vec<HistogramBin>,
        opacity: f64,
    },
    Scatter {
        name: String,
        points: Vec<ScatterPoint>,
        opacity: f64,
    },
    Bar {
        name: String,
        bars: Vec<BarDatum>,
    },
}

impl Series {
    pub fn name(&self) -> &str {
        match self {
            Series::Histogram { name, .. } | Series::Scatter { name, .. } | Series::Bar { name, .. } => name,
        }
    }
}

/// One bar with a text label drawn above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    pub x: i32,
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// A line at a fixed x value spanning the whole panel height.
    Vertical,
    /// A line at a fixed y value spanning the whole panel width.
    Horizontal,
}

/// Annotated straight line, used for the regulatory limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    pub value: f64,
    pub label: String,
    pub color: String,
    pub width: f64,
    pub dashed: bool,
}
