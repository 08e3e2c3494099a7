//! The three chart builders.
//!
//! Each builder is stateless: it takes the samples (or the aggregated table),
//! and returns a fresh `ChartSpec`. Only the exceedance bars can report
//! diagnostics, for water body types missing from the data.

use crate::labels;
use crate::spec::{Axis, BarDatum, ChartSpec, Layout, Orientation, Panel, ReferenceLine, Series};
use ars_core::limits::{
    DISPLAY_WINDOW_MG_L, HISTOGRAM_BIN_WIDTH_MG_L, HISTOGRAM_DOMAIN_MG_L, NOM127_ARSENIC_LIMIT_MG_L,
};
use ars_core::sample::Sample;
use ars_core::water_body::WaterBodyType;
use ars_data::exceedance::{AnnualExceedanceRecord, AnnualExceedanceTable};
use ars_data::histogram::bin_concentrations;
use ars_data::scatter::points_by_water_body;
use ars_dataset::schema;
use ars_utils::numbers::to_percent;

const HISTOGRAM_OPACITY: f64 = 0.75;
const HISTOGRAM_BAR_GAP: f64 = 0.05;
const SCATTER_OPACITY: f64 = 0.6;
const BARS_BAR_GAP: f64 = 0.15;

/// The NOM-127 limit drawn as a dashed red line.
pub fn limit_line(orientation: Orientation) -> ReferenceLine {
    ReferenceLine {
        orientation,
        value: NOM127_ARSENIC_LIMIT_MG_L,
        label: labels::LIMIT_LINE.to_string(),
        color: "red".to_string(),
        width: 3.0,
        dashed: true,
    }
}

/// Distribution of concentrations in 0.005 mg/L bins, showing 0 to 0.2 mg/L.
pub fn histogram(samples: &[Sample]) -> ChartSpec {
    let (start, end) = HISTOGRAM_DOMAIN_MG_L;
    let bins = bin_concentrations(samples, start, end, HISTOGRAM_BIN_WIDTH_MG_L);

    ChartSpec {
        title: labels::HISTOGRAM_TITLE.to_string(),
        panels: vec![Panel {
            title: None,
            x_axis: Axis::titled(labels::HISTOGRAM_X).with_range(DISPLAY_WINDOW_MG_L),
            y_axis: Axis::titled(labels::HISTOGRAM_Y),
            series: vec![Series::Histogram {
                name: labels::HISTOGRAM_SERIES.to_string(),
                bins,
                opacity: HISTOGRAM_OPACITY,
            }],
            reference_lines: vec![limit_line(Orientation::Vertical)],
        }],
        layout: Layout {
            bar_gap: Some(HISTOGRAM_BAR_GAP),
            show_legend: false,
            legend_title: None,
        },
    }
}

/// Concentration over time, one panel per water body type.
pub fn scatter(samples: &[Sample]) -> ChartSpec {
    let panels = points_by_water_body(samples)
        .into_iter()
        .map(|(water_body_type, points)| Panel {
            title: Some(format!("{}={}", labels::SCATTER_FACET, water_body_type)),
            x_axis: Axis::titled(labels::SCATTER_X),
            y_axis: Axis::titled(labels::SCATTER_Y).with_range(DISPLAY_WINDOW_MG_L),
            series: vec![Series::Scatter {
                name: water_body_type.label().to_string(),
                points,
                opacity: SCATTER_OPACITY,
            }],
            reference_lines: vec![limit_line(Orientation::Horizontal)],
        })
        .collect();

    ChartSpec {
        title: labels::SCATTER_TITLE.to_string(),
        panels,
        layout: Layout {
            bar_gap: None,
            show_legend: true,
            legend_title: Some(labels::SCATTER_LEGEND.to_string()),
        },
    }
}

/// Message emitted when a bar panel has no data.
pub fn missing_type_message(missing: &WaterBodyType, found: &[WaterBodyType]) -> String {
    let found = found
        .iter()
        .map(|t| format!("'{}'", t.label()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "No encontré el tipo '{}' en {}. Tipos disponibles: [{}]",
        missing.label(),
        schema::WATER_BODY,
        found
    )
}

fn bar_panel(title: &str, water_body_type: &WaterBodyType, series: &[&AnnualExceedanceRecord]) -> Panel {
    let bars = series
        .iter()
        .map(|r| BarDatum {
            x: r.year,
            y: to_percent(r.proportion),
            label: format!("n={}", r.total),
        })
        .collect();

    Panel {
        title: Some(title.to_string()),
        x_axis: Axis::titled(labels::BARS_X),
        y_axis: Axis::titled(labels::BARS_Y).from_zero(),
        series: vec![Series::Bar {
            name: water_body_type.label().to_string(),
            bars,
        }],
        reference_lines: Vec::new(),
    }
}

/// Yearly share of samples above the limit, groundwater and surface water
/// side by side.
///
/// A panel whose type is absent from `table` is left out and a diagnostic
/// naming the missing type is returned alongside the chart.
pub fn exceedance_bars(table: &AnnualExceedanceTable) -> (ChartSpec, Vec<String>) {
    let found = table.water_body_types();
    let mut panels = Vec::new();
    let mut diagnostics = Vec::new();

    for (water_body_type, title) in [
        (WaterBodyType::Groundwater, labels::BARS_GROUNDWATER_PANEL),
        (WaterBodyType::Surface, labels::BARS_SURFACE_PANEL),
    ] {
        match table.series_for(&water_body_type) {
            Some(series) => panels.push(bar_panel(title, &water_body_type, &series)),
            None => {
                let message = missing_type_message(&water_body_type, &found);
                log::warn!("{}", message);
                diagnostics.push(message);
            }
        }
    }

    let chart = ChartSpec {
        title: labels::BARS_TITLE.to_string(),
        panels,
        layout: Layout {
            bar_gap: Some(BARS_BAR_GAP),
            show_legend: false,
            legend_title: None,
        },
    };
    (chart, diagnostics)
}
