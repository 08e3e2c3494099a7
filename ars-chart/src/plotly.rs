//! Translation of a `ChartSpec` into a Plotly.js figure.
//!
//! The figure is plain JSON (`{"data": [...], "layout": {...}}`) that the HTML
//! page hands to `Plotly.newPlot`. Panels are laid out side by side, each with
//! its own pair of axes (`x`/`y`, `x2`/`y2`, ...).

use crate::spec::{Axis, ChartSpec, Orientation, Panel, ReferenceLine, Series};
use ars_utils::dates::format_date;
use serde_json::{json, Map, Value};

/// Plotly.js bundle loaded by the HTML page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Default Plotly Express colour sequence.
const PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880", "#FF97FF",
    "#FECB52",
];

/// Horizontal space between panels, as a fraction of the figure width.
const PANEL_SPACING: f64 = 0.08;

/// Horizontal domain of panel `index` out of `count`.
fn panel_domain(index: usize, count: usize) -> [f64; 2] {
    if count <= 1 {
        return [0.0, 1.0];
    }
    let width = (1.0 - PANEL_SPACING * (count - 1) as f64) / count as f64;
    let start = index as f64 * (width + PANEL_SPACING);
    [start, (start + width).min(1.0)]
}

/// Axis suffix Plotly uses for the panel: "" for the first, "2", "3", ... after.
fn axis_suffix(index: usize) -> String {
    if index == 0 {
        String::new()
    } else {
        (index + 1).to_string()
    }
}

fn axis_json(axis: &Axis, anchor: &str, domain: Option<[f64; 2]>) -> Value {
    let mut out = Map::new();
    out.insert("title".into(), json!({ "text": axis.title }));
    out.insert("anchor".into(), json!(anchor));
    if let Some(range) = axis.range {
        out.insert("range".into(), json!(range));
    }
    if axis.range_to_zero {
        out.insert("rangemode".into(), json!("tozero"));
    }
    if let Some(domain) = domain {
        out.insert("domain".into(), json!(domain));
    }
    Value::Object(out)
}

fn trace_json(series: &Series, xref: &str, yref: &str, color: &str) -> Value {
    match series {
        // Bins are already counted, so they are drawn as bars at the bin centres
        Series::Histogram { name, bins, opacity } => json!({
            "type": "bar",
            "name": name,
            "x": bins.iter().map(|b| b.center()).collect::<Vec<_>>(),
            "y": bins.iter().map(|b| b.count).collect::<Vec<_>>(),
            "opacity": opacity,
            "marker": { "color": color },
            "xaxis": xref,
            "yaxis": yref,
        }),
        Series::Scatter { name, points, opacity } => json!({
            "type": "scatter",
            "mode": "markers",
            "name": name,
            "legendgroup": name,
            "x": points.iter().map(|p| format_date(&p.date)).collect::<Vec<_>>(),
            "y": points.iter().map(|p| p.value).collect::<Vec<_>>(),
            "opacity": opacity,
            "marker": { "color": color },
            "xaxis": xref,
            "yaxis": yref,
        }),
        Series::Bar { name, bars } => json!({
            "type": "bar",
            "name": name,
            "x": bars.iter().map(|b| b.x).collect::<Vec<_>>(),
            "y": bars.iter().map(|b| b.y).collect::<Vec<_>>(),
            "text": bars.iter().map(|b| b.label.as_str()).collect::<Vec<_>>(),
            "textposition": "outside",
            "marker": { "color": color },
            "xaxis": xref,
            "yaxis": yref,
        }),
    }
}

/// Shape and annotation for a reference line in the given panel.
fn reference_line_json(line: &ReferenceLine, xref: &str, yref: &str) -> (Value, Value) {
    let style = json!({
        "color": line.color,
        "width": line.width,
        "dash": if line.dashed { "dash" } else { "solid" },
    });
    match line.orientation {
        Orientation::Vertical => (
            json!({
                "type": "line",
                "xref": xref,
                "yref": format!("{} domain", yref),
                "x0": line.value, "x1": line.value,
                "y0": 0, "y1": 1,
                "line": style,
            }),
            json!({
                "text": line.label,
                "xref": xref,
                "yref": format!("{} domain", yref),
                "x": line.value,
                "y": 1,
                "xanchor": "left",
                "yanchor": "bottom",
                "showarrow": false,
            }),
        ),
        Orientation::Horizontal => (
            json!({
                "type": "line",
                "xref": format!("{} domain", xref),
                "yref": yref,
                "x0": 0, "x1": 1,
                "y0": line.value, "y1": line.value,
                "line": style,
            }),
            json!({
                "text": line.label,
                "xref": format!("{} domain", xref),
                "yref": yref,
                "x": 1,
                "y": line.value,
                "xanchor": "right",
                "yanchor": "bottom",
                "showarrow": false,
            }),
        ),
    }
}

fn panel_title_json(title: &str, domain: [f64; 2]) -> Value {
    json!({
        "text": title,
        "xref": "paper",
        "yref": "paper",
        "x": (domain[0] + domain[1]) / 2.0,
        "y": 1.0,
        "xanchor": "center",
        "yanchor": "bottom",
        "showarrow": false,
    })
}

/// Build the Plotly figure for a chart.
pub fn figure(chart: &ChartSpec) -> Value {
    let mut data = Vec::new();
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();
    let mut layout = Map::new();
    let count = chart.panels.len();
    let mut series_index = 0usize;

    for (i, panel) in chart.panels.iter().enumerate() {
        let suffix = axis_suffix(i);
        let xref = format!("x{}", suffix);
        let yref = format!("y{}", suffix);
        let domain = panel_domain(i, count);

        add_panel(
            panel,
            &xref,
            &yref,
            &mut series_index,
            &mut data,
            &mut shapes,
            &mut annotations,
        );
        layout.insert(format!("xaxis{}", suffix), axis_json(&panel.x_axis, &yref, Some(domain)));
        layout.insert(format!("yaxis{}", suffix), axis_json(&panel.y_axis, &xref, None));
        if let Some(title) = &panel.title {
            annotations.push(panel_title_json(title, domain));
        }
    }

    layout.insert("title".into(), json!({ "text": chart.title }));
    layout.insert("showlegend".into(), json!(chart.layout.show_legend));
    if let Some(gap) = chart.layout.bar_gap {
        layout.insert("bargap".into(), json!(gap));
    }
    if let Some(legend_title) = &chart.layout.legend_title {
        layout.insert("legend".into(), json!({ "title": { "text": legend_title } }));
    }
    layout.insert("shapes".into(), Value::Array(shapes));
    layout.insert("annotations".into(), Value::Array(annotations));

    json!({ "data": data, "layout": Value::Object(layout) })
}

fn add_panel(
    panel: &Panel,
    xref: &str,
    yref: &str,
    series_index: &mut usize,
    data: &mut Vec<Value>,
    shapes: &mut Vec<Value>,
    annotations: &mut Vec<Value>,
) {
    for series in &panel.series {
        let color = PALETTE[*series_index % PALETTE.len()];
        data.push(trace_json(series, xref, yref, color));
        *series_index += 1;
    }
    for line in &panel.reference_lines {
        let (shape, annotation) = reference_line_json(line, xref, yref);
        shapes.push(shape);
        annotations.push(annotation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders;
    use ars_core::sample::Sample;
    use ars_core::water_body::WaterBodyType;
    use ars_data::exceedance::annual_exceedance;
    use chrono::NaiveDate;

    fn samples() -> Vec<Sample> {
        [
            ("Subterránea", 2015, 0.02, true),
            ("Subterránea", 2016, 0.003, false),
            ("Superficial", 2015, 0.001, false),
        ]
        .into_iter()
        .map(|(label, year, arsenic, flag)| Sample {
            arsenic_mg_l: Some(arsenic),
            sample_date: NaiveDate::from_ymd_opt(year, 4, 2),
            water_body_type: Some(WaterBodyType::from_label(label)),
            year: Some(year),
            exceeds_threshold: Some(flag),
        })
        .collect()
    }

    #[test]
    fn test_panel_domains() {
        assert_eq!(panel_domain(0, 1), [0.0, 1.0]);
        let left = panel_domain(0, 2);
        let right = panel_domain(1, 2);
        assert_eq!(left[0], 0.0);
        assert!((right[1] - 1.0).abs() < 1e-12);
        assert!((right[0] - left[1] - PANEL_SPACING).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_figure() {
        let fig = figure(&builders::histogram(&samples()));
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["type"], "bar");
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 200);
        assert_eq!(fig["layout"]["xaxis"]["range"], json!([0.0, 0.2]));
        assert_eq!(fig["layout"]["bargap"], json!(0.05));

        let shape = &fig["layout"]["shapes"][0];
        assert_eq!(shape["x0"], json!(0.01));
        assert_eq!(shape["yref"], "y domain");
        assert_eq!(shape["line"]["dash"], "dash");
        assert_eq!(fig["layout"]["annotations"][0]["text"], "Límite NOM-127 (0.01 mg/L)");
    }

    #[test]
    fn test_scatter_figure_uses_one_axis_pair_per_panel() {
        let fig = figure(&builders::scatter(&samples()));
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["xaxis"], "x");
        assert_eq!(data[1]["xaxis"], "x2");
        assert_eq!(data[1]["yaxis"], "y2");
        assert_eq!(data[0]["x"][0], "2015-04-02");
        assert_ne!(data[0]["marker"]["color"], data[1]["marker"]["color"]);
        assert_eq!(fig["layout"]["yaxis2"]["range"], json!([0.0, 0.2]));
        assert_eq!(fig["layout"]["yaxis2"]["anchor"], "x2");
        assert_eq!(fig["layout"]["legend"]["title"]["text"], "Tipo de Agua");

        let shapes = fig["layout"]["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1]["xref"], "x2 domain");
        assert_eq!(shapes[1]["y0"], json!(0.01));
    }

    #[test]
    fn test_bar_figure_labels_and_titles() {
        let (chart, _) = builders::exceedance_bars(&annual_exceedance(&samples()));
        let fig = figure(&chart);
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["x"], json!([2015, 2016]));
        assert_eq!(data[0]["y"], json!([100.0, 0.0]));
        assert_eq!(data[0]["text"], json!(["n=1", "n=1"]));
        assert_eq!(data[0]["textposition"], "outside");
        assert_eq!(fig["layout"]["yaxis"]["rangemode"], "tozero");
        assert_eq!(fig["layout"]["showlegend"], json!(false));

        let titles: Vec<&str> = fig["layout"]["annotations"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|a| a["text"].as_str())
            .collect();
        assert_eq!(titles, vec!["Agua subterránea", "Agua superficial"]);
    }

    #[test]
    fn test_empty_chart_figure() {
        let (chart, _) = builders::exceedance_bars(&Default::default());
        let fig = figure(&chart);
        assert!(fig["data"].as_array().unwrap().is_empty());
        assert_eq!(fig["layout"]["title"]["text"], chart.title);
    }
}
