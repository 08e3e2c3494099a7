//! Dump the selected chart descriptions as JSON.
//!
//! Each entry carries the renderer-neutral chart, its Plotly figure and any
//! diagnostics, so the output can be checked without opening a browser.

use ars_chart::dashboard::{render, Section, Selection};
use ars_chart::plotly::figure;
use log::info;
use serde_json::{json, Value};
use std::io::Write;

/// JSON document for the rendered sections.
pub fn sections_json(sections: &[Section]) -> Value {
    Value::Array(
        sections
            .iter()
            .map(|section| {
                json!({
                    "kind": section.kind,
                    "intro": section.intro,
                    "diagnostics": section.diagnostics,
                    "chart": section.chart,
                    "figure": figure(&section.chart),
                })
            })
            .collect(),
    )
}

pub fn run_charts(input: &str, output: Option<&str>, selection: &Selection) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(input)?;
    let dashboard = render(&dataset, selection);
    info!("Built {} charts", dashboard.sections.len());

    let mut writer = crate::output_writer(output)?;
    serde_json::to_writer_pretty(&mut writer, &sections_json(&dashboard.sections))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
