//! Render the dashboard page.

use ars_chart::dashboard::{render, Selection};
use ars_chart::html::render_page;
use log::{info, warn};

/// Load `input`, build the selected charts and write the HTML page to `output`.
pub fn run_render(input: &str, output: &str, selection: &Selection) -> anyhow::Result<()> {
    if selection.is_empty() {
        warn!("No chart selected; the page will only show the header and checkboxes");
    }
    let dataset = crate::load_dataset(input)?;

    info!("Rendering charts {:?}", crate::selection_names(selection));
    let dashboard = render(&dataset, selection);
    for section in &dashboard.sections {
        for message in &section.diagnostics {
            warn!("{}: {}", section.kind.slug(), message);
        }
    }

    std::fs::write(output, render_page(&dashboard))?;
    info!("Dashboard written to {}", output);
    Ok(())
}
