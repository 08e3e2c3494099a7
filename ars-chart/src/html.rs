//! Self-contained HTML page for a rendered dashboard.
//!
//! The page loads Plotly.js from its CDN and draws each section's figure into
//! its own container. The checkboxes mirror the selection the page was
//! rendered with; ticking one off hides its chart.

use crate::dashboard::{Dashboard, Section};
use crate::plotly::{figure, PLOTLY_CDN};

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0 auto; max-width: 1200px; padding: 16px; color: #262730; }
    .caption { font-size: 14px; color: #808495; }
    .toggles label { display: block; margin: 4px 0; }
    .intro { margin: 16px 0 8px 0; }
    .warning { padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082; }
    .chart { min-height: 450px; width: 100%; }
"#;

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON embedded in a `<script>` block must not close the tag early.
fn script_safe_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn section_id(section: &Section) -> String {
    format!("section-{}", section.kind.slug())
}

fn chart_id(section: &Section) -> String {
    format!("chart-{}", section.kind.slug())
}

/// Render the whole page.
pub fn render_page(dashboard: &Dashboard) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h2>{}</h2>\n", escape_html(&dashboard.header)));
    body.push_str(&format!(
        "<p class=\"caption\">{} <a href=\"{}\"><em>{}</em></a></p>\n",
        escape_html(&dashboard.caption),
        escape_html(&dashboard.source_url),
        escape_html(&dashboard.source_link_text),
    ));
    body.push_str(&format!("<h3>{}</h3>\n", escape_html(&dashboard.subheader)));

    body.push_str("<div class=\"toggles\">\n");
    for toggle in &dashboard.toggles {
        let slug = toggle.kind.slug();
        let state = if toggle.checked {
            format!("checked onchange=\"arsToggle('{slug}', this.checked)\"")
        } else {
            "disabled".to_string()
        };
        body.push_str(&format!(
            "<label><input type=\"checkbox\" id=\"toggle-{slug}\" {state}> {}</label>\n",
            escape_html(&toggle.label),
        ));
    }
    body.push_str("</div>\n");

    let mut scripts = String::new();
    for section in &dashboard.sections {
        body.push_str(&format!("<section id=\"{}\">\n", section_id(section)));
        body.push_str(&format!("<p class=\"intro\">{}</p>\n", escape_html(&section.intro)));
        for message in &section.diagnostics {
            body.push_str(&format!("<div class=\"warning\">⚠️ {}</div>\n", escape_html(message)));
        }
        body.push_str(&format!("<div id=\"{}\" class=\"chart\"></div>\n", chart_id(section)));
        body.push_str("</section>\n");

        scripts.push_str(&format!(
            "arsPlot('{}', {});\n",
            chart_id(section),
            script_safe_json(&figure(&section.chart))
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{plotly}"></script>
<style>{style}</style>
</head>
<body>
{body}<script>
function arsPlot(id, fig) {{
  Plotly.newPlot(id, fig.data, fig.layout, {{ responsive: true }});
}}
function arsToggle(slug, visible) {{
  var el = document.getElementById('section-' + slug);
  if (el) el.style.display = visible ? '' : 'none';
}}
{scripts}</script>
</body>
</html>
"##,
        title = escape_html(&dashboard.header),
        plotly = PLOTLY_CDN,
        style = STYLE,
        body = body,
        scripts = scripts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{render, ChartKind, Selection};
    use ars_core::sample::Sample;
    use ars_core::water_body::WaterBodyType;
    use ars_dataset::Dataset;
    use chrono::NaiveDate;

    fn dataset() -> Dataset {
        Dataset::from_samples(vec![Sample {
            arsenic_mg_l: Some(0.015),
            sample_date: NaiveDate::from_ymd_opt(2020, 1, 15),
            water_body_type: Some(WaterBodyType::Surface),
            year: Some(2020),
            exceeds_threshold: Some(true),
        }])
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_safe_json() {
        let value = serde_json::json!({ "text": "</script>" });
        assert!(!script_safe_json(&value).contains("</script>"));
    }

    #[test]
    fn test_page_contains_header_and_selected_charts_only() {
        let dashboard = render(&dataset(), &Selection::none().with(ChartKind::Histogram));
        let page = render_page(&dashboard);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Arsénico en los Principales Cuerpos de Agua de México de 2012-2024"));
        assert!(page.contains(PLOTLY_CDN));
        assert!(page.contains(r#"<div id="chart-histogram" class="chart">"#));
        assert!(!page.contains(r#"<div id="chart-scatter""#));
        assert!(page.contains(r#"id="toggle-scatter" disabled"#));
        assert!(page.contains("arsPlot('chart-histogram'"));
    }

    #[test]
    fn test_page_lists_every_toggle_and_section_markup() {
        let dashboard = render(&dataset(), &Selection::all());
        let page = render_page(&dashboard);
        for kind in ChartKind::ALL {
            let slug = kind.slug();
            assert!(page.contains(&format!(
                r#"<input type="checkbox" id="toggle-{slug}" checked onchange="arsToggle('{slug}', this.checked)">"#
            )));
            assert!(page.contains(&format!(r#"<section id="section-{slug}">"#)));
            assert!(page.contains(&format!("arsPlot('chart-{slug}', ")));
        }
        assert!(page.contains(r#"<p class="caption">Con datos oficiales"#));
        assert!(page.contains("</section>\n"));
    }

    #[test]
    fn test_page_shows_diagnostics() {
        let dashboard = render(&dataset(), &Selection::none().with(ChartKind::ExceedanceBars));
        let page = render_page(&dashboard);
        assert!(page.contains(r#"<div class="warning">"#));
        assert!(page.contains("No encontré el tipo &#39;Subterránea&#39;"));
    }
}
