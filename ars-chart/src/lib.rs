//! Chart building and presentation for the arsenic dashboard.
//!
//! This crate provides:
//! - `spec`: renderer-neutral chart description (panels, series, axes, reference lines)
//! - `builders`: the histogram, scatter and exceedance bar chart builders
//! - `dashboard`: the explicit chart `Selection` and the top-level `render`
//! - `plotly`: translation of a `ChartSpec` into a Plotly.js figure
//! - `html`: a self-contained HTML page for a rendered `Dashboard`

pub mod builders;
pub mod dashboard;
pub mod html;
pub mod labels;
pub mod plotly;
pub mod spec;
