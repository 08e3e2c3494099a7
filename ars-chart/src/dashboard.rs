//! The dashboard: which charts are switched on, and the top-level render.
//!
//! The toggle state is an explicit `Selection` passed into `render` together
//! with the dataset. Every render pass rebuilds the selected charts from
//! scratch, so rendering twice with the same inputs yields the same result.

use crate::builders;
use crate::labels;
use crate::spec::ChartSpec;
use ars_data::exceedance::annual_exceedance;
use ars_dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The three charts a user can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Scatter,
    ExceedanceBars,
}

impl ChartKind {
    /// All kinds, in the order they appear on the page.
    pub const ALL: [ChartKind; 3] = [ChartKind::Histogram, ChartKind::Scatter, ChartKind::ExceedanceBars];

    pub fn toggle_label(&self) -> &'static str {
        match self {
            ChartKind::Histogram => labels::TOGGLE_HISTOGRAM,
            ChartKind::Scatter => labels::TOGGLE_SCATTER,
            ChartKind::ExceedanceBars => labels::TOGGLE_BARS,
        }
    }

    pub fn intro(&self) -> &'static str {
        match self {
            ChartKind::Histogram => labels::INTRO_HISTOGRAM,
            ChartKind::Scatter => labels::INTRO_SCATTER,
            ChartKind::ExceedanceBars => labels::INTRO_BARS,
        }
    }

    /// Stable identifier, used for DOM ids and file names.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Scatter => "scatter",
            ChartKind::ExceedanceBars => "exceedance-bars",
        }
    }
}

/// The set of switched-on charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    kinds: BTreeSet<ChartKind>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::from_kinds(ChartKind::ALL)
    }

    pub fn from_kinds<I: IntoIterator<Item = ChartKind>>(kinds: I) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Build a selection from the three checkbox states.
    pub fn from_flags(histogram: bool, scatter: bool, exceedance_bars: bool) -> Self {
        let flags = [histogram, scatter, exceedance_bars];
        Self::from_kinds(
            ChartKind::ALL
                .into_iter()
                .zip(flags)
                .filter(|(_, on)| *on)
                .map(|(kind, _)| kind),
        )
    }

    pub fn with(mut self, kind: ChartKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    pub fn contains(&self, kind: ChartKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Selected kinds in page order.
    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.kinds.iter().copied()
    }
}

/// A checkbox as shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toggle {
    pub kind: ChartKind,
    pub label: String,
    pub checked: bool,
}

/// One rendered chart with its intro line and any diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: ChartKind,
    pub intro: String,
    pub chart: ChartSpec,
    pub diagnostics: Vec<String>,
}

/// Everything the page shows for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub header: String,
    pub caption: String,
    pub source_link_text: String,
    pub source_url: String,
    pub subheader: String,
    pub toggles: Vec<Toggle>,
    pub sections: Vec<Section>,
}

/// Build the chart for `kind`, returning any diagnostics with it.
pub fn build_chart(kind: ChartKind, dataset: &Dataset) -> (ChartSpec, Vec<String>) {
    let samples = dataset.samples();
    match kind {
        ChartKind::Histogram => (builders::histogram(samples), Vec::new()),
        ChartKind::Scatter => (builders::scatter(samples), Vec::new()),
        ChartKind::ExceedanceBars => builders::exceedance_bars(&annual_exceedance(samples)),
    }
}

/// Render the dashboard for the given selection.
pub fn render(dataset: &Dataset, selection: &Selection) -> Dashboard {
    let toggles = ChartKind::ALL
        .iter()
        .map(|kind| Toggle {
            kind: *kind,
            label: kind.toggle_label().to_string(),
            checked: selection.contains(*kind),
        })
        .collect();

    let sections = selection
        .kinds()
        .map(|kind| {
            log::info!("dashboard: building {} chart", kind.slug());
            let (chart, diagnostics) = build_chart(kind, dataset);
            Section {
                kind,
                intro: kind.intro().to_string(),
                chart,
                diagnostics,
            }
        })
        .collect();

    Dashboard {
        header: labels::HEADER.to_string(),
        caption: labels::CAPTION_PREFIX.to_string(),
        source_link_text: labels::CAPTION_LINK_TEXT.to_string(),
        source_url: labels::CAPTION_LINK_URL.to_string(),
        subheader: labels::SUBHEADER.to_string(),
        toggles,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_core::sample::Sample;
    use ars_core::water_body::WaterBodyType;
    use chrono::NaiveDate;

    fn dataset() -> Dataset {
        Dataset::from_samples(vec![
            Sample {
                arsenic_mg_l: Some(0.02),
                sample_date: NaiveDate::from_ymd_opt(2015, 2, 1),
                water_body_type: Some(WaterBodyType::Groundwater),
                year: Some(2015),
                exceeds_threshold: Some(true),
            },
            Sample {
                arsenic_mg_l: Some(0.004),
                sample_date: NaiveDate::from_ymd_opt(2018, 8, 21),
                water_body_type: Some(WaterBodyType::Groundwater),
                year: Some(2018),
                exceeds_threshold: Some(false),
            },
        ])
    }

    #[test]
    fn test_selection_from_flags() {
        let selection = Selection::from_flags(true, false, true);
        assert!(selection.contains(ChartKind::Histogram));
        assert!(!selection.contains(ChartKind::Scatter));
        assert!(selection.contains(ChartKind::ExceedanceBars));
        assert!(Selection::from_flags(false, false, false).is_empty());
        assert_eq!(Selection::from_flags(true, true, true), Selection::all());
    }

    #[test]
    fn test_selection_kinds_in_page_order() {
        let selection = Selection::none()
            .with(ChartKind::ExceedanceBars)
            .with(ChartKind::Histogram);
        let kinds: Vec<ChartKind> = selection.kinds().collect();
        assert_eq!(kinds, vec![ChartKind::Histogram, ChartKind::ExceedanceBars]);
    }

    #[test]
    fn test_render_nothing_selected() {
        let dashboard = render(&dataset(), &Selection::none());
        assert!(dashboard.sections.is_empty());
        assert_eq!(dashboard.toggles.len(), 3);
        assert!(dashboard.toggles.iter().all(|t| !t.checked));
        assert_eq!(dashboard.header, labels::HEADER);
    }

    #[test]
    fn test_render_only_selected_charts() {
        let dashboard = render(&dataset(), &Selection::none().with(ChartKind::Scatter));
        assert_eq!(dashboard.sections.len(), 1);
        assert_eq!(dashboard.sections[0].kind, ChartKind::Scatter);
        assert_eq!(dashboard.sections[0].intro, labels::INTRO_SCATTER);
        let checked: Vec<bool> = dashboard.toggles.iter().map(|t| t.checked).collect();
        assert_eq!(checked, vec![false, true, false]);
    }

    #[test]
    fn test_render_reports_missing_surface_type() {
        let dashboard = render(&dataset(), &Selection::all());
        assert_eq!(dashboard.sections.len(), 3);
        let bars = &dashboard.sections[2];
        assert_eq!(bars.kind, ChartKind::ExceedanceBars);
        assert_eq!(bars.chart.panels.len(), 1);
        assert_eq!(bars.diagnostics.len(), 1);
        assert!(bars.diagnostics[0].contains("'Superficial'"));
        assert!(dashboard.sections[0].diagnostics.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = dataset();
        assert_eq!(render(&data, &Selection::all()), render(&data, &Selection::all()));
    }
}
