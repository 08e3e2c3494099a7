//! Annual exceedance-rate aggregation.
//!
//! Groups samples by `(year, water body type)` and counts how many of them
//! carry the NOM-127 exceedance flag. The result feeds the grouped bar chart.

use ars_core::limits::in_monitoring_span;
use ars_core::sample::Sample;
use ars_core::water_body::WaterBodyType;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Exceedance counts for one year and one water body type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualExceedanceRecord {
    pub year: i32,
    pub water_body_type: WaterBodyType,
    /// Samples with a recorded concentration.
    pub total: u32,
    /// Of those, samples flagged as exceeding the limit.
    pub exceeding: u32,
    /// `exceeding / total`, always in `[0, 1]`.
    pub proportion: f64,
}

/// All annual records, ordered by year and then by water body type.
///
/// Only observed `(year, type)` pairs are present; the table is not a full
/// year × type grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnnualExceedanceTable {
    records: Vec<AnnualExceedanceRecord>,
}

impl AnnualExceedanceTable {
    pub fn records(&self) -> &[AnnualExceedanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, year: i32, water_body_type: &WaterBodyType) -> Option<&AnnualExceedanceRecord> {
        self.records
            .iter()
            .find(|r| r.year == year && &r.water_body_type == water_body_type)
    }

    /// The per-year series for one water body type, oldest year first.
    ///
    /// Returns `None` when the type never appears, so callers can tell
    /// "no data" apart from an empty selection.
    pub fn series_for(&self, water_body_type: &WaterBodyType) -> Option<Vec<&AnnualExceedanceRecord>> {
        let series: Vec<&AnnualExceedanceRecord> = self
            .records
            .iter()
            .filter(|r| &r.water_body_type == water_body_type)
            .collect();
        if series.is_empty() {
            None
        } else {
            Some(series)
        }
    }

    /// Distinct water body types present in the table, sorted by label.
    pub fn water_body_types(&self) -> Vec<WaterBodyType> {
        self.records
            .iter()
            .map(|r| r.water_body_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct years present in the table, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Build the annual exceedance table from the full sample set.
///
/// A sample is counted when it has a concentration, a year inside the
/// monitoring span (2012-2024) and a water body type.
pub fn annual_exceedance(samples: &[Sample]) -> AnnualExceedanceTable {
    let mut groups: BTreeMap<(i32, WaterBodyType), (u32, u32)> = BTreeMap::new();
    let mut skipped = 0usize;

    for sample in samples {
        if !sample.has_concentration() {
            skipped += 1;
            continue;
        }
        let year = match sample.year {
            Some(y) if in_monitoring_span(y) => y,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let water_body_type = match &sample.water_body_type {
            Some(t) => t.clone(),
            None => {
                skipped += 1;
                continue;
            }
        };

        let (total, exceeding) = groups.entry((year, water_body_type)).or_insert((0, 0));
        *total += 1;
        if sample.is_exceeding() {
            *exceeding += 1;
        }
    }

    // Groups only exist for observed rows, so `total` is never zero here.
    let records: Vec<AnnualExceedanceRecord> = groups
        .into_iter()
        .map(|((year, water_body_type), (total, exceeding))| AnnualExceedanceRecord {
            year,
            water_body_type,
            total,
            exceeding,
            proportion: exceeding as f64 / total as f64,
        })
        .collect();

    log::debug!(
        "annual_exceedance: {} records from {} samples ({} skipped)",
        records.len(),
        samples.len(),
        skipped
    );

    AnnualExceedanceTable { records }
}
