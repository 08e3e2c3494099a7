//! In-memory sample table for the arsenic dashboard.
//!
//! The cleaned table is read once at startup into a `Dataset` of typed
//! `Sample`s and then passed by reference to every aggregation and chart
//! builder. Nothing mutates it afterwards.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ars_dataset::Dataset;
//!
//! let dataset = Dataset::load("tlm_conagua_limpio.parquet").unwrap();
//! println!("{} samples", dataset.len());
//! ```
//!
//! # Columns
//!
//! See [`schema`] for the column names the loader requires.

pub mod error;
pub mod loader;
pub mod schema;

pub use error::DatasetError;

use ars_core::sample::Sample;
use ars_core::water_body::WaterBodyType;
use serde::Serialize;
use std::collections::BTreeSet;

/// The full, immutable set of samples.
///
/// # Example
///
/// ```rust
/// use ars_core::sample::Sample;
/// use ars_dataset::Dataset;
///
/// let dataset = Dataset::from_samples(vec![Sample {
///     arsenic_mg_l: Some(0.02),
///     sample_date: None,
///     water_body_type: None,
///     year: Some(2015),
///     exceeds_threshold: Some(true),
/// }]);
/// assert_eq!(dataset.len(), 1);
/// assert_eq!(dataset.summary().missing_concentration, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

/// Row and null counts, logged after loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub missing_concentration: usize,
    pub missing_date: usize,
    pub missing_water_body_type: usize,
    pub missing_year: usize,
    pub flagged_exceeding: usize,
    pub water_body_types: Vec<WaterBodyType>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

impl DatasetSummary {
    pub fn water_body_labels(&self) -> Vec<&str> {
        self.water_body_types.iter().map(|t| t.label()).collect()
    }
}

impl Dataset {
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        let samples = &self.samples;
        let types: BTreeSet<WaterBodyType> = samples
            .iter()
            .filter_map(|s| s.water_body_type.clone())
            .collect();
        let years = samples.iter().filter_map(|s| s.year);

        DatasetSummary {
            rows: samples.len(),
            missing_concentration: samples.iter().filter(|s| !s.has_concentration()).count(),
            missing_date: samples.iter().filter(|s| s.sample_date.is_none()).count(),
            missing_water_body_type: samples.iter().filter(|s| s.water_body_type.is_none()).count(),
            missing_year: samples.iter().filter(|s| s.year.is_none()).count(),
            flagged_exceeding: samples.iter().filter(|s| s.is_exceeding()).count(),
            water_body_types: types.into_iter().collect(),
            first_year: years.clone().min(),
            last_year: years.max(),
        }
    }
}
