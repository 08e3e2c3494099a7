use crate::water_body::WaterBodyType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single water sample from the monitoring network.
///
/// Every field may be missing in the source data. Rows are never rejected for
/// missing values; each computation skips the rows it cannot use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Total arsenic concentration in mg/L
    pub arsenic_mg_l: Option<f64>,
    pub sample_date: Option<NaiveDate>,
    pub water_body_type: Option<WaterBodyType>,
    /// Calendar year the sample belongs to
    pub year: Option<i32>,
    /// `Some(true)` when the sample is flagged as exceeding NOM-127,
    /// `Some(false)` for any other recorded flag value
    pub exceeds_threshold: Option<bool>,
}

impl Sample {
    /// Concentration, treating NaN the same as a missing value.
    pub fn concentration(&self) -> Option<f64> {
        self.arsenic_mg_l.filter(|v| !v.is_nan())
    }

    pub fn has_concentration(&self) -> bool {
        self.concentration().is_some()
    }

    /// Missing flags count as not exceeding.
    pub fn is_exceeding(&self) -> bool {
        self.exceeds_threshold == Some(true)
    }

    /// Interpret a raw flag value. Only a value of exactly 1 marks an exceedance.
    pub fn flag_from_value(value: Option<f64>) -> Option<bool> {
        match value {
            Some(v) if v.is_nan() => None,
            Some(v) => Some(v == 1.0),
            None => None,
        }
    }
}
