//! Reading the sample table and converting it into typed `Sample`s.
//!
//! The file is read once with polars (Parquet, or CSV for hand-made
//! extracts). Each required column is coerced to the type the domain expects;
//! values that cannot be interpreted become missing instead of failing the
//! load. Only a missing column or a column of an unusable type is an error.

use crate::error::DatasetError;
use crate::schema;
use crate::Dataset;
use ars_core::sample::Sample;
use ars_core::water_body::WaterBodyType;
use ars_utils::dates::{date_from_epoch_days, parse_sample_date};
use chrono::NaiveDate;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// On-disk formats the loader understands, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Parquet,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "parquet" | "pq" => Ok(InputFormat::Parquet),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read the whole file into a DataFrame.
pub fn read_frame(path: &Path) -> Result<DataFrame, DatasetError> {
    let df = match InputFormat::from_path(path)? {
        InputFormat::Parquet => {
            let file = File::open(path)?;
            ParquetReader::new(file).finish()?
        }
        InputFormat::Csv => CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?,
    };
    Ok(df)
}

impl Dataset {
    /// Load and validate the sample table at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let df = read_frame(path)?;
        log::info!(
            "loader: read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        Self::from_frame(&df)
    }

    /// Convert an in-memory frame into a dataset.
    ///
    /// Extra columns are ignored.
    pub fn from_frame(df: &DataFrame) -> Result<Self, DatasetError> {
        require_columns(df, &schema::REQUIRED)?;

        let arsenic = float_column(df, schema::ARSENIC)?;
        let dates = date_column(df, schema::SAMPLE_DATE)?;
        let types = label_column(df, schema::WATER_BODY)?;
        let years = int_column(df, schema::YEAR)?;
        let flags = float_column(df, schema::EXCEEDS)?;

        let samples: Vec<Sample> = (0..df.height())
            .map(|i| Sample {
                arsenic_mg_l: arsenic[i].filter(|v| !v.is_nan()),
                sample_date: dates[i],
                water_body_type: types[i].as_deref().map(WaterBodyType::from_label),
                year: years[i],
                exceeds_threshold: Sample::flag_from_value(flags[i]),
            })
            .collect();

        let dataset = Dataset::from_samples(samples);
        let summary = dataset.summary();
        log::debug!(
            "loader: {} samples, {} without concentration, water body types: {:?}",
            summary.rows,
            summary.missing_concentration,
            summary.water_body_labels()
        );
        Ok(dataset)
    }
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), DatasetError> {
    for &col_name in required {
        if df.column(col_name).is_err() {
            return Err(DatasetError::MissingColumn(col_name.to_string()));
        }
    }
    Ok(())
}

fn unsupported(column: &str, dtype: &DataType) -> DatasetError {
    DatasetError::UnsupportedColumnType {
        column: column.to_string(),
        dtype: dtype.to_string(),
    }
}

/// Numeric, boolean or text column as `f64`. Unparseable text becomes missing.
fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
    let series = df.column(name)?.as_materialized_series();
    let dtype = series.dtype();
    if !(dtype.is_primitive_numeric() || dtype.is_bool() || dtype.is_string() || dtype.is_null()) {
        return Err(unsupported(name, dtype));
    }
    let cast = series.cast(&DataType::Float64)?;
    Ok(cast.f64()?.into_iter().collect())
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>, DatasetError> {
    let series = df.column(name)?.as_materialized_series();
    let dtype = series.dtype();
    if !(dtype.is_primitive_numeric() || dtype.is_string() || dtype.is_null()) {
        return Err(unsupported(name, dtype));
    }
    let cast = series.cast(&DataType::Int32)?;
    Ok(cast.i32()?.into_iter().collect())
}

fn label_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, DatasetError> {
    let series = df.column(name)?.as_materialized_series();
    let cast = series.cast(&DataType::String)?;
    Ok(cast
        .str()?
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect())
}

/// Dates stored as Date, Datetime or text.
fn date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>, DatasetError> {
    let series = df.column(name)?.as_materialized_series();
    match series.dtype() {
        DataType::String => Ok(series
            .str()?
            .into_iter()
            .map(|v| v.and_then(|s| parse_sample_date(s).ok()))
            .collect()),
        DataType::Date | DataType::Datetime(_, _) => {
            // Date is stored as days since the Unix epoch
            let days = series.cast(&DataType::Date)?.cast(&DataType::Int32)?;
            Ok(days
                .i32()?
                .into_iter()
                .map(|v| v.and_then(date_from_epoch_days))
                .collect())
        }
        DataType::Null => Ok(vec![None; series.len()]),
        other => Err(unsupported(name, other)),
    }
}
