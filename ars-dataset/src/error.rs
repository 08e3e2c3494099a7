use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unsupported type for column {column}: {dtype}")]
    UnsupportedColumnType { column: String, dtype: String },

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}
