use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Unsupported file format: '{0}' (expected .csv, .xlsx, .xlsm, .xls or .ods)")]
    UnsupportedFormat(String),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Column '{column}' contains a non-numeric value{}", at_row(.row))]
    NonNumeric { column: String, row: Option<usize> },

    #[error("Loaded data is inconsistent: {0}")]
    Core(#[from] core_types::CoreError),
}

fn at_row(row: &Option<usize>) -> String {
    row.map(|r| format!(" at data row {r}")).unwrap_or_default()
}
