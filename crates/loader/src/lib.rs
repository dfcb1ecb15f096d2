//! # Sales Tracker Loader
//!
//! This crate is the tabular data source of the system. It reads a sales
//! table from disk and hands back a validated `SalesDataset`.
//!
//! ## Expected Layout
//!
//! - The first row is a header.
//! - The first column holds the week labels; its header is ignored.
//! - Every remaining column is one product, named by its header.
//! - Empty cells are sales of zero. Anything else that is not a number is an error.
//!
//! ## Public API
//!
//! - `load_sales_data`: reads a `.csv` file or a spreadsheet workbook.
//! - `LoadOptions`: optional knobs, such as which worksheet to read.
//! - `LoaderError`: the specific error types that can be returned from this crate.

pub mod csv;
pub mod error;
pub mod workbook;

pub use error::LoaderError;

use core_types::{SalesDataset, SalesMatrix};
use ndarray::Array2;
use std::path::Path;

/// Options that influence how a file is read.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read from a workbook. Defaults to the first sheet. Ignored for CSV.
    pub sheet: Option<String>,
}

/// The file formats the loader understands, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoaderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads a sales table from `path`.
///
/// The format is picked from the file extension. The returned dataset is
/// guaranteed to have one label per week, one unique name per product and a
/// fully populated matrix.
pub fn load_sales_data(path: &Path, options: &LoadOptions) -> Result<SalesDataset, LoaderError> {
    let format = SourceFormat::from_path(path)?;
    std::fs::metadata(path)?;

    tracing::info!(path = %path.display(), ?format, "Loading sales data.");

    let dataset = match format {
        SourceFormat::Csv => {
            if let Some(sheet) = &options.sheet {
                tracing::warn!(sheet = %sheet, "Sheet selection has no effect on CSV files.");
            }
            csv::load_csv(path)?
        }
        SourceFormat::Workbook => workbook::load_workbook(path, options.sheet.as_deref())?,
    };

    tracing::info!(
        weeks = dataset.matrix().periods(),
        products = dataset.matrix().products(),
        "Sales data loaded."
    );

    Ok(dataset)
}

/// Assembles a dataset from column-wise values, one `Vec` per product.
pub(crate) fn build_dataset(
    product_names: Vec<String>,
    week_labels: Vec<String>,
    columns: Vec<Vec<f64>>,
) -> Result<SalesDataset, LoaderError> {
    let weeks = week_labels.len();

    if weeks == 0 {
        return Err(LoaderError::InvalidFormat(
            "the table has a header but no data rows".to_string(),
        ));
    }
    if columns.is_empty() {
        return Err(LoaderError::InvalidFormat(
            "expected a week column followed by at least one product column".to_string(),
        ));
    }
    if let Some((name, column)) = product_names
        .iter()
        .zip(&columns)
        .find(|(_, column)| column.len() != weeks)
    {
        return Err(LoaderError::InvalidFormat(format!(
            "column '{name}' has {} values but there are {weeks} weeks",
            column.len()
        )));
    }

    let values = Array2::from_shape_fn((weeks, columns.len()), |(row, col)| columns[col][row]);

    Ok(SalesDataset::new(
        product_names,
        week_labels,
        SalesMatrix::new(values),
    )?)
}
