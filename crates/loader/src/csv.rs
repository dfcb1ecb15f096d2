use crate::error::LoaderError;
use core_types::SalesDataset;
use polars::prelude::*;
use std::path::Path;

/// Reads a comma-separated sales table.
///
/// Column types are inferred by polars from every row of the file. Null and
/// NaN cells become 0 and a column with no values at all is treated as all
/// zeros. Infinite values are rejected.
pub fn load_csv(path: &Path) -> Result<SalesDataset, LoaderError> {
    let df = CsvReader::from_path(path)?
        .has_header(true)
        .infer_schema(None)
        .finish()?;
    tracing::debug!(shape = ?df.shape(), "Parsed CSV into a DataFrame.");

    let (label_column, product_columns) = df
        .get_columns()
        .split_first()
        .ok_or_else(|| LoaderError::InvalidFormat("the file has no columns".to_string()))?;

    let week_labels = labels(label_column)?;

    let mut product_names = Vec::with_capacity(product_columns.len());
    let mut columns = Vec::with_capacity(product_columns.len());
    for series in product_columns {
        product_names.push(series.name().to_string());
        columns.push(sales_values(series)?);
    }

    crate::build_dataset(product_names, week_labels, columns)
}

fn labels(series: &Series) -> Result<Vec<String>, LoaderError> {
    let text = series.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|label| label.unwrap_or_default().trim().to_string())
        .collect())
}

fn sales_values(series: &Series) -> Result<Vec<f64>, LoaderError> {
    if series.null_count() == series.len() {
        return Ok(vec![0.0; series.len()]);
    }

    if !series.dtype().is_numeric() {
        return Err(LoaderError::NonNumeric {
            column: series.name().to_string(),
            row: first_non_numeric_row(series),
        });
    }

    let floats = series.cast(&DataType::Float64)?;
    floats
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Some(v) if v.is_infinite() => Err(LoaderError::NonNumeric {
                column: series.name().to_string(),
                row: Some(index + 1),
            }),
            Some(v) if !v.is_nan() => Ok(v),
            _ => Ok(0.0),
        })
        .collect()
}

/// 1-based data row of the first cell that does not parse as a finite number.
fn first_non_numeric_row(series: &Series) -> Option<usize> {
    let text = series.cast(&DataType::String).ok()?;
    let cells = text.str().ok()?;
    cells
        .into_iter()
        .position(|cell| {
            cell.is_some_and(|c| !c.trim().parse::<f64>().is_ok_and(|v| !v.is_infinite()))
        })
        .map(|index| index + 1)
}
