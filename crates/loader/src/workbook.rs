use crate::error::LoaderError;
use calamine::{open_workbook_auto, Data, Reader};
use core_types::SalesDataset;
use std::path::Path;

/// Reads a sales table from a spreadsheet workbook.
///
/// `sheet` selects a worksheet by name; without it the first sheet is used.
pub fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<SalesDataset, LoaderError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let sheet_name = match sheet {
        Some(name) if sheet_names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => return Err(LoaderError::SheetNotFound(name.to_string())),
        None => sheet_names.first().cloned().ok_or_else(|| {
            LoaderError::InvalidFormat("Workbook contains no sheets".to_string())
        })?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    tracing::debug!(sheet = %sheet_name, size = ?range.get_size(), "Read worksheet range.");

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoaderError::InvalidFormat(format!("sheet '{sheet_name}' is empty")))?;
    let product_names: Vec<String> = header.iter().skip(1).map(cell_text).collect();

    let mut week_labels = Vec::new();
    let mut columns = vec![Vec::new(); product_names.len()];

    for (index, row) in rows.enumerate() {
        let Some((label, cells)) = row.split_first() else {
            continue;
        };
        week_labels.push(cell_text(label));

        for ((column, cell), name) in columns.iter_mut().zip(cells).zip(&product_names) {
            let value = cell_number(cell).ok_or_else(|| LoaderError::NonNumeric {
                column: name.clone(),
                row: Some(index + 1),
            })?;
            column.push(value);
        }
    }

    crate::build_dataset(product_names, week_labels, columns)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Numeric value of a sales cell. Blank and NaN cells count as zero;
/// infinite values are not numbers a sales table can hold.
fn cell_number(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Empty => 0.0,
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) if s.trim().is_empty() => 0.0,
        Data::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };

    if value.is_nan() {
        Some(0.0)
    } else if value.is_infinite() {
        None
    } else {
        Some(value)
    }
}
