use crate::error::CoreError;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::Serialize;

/// A two-dimensional table of sales figures.
///
/// Rows are periods (weeks) and columns are entities (products). The matrix is
/// always rectangular and never changes after construction; statistics are
/// derived from it through shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesMatrix {
    values: Array2<f64>,
}

impl SalesMatrix {
    /// Wraps an existing array. `ndarray` guarantees the shape is rectangular.
    pub fn new(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Builds a matrix from row vectors, one per period.
    ///
    /// Every row must have the same length as the first one; a ragged table is
    /// rejected instead of being padded.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, CoreError> {
        let periods = rows.len();
        let products = rows.first().map_or(0, Vec::len);

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != products)
        {
            return Err(CoreError::RaggedRows {
                row,
                expected: products,
                found,
            });
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let values = Array2::from_shape_vec((periods, products), flat)
            .map_err(|e| CoreError::InvalidInput("rows".to_string(), e.to_string()))?;

        Ok(Self { values })
    }

    /// Number of periods (rows).
    pub fn periods(&self) -> usize {
        self.values.nrows()
    }

    /// Number of products (columns).
    pub fn products(&self) -> usize {
        self.values.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A read-only view of the underlying values.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// The weekly series of one product, or `None` if the index is out of range.
    pub fn product_column(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.products()).then(|| self.values.index_axis(Axis(1), index))
    }

    /// All product values of one period, or `None` if the index is out of range.
    pub fn period_row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.periods()).then(|| self.values.index_axis(Axis(0), index))
    }
}

impl From<Array2<f64>> for SalesMatrix {
    fn from(values: Array2<f64>) -> Self {
        Self::new(values)
    }
}
