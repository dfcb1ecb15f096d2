use crate::error::CoreError;
use crate::matrix::SalesMatrix;
use serde::Serialize;
use std::collections::HashSet;

/// A loaded sales table: the matrix plus the labels of its rows and columns.
///
/// `product_names[j]` names column `j` of the matrix and `week_labels[i]`
/// names row `i`. The statistics functions only ever see the matrix; the
/// labels are used to turn their positional results back into something a
/// user can read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesDataset {
    product_names: Vec<String>,
    week_labels: Vec<String>,
    matrix: SalesMatrix,
}

impl SalesDataset {
    pub fn new(
        product_names: Vec<String>,
        week_labels: Vec<String>,
        matrix: SalesMatrix,
    ) -> Result<Self, CoreError> {
        if product_names.len() != matrix.products() {
            return Err(CoreError::InvalidInput(
                "product_names".to_string(),
                format!(
                    "{} names for a matrix with {} product columns",
                    product_names.len(),
                    matrix.products()
                ),
            ));
        }

        if week_labels.len() != matrix.periods() {
            return Err(CoreError::InvalidInput(
                "week_labels".to_string(),
                format!(
                    "{} labels for a matrix with {} weeks",
                    week_labels.len(),
                    matrix.periods()
                ),
            ));
        }

        let mut seen = HashSet::with_capacity(product_names.len());
        for name in &product_names {
            if name.trim().is_empty() {
                return Err(CoreError::InvalidInput(
                    "product_names".to_string(),
                    "product names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(CoreError::InvalidInput(
                    "product_names".to_string(),
                    format!("duplicate product name '{name}'"),
                ));
            }
        }

        Ok(Self {
            product_names,
            week_labels,
            matrix,
        })
    }

    pub fn product_names(&self) -> &[String] {
        &self.product_names
    }

    pub fn week_labels(&self) -> &[String] {
        &self.week_labels
    }

    pub fn matrix(&self) -> &SalesMatrix {
        &self.matrix
    }

    /// Position of a product column by exact name.
    pub fn product_index(&self, name: &str) -> Option<usize> {
        self.product_names.iter().position(|n| n == name)
    }
}
