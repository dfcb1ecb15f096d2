//! The statistics core: pure functions over a `SalesMatrix`.
//!
//! Rows are weeks and columns are products. None of these functions know about
//! product names or week labels, hold state, or touch the input; each one
//! returns a freshly allocated result and may be called in any order.

use crate::error::AnalyticsError;
use core_types::SalesMatrix;
use ndarray::{s, Array1, Array2, ArrayView1, Axis, Zip};

/// Total sales of each product across all weeks (one entry per column).
pub fn total_per_product(matrix: &SalesMatrix) -> Array1<f64> {
    matrix.view().sum_axis(Axis(0))
}

/// Index of the product with the highest total.
///
/// Ties resolve to the lowest index. An empty vector has no best seller and
/// is reported as `NotEnoughData`.
pub fn best_seller(totals: ArrayView1<'_, f64>) -> Result<usize, AnalyticsError> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &total) in totals.iter().enumerate() {
        match best {
            Some((_, max)) if total <= max => {}
            _ => best = Some((index, total)),
        }
    }

    best.map(|(index, _)| index).ok_or_else(|| {
        AnalyticsError::NotEnoughData("cannot pick a best seller from zero products".to_string())
    })
}

/// Absolute change between consecutive weeks, per product.
///
/// The result has one row fewer than the input. With fewer than two weeks
/// there is nothing to compare and the result has zero rows.
pub fn weekly_growth(matrix: &SalesMatrix) -> Array2<f64> {
    let periods = matrix.periods();
    if periods < 2 {
        return Array2::zeros((0, matrix.products()));
    }

    let values = matrix.view();
    &values.slice(s![1.., ..]) - &values.slice(s![..periods - 1, ..])
}

/// Percentage change between consecutive weeks, per product.
///
/// A cell whose previous week is zero is always 0, whether the next week is
/// zero or not, so every cell holds a finite number.
pub fn weekly_percent_growth(matrix: &SalesMatrix) -> Array2<f64> {
    let periods = matrix.periods();
    if periods < 2 {
        return Array2::zeros((0, matrix.products()));
    }

    let values = matrix.view();
    let previous = values.slice(s![..periods - 1, ..]);
    let next = values.slice(s![1.., ..]);

    Zip::from(&next)
        .and(&previous)
        .map_collect(|&next, &previous| percent_change(previous, next))
}

/// Total sales of each week across all products (one entry per row).
pub fn total_per_week(matrix: &SalesMatrix) -> Array1<f64> {
    matrix.view().sum_axis(Axis(1))
}

/// `(next - previous) / previous * 100`, or 0 when `previous` is 0.
pub(crate) fn percent_change(previous: f64, next: f64) -> f64 {
    if previous == 0.0 {
        0.0
    } else {
        (next - previous) / previous * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EPS: f64 = 1e-9;

    fn sample() -> SalesMatrix {
        SalesMatrix::new(array![[10.0, 20.0], [15.0, 18.0], [15.0, 25.0]])
    }

    fn assert_close(actual: ArrayView1<'_, f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {actual} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{actual} != {expected:?}");
        }
    }

    // --- total_per_product ---

    #[test]
    fn test_total_per_product_sums_each_column() {
        let totals = total_per_product(&sample());
        assert_eq!(totals, array![40.0, 63.0]);
    }

    #[test]
    fn test_total_per_product_matches_reference_sum() {
        let matrix = SalesMatrix::new(array![
            [3.5, 0.0, 7.0],
            [1.25, 4.0, 0.0],
            [0.0, 9.0, 2.0],
            [6.0, 1.0, 1.0]
        ]);

        let totals = total_per_product(&matrix);

        assert_eq!(totals.len(), matrix.products());
        for (j, total) in totals.iter().enumerate() {
            let reference: f64 = (0..matrix.periods()).map(|i| matrix.view()[[i, j]]).sum();
            assert!((total - reference).abs() < EPS);
        }
    }

    #[test]
    fn test_total_per_product_without_products_is_empty() {
        let matrix = SalesMatrix::new(Array2::zeros((3, 0)));
        assert!(total_per_product(&matrix).is_empty());
    }

    // --- best_seller ---

    #[test]
    fn test_best_seller_picks_maximum() {
        assert_eq!(best_seller(array![4.0, 9.0, 1.0].view()).unwrap(), 1);
    }

    #[test]
    fn test_best_seller_ties_go_to_lowest_index() {
        assert_eq!(best_seller(array![10.0, 30.0, 30.0, 5.0].view()).unwrap(), 1);
        assert_eq!(best_seller(array![7.0, 7.0, 7.0].view()).unwrap(), 0);
    }

    #[test]
    fn test_best_seller_of_computed_totals() {
        let totals = total_per_product(&sample());
        assert_eq!(best_seller(totals.view()).unwrap(), 1);
    }

    #[test]
    fn test_best_seller_empty_is_an_error() {
        let empty: Array1<f64> = Array1::zeros(0);
        let err = best_seller(empty.view()).unwrap_err();
        assert!(matches!(err, AnalyticsError::NotEnoughData(_)));
    }

    // --- weekly_growth ---

    #[test]
    fn test_weekly_growth_differences() {
        let growth = weekly_growth(&sample());
        assert_eq!(growth, array![[5.0, -2.0], [0.0, 7.0]]);
    }

    #[test]
    fn test_weekly_growth_single_week_has_no_rows() {
        let growth = weekly_growth(&SalesMatrix::new(array![[1.0, 2.0, 3.0]]));
        assert_eq!(growth.dim(), (0, 3));
    }

    #[test]
    fn test_weekly_growth_empty_matrix_has_no_rows() {
        let growth = weekly_growth(&SalesMatrix::new(Array2::zeros((0, 2))));
        assert_eq!(growth.dim(), (0, 2));
    }

    // --- weekly_percent_growth ---

    #[test]
    fn test_weekly_percent_growth_values() {
        let growth = weekly_percent_growth(&sample());

        assert_eq!(growth.dim(), (2, 2));
        assert_close(growth.row(0), &[50.0, -10.0]);
        assert_close(growth.row(1), &[0.0, 700.0 / 18.0]);
        assert!((growth[[1, 1]] - 38.89).abs() < 0.01);
    }

    #[test]
    fn test_weekly_percent_growth_zero_previous_is_zero() {
        let matrix = SalesMatrix::new(array![[0.0, 5.0, 0.0], [0.0, 10.0, 12.0]]);

        let growth = weekly_percent_growth(&matrix);

        assert_close(growth.row(0), &[0.0, 100.0, 0.0]);
        assert!(growth.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_weekly_percent_growth_from_zero_then_nonzero() {
        let matrix = SalesMatrix::new(array![[0.0, 5.0], [0.0, 15.0]]);
        let growth = weekly_percent_growth(&matrix);
        assert_close(growth.row(0), &[0.0, 200.0]);
    }

    #[test]
    fn test_weekly_percent_growth_single_week_has_no_rows() {
        let growth = weekly_percent_growth(&SalesMatrix::new(array![[4.0, 0.0]]));
        assert_eq!(growth.dim(), (0, 2));
    }

    // --- total_per_week ---

    #[test]
    fn test_total_per_week_sums_each_row() {
        let totals = total_per_week(&sample());
        assert_eq!(totals.len(), 3);
        assert_eq!(totals, array![30.0, 33.0, 40.0]);
    }

    // --- purity ---

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let matrix = SalesMatrix::new(array![[1.1, 2.2, 0.0], [3.3, 0.7, 4.4], [2.9, 0.1, 8.8]]);
        let before = matrix.clone();

        assert_eq!(total_per_product(&matrix), total_per_product(&matrix));
        assert_eq!(total_per_week(&matrix), total_per_week(&matrix));
        assert_eq!(weekly_growth(&matrix), weekly_growth(&matrix));

        let first: Vec<u64> = weekly_percent_growth(&matrix).iter().map(|v| v.to_bits()).collect();
        let second: Vec<u64> = weekly_percent_growth(&matrix).iter().map(|v| v.to_bits()).collect();
        assert_eq!(first, second);

        assert_eq!(matrix, before);
    }
}
