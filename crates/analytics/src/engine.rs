use crate::error::AnalyticsError;
use crate::report::{BestSeller, GrowthReport, GrowthStep, LabeledValue, ProductReport, SalesReport};
use crate::stats;
use core_types::SalesDataset;
use ndarray::{ArrayView1, Axis};

/// A stateless calculator that turns a `SalesDataset` into labelled reports.
///
/// The numbers come from the functions in `stats`; this type only pairs them
/// with product names and week labels.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Product totals, the best seller and weekly totals.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `SalesReport` or an `AnalyticsError`. A table
    /// without product columns is not an error; its report simply has no best seller.
    pub fn summarize(&self, dataset: &SalesDataset) -> Result<SalesReport, AnalyticsError> {
        let matrix = dataset.matrix();
        let totals = stats::total_per_product(matrix);
        let weekly = stats::total_per_week(matrix);

        let best_seller = if totals.is_empty() {
            tracing::warn!("Sales data has no product columns, skipping best seller.");
            None
        } else {
            let index = stats::best_seller(totals.view())?;
            Some(BestSeller {
                name: dataset.product_names()[index].clone(),
                index,
                total: totals[index],
            })
        };

        let report = SalesReport {
            weeks: matrix.periods(),
            products: matrix.products(),
            product_totals: labeled(dataset.product_names(), totals.view()),
            best_seller,
            weekly_totals: labeled(dataset.week_labels(), weekly.view()),
            grand_total: totals.sum(),
        };

        tracing::debug!(
            weeks = report.weeks,
            products = report.products,
            grand_total = report.grand_total,
            "Sales summary calculated."
        );

        Ok(report)
    }

    /// Absolute and percentage growth for every pair of consecutive weeks.
    pub fn growth(&self, dataset: &SalesDataset) -> GrowthReport {
        let matrix = dataset.matrix();
        let absolute = stats::weekly_growth(matrix);
        let percent = stats::weekly_percent_growth(matrix);
        let labels = dataset.week_labels();

        let steps = absolute
            .axis_iter(Axis(0))
            .zip(percent.axis_iter(Axis(0)))
            .zip(labels.windows(2))
            .map(|((absolute, percent), pair)| GrowthStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
                absolute: absolute.to_vec(),
                percent: percent.to_vec(),
            })
            .collect();

        GrowthReport {
            products: dataset.product_names().to_vec(),
            steps,
        }
    }

    /// The weekly series, growth and total of one product.
    ///
    /// Surrounding whitespace in `query` is ignored; the remaining name must
    /// match a product exactly.
    pub fn product(&self, dataset: &SalesDataset, query: &str) -> Result<ProductReport, AnalyticsError> {
        let name = query.trim();
        let not_found = || AnalyticsError::ProductNotFound(name.to_string());

        let index = dataset.product_index(name).ok_or_else(not_found)?;
        let matrix = dataset.matrix();
        let sales = matrix.product_column(index).ok_or_else(not_found)?;

        let growth = stats::weekly_growth(matrix);
        let percent = stats::weekly_percent_growth(matrix);
        let later_weeks = dataset.week_labels().get(1..).unwrap_or_default();

        let total = stats::total_per_product(matrix)[index];
        let grand_total = matrix.view().sum();
        let share_pct = if grand_total == 0.0 {
            0.0
        } else {
            total / grand_total * 100.0
        };

        tracing::debug!(product = name, index, total, "Product report calculated.");

        Ok(ProductReport {
            name: name.to_string(),
            index,
            weekly_sales: labeled(dataset.week_labels(), sales),
            growth: labeled(later_weeks, growth.column(index)),
            percent_growth: labeled(later_weeks, percent.column(index)),
            total,
            share_pct,
        })
    }
}

fn labeled(labels: &[String], values: ArrayView1<'_, f64>) -> Vec<LabeledValue> {
    labels
        .iter()
        .zip(values.iter())
        .map(|(label, &value)| LabeledValue::new(label.as_str(), value))
        .collect()
}
