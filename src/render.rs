//! Text rendering of analytics reports as terminal tables.

use analytics::{GrowthReport, ProductReport, SalesReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

/// Formats reports with a fixed number of decimal places.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    precision: usize,
}

impl Renderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    pub fn number(&self, value: f64) -> String {
        let text = format!("{value:.prec$}", prec = self.precision);
        // Tiny negatives round to "-0.00".
        match text.strip_prefix('-') {
            Some(magnitude) if magnitude.parse::<f64>() == Ok(0.0) => magnitude.to_string(),
            _ => text,
        }
    }

    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.number(value))
    }

    /// Product totals followed by the best seller and the grand total.
    pub fn summary(&self, report: &SalesReport) -> String {
        let mut table = new_table(&["Product", "Total Sales"]);
        for total in &report.product_totals {
            table.add_row(vec![Cell::new(&total.label), self.numeric_cell(total.value)]);
        }

        let best = match &report.best_seller {
            Some(best) => format!("Best selling product: {} ({} sales)", best.name, self.number(best.total)),
            None => "Best selling product: none (no product columns)".to_string(),
        };

        format!(
            "{table}\n{best}\nAll products, {} weeks: {} sales",
            report.weeks,
            self.number(report.grand_total)
        )
    }

    pub fn weekly(&self, report: &SalesReport) -> String {
        let mut table = new_table(&["Week", "Total Sales"]);
        for total in &report.weekly_totals {
            table.add_row(vec![Cell::new(&total.label), self.numeric_cell(total.value)]);
        }
        table.to_string()
    }

    /// One row per week transition, one column per product.
    pub fn growth(&self, report: &GrowthReport, percent: bool) -> String {
        if report.steps.is_empty() {
            return "Growth needs at least two weeks of data.".to_string();
        }

        let mut header = vec!["Week".to_string()];
        header.extend(report.products.iter().cloned());

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header);

        for step in &report.steps {
            let values = if percent { &step.percent } else { &step.absolute };
            let mut row = vec![Cell::new(format!("{} -> {}", step.from, step.to))];
            row.extend(values.iter().map(|&v| self.growth_cell(v, percent)));
            table.add_row(row);
        }

        table.to_string()
    }

    pub fn product(&self, report: &ProductReport) -> String {
        let mut table = new_table(&["Week", "Sales", "Growth", "Growth %"]);

        for (position, week) in report.weekly_sales.iter().enumerate() {
            // The first week has nothing to grow from.
            let (growth, percent) = match position.checked_sub(1) {
                Some(step) => (
                    self.growth_cell(report.growth[step].value, false),
                    self.growth_cell(report.percent_growth[step].value, true),
                ),
                None => (dash_cell(), dash_cell()),
            };
            table.add_row(vec![Cell::new(&week.label), self.numeric_cell(week.value), growth, percent]);
        }

        format!(
            "Stats for {}:\n{table}\nTotal sales: {} ({} of all sales)",
            report.name,
            self.number(report.total),
            self.percent(report.share_pct)
        )
    }

    fn numeric_cell(&self, value: f64) -> Cell {
        Cell::new(self.number(value)).set_alignment(CellAlignment::Right)
    }

    /// Positive growth gets a "+" unless it rounds to zero at this precision.
    fn growth_text(&self, value: f64, percent: bool) -> String {
        let number = self.number(value);
        let positive = number.parse::<f64>().is_ok_and(|rounded| rounded > 0.0);
        let sign = if positive { "+" } else { "" };
        let suffix = if percent { "%" } else { "" };
        format!("{sign}{number}{suffix}")
    }

    fn growth_cell(&self, value: f64, percent: bool) -> Cell {
        Cell::new(self.growth_text(value, percent)).set_alignment(CellAlignment::Right)
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn dash_cell() -> Cell {
    Cell::new("-").set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::AnalyticsEngine;
    use core_types::{SalesDataset, SalesMatrix};
    use ndarray::array;

    fn dataset() -> SalesDataset {
        SalesDataset::new(
            vec!["Apples".to_string(), "Pears".to_string()],
            vec!["W1".to_string(), "W2".to_string(), "W3".to_string()],
            SalesMatrix::new(array![[10.0, 20.0], [15.0, 18.0], [15.0, 25.0]]),
        )
        .unwrap()
    }

    #[test]
    fn test_number_formatting_honours_precision() {
        assert_eq!(Renderer::new(2).number(38.888_888), "38.89");
        assert_eq!(Renderer::new(0).number(40.0), "40");
        assert_eq!(Renderer::new(1).percent(-10.0), "-10.0%");
    }

    #[test]
    fn test_values_rounding_to_zero_carry_no_sign() {
        let renderer = Renderer::new(2);

        assert_eq!(renderer.number(-0.001), "0.00");
        assert_eq!(renderer.percent(-0.004), "0.00%");
        assert_eq!(renderer.growth_text(0.001, false), "0.00");
        assert_eq!(renderer.growth_text(-0.001, false), "0.00");
        assert_eq!(renderer.growth_text(0.004, true), "0.00%");
        assert_eq!(renderer.growth_text(0.006, false), "+0.01");
        assert_eq!(renderer.growth_text(-0.006, true), "-0.01%");
        assert_eq!(Renderer::new(0).growth_text(0.4, false), "0");
    }

    #[test]
    fn test_summary_mentions_best_seller() {
        let report = AnalyticsEngine::new().summarize(&dataset()).unwrap();

        let text = Renderer::new(0).summary(&report);

        assert!(text.contains("Apples"));
        assert!(text.contains("Best selling product: Pears (63 sales)"));
        assert!(text.contains("103 sales"));
    }

    #[test]
    fn test_growth_table_rows_per_transition() {
        let report = AnalyticsEngine::new().growth(&dataset());

        let absolute = Renderer::new(0).growth(&report, false);
        let percent = Renderer::new(1).growth(&report, true);

        assert!(absolute.contains("W1 -> W2"));
        assert!(absolute.contains("+5"));
        assert!(absolute.contains("-2"));
        assert!(percent.contains("+50.0%"));
        assert!(percent.contains("-10.0%"));
    }

    #[test]
    fn test_growth_with_single_week() {
        let dataset = SalesDataset::new(
            vec!["Apples".to_string()],
            vec!["W1".to_string()],
            SalesMatrix::new(array![[1.0]]),
        )
        .unwrap();
        let report = AnalyticsEngine::new().growth(&dataset);

        assert_eq!(
            Renderer::new(2).growth(&report, false),
            "Growth needs at least two weeks of data."
        );
    }

    #[test]
    fn test_product_table() {
        let report = AnalyticsEngine::new().product(&dataset(), "Pears").unwrap();

        let text = Renderer::new(0).product(&report);

        assert!(text.starts_with("Stats for Pears:"));
        assert!(text.contains("+7"));
        assert!(text.contains("Total sales: 63"));
    }
}
