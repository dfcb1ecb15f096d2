use serde::{Deserialize, Serialize};

/// A number paired with the product name or week label it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSeller {
    pub name: String,
    pub index: usize,
    pub total: f64,
}

/// The overview of a loaded sales table.
///
/// `product_totals` and `weekly_totals` are also the two series a chart
/// renderer needs: a bar per product and a point per week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub weeks: usize,
    pub products: usize,
    pub product_totals: Vec<LabeledValue>,
    /// `None` when the table has no product columns.
    pub best_seller: Option<BestSeller>,
    pub weekly_totals: Vec<LabeledValue>,
    pub grand_total: f64,
}

/// Growth of every product between two consecutive weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthStep {
    pub from: String,
    pub to: String,
    /// Indexed like `GrowthReport::products`.
    pub absolute: Vec<f64>,
    /// Indexed like `GrowthReport::products`. 0 wherever the earlier week was 0.
    pub percent: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub products: Vec<String>,
    pub steps: Vec<GrowthStep>,
}

/// Everything known about a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReport {
    pub name: String,
    pub index: usize,
    pub weekly_sales: Vec<LabeledValue>,
    /// One entry per week transition, labelled with the later week.
    pub growth: Vec<LabeledValue>,
    pub percent_growth: Vec<LabeledValue>,
    pub total: f64,
    /// This product's share of all sales, in percent. 0 if nothing was sold at all.
    pub share_pct: f64,
}
