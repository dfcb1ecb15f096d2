//! # Sales Tracker Analytics
//!
//! This crate turns a table of weekly sales figures into the numbers a user
//! actually wants to see.
//!
//! ## Architectural Principles
//!
//! - **Pure Core:** The `stats` module holds the five statistics functions. They
//!   work on a `SalesMatrix` alone, never see product names, and have no state
//!   or side effects.
//! - **Stateless Assembly:** The `AnalyticsEngine` composes those functions and
//!   maps their positional results back to product names and week labels,
//!   producing serializable reports.
//!
//! ## Public API
//!
//! - `stats`: `total_per_product`, `best_seller`, `weekly_growth`,
//!   `weekly_percent_growth`, `total_per_week`.
//! - `AnalyticsEngine`: builds `SalesReport`, `GrowthReport` and `ProductReport`.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod stats;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{BestSeller, GrowthReport, GrowthStep, LabeledValue, ProductReport, SalesReport};
