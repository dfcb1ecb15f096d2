//! # Sales Tracker Core Types
//!
//! The shared vocabulary of the workspace. Every other crate speaks in terms of
//! the types defined here.
//!
//! - `SalesMatrix`: an immutable `[weeks x products]` table of sales figures.
//! - `SalesDataset`: a `SalesMatrix` together with the product names and week
//!   labels that give its columns and rows a meaning.
//! - `CoreError`: raised when a matrix or dataset would violate its shape invariants.

pub mod dataset;
pub mod error;
pub mod matrix;

// Re-export the core types to provide a clean public API.
pub use dataset::SalesDataset;
pub use error::CoreError;
pub use matrix::SalesMatrix;
