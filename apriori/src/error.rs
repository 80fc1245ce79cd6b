//! Error types for itemset mining and rule generation.

#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("Threshold {name} must lie in [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Table has no transactions, support is undefined")]
    EmptyTable,

    #[error("Antecedent {antecedent:?} has zero support, confidence is undefined")]
    ZeroSupportAntecedent { antecedent: Vec<usize> },

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Duplicate item name: {0}")]
    DuplicateItem(String),

    #[error("Shape mismatch: expected {expected} cells, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[cfg(feature = "io")]
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, AprioriError>;
