//! Imputation module for handling missing values.
//!
//! One strategy per column: constant fill for the free-text fields,
//! most-frequent fill for the categorical ones. Keywords is never imputed.

mod statistical;

pub use statistical::StatisticalImputer;
