//! Custom error types for the job-ad preprocessing pipeline.
//!
//! This module provides the error hierarchy using `thiserror`.
//!
//! Note that date-parsing failures are deliberately NOT represented here:
//! per-cell cleaners are total functions that reduce every bad input to a
//! missing value. Translation failures never surface here either; the
//! adapter retries and then leaves the cell untranslated. Errors in this
//! enum abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the preprocessing pipeline.
#[derive(Error, Debug)]
pub enum PreprocessingError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A lexicon resource could not be read.
    #[error("Failed to load lexicon '{path}': {source}")]
    LexiconLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon line did not split into a key and a value.
    #[error("Malformed lexicon entry at {path}:{line}: '{content}'")]
    LexiconEntry {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Imputation failed.
    #[error("Failed to impute missing values in column '{column}': {reason}")]
    ImputationFailed { column: String, reason: String },

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PreprocessingError>,
    },
}

impl PreprocessingError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PreprocessingError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check if this error is fatal at startup (the run cannot proceed
    /// without its controlled vocabularies).
    pub fn is_lexicon_error(&self) -> bool {
        match self {
            Self::LexiconLoad { .. } | Self::LexiconEntry { .. } => true,
            Self::WithContext { source, .. } => source.is_lexicon_error(),
            _ => false,
        }
    }
}

/// Result type alias for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PreprocessingError::Polars(e).with_context(context))
    }
}
