//! Statistical imputation over String columns.

use crate::error::{PreprocessingError, Result};
use crate::utils::{fill_string_nulls, string_mode};
use polars::prelude::*;
use tracing::debug;

/// Constant- and mode-fill imputation for missing values.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Fill missing cells of a column with a constant sentinel label.
    ///
    /// Returns the number of cells filled.
    pub fn apply_constant(df: &mut DataFrame, col_name: &str, fill_value: &str) -> Result<usize> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let missing = series.null_count();
        if missing == 0 {
            return Ok(0);
        }

        let filled = fill_string_nulls(&series, fill_value)?;
        df.replace(col_name, filled)?;

        debug!(
            "Filled {} cells of '{}' with constant '{}'",
            missing, col_name, fill_value
        );
        Ok(missing)
    }

    /// Fill missing cells of a column with its most frequent value.
    ///
    /// Ties break on the first value reaching the maximum count in column
    /// order. A column with missing cells but no values at all cannot be
    /// imputed and is an error.
    pub fn apply_most_frequent(df: &mut DataFrame, col_name: &str) -> Result<usize> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        let missing = series.null_count();
        if missing == 0 {
            return Ok(0);
        }

        let Some(mode) = string_mode(&series) else {
            return Err(PreprocessingError::ImputationFailed {
                column: col_name.to_string(),
                reason: "no non-missing values to take the mode of".to_string(),
            });
        };

        let filled = fill_string_nulls(&series, &mode)?;
        df.replace(col_name, filled)?;

        debug!(
            "Filled {} cells of '{}' with mode '{}'",
            missing, col_name, mode
        );
        Ok(missing)
    }
}
