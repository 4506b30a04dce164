//! Per-column dataset cleaning.
//!
//! [`DataCleaner`] walks the DataFrame column by column, rebuilding each
//! string Series through the matching cell cleaner. Cell cleaners are pure
//! and total; the only stateful collaborators are the two read-only
//! lexicons and the translation adapter.

pub mod dates;
pub mod fields;

pub use dates::{clean_ad_date, jalali_to_gregorian};

use crate::error::{PreprocessingError, Result, ResultExt};
use crate::keywords::{join_keywords, KeywordExtractor};
use crate::lexicon::Lexicon;
use crate::translate::{Translation, TranslatorAdapter};
use crate::types::columns;
use crate::utils::map_string_column;
use polars::prelude::*;
use tracing::{debug, info};

/// Counters accumulated while cleaning.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleaningStats {
    /// Fully empty rows dropped during preparation.
    pub empty_rows_dropped: usize,
    /// Fully empty columns dropped during preparation.
    pub empty_columns_dropped: usize,
    /// Cells routed through the translation capability.
    pub translated_cells: usize,
    /// Cells left untranslated after retry exhaustion.
    pub untranslated_cells: usize,
}

/// Column-by-column cleaner for the job-ad dataset.
pub struct DataCleaner<'a> {
    cities: &'a Lexicon,
    keywords: &'a Lexicon,
    translator: &'a TranslatorAdapter,
}

impl<'a> DataCleaner<'a> {
    pub fn new(
        cities: &'a Lexicon,
        keywords: &'a Lexicon,
        translator: &'a TranslatorAdapter,
    ) -> Self {
        Self {
            cities,
            keywords,
            translator,
        }
    }

    /// Prepare a freshly read dataset for cleaning.
    ///
    /// Verifies the expected columns, casts everything to String, and drops
    /// fully empty rows and fully empty columns.
    pub fn prepare(&self, df: &mut DataFrame, stats: &mut CleaningStats) -> Result<()> {
        for col in columns::EXPECTED {
            if df.column(col).is_err() {
                return Err(PreprocessingError::ColumnNotFound(col.to_string()));
            }
        }

        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        for name in &names {
            let series = df
                .column(name)?
                .as_materialized_series()
                .cast(&DataType::String)?;
            // whitespace-only cells count as empty from here on
            let series = map_string_column(&series, |opt| {
                opt.map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string())
            })?;
            df.replace(name, series)?;
        }

        // drop columns that hold no values at all
        let empty_cols: Vec<String> = df
            .get_columns()
            .iter()
            .filter(|col| col.null_count() == col.len())
            .map(|col| col.name().to_string())
            .collect();
        for name in &empty_cols {
            // the 13 expected columns always survive, even when empty
            if !columns::EXPECTED.contains(&name.as_str()) {
                let _ = df.drop_in_place(name)?;
                stats.empty_columns_dropped += 1;
            }
        }

        // drop rows where every cell is missing
        let before = df.height();
        let mut any_value = BooleanChunked::full("any".into(), false, df.height()).into_series();
        for col in df.get_columns() {
            let not_null = col.as_materialized_series().is_not_null().into_series();
            any_value = (&any_value | &not_null)?;
        }
        *df = df.filter(any_value.bool()?)?;
        stats.empty_rows_dropped = before - df.height();

        debug!(
            "Prepared dataset: dropped {} empty rows, {} empty columns",
            stats.empty_rows_dropped, stats.empty_columns_dropped
        );
        Ok(())
    }

    /// Clean every column in place.
    pub fn clean(&self, df: &mut DataFrame, stats: &mut CleaningStats) -> Result<()> {
        info!("Cleaning columns...");

        self.apply(df, columns::COMPANY_NAME, fields::clean_company_name)?;
        self.apply(df, columns::COMPANY_TYPE, fields::clean_company_type)?;
        self.apply(df, columns::AD_DATE, |raw| {
            clean_ad_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
        })?;
        self.translate_column(df, columns::JOB_TITLE, stats)?;
        for col in columns::BOOLEAN {
            self.apply(df, col, fields::clean_boolean)?;
        }
        self.apply(df, columns::CITY, |raw| fields::clean_city(raw, self.cities))?;
        self.apply(df, columns::GENDER, fields::clean_gender)?;
        self.translate_column(df, columns::AD_TEXT, stats)?;

        let extractor = KeywordExtractor::new(self.keywords);
        self.apply(df, columns::KEYWORDS, |raw| {
            extractor.clean_keywords(raw).map(|set| join_keywords(&set))
        })?;

        info!(
            "Cleaning complete ({} cells translated, {} left untranslated)",
            stats.translated_cells, stats.untranslated_cells
        );
        Ok(())
    }

    fn apply<F>(&self, df: &mut DataFrame, col: &str, f: F) -> Result<()>
    where
        F: Fn(Option<&str>) -> Option<String>,
    {
        let series = df
            .column(col)
            .context(format!("cleaning column '{col}'"))?
            .as_materialized_series()
            .clone();
        let cleaned = map_string_column(&series, f)?;
        debug!("Cleaned column '{}' ({} nulls)", col, cleaned.null_count());
        df.replace(col, cleaned)?;
        Ok(())
    }

    fn translate_column(
        &self,
        df: &mut DataFrame,
        col: &str,
        stats: &mut CleaningStats,
    ) -> Result<()> {
        let series = df
            .column(col)
            .context(format!("translating column '{col}'"))?
            .as_materialized_series()
            .clone();
        let str_series = series.str()?;

        let mut translated = Vec::with_capacity(str_series.len());
        for opt_val in str_series.into_iter() {
            let outcome = self.translator.translate_cell(opt_val);
            match &outcome {
                Translation::Translated(_) => stats.translated_cells += 1,
                Translation::Fallback(_) => stats.untranslated_cells += 1,
                _ => {}
            }
            translated.push(outcome.into_value());
        }

        debug!("Translated column '{}'", col);
        df.replace(col, Series::new(col.into(), translated))?;
        Ok(())
    }
}
