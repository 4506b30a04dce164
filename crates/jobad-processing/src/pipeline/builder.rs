//! Main preprocessing pipeline module.
//!
//! This module provides the core `Pipeline` struct and builder for
//! orchestrating the job-advertisement preprocessing workflow.

use crate::cleaner::{CleaningStats, DataCleaner};
use crate::config::PipelineConfig;
use crate::error::{Result, ResultExt};
use crate::imputers::StatisticalImputer;
use crate::keywords::{KeywordExtractor, KeywordInference};
use crate::lexicon::Lexicon;
use crate::translate::{PassthroughTranslator, TranslationProvider, TranslatorAdapter};
use crate::types::{columns, PipelineResult, RunSummary};
use polars::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// The main preprocessing pipeline.
///
/// Use [`Pipeline::builder()`] to create a new pipeline with custom
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// use jobad_processing::{Lexicon, Pipeline, PipelineConfig};
/// use jobad_processing::translate::HttpTranslationProvider;
/// use std::sync::Arc;
///
/// let provider = Arc::new(HttpTranslationProvider::new(config)?);
///
/// let result = Pipeline::builder()
///     .config(PipelineConfig::default())
///     .city_lexicon(Lexicon::load("lexicons/cities.txt")?)
///     .keyword_lexicon(Lexicon::load("lexicons/keywords.txt")?)
///     .translation_provider(provider)
///     .build()?
///     .process(dataframe)?;
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    city_lexicon: Lexicon,
    keyword_lexicon: Lexicon,
    translation_provider: Arc<dyn TranslationProvider>,
}

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Process a DataFrame through the preprocessing pipeline.
    ///
    /// Returns a [`PipelineResult`] containing the cleaned data and the
    /// run summary.
    pub fn process(&self, df: DataFrame) -> Result<PipelineResult> {
        match self.process_internal(df) {
            Ok(result) => {
                info!(
                    rows_after = result.summary.rows_after,
                    duration_ms = result.summary.duration_ms,
                    "Pipeline completed successfully"
                );
                Ok(result)
            }
            Err(e) => {
                error!("Pipeline error: {}", e);
                Err(e)
            }
        }
    }

    fn process_internal(&self, mut df: DataFrame) -> Result<PipelineResult> {
        let start_time = Instant::now();

        info!("Starting preprocessing pipeline...");

        let mut summary = RunSummary {
            rows_before: df.height(),
            ..RunSummary::default()
        };

        let translator =
            TranslatorAdapter::new(self.translation_provider.clone(), self.config.translation_retries);
        let cleaner = DataCleaner::new(&self.city_lexicon, &self.keyword_lexicon, &translator);
        let mut cleaning_stats = CleaningStats::default();

        // Step 1: structural preparation (schema check, string cast, empty
        // row/column removal).
        info!("Step 1: Preparing dataset...");
        cleaner.prepare(&mut df, &mut cleaning_stats)?;

        // Step 2: per-column cleaning in spreadsheet order.
        info!("Step 2: Cleaning columns...");
        cleaner.clean(&mut df, &mut cleaning_stats)?;

        summary.empty_rows_dropped = cleaning_stats.empty_rows_dropped;
        summary.empty_columns_dropped = cleaning_stats.empty_columns_dropped;
        summary.translated_cells = cleaning_stats.translated_cells;
        summary.untranslated_cells = cleaning_stats.untranslated_cells;

        // Step 3: cross-field keyword inference against the frozen
        // dataset-wide vocabulary.
        info!("Step 3: Inferring keywords from ad bodies...");
        let extractor = KeywordExtractor::new(&self.keyword_lexicon);
        let inference = KeywordInference::enrich(&mut df, &extractor)?;
        summary.vocabulary_size = inference.vocabulary_size;
        summary.rows_with_inferred_keywords = inference.rows_enriched;

        // Step 4: missing-value imputation. Keywords is exempt; rows that
        // are still keyword-less get dropped in step 5.
        info!("Step 4: Imputing missing values...");
        self.impute(&mut df, &mut summary)?;

        // Step 5: drop rows whose Keywords stayed missing.
        info!("Step 5: Dropping keyword-less rows...");
        let rows_before_drop = df.height();
        let mask = df
            .column(columns::KEYWORDS)?
            .as_materialized_series()
            .is_not_null();
        let mut df = df.filter(&mask)?;
        df.rechunk_mut();
        summary.rows_dropped_missing_keywords = rows_before_drop.saturating_sub(df.height());

        summary.rows_after = df.height();
        summary.duration_ms = start_time.elapsed().as_millis() as u64;

        Ok(PipelineResult { data: df, summary })
    }

    fn impute(&self, df: &mut DataFrame, summary: &mut RunSummary) -> Result<()> {
        for (col, fill) in [
            (columns::COMPANY_NAME, self.config.company_name_fill.as_str()),
            (columns::JOB_TITLE, self.config.job_title_fill.as_str()),
            (columns::AD_TEXT, self.config.ad_text_fill.as_str()),
        ] {
            let filled = StatisticalImputer::apply_constant(df, col, fill)
                .context(format!("imputing column '{col}'"))?;
            summary.record_imputation(col, filled);
        }

        for col in columns::MOST_FREQUENT {
            let filled = StatisticalImputer::apply_most_frequent(df, col)
                .context(format!("imputing column '{col}'"))?;
            summary.record_imputation(col, filled);
        }

        Ok(())
    }
}

/// Builder for creating a [`Pipeline`] instance.
///
/// Use [`Pipeline::builder()`] to get started. Lexicons default to empty
/// (city names pass through untranslated, keyword tokens keep their raw
/// form) and translation defaults to the passthrough provider.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<PipelineConfig>,
    city_lexicon: Option<Lexicon>,
    keyword_lexicon: Option<Lexicon>,
    translation_provider: Option<Arc<dyn TranslationProvider>>,
}

impl PipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the Persian-to-English city lexicon.
    pub fn city_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.city_lexicon = Some(lexicon);
        self
    }

    /// Set the keyword canonicalization lexicon.
    pub fn keyword_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.keyword_lexicon = Some(lexicon);
        self
    }

    /// Set the translation provider for Persian free-text cells.
    ///
    /// Use `Arc` to allow the provider to be shared and reused across
    /// multiple pipeline runs. Defaults to [`PassthroughTranslator`],
    /// which leaves Persian text untouched.
    pub fn translation_provider(mut self, provider: Arc<dyn TranslationProvider>) -> Self {
        self.translation_provider = Some(provider);
        self
    }

    /// Build the pipeline.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> std::result::Result<Pipeline, crate::config::ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(Pipeline {
            config,
            city_lexicon: self.city_lexicon.unwrap_or_default(),
            keyword_lexicon: self.keyword_lexicon.unwrap_or_default(),
            translation_provider: self
                .translation_provider
                .unwrap_or_else(|| Arc::new(PassthroughTranslator)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::parse_keywords;

    fn sample_frame() -> DataFrame {
        df!(
            columns::COMPANY_NAME => ["Acme\nCorp", "Beta Ltd", ""],
            columns::COMPANY_TYPE => ["private", "governmental", ""],
            columns::AD_DATE => ["1398-07", "", "1400-01"],
            columns::JOB_TITLE => ["backend developer", "", "devops engineer"],
            columns::REMOTE => ["yes", "no", ""],
            columns::CITY => ["tehran", "", "tehran"],
            columns::KNOWLEDGE_BASE => ["no", "no", "yes"],
            columns::FULL_TIME => ["yes", "yes", ""],
            columns::GENDER => ["male", "", "female"],
            columns::PROJECT => ["no", "", "no"],
            columns::MILITARY => ["yes", "no", ""],
            columns::AD_TEXT => [
                "we need php and linux experience",
                "office assistant wanted",
                "docker and linux on a daily basis",
            ],
            columns::KEYWORDS => [Some("php, linux"), None, Some("docker")],
        )
        .unwrap()
    }

    fn keyword_lexicon() -> Lexicon {
        Lexicon::from_str_content("php:php\nlinux:linux\ndocker:docker", "test").unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let pipeline = Pipeline::builder().build().unwrap();
        assert!(pipeline.city_lexicon.is_empty());
        assert_eq!(pipeline.config.translation_retries, 2);
        assert_eq!(pipeline.translation_provider.name(), "passthrough");
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let mut config = PipelineConfig::default();
        config.company_name_fill = String::new();
        assert!(Pipeline::builder().config(config).build().is_err());
    }

    #[test]
    fn test_process_end_to_end() {
        let pipeline = Pipeline::builder()
            .keyword_lexicon(keyword_lexicon())
            .build()
            .unwrap();

        let result = pipeline.process(sample_frame()).unwrap();
        let df = &result.data;

        // Row 1 has no keywords in its cell or its body text, so it drops.
        assert_eq!(df.height(), 2);
        assert_eq!(result.summary.rows_before, 3);
        assert_eq!(result.summary.rows_dropped_missing_keywords, 1);

        // No column may hold nulls after imputation and the keyword drop.
        for col in df.get_columns() {
            assert_eq!(col.null_count(), 0, "column {} kept nulls", col.name());
        }

        // Row 0 gains nothing new; row 2 (now row 1) gains "linux" from its
        // body because "linux" is in the frozen vocabulary.
        let keywords = df
            .column(columns::KEYWORDS)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(1)
            .unwrap()
            .to_string();
        let set = parse_keywords(&keywords);
        assert!(set.contains("docker"));
        assert!(set.contains("linux"));
    }

    #[test]
    fn test_process_imputes_sentinels() {
        let pipeline = Pipeline::builder()
            .keyword_lexicon(keyword_lexicon())
            .build()
            .unwrap();

        let result = pipeline.process(sample_frame()).unwrap();
        let df = &result.data;

        // Row 2 of the input survives (row index 1 after the drop) and its
        // blank CompanyName gets the constant sentinel.
        let company = df
            .column(columns::COMPANY_NAME)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(1)
            .unwrap()
            .to_string();
        assert_eq!(company, "UNKNOWN COMPANY");

        // Boolean columns come out normalized to "1"/"0".
        let remote = df
            .column(columns::REMOTE)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .get(0)
            .unwrap()
            .to_string();
        assert_eq!(remote, "1");
    }

    #[test]
    fn test_imputation_error_names_the_column() {
        let pipeline = Pipeline::builder()
            .keyword_lexicon(keyword_lexicon())
            .build()
            .unwrap();

        // a fully missing City column has no mode to fill with
        let mut df = sample_frame();
        let nulls: Vec<Option<String>> = vec![None; df.height()];
        df.replace(columns::CITY, Series::new(columns::CITY.into(), nulls))
            .unwrap();

        let err = pipeline.process(df).unwrap_err();
        assert!(err.to_string().contains("imputing column 'City'"));
    }

    #[test]
    fn test_summary_records_imputations() {
        let pipeline = Pipeline::builder()
            .keyword_lexicon(keyword_lexicon())
            .build()
            .unwrap();

        let result = pipeline.process(sample_frame()).unwrap();
        let imputed: Vec<&str> = result
            .summary
            .imputed_cells
            .iter()
            .map(|(col, _)| col.as_str())
            .collect();

        assert!(imputed.contains(&columns::COMPANY_NAME));
        assert!(imputed.contains(&columns::GENDER));
        // Keywords never appears in the imputation ledger.
        assert!(!imputed.contains(&columns::KEYWORDS));
    }
}
