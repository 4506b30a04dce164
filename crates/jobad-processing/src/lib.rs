//! Job-Advertisement Preprocessing Pipeline Library
//!
//! A batch preprocessing library for bilingual (Persian/English)
//! job-advertisement datasets, built with Rust and Polars.
//!
//! # Overview
//!
//! This library turns a raw spreadsheet of job ads into a normalized,
//! fully imputed dataset:
//!
//! - **Field Cleaning**: per-column normalization of names, categorical
//!   labels, yes/no booleans, and Persian-calendar dates
//! - **Translation**: Persian free-text cells are detected, normalized to
//!   canonical letter forms, and routed through a pluggable translation
//!   provider; English text passes through untouched
//! - **Keyword Extraction**: noisy multilingual keyword cells become sets
//!   of canonical English tokens via a controlled-vocabulary lexicon
//! - **Cross-Field Inference**: ad bodies are scanned against the frozen
//!   dataset-wide keyword vocabulary to enrich sparse keyword cells
//! - **Imputation**: constant fill for free-text columns, most-frequent
//!   fill for categorical ones; rows without keywords are dropped
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use jobad_processing::{Lexicon, Pipeline, PipelineConfig};
//! use jobad_processing::translate::HttpTranslationProvider;
//! use polars::prelude::*;
//! use std::sync::Arc;
//!
//! // Load data
//! let df = CsvReader::from_path("ads.csv")?.finish()?;
//!
//! // Option 1: with a live translation endpoint
//! let provider = Arc::new(HttpTranslationProvider::new()?);
//!
//! let result = Pipeline::builder()
//!     .config(PipelineConfig::default())
//!     .city_lexicon(Lexicon::load("lexicons/cities.txt")?)
//!     .keyword_lexicon(Lexicon::load("lexicons/keywords.txt")?)
//!     .translation_provider(provider)
//!     .build()?
//!     .process(df)?;
//!
//! // Option 2: offline (Persian text is left as-is)
//! let result = Pipeline::builder()
//!     .keyword_lexicon(Lexicon::load("lexicons/keywords.txt")?)
//!     .build()?
//!     .process(df)?;
//!
//! println!("Rows kept: {}", result.summary.rows_after);
//! ```
//!
//! # Translation Providers
//!
//! Translation goes through the [`translate::TranslationProvider`] trait.
//! Implemented providers:
//!
//! - [`translate::HttpTranslationProvider`] - LibreTranslate-compatible HTTP endpoint
//! - [`translate::PassthroughTranslator`] - no-op provider for offline runs and tests
//!
//! To implement your own provider, see the [`translate`] module documentation.

// Core modules
pub mod cleaner;
pub mod config;
pub mod error;
pub mod imputers;
pub mod keywords;
pub mod lexicon;
pub mod pipeline;
pub mod translate;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::{clean_ad_date, jalali_to_gregorian, CleaningStats, DataCleaner};
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{PreprocessingError, Result as PreprocessingResult, ResultExt};
pub use imputers::StatisticalImputer;
pub use keywords::{join_keywords, parse_keywords, KeywordExtractor, KeywordInference};
pub use lexicon::Lexicon;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use translate::{
    HttpTranslationProvider, PassthroughTranslator, TranslationProvider, TranslatorAdapter,
};
pub use types::{columns, CompanyType, Gender, PipelineResult, RunSummary};
