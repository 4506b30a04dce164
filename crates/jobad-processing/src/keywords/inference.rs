//! Cross-field keyword inference.
//!
//! After per-column cleaning, the dataset-wide keyword vocabulary is frozen
//! as the union of every non-missing Keywords set. Each row's cleaned ad
//! body is then tokenized with the keyword extractor, and any vocabulary
//! keyword found among the extracted tokens is unioned into that row's
//! set. Rows are mapped independently over the snapshot; inferred keywords
//! never feed back into the vocabulary.

use crate::error::Result;
use crate::keywords::{join_keywords, parse_keywords, KeywordExtractor};
use crate::types::columns;
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// Outcome counters of one inference pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct InferenceStats {
    /// Size of the frozen vocabulary snapshot.
    pub vocabulary_size: usize,
    /// Rows that gained at least one keyword.
    pub rows_enriched: usize,
}

/// Vocabulary-snapshot keyword inference over the whole dataset.
pub struct KeywordInference;

impl KeywordInference {
    /// Enrich the Keywords column in place from the AdText column.
    pub fn enrich(df: &mut DataFrame, extractor: &KeywordExtractor<'_>) -> Result<InferenceStats> {
        let keyword_cells: Vec<Option<BTreeSet<String>>> = df
            .column(columns::KEYWORDS)?
            .as_materialized_series()
            .str()?
            .into_iter()
            .map(|opt| opt.map(parse_keywords))
            .collect();

        // Freeze the vocabulary before touching any row.
        let mut vocabulary: BTreeSet<String> = BTreeSet::new();
        for keywords in keyword_cells.iter().flatten() {
            vocabulary.extend(keywords.iter().cloned());
        }
        debug!("Frozen keyword vocabulary: {} tokens", vocabulary.len());

        let ad_text = df.column(columns::AD_TEXT)?.as_materialized_series().clone();
        let ad_text = ad_text.str()?;

        let mut stats = InferenceStats {
            vocabulary_size: vocabulary.len(),
            ..Default::default()
        };

        let mut enriched = Vec::with_capacity(keyword_cells.len());
        for (keywords, text) in keyword_cells.into_iter().zip(ad_text.into_iter()) {
            let Some(tokens) = extractor.clean_keywords(text) else {
                // no extracted text: the existing set (or missing) stands
                enriched.push(keywords.as_ref().map(join_keywords));
                continue;
            };

            let matches: BTreeSet<String> = vocabulary.intersection(&tokens).cloned().collect();
            if matches.is_empty() {
                enriched.push(keywords.as_ref().map(join_keywords));
                continue;
            }

            let mut merged = keywords.unwrap_or_default();
            let before = merged.len();
            merged.extend(matches);
            if merged.len() > before {
                stats.rows_enriched += 1;
            }
            enriched.push(Some(join_keywords(&merged)));
        }

        let series = Series::new(columns::KEYWORDS.into(), enriched);
        df.replace(columns::KEYWORDS, series)?;

        debug!("Keyword inference enriched {} rows", stats.rows_enriched);
        Ok(stats)
    }
}
