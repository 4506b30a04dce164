//! Core types shared across the preprocessing pipeline.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Column names of the job-advertisement dataset.
pub mod columns {
    pub const COMPANY_NAME: &str = "CompanyName";
    pub const COMPANY_TYPE: &str = "CompanyType";
    pub const AD_DATE: &str = "AdDate";
    pub const JOB_TITLE: &str = "JobTitle";
    pub const REMOTE: &str = "Remote";
    pub const CITY: &str = "City";
    pub const KNOWLEDGE_BASE: &str = "KnowledgeBase";
    pub const FULL_TIME: &str = "FullTime";
    pub const GENDER: &str = "Gender";
    pub const PROJECT: &str = "Project";
    pub const MILITARY: &str = "Military";
    pub const AD_TEXT: &str = "AdText";
    pub const KEYWORDS: &str = "Keywords";

    /// Every column the input file must carry, in output order.
    pub const EXPECTED: [&str; 13] = [
        COMPANY_NAME,
        COMPANY_TYPE,
        AD_DATE,
        JOB_TITLE,
        REMOTE,
        CITY,
        KNOWLEDGE_BASE,
        FULL_TIME,
        GENDER,
        PROJECT,
        MILITARY,
        AD_TEXT,
        KEYWORDS,
    ];

    /// Boolean columns cleaned with the yes/no coercion.
    pub const BOOLEAN: [&str; 5] = [REMOTE, KNOWLEDGE_BASE, FULL_TIME, PROJECT, MILITARY];

    /// Columns imputed with the most frequent non-missing value.
    pub const MOST_FREQUENT: [&str; 9] = [
        COMPANY_TYPE,
        AD_DATE,
        REMOTE,
        CITY,
        KNOWLEDGE_BASE,
        FULL_TIME,
        GENDER,
        PROJECT,
        MILITARY,
    ];
}

/// Ownership category of the advertising company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    Private,
    Government,
    None,
}

impl CompanyType {
    /// Parse a raw cell: trimmed, lowercased, first character decides.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().chars().next()? {
            'p' => Some(Self::Private),
            'g' => Some(Self::Government),
            'n' => Some(Self::None),
            _ => Option::None,
        }
    }

    /// Canonical dataset label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Private => "PRIVATE",
            Self::Government => "GOVERNMENT",
            Self::None => "NONE",
        }
    }
}

/// Requested gender of the advertised position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Both,
}

impl Gender {
    /// Parse a raw cell: trimmed, lowercased, first character decides.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().chars().next()? {
            'm' => Some(Self::Male),
            'f' => Some(Self::Female),
            'b' => Some(Self::Both),
            _ => None,
        }
    }

    /// Canonical dataset label.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Both => "BOTH",
        }
    }
}

/// Counters accumulated over one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rows read before any cleaning.
    pub rows_before: usize,
    /// Rows in the final output.
    pub rows_after: usize,
    /// Rows dropped because Keywords stayed missing after inference.
    pub rows_dropped_missing_keywords: usize,
    /// Fully empty rows dropped on read.
    pub empty_rows_dropped: usize,
    /// Fully empty columns dropped on read.
    pub empty_columns_dropped: usize,
    /// Cells routed through the translation capability.
    pub translated_cells: usize,
    /// Cells left untranslated after the retry budget was exhausted.
    pub untranslated_cells: usize,
    /// Rows that gained at least one keyword from cross-field inference.
    pub rows_with_inferred_keywords: usize,
    /// Size of the frozen dataset-wide keyword vocabulary.
    pub vocabulary_size: usize,
    /// Cells filled per column during imputation.
    pub imputed_cells: Vec<(String, usize)>,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl RunSummary {
    /// Record imputed-cell counts for a column (zero counts are skipped).
    pub fn record_imputation(&mut self, column: &str, filled: usize) {
        if filled > 0 {
            self.imputed_cells.push((column.to_string(), filled));
        }
    }
}

/// Result of a complete pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    /// The cleaned, imputed dataset.
    pub data: DataFrame,
    /// Run counters for reporting.
    pub summary: RunSummary,
}
