//! Translation of Persian free-text fields to English.
//!
//! The adapter decides per cell whether translation is needed at all:
//! text without a Persian/Arabic-range character is assumed to already be
//! English and passes through unchanged. Persian text is normalized to
//! canonical letter forms first, then routed through the configured
//! [`TranslationProvider`]. Provider failures are retried a bounded number
//! of times; when the budget is exhausted the cell is left untranslated
//! rather than aborting the run.

mod http;
mod provider;

pub use http::{HttpTranslationProvider, HttpTranslatorConfig, HttpTranslatorConfigBuilder};
pub use provider::{PassthroughTranslator, TranslationProvider};

use crate::utils::{contains_persian, normalize_persian};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Source language of Persian cells.
const SOURCE_LANG: &str = "fa";

/// Target language of the cleaned dataset.
const TARGET_LANG: &str = "en";

/// Pause between retry attempts.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Outcome of translating one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// Blank or absent input.
    Missing,
    /// No Persian script present; the text passed through unchanged.
    Unchanged(String),
    /// Persian text translated to lowercase English.
    Translated(String),
    /// Retries exhausted; the original text was kept untranslated.
    Fallback(String),
}

impl Translation {
    /// The output cell value, if any.
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Unchanged(v) | Self::Translated(v) | Self::Fallback(v) => Some(v),
        }
    }
}

/// Script-aware translation adapter with bounded retry.
pub struct TranslatorAdapter {
    provider: Arc<dyn TranslationProvider>,
    max_attempts: usize,
}

impl TranslatorAdapter {
    /// Create an adapter over a provider.
    ///
    /// `retries` is the number of additional attempts after the first
    /// failure; 0 means a single attempt per cell.
    pub fn new(provider: Arc<dyn TranslationProvider>, retries: usize) -> Self {
        Self {
            provider,
            max_attempts: retries + 1,
        }
    }

    /// Translate one cell according to its script content.
    pub fn translate_cell(&self, raw: Option<&str>) -> Translation {
        let Some(text) = crate::utils::non_blank(raw) else {
            return Translation::Missing;
        };

        if !contains_persian(text) {
            return Translation::Unchanged(text.to_string());
        }

        let normalized = normalize_persian(text);
        for attempt in 1..=self.max_attempts {
            match self.provider.translate(&normalized, SOURCE_LANG, TARGET_LANG) {
                Ok(translated) => return Translation::Translated(translated.to_lowercase()),
                Err(e) => {
                    warn!(
                        "Translation attempt {}/{} via '{}' failed: {}",
                        attempt,
                        self.max_attempts,
                        self.provider.name(),
                        e
                    );
                    if attempt < self.max_attempts {
                        std::thread::sleep(RETRY_BACKOFF);
                    }
                }
            }
        }

        warn!("Leaving cell untranslated after {} attempts", self.max_attempts);
        Translation::Fallback(text.to_string())
    }
}
