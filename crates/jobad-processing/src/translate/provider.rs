//! Translation provider trait for abstracting the external capability.
//!
//! The pipeline only needs "text in source language, text out in target
//! language"; everything about the backing service lives behind this trait
//! so alternative backends (or none at all, for offline runs and tests)
//! plug in without touching the pipeline.

use anyhow::Result;

/// Trait for external translation capabilities.
///
/// Implementations must be `Send + Sync`; the pipeline shares one provider
/// across all cells of a run.
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source` to `target` (ISO 639-1 codes).
    ///
    /// # Errors
    ///
    /// Returns an error when the backing service rejects the request or the
    /// response cannot be parsed. The adapter decides whether to retry.
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;

    /// Provider name for logging and debugging.
    fn name(&self) -> &str;
}

/// A provider that returns its input unchanged.
///
/// Used for offline runs (`--no-translate`) and in tests; Persian text then
/// survives only as far as the keyword extractor allows.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

impl TranslationProvider for PassthroughTranslator {
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_input() {
        let provider = PassthroughTranslator;
        assert_eq!(provider.translate("متن", "fa", "en").unwrap(), "متن");
        assert_eq!(provider.name(), "passthrough");
    }
}
