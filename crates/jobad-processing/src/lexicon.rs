//! Controlled-vocabulary lexicons.
//!
//! A lexicon is a flat `key:value` dictionary loaded once at startup and
//! read-only for the lifetime of a run. Lookups pass unknown tokens through
//! unchanged, so a lexicon can be applied to arbitrary noisy input. Two
//! independent lexicons drive the pipeline: one for city names, one for
//! keywords. A value may carry several canonical concepts joined by `|`;
//! splitting them is the caller's concern (see the keyword extractor).

use crate::error::{PreprocessingError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default separator between entries in a lexicon resource.
pub const ENTRY_DELIMITER: char = '\n';

/// Default separator between a key and its value.
pub const KEY_VALUE_DELIMITER: char = ':';

/// An immutable raw-token to canonical-token mapping.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Load a lexicon from a UTF-8 file with the default delimiters.
    ///
    /// Malformed lines (no key/value delimiter) are a fatal load-time
    /// error: the run cannot proceed without its controlled vocabularies.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_delimiters(path, ENTRY_DELIMITER, KEY_VALUE_DELIMITER)
    }

    /// Load a lexicon with explicit entry and key/value delimiters.
    pub fn load_with_delimiters(
        path: impl AsRef<Path>,
        entry_delimiter: char,
        key_value_delimiter: char,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| PreprocessingError::LexiconLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content, path, entry_delimiter, key_value_delimiter)
    }

    /// Parse lexicon content that is already in memory.
    ///
    /// `origin` only labels error messages (tests pass a synthetic name).
    pub fn from_str_content(content: &str, origin: impl Into<PathBuf>) -> Result<Self> {
        Self::parse(content, &origin.into(), ENTRY_DELIMITER, KEY_VALUE_DELIMITER)
    }

    fn parse(
        content: &str,
        path: &Path,
        entry_delimiter: char,
        key_value_delimiter: char,
    ) -> Result<Self> {
        let mut entries = HashMap::new();

        for (index, raw_entry) in content.trim().split(entry_delimiter).enumerate() {
            let entry = raw_entry.trim_end_matches('\r');
            if entry.is_empty() {
                continue;
            }
            // Split on the FIRST delimiter occurrence; values may contain it.
            let Some((key, value)) = entry.split_once(key_value_delimiter) else {
                return Err(PreprocessingError::LexiconEntry {
                    path: path.to_path_buf(),
                    line: index + 1,
                    content: entry.to_string(),
                });
            };
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Translate a token to its canonical form, or return it unchanged when
    /// it is not a key. Pass-through is the default, not an error.
    pub fn translate<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map_or(token, String::as_str)
    }

    /// Number of entries in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_translate() {
        let lexicon =
            Lexicon::from_str_content("تهران:tehran\nكرج:karaj\n", "cities.txt").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.translate("تهران"), "tehran");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let lexicon = Lexicon::from_str_content("a:b", "kw.txt").unwrap();
        assert_eq!(lexicon.translate("python"), "python");
        // idempotent on keys not present
        assert_eq!(lexicon.translate(lexicon.translate("python")), "python");
    }

    #[test]
    fn test_value_may_contain_delimiter() {
        // only the first ':' splits; '|'-joined multi-concept values survive
        let lexicon = Lexicon::from_str_content("fullstack:full-stack|developer", "kw.txt")
            .unwrap();
        assert_eq!(lexicon.translate("fullstack"), "full-stack|developer");
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let err = Lexicon::from_str_content("good:entry\nbadline\n", "kw.txt").unwrap_err();
        match err {
            crate::error::PreprocessingError::LexiconEntry { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "badline");
            }
            other => panic!("expected LexiconEntry error, got {other}"),
        }
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lexicon = Lexicon::from_str_content("a:b\n\n\nc:d\n", "kw.txt").unwrap();
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = Lexicon::load("/nonexistent/lexicon.txt").unwrap_err();
        assert!(err.is_lexicon_error());
    }
}
