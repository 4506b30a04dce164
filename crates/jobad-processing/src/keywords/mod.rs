//! Keyword extraction from free-text cells.
//!
//! Turns a noisy multilingual keyword field (or an ad body) into a set of
//! canonical English tokens via the keyword lexicon. The extractor is also
//! the tokenizer behind cross-field inference, so it is usable on any text
//! cell, not just the Keywords column.

pub mod inference;

pub use inference::KeywordInference;

use crate::lexicon::Lexicon;
use crate::utils::{contains_persian, non_blank};
use std::collections::BTreeSet;

/// Separator used to join keyword sets into a single output cell, and to
/// join multi-concept lexicon values.
pub const KEYWORD_SEPARATOR: char = '|';

/// Lexicon-driven keyword extractor.
pub struct KeywordExtractor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extract the canonical keyword set from a raw cell, or missing.
    ///
    /// Commas (plain and Persian), the standalone Persian conjunction,
    /// newlines, double quotes, and bullets merge into spaces; a forward
    /// slash merges into a hyphen. Only a free-standing `و` token counts
    /// as the conjunction: inside a word the same letter is part of the
    /// token (so a lexicon key like `پایتون` still matches), meaning an
    /// unspaced `linuxوphp` is not split and drops as Persian residue. Tokens are trimmed, lowercased, stripped of one
    /// leading `-`/`'`/`(` and one trailing `-`/`)`/`.`, canonicalized
    /// through the lexicon, and `|`-joined multi-concept translations are
    /// flattened. Empty tokens and Persian-script residue are discarded;
    /// an empty result is missing.
    pub fn clean_keywords(&self, raw: Option<&str>) -> Option<BTreeSet<String>> {
        let raw = non_blank(raw)?;

        let merged: String = raw
            .trim()
            .chars()
            .map(|ch| match ch {
                ',' | '\u{060C}' | '\n' | '"' | '\u{2022}' => ' ',
                '/' => '-',
                other => other,
            })
            .collect();

        let mut keywords = BTreeSet::new();
        for token in merged.split(' ') {
            // the standalone Persian conjunction is a separator, not a token;
            // inside a word the same letter is just a letter (پایتون)
            if token == "\u{0648}" {
                continue;
            }
            let cleaned = clean_token(token);
            let translated = self.lexicon.translate(&cleaned);
            // one raw token may canonicalize to several concepts
            for concept in translated.split(KEYWORD_SEPARATOR) {
                if !concept.is_empty() && !contains_persian(concept) {
                    keywords.insert(concept.to_string());
                }
            }
        }

        if keywords.is_empty() {
            None
        } else {
            Some(keywords)
        }
    }
}

/// Normalize a single raw token before lexicon lookup.
fn clean_token(token: &str) -> String {
    let mut token = token.trim().to_lowercase();
    for prefix in ['-', '\'', '('] {
        if let Some(stripped) = token.strip_prefix(prefix) {
            token = stripped.to_string();
        }
    }
    for suffix in ['-', ')', '.'] {
        if let Some(stripped) = token.strip_suffix(suffix) {
            token = stripped.to_string();
        }
    }
    token
}

/// Join a keyword set into its output-cell encoding.
pub fn join_keywords(keywords: &BTreeSet<String>) -> String {
    keywords
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&KEYWORD_SEPARATOR.to_string())
}

/// Parse an output-cell encoding back into a keyword set.
pub fn parse_keywords(cell: &str) -> BTreeSet<String> {
    cell.split(KEYWORD_SEPARATOR)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor_fixture() -> Lexicon {
        Lexicon::from_str_content(
            "پایتون:python\nfull-stack:full-stack\nphp-laravel:php|laravel\nlaravel:laravel|php",
            "keywords.txt",
        )
        .unwrap()
    }

    fn extract(raw: &str, lexicon: &Lexicon) -> BTreeSet<String> {
        KeywordExtractor::new(lexicon)
            .clean_keywords(Some(raw))
            .unwrap_or_default()
    }

    #[test]
    fn test_clean_token_strips_wrappers() {
        assert_eq!(clean_token(" -Python. "), "python");
        assert_eq!(clean_token("(php)"), "php");
        assert_eq!(clean_token("'rust-"), "rust");
        // only one instance per side is stripped
        assert_eq!(clean_token("--c"), "-c");
    }

    #[test]
    fn test_merge_separators() {
        let lexicon = extractor_fixture();
        let set = extract("full-stack, php/laravel و linux", &lexicon);
        for expected in ["full-stack", "php", "laravel", "linux"] {
            assert!(set.contains(expected), "{expected} missing from {set:?}");
        }
        assert!(set.iter().all(|t| !crate::utils::contains_persian(t)));
    }

    #[test]
    fn test_conjunction_separates_only_as_standalone_token() {
        let lexicon = extractor_fixture();
        // free-standing conjunction acts as a separator
        let set = extract("پایتون و linux", &lexicon);
        assert_eq!(
            set,
            BTreeSet::from(["python".to_string(), "linux".to_string()])
        );
        // inside a word the letter stays, so the lexicon key matches
        assert!(extract("پایتون", &lexicon).contains("python"));
        // an unspaced conjunction is not split; the token drops as residue
        assert_eq!(extract("linuxوphp", &lexicon), BTreeSet::new());
    }

    #[test]
    fn test_multi_concept_translation_flattens() {
        let lexicon = extractor_fixture();
        let set = extract("laravel", &lexicon);
        assert_eq!(set, BTreeSet::from(["laravel".to_string(), "php".to_string()]));
    }

    #[test]
    fn test_persian_residue_is_discarded() {
        let lexicon = extractor_fixture();
        // translatable token survives, untranslatable Persian is dropped
        let set = extract("پایتون برنامه‌نویسی", &lexicon);
        assert_eq!(set, BTreeSet::from(["python".to_string()]));
    }

    #[test]
    fn test_all_persian_yields_missing() {
        let lexicon = extractor_fixture();
        let result = KeywordExtractor::new(&lexicon).clean_keywords(Some("برنامه نویسی"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_blank_yields_missing() {
        let lexicon = extractor_fixture();
        let extractor = KeywordExtractor::new(&lexicon);
        assert_eq!(extractor.clean_keywords(None), None);
        assert_eq!(extractor.clean_keywords(Some("  \n ")), None);
    }

    #[test]
    fn test_idempotent_on_rejoined_output() {
        let lexicon = extractor_fixture();
        let extractor = KeywordExtractor::new(&lexicon);
        let first = extractor
            .clean_keywords(Some("full-stack, php/laravel و linux"))
            .unwrap();
        let rejoined = first
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let second = extractor.clean_keywords(Some(&rejoined)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_join_and_parse_round_trip() {
        let set = BTreeSet::from(["python".to_string(), "sql".to_string()]);
        let joined = join_keywords(&set);
        assert_eq!(joined, "python|sql");
        assert_eq!(parse_keywords(&joined), set);
    }
}
