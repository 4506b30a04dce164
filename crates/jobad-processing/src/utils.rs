//! Shared utilities for the preprocessing pipeline.
//!
//! Persian-script helpers plus the string-Series plumbing used by the
//! cleaners and imputers.

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use std::collections::HashMap;

// =============================================================================
// Persian Script Utilities
// =============================================================================

/// Unicode ranges treated as Persian/Arabic script: Arabic, Arabic
/// Supplement, Hebrew, and Arabic Presentation Forms-B.
static PERSIAN_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{0590}-\x{05FF}\x{FE70}-\x{FEFF}]")
        .expect("persian script pattern is valid")
});

/// Check whether text contains any Persian/Arabic-range character.
pub fn contains_persian(text: &str) -> bool {
    PERSIAN_SCRIPT.is_match(text)
}

/// Normalize Persian text to canonical letter forms.
///
/// Arabic-keyboard variants are folded onto their Persian counterparts and
/// the zero-width non-joiner becomes a plain space so that half-space
/// compounds tokenize as separate words.
pub fn normalize_persian(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{064A}' | '\u{0649}' => result.push('\u{06CC}'), // arabic yaa, alef maqsura -> farsi yeh
            '\u{0643}' => result.push('\u{06A9}'),              // arabic kaf -> farsi keheh
            '\u{200C}' => result.push(' '),                     // zero-width non-joiner
            _ => result.push(ch),
        }
    }
    result
}

// =============================================================================
// String Series Utilities
// =============================================================================

/// Rebuild a string Series by mapping a cell function over every value.
///
/// The function receives `None` for null cells and returns `None` for
/// missing output, so per-cell cleaners stay total.
pub fn map_string_column<F>(series: &Series, f: F) -> PolarsResult<Series>
where
    F: Fn(Option<&str>) -> Option<String>,
{
    let str_series = series.str()?;
    let mut mapped = Vec::with_capacity(str_series.len());
    for opt_val in str_series.into_iter() {
        mapped.push(f(opt_val));
    }
    Ok(Series::new(series.name().clone(), mapped))
}

/// Calculate the mode (most frequent value) of a string Series.
///
/// Ties break deterministically: the first value to reach the maximum
/// count, in column order, wins.
pub fn string_mode(series: &Series) -> Option<String> {
    let str_series = series.str().ok()?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;

    for val in str_series.into_iter().flatten() {
        let count = counts.entry(val).or_insert(0);
        *count += 1;
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((val, *count)),
        }
    }

    best.map(|(val, _)| val.to_string())
}

/// Fill null values in a string Series with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    map_string_column(series, |opt| {
        Some(opt.map_or_else(|| fill_value.to_string(), |v| v.to_string()))
    })
}

/// Trim a cell and treat whitespace-only content as missing.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    match raw {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_persian() {
        assert!(contains_persian("برنامه نویس"));
        assert!(contains_persian("python و sql"));
        assert!(!contains_persian("python developer"));
        assert!(!contains_persian(""));
    }

    #[test]
    fn test_normalize_persian_letter_forms() {
        // arabic yaa and kaf fold onto the farsi forms
        assert_eq!(normalize_persian("\u{0643}\u{064A}"), "\u{06A9}\u{06CC}");
        // zero-width non-joiner becomes a space
        assert_eq!(normalize_persian("می\u{200C}شود"), "می شود");
        assert_eq!(normalize_persian("plain"), "plain");
    }

    #[test]
    fn test_map_string_column() {
        let series = Series::new("t".into(), &[Some("a"), None, Some("b")]);
        let mapped = map_string_column(&series, |opt| opt.map(|v| v.to_uppercase())).unwrap();
        assert_eq!(mapped.str().unwrap().get(0), Some("A"));
        assert_eq!(mapped.str().unwrap().get(1), None);
        assert_eq!(mapped.str().unwrap().get(2), Some("B"));
    }

    #[test]
    fn test_string_mode_basic() {
        let series = Series::new("t".into(), &["a", "b", "a", "c", "a"]);
        assert_eq!(string_mode(&series), Some("a".to_string()));
    }

    #[test]
    fn test_string_mode_tie_breaks_on_first_seen() {
        let series = Series::new("t".into(), &["b", "a", "a", "b"]);
        // "a" reaches count 2 at index 2, "b" only at index 3
        assert_eq!(string_mode(&series), Some("a".to_string()));
    }

    #[test]
    fn test_string_mode_all_null() {
        let series = Series::new("t".into(), &[Option::<&str>::None, None]);
        assert_eq!(string_mode(&series), None);
    }

    #[test]
    fn test_fill_string_nulls() {
        let series = Series::new("t".into(), &[Some("x"), None]);
        let filled = fill_string_nulls(&series, "fill").unwrap();
        assert_eq!(filled.str().unwrap().get(1), Some("fill"));
        assert_eq!(filled.null_count(), 0);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ")), Some(" x "));
    }
}
