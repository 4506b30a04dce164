//! Per-column cell cleaners.
//!
//! Each cleaner is a total function from a raw cell to a normalized value
//! or missing. Blank and whitespace-only input maps to missing before any
//! other rule, and missing is always `None`, never an empty string.

use crate::lexicon::Lexicon;
use crate::types::{CompanyType, Gender};
use crate::utils::non_blank;

/// Collapse embedded newlines to single spaces and trim.
pub fn clean_company_name(raw: Option<&str>) -> Option<String> {
    let raw = non_blank(raw)?;
    Some(raw.replace('\n', " ").trim().to_string())
}

/// Map a free-form company type onto PRIVATE / GOVERNMENT / NONE.
pub fn clean_company_type(raw: Option<&str>) -> Option<String> {
    let raw = non_blank(raw)?;
    CompanyType::from_raw(raw).map(|t| t.as_label().to_string())
}

/// Coerce a yes/no cell to "1"/"0".
pub fn clean_boolean(raw: Option<&str>) -> Option<String> {
    let raw = non_blank(raw)?;
    let lowered = raw.trim().to_lowercase();
    if lowered.starts_with('y') {
        Some("1".to_string())
    } else if lowered.starts_with('n') {
        Some("0".to_string())
    } else {
        None
    }
}

/// Map a free-form gender cell onto MALE / FEMALE / BOTH.
pub fn clean_gender(raw: Option<&str>) -> Option<String> {
    let raw = non_blank(raw)?;
    Gender::from_raw(raw).map(|g| g.as_label().to_string())
}

/// Canonicalize a city name through the city lexicon.
pub fn clean_city(raw: Option<&str>, cities: &Lexicon) -> Option<String> {
    let raw = non_blank(raw)?;
    Some(cities.translate(raw).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_company_name() {
        assert_eq!(
            clean_company_name(Some("Acme\nCorp\n")),
            Some("Acme Corp".to_string())
        );
        assert_eq!(clean_company_name(Some("   ")), None);
        assert_eq!(clean_company_name(None), None);
    }

    #[test]
    fn test_clean_company_type() {
        assert_eq!(
            clean_company_type(Some("  Private ")),
            Some("PRIVATE".to_string())
        );
        assert_eq!(
            clean_company_type(Some("governmental")),
            Some("GOVERNMENT".to_string())
        );
        assert_eq!(clean_company_type(Some("none")), Some("NONE".to_string()));
        assert_eq!(clean_company_type(Some("cooperative")), None);
    }

    #[test]
    fn test_clean_boolean_prefixes() {
        assert_eq!(clean_boolean(Some("yes")), Some("1".to_string()));
        assert_eq!(clean_boolean(Some(" Y ")), Some("1".to_string()));
        assert_eq!(clean_boolean(Some("No")), Some("0".to_string()));
        assert_eq!(clean_boolean(Some("nope")), Some("0".to_string()));
        assert_eq!(clean_boolean(Some("maybe")), None);
        assert_eq!(clean_boolean(Some("")), None);
    }

    #[test]
    fn test_clean_gender() {
        assert_eq!(clean_gender(Some("Male")), Some("MALE".to_string()));
        assert_eq!(clean_gender(Some("f")), Some("FEMALE".to_string()));
        assert_eq!(clean_gender(Some("Both ok")), Some("BOTH".to_string()));
        assert_eq!(clean_gender(Some("unspecified")), None);
    }

    #[test]
    fn test_clean_city_uses_lexicon() {
        let cities =
            crate::lexicon::Lexicon::from_str_content("تهران:tehran", "cities.txt").unwrap();
        assert_eq!(clean_city(Some("تهران"), &cities), Some("tehran".to_string()));
        // unknown cities pass through unchanged
        assert_eq!(clean_city(Some("shiraz"), &cities), Some("shiraz".to_string()));
        assert_eq!(clean_city(None, &cities), None);
    }
}
