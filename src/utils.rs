//! String folding for case-insensitive comparison.

use unicode_normalization::UnicodeNormalization;

/// Fold a string for case-insensitive comparison: NFC-normalize, then
/// Unicode lowercase.
///
/// NFC composition makes precomposed and decomposed accented forms compare
/// equal ("café" typed as `e` + combining acute matches "café" stored
/// precomposed). Lowercasing uses Rust's full Unicode mapping, so non-ASCII
/// letters fold correctly ("CAFÉ" → "café", "ÜBER" → "über").
///
/// Folding is comparison-only. Diacritics are preserved ("cafe" does not
/// match "café") and whitespace is left intact. Snippets always carry the
/// original stored text, never the folded form.
pub fn fold(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Test a pre-folded query for substring containment in a raw field value.
///
/// The query must already have been passed through [`fold`]; the haystack is
/// folded here. Folding the query once per search instead of once per field
/// is the only optimization this crate allows itself.
pub fn contains_fold(haystack: &str, folded_query: &str) -> bool {
    fold(haystack).contains(folded_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases_unicode() {
        assert_eq!(fold("CAFÉ"), "café");
        assert_eq!(fold("ÜBER"), "über");
    }

    #[test]
    fn fold_composes_decomposed_accents() {
        // "é" as base letter + combining acute accent
        let decomposed = "cafe\u{0301}";
        assert_eq!(fold(decomposed), "café");
    }

    #[test]
    fn fold_keeps_diacritics() {
        // Case-insensitive only: stripping accents would over-match.
        assert_ne!(fold("café"), "cafe");
    }

    #[test]
    fn contains_fold_is_case_insensitive() {
        assert!(contains_fold("Employee Handbook", &fold("HANDBOOK")));
        assert!(contains_fold("quarterly MEETING notes", &fold("meeting")));
        assert!(!contains_fold("Employee Handbook", &fold("payroll")));
    }

    #[test]
    fn contains_fold_matches_punctuation_literally() {
        assert!(contains_fold("reach us at ops@example.com", &fold("@example")));
        assert!(!contains_fold("plain text", &fold("@#$%^&*()")));
    }
}
