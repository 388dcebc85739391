//! Footnote reference extraction.
//!
//! Row text references footnotes in two surface forms: a bare superscript
//! glyph anywhere in the text ("MRD relapse⁴"), or a glyph immediately
//! following a single uppercase placeholder letter ("A¹", "B²,³"). Both
//! forms are matched explicitly; the glyph-to-ordinal mapping is the
//! enumerated table in `mrd_types::footnote`, so the two patterns and that
//! table are the whole recognition surface.

use mrd_dataset::Row;
use mrd_types::footnote::glyph_value;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static BARE_GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[¹²³⁴⁵⁶⁷⁸⁹]").expect("valid pattern"));

static PLACEHOLDER_GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z][¹²³⁴⁵⁶⁷⁸⁹]").expect("valid pattern"));

/// All footnote markers referenced by the threshold, definition, or response
/// text of `rows`, deduplicated and sorted ascending by numeric value.
///
/// Markers are returned as the string keys used in table footnote maps
/// ("1".."9"). Whether a marker is actually defined by the owning table is
/// the assembler's concern, not this function's.
pub fn referenced_markers<'a, I>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut found: BTreeSet<u8> = BTreeSet::new();
    for row in rows {
        for field in [&row.threshold, &row.definition, &row.response] {
            for m in BARE_GLYPH.find_iter(field) {
                found.extend(m.as_str().chars().filter_map(glyph_value));
            }
            for m in PLACEHOLDER_GLYPH.find_iter(field) {
                found.extend(m.as_str().chars().filter_map(glyph_value));
            }
        }
    }
    found.into_iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrd_types::ResponseTier;

    fn row(threshold: &str, definition: &str, response: &str) -> Row {
        Row {
            tissue: None,
            threshold: threshold.to_owned(),
            definition: definition.to_owned(),
            response: response.to_owned(),
            tier: ResponseTier::Optimal,
        }
    }

    #[test]
    fn test_bare_glyph_recognised_in_any_field() {
        let rows = [
            row("≥0.1%³", "Negative", "Optimal"),
            row("<0.01%", "MRD relapse⁴", "Optimal"),
            row("<0.01%", "Positive", "High risk of treatment failure⁵"),
        ];
        assert_eq!(referenced_markers(&rows), vec!["3", "4", "5"]);
    }

    #[test]
    fn test_placeholder_letter_glyph_recognised() {
        let rows = [row("<0.001% OR A¹", "Negative", "Optimal")];
        assert_eq!(referenced_markers(&rows), vec!["1"]);
    }

    #[test]
    fn test_glyph_run_after_placeholder_yields_every_marker() {
        let rows = [row("≥0.1% AND B²,⁴,⁵", "MRD relapse", "MRD relapse")];
        assert_eq!(referenced_markers(&rows), vec!["2", "4", "5"]);
    }

    #[test]
    fn test_repeated_marker_contributes_once() {
        let rows = [
            row("≥0.001% to <0.01% AND B²", "MRD at low level", "Warning"),
            row("≥0.01% AND B²", "Positive²", "Warning"),
        ];
        assert_eq!(referenced_markers(&rows), vec!["2"]);
    }

    #[test]
    fn test_markers_sorted_numerically_not_by_encounter() {
        let rows = [row("B³ first", "then A¹", "Optimal")];
        assert_eq!(referenced_markers(&rows), vec!["1", "3"]);
    }

    #[test]
    fn test_plain_digits_and_text_are_not_markers() {
        let rows = [row(
            "≥3-log10 reduction from diagnostic levels",
            "MRD at low level/negative",
            "Optimal",
        )];
        assert!(referenced_markers(&rows).is_empty());
    }

    #[test]
    fn test_no_rows_yields_no_markers() {
        let rows: [Row; 0] = [];
        assert!(referenced_markers(&rows).is_empty());
    }
}
