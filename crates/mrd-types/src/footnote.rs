//! Footnote glyph vocabulary.
//!
//! Clinical table text references footnotes with Unicode superscript digit
//! glyphs (¹..⁹). The mapping is an explicitly enumerated table so that
//! supporting a tenth marker is a data change, not a logic change. Glyphs
//! beyond ⁹ are not defined in the source guideline.

/// Superscript glyph to footnote ordinal, in ascending order.
pub const SUPERSCRIPT_DIGITS: [(char, u8); 9] = [
    ('¹', 1),
    ('²', 2),
    ('³', 3),
    ('⁴', 4),
    ('⁵', 5),
    ('⁶', 6),
    ('⁷', 7),
    ('⁸', 8),
    ('⁹', 9),
];

/// The ordinal value of a footnote glyph, if `c` is one.
pub fn glyph_value(c: char) -> Option<u8> {
    SUPERSCRIPT_DIGITS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

/// All footnote ordinals referenced by glyphs anywhere in `text`, in
/// encounter order, undeduplicated.
pub fn glyph_values(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().filter_map(glyph_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_value_maps_all_nine() {
        for (glyph, value) in SUPERSCRIPT_DIGITS {
            assert_eq!(glyph_value(glyph), Some(value));
        }
    }

    #[test]
    fn test_glyph_value_ignores_ordinary_text() {
        assert_eq!(glyph_value('1'), None);
        assert_eq!(glyph_value('A'), None);
        assert_eq!(glyph_value('≥'), None);
    }

    #[test]
    fn test_glyph_values_preserves_encounter_order() {
        let found: Vec<u8> = glyph_values("B²,⁴ then A¹").collect();
        assert_eq!(found, vec![2, 4, 1]);
    }
}
