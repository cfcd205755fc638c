//! Emoji palette and caret insertion.
//!
//! The palette is the page design's fixed list, in grid order. A couple
//! of entries repeat in the source list; the duplicates are kept because
//! order and count are part of the rendered layout, not semantics.

/// Glyphs offered for insertion into the message body, in grid order.
pub const EMOJI_GLYPHS: [&str; 121] = [
    "😀", "😃", "😄", "😁", "😆", "🥹", "😅", "😂",
    "🤣", "🥲", "😊", "😇", "🙂", "🙃", "😉", "😌",
    "😍", "🥰", "😘", "😗", "😙", "😚", "😋", "😛",
    "😝", "😜", "🤪", "🤨", "🧐", "🤓", "😎", "🥸",
    "🤩", "🥳", "😏", "😒", "😞", "😔", "😟", "😕",
    "🙁", "😣", "😖", "😫", "😩", "🥺", "😢", "😭",
    "😤", "😠", "😡", "🤬", "🤯", "😳", "🥵", "🥶",
    "😶", "😱", "😨", "😰", "😥", "😓", "🤗", "🤔",
    "🫣", "🤭", "🫢", "🫡", "🤫", "🫠", "🤥", "😶",
    "🫥", "😐", "🫤", "😑", "🫨", "😬", "🙄", "😯",
    "😦", "😧", "😮", "😲", "🥱", "😴", "🤤", "😪",
    "😮", "😵", "🤐", "🥴", "🤢", "🤮", "🤧", "😷",
    "🤒", "🤕", "🤑", "🤠", "😈", "👿", "👹", "👺",
    "🤡", "💩", "👻", "💀", "👽", "👾", "🤖", "🎃",
    "😺", "😸", "😹", "😻", "😼", "😽", "🙀", "😿",
    "😾",
];

/// Result of splicing a glyph into the message field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphInsertion {
    pub text: String,
    /// Caret position immediately after the inserted glyph, in UTF-16
    /// code units.
    pub caret: usize,
}

/// Splice `glyph` into `text` over the current selection, replacing any
/// selected range.
///
/// Offsets are UTF-16 code-unit indexes, the unit the DOM reports for
/// `selectionStart`/`selectionEnd`. Out-of-range offsets clamp to the
/// text length.
pub fn insert_glyph(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    glyph: &str,
) -> GlyphInsertion {
    let units: Vec<u16> = text.encode_utf16().collect();
    let start = selection_start.min(units.len());
    let end = selection_end.clamp(start, units.len());

    let glyph_units: Vec<u16> = glyph.encode_utf16().collect();
    let mut spliced = Vec::with_capacity(units.len() - (end - start) + glyph_units.len());
    spliced.extend_from_slice(&units[..start]);
    spliced.extend_from_slice(&glyph_units);
    spliced.extend_from_slice(&units[end..]);

    GlyphInsertion {
        text: String::from_utf16_lossy(&spliced),
        caret: start + glyph_units.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_keeps_the_full_ordered_list() {
        assert_eq!(EMOJI_GLYPHS.len(), 121);
        assert_eq!(EMOJI_GLYPHS[0], "😀");
        assert_eq!(EMOJI_GLYPHS[120], "😾");
    }

    #[test]
    fn inserts_at_caret_and_moves_caret_past_the_glyph() {
        let insertion = insert_glyph("abcd", 2, 2, "😀");
        assert_eq!(insertion.text, "ab😀cd");
        // The glyph is two UTF-16 units wide.
        assert_eq!(insertion.caret, 4);
    }

    #[test]
    fn replaces_an_active_selection() {
        let insertion = insert_glyph("abcd", 1, 3, "😀");
        assert_eq!(insertion.text, "a😀d");
        assert_eq!(insertion.caret, 3);
    }

    #[test]
    fn appends_when_caret_is_at_the_end() {
        let insertion = insert_glyph("ab", 2, 2, "😀");
        assert_eq!(insertion.text, "ab😀");
        assert_eq!(insertion.caret, 4);
    }

    #[test]
    fn clamps_out_of_range_offsets() {
        let insertion = insert_glyph("ab", 10, 20, "😀");
        assert_eq!(insertion.text, "ab😀");
        assert_eq!(insertion.caret, 4);
    }

    #[test]
    fn offsets_are_utf16_units_across_surrogate_pairs() {
        // Caret after the first emoji (2 units), not after 1 char.
        let insertion = insert_glyph("😀x", 2, 2, "😺");
        assert_eq!(insertion.text, "😀😺x");
        assert_eq!(insertion.caret, 4);
    }

    #[test]
    fn inserting_into_empty_text_yields_just_the_glyph() {
        let insertion = insert_glyph("", 0, 0, "😀");
        assert_eq!(insertion.text, "😀");
        assert_eq!(insertion.caret, 2);
    }
}
