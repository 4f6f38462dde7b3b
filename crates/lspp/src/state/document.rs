//! A single open text document.
//!
//! The buffer is plain UTF-8 text owned by the store. Client positions
//! arrive as line/character pairs where `character` counts UTF-16 code
//! units, matching the `"utf-16"` position encoding the server advertises;
//! they are converted to byte offsets before the buffer is indexed.

use lsp_types::{Position, TextDocumentContentChangeEvent};

/// Characters that terminate a word for [`Document::word_under_cursor`].
const WORD_DELIMITERS: &str = " `~!@#$%^&*()-=+[{]}\\|;:'\",.<>/?";

/// Whether `c` separates words.
pub fn is_word_delimiter(c: char) -> bool {
    WORD_DELIMITERS.contains(c)
}

/// An open text document, created by `didOpen` and mutated by `didChange`.
#[derive(Debug, Clone, Default)]
pub struct Document {
    content: String,
}

impl Document {
    /// Create a document from its full text.
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    /// The current buffer contents.
    pub fn text(&self) -> &str {
        &self.content
    }

    /// The `n`th line (0-based, `\n`-separated, trailing `\r` stripped).
    /// Out-of-range lines come back as `""`.
    pub fn line(&self, n: usize) -> &str {
        self.content.split('\n').nth(n).map(|l| l.trim_end_matches('\r')).unwrap_or_default()
    }

    /// Resolve a client position to a byte offset in the current buffer.
    ///
    /// Consumes `position.line` newline-terminated lines, then advances
    /// `position.character` UTF-16 code units into the target line. Both
    /// coordinates clamp: a line past the end resolves to the buffer end, a
    /// character past the line end to the position before its newline.
    pub fn position_to_offset(&self, position: Position) -> usize {
        let mut offset = 0usize;
        for _ in 0..position.line {
            match self.content[offset..].find('\n') {
                Some(i) => offset += i + 1,
                None => return self.content.len(),
            }
        }

        let line_end = self.content[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.content.len());

        let mut units: u32 = 0;
        for (i, ch) in self.content[offset..line_end].char_indices() {
            if units >= position.character {
                return offset + i;
            }
            units += ch.len_utf16() as u32;
        }
        line_end
    }

    /// The word containing the given position, or `""` when the position is
    /// out of range or sits on a delimiter.
    pub fn word_under_cursor(&self, position: Position) -> &str {
        let line = self.line(position.line as usize);
        let chars: Vec<(usize, char)> = line.char_indices().collect();

        // Map the UTF-16 column to the character it falls on
        let mut cursor = None;
        let mut units: u32 = 0;
        for (idx, &(_, ch)) in chars.iter().enumerate() {
            let next = units + ch.len_utf16() as u32;
            if position.character < next {
                cursor = Some(idx);
                break;
            }
            units = next;
        }
        let Some(cursor) = cursor else {
            return "";
        };
        if is_word_delimiter(chars[cursor].1) {
            return "";
        }

        let mut start = cursor;
        while start > 0 && !is_word_delimiter(chars[start - 1].1) {
            start -= 1;
        }
        let mut end = cursor + 1;
        while end < chars.len() && !is_word_delimiter(chars[end].1) {
            end += 1;
        }

        let start_byte = chars[start].0;
        let end_byte = chars.get(end).map(|&(b, _)| b).unwrap_or(line.len());
        &line[start_byte..end_byte]
    }

    /// Apply a `didChange` batch in order. Each ranged change is resolved
    /// against the buffer as left by the previous change; a change without a
    /// range replaces the whole content.
    pub fn apply_changes(&mut self, changes: &[TextDocumentContentChangeEvent]) {
        for change in changes {
            match change.range {
                Some(range) => {
                    let start = self.position_to_offset(range.start);
                    let end = self.position_to_offset(range.end).max(start);
                    self.content.replace_range(start..end, &change.text);
                }
                None => self.content = change.text.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit\n \
        Consectetur adipiscing elit quisque faucibus ex sapien vitae\n \
        Ex sapien vitae pellentesque sem placerat in id\n \
        Placerat in id{cursus}mi pretium tellus duis\n";

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    fn ranged(
        start: (u32, u32),
        end: (u32, u32),
        text: &str,
    ) -> TextDocumentContentChangeEvent {
        TextDocumentContentChangeEvent {
            range: Some(lsp_types::Range { start: pos(start.0, start.1), end: pos(end.0, end.1) }),
            range_length: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn line_lookup() {
        let doc = Document::new("first\nsecond\r\nthird");
        assert_eq!(doc.line(0), "first");
        assert_eq!(doc.line(1), "second");
        assert_eq!(doc.line(2), "third");
        assert_eq!(doc.line(3), "");
        assert_eq!(doc.line(17), "");
    }

    #[test]
    fn word_under_cursor_matches_expected_words() {
        let doc = Document::new(LOREM);
        assert_eq!(doc.word_under_cursor(pos(0, 12)), "dolor");
        assert_eq!(doc.word_under_cursor(pos(1, 25)), "elit");
        assert_eq!(doc.word_under_cursor(pos(2, 3)), "");
        assert_eq!(doc.word_under_cursor(pos(0, 200)), "");
        assert_eq!(doc.word_under_cursor(pos(3, 18)), "cursus");
        assert_eq!(doc.word_under_cursor(pos(3, 15)), "");
    }

    #[test]
    fn word_at_line_edges() {
        let doc = Document::new("alpha beta\n");
        assert_eq!(doc.word_under_cursor(pos(0, 0)), "alpha");
        assert_eq!(doc.word_under_cursor(pos(0, 9)), "beta");
        // One past the last character is out of range
        assert_eq!(doc.word_under_cursor(pos(0, 10)), "");
    }

    #[test]
    fn offsets_count_utf16_units() {
        // "é" is one UTF-16 unit but two UTF-8 bytes; "𝕏" is two units, four bytes.
        let doc = Document::new("é𝕏x\nabc");
        assert_eq!(doc.position_to_offset(pos(0, 0)), 0);
        assert_eq!(doc.position_to_offset(pos(0, 1)), 2);
        assert_eq!(doc.position_to_offset(pos(0, 3)), 6);
        assert_eq!(doc.position_to_offset(pos(0, 4)), 7);
        // Past the line end clamps before the newline
        assert_eq!(doc.position_to_offset(pos(0, 99)), 7);
        assert_eq!(doc.position_to_offset(pos(1, 1)), 9);
        // Past the last line clamps to the buffer end
        assert_eq!(doc.position_to_offset(pos(9, 0)), 11);
    }

    #[test]
    fn ranged_change_replaces_the_span() {
        let mut doc = Document::new("hello world\n");
        doc.apply_changes(&[ranged((0, 6), (0, 11), "there")]);
        assert_eq!(doc.text(), "hello there\n");
    }

    #[test]
    fn changes_apply_in_order_against_the_running_buffer() {
        let mut doc = Document::new("abcdef\n");
        // The second change's coordinates are only correct if the first
        // change has already been applied.
        doc.apply_changes(&[ranged((0, 0), (0, 3), "X"), ranged((0, 1), (0, 4), "Y")]);
        assert_eq!(doc.text(), "XY\n");
    }

    #[test]
    fn insertion_uses_an_empty_range() {
        let mut doc = Document::new("ab\ncd\n");
        doc.apply_changes(&[ranged((1, 1), (1, 1), "--")]);
        assert_eq!(doc.text(), "ab\nc--d\n");
    }

    #[test]
    fn deletion_spans_lines() {
        let mut doc = Document::new("one\ntwo\nthree\n");
        doc.apply_changes(&[ranged((0, 3), (2, 0), " ")]);
        assert_eq!(doc.text(), "one three\n");
    }

    #[test]
    fn full_change_replaces_wholesale() {
        let mut doc = Document::new("old stuff");
        doc.apply_changes(&[TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "brand new".to_string(),
        }]);
        assert_eq!(doc.text(), "brand new");
    }

    #[test]
    fn non_ascii_edit_lands_on_utf16_columns() {
        let mut doc = Document::new("héllo wörld\n");
        // Columns count UTF-16 units, so the accented characters are one each.
        doc.apply_changes(&[ranged((0, 6), (0, 11), "earth")]);
        assert_eq!(doc.text(), "héllo earth\n");
    }
}
