//! Editor collaborator and an in-memory text buffer implementing it.
//!
//! The linker only needs selection and insertion primitives, so any host
//! editor can drive it by implementing [`Editor`].

/// A position in the document (0-indexed line, character column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: usize,
    /// Character offset within the line (0-indexed).
    pub ch: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Trait for the editing operations the linker needs.
pub trait Editor {
    /// Currently selected text (empty when nothing is selected).
    fn selection(&self) -> String;

    /// Replace the selection with `text`, leaving the cursor after it.
    fn replace_selection(&mut self, text: &str);

    /// Current cursor position.
    fn cursor(&self) -> Position;

    /// Insert `text` at `pos`.
    fn replace_range(&mut self, text: &str, pos: Position);
}

/// Selection range in the buffer, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: usize,
    /// Where the selection ends; this is the cursor.
    pub head: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed selection (just a cursor).
    #[must_use]
    pub const fn cursor(offset: usize) -> Self {
        Self { anchor: offset, head: offset }
    }

    /// Normalize the selection so start comes before end.
    #[must_use]
    pub const fn normalized(&self) -> Self {
        if self.anchor > self.head {
            Self { anchor: self.head, head: self.anchor }
        } else {
            *self
        }
    }
}

/// Plain in-memory document used by the command line and tests.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    selection: Selection,
}

impl Default for Selection {
    fn default() -> Self {
        Self::cursor(0)
    }
}

impl TextBuffer {
    /// Create a buffer with the cursor at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self { text, selection: Selection::cursor(end) }
    }

    /// Create a buffer with all of `text` selected.
    pub fn with_all_selected(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self { text, selection: Selection::new(0, end) }
    }

    /// Select a byte range, clamped to the buffer and snapped to char boundaries.
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(self.clamp(anchor), self.clamp(head));
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection.
    pub const fn current_selection(&self) -> Selection {
        self.selection
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn position_of(&self, offset: usize) -> Position {
        let before = &self.text[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Position::new(line, before[line_start..].chars().count())
    }

    fn offset_of(&self, pos: Position) -> usize {
        let mut line_start = 0;
        for _ in 0..pos.line {
            match self.text[line_start..].find('\n') {
                Some(i) => line_start += i + 1,
                None => return self.text.len(),
            }
        }
        let line_end = self.text[line_start..].find('\n').map_or(self.text.len(), |i| line_start + i);
        self.text[line_start..line_end]
            .char_indices()
            .nth(pos.ch)
            .map_or(line_end, |(i, _)| line_start + i)
    }
}

impl Editor for TextBuffer {
    fn selection(&self) -> String {
        let sel = self.selection.normalized();
        self.text[sel.anchor..sel.head].to_string()
    }

    fn replace_selection(&mut self, text: &str) {
        let sel = self.selection.normalized();
        self.text.replace_range(sel.anchor..sel.head, text);
        self.selection = Selection::cursor(sel.anchor + text.len());
    }

    fn cursor(&self) -> Position {
        self.position_of(self.selection.head)
    }

    fn replace_range(&mut self, text: &str, pos: Position) {
        let offset = self.offset_of(pos);
        self.text.insert_str(offset, text);
        // Shift the selection only when the insertion lands strictly before it
        let shift = |o: usize| if o > offset { o + text.len() } else { o };
        self.selection = Selection::new(shift(self.selection.anchor), shift(self.selection.head));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_selection_normalized() {
        let sel = Selection::new(5, 10);
        assert_eq!(sel.normalized(), sel);

        let sel = Selection::new(10, 5).normalized();
        assert_eq!(sel.anchor, 5);
        assert_eq!(sel.head, 10);
    }

    #[test]
    fn test_replace_selection_moves_cursor_after_text() {
        let mut buf = TextBuffer::new("Read John 3:16 today");
        buf.select(5, 14);
        assert_eq!(buf.selection(), "John 3:16");

        buf.replace_selection("[John 3:16](url)");
        assert_eq!(buf.text(), "Read [John 3:16](url) today");
        assert_eq!(buf.cursor(), Position::new(0, 21));
        assert_eq!(buf.selection(), "");
    }

    #[test]
    fn test_backwards_selection() {
        let mut buf = TextBuffer::new("abc John 3:16");
        buf.select(13, 4);
        assert_eq!(buf.selection(), "John 3:16");
    }

    #[test]
    fn test_cursor_position_across_lines() {
        let mut buf = TextBuffer::new("first\nsecond line\nthird");
        buf.select(13, 13);
        assert_eq!(buf.cursor(), Position::new(1, 7));
    }

    #[test]
    fn test_replace_range_at_cursor() {
        let mut buf = TextBuffer::new("line one\nline two");
        buf.select(8, 8);
        let cursor = buf.cursor();
        buf.replace_range("\n> quote", cursor);
        assert_eq!(buf.text(), "line one\n> quote\nline two");
        assert_eq!(buf.cursor(), cursor);
    }

    #[test]
    fn test_replace_range_clamps_past_end() {
        let mut buf = TextBuffer::new("short");
        buf.replace_range("!", Position::new(3, 40));
        assert_eq!(buf.text(), "short!");

        buf.replace_range("?", Position::new(0, 40));
        assert_eq!(buf.text(), "short!?");
    }

    #[test]
    fn test_multibyte_positions() {
        let mut buf = TextBuffer::new("¹⁶ λογος");
        assert_eq!(buf.cursor(), Position::new(0, 8));
        buf.replace_range("|", Position::new(0, 3));
        assert_eq!(buf.text(), "¹⁶ |λογος");
        // Mid-character offsets snap back to a boundary
        buf.select(1, 1);
        assert_eq!(buf.current_selection(), Selection::cursor(0));
    }
}
