//! Character-offset helpers
//!
//! Regex matches report byte offsets, while every window, span and position
//! the extractor exposes is counted in characters.

/// Maps between byte offsets and character positions of one text
pub(crate) struct CharIndex<'a> {
    text: &'a str,
    /// Byte offset of every character, plus `text.len()` as a sentinel
    offsets: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    /// Number of characters in the text
    pub(crate) fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Character position of a byte offset on a char boundary
    pub(crate) fn char_pos(&self, byte: usize) -> usize {
        match self.offsets.binary_search(&byte) {
            Ok(i) | Err(i) => i,
        }
    }

    /// Characters `[start, end)`, clamped to the text
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.char_len());
        let start = start.min(end);
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// Up to `before` characters ahead of a byte range, the range, and up to `after` behind it
    pub(crate) fn window(
        &self,
        byte_start: usize,
        byte_end: usize,
        before: usize,
        after: usize,
    ) -> &'a str {
        let start = self.char_pos(byte_start).saturating_sub(before);
        let end = self.char_pos(byte_end).saturating_add(after);
        self.slice(start, end)
    }

    /// Up to `len` characters starting at a byte offset
    pub(crate) fn following(&self, byte: usize, len: usize) -> &'a str {
        let start = self.char_pos(byte);
        self.slice(start, start.saturating_add(len))
    }
}

/// The first `max_chars` characters of `text`
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
