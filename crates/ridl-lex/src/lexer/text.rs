//! Identifiable-text, whitespace, and comment recognizers.
//!
//! These are the lexer's own lightweight recognizers: a run of bare
//! alphanumeric text, a run of whitespace, and a `#` line comment. Each
//! closes either because a delimiting character appears or because the
//! caller signals a line terminator with no remaining input - both must
//! be handled, since a token may legitimately end at a chunk boundary
//! not marked by any special character.

use crate::chars::is_identifiable_continue;

/// A run of bare alphanumeric "identifiable" text.
#[derive(Debug, Default)]
pub(crate) struct TextRecognizer {
    value: String,
}

impl TextRecognizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consumes continuation characters from `chunk` starting at
    /// `start`. Returns `(consumed, complete)`; `complete` is true only
    /// when a delimiting character was seen (the chunk running out is
    /// not a delimiter).
    pub(crate) fn feed(&mut self, chunk: &[char], start: usize) -> (usize, bool) {
        let mut i = start;
        while i < chunk.len() {
            let c = chunk[i];
            if !is_identifiable_continue(c) {
                return (i - start, true);
            }
            self.value.push(c);
            i += 1;
        }
        (i - start, false)
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

/// A run of whitespace characters.
#[derive(Debug, Default)]
pub(crate) struct WhitespaceRecognizer {
    value: String,
}

impl WhitespaceRecognizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn feed(&mut self, chunk: &[char], start: usize) -> (usize, bool) {
        let mut i = start;
        while i < chunk.len() {
            let c = chunk[i];
            if !c.is_whitespace() {
                return (i - start, true);
            }
            self.value.push(c);
            i += 1;
        }
        (i - start, false)
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

/// A `#` line comment. Runs to the end of the logical line, so it only
/// ever closes at a terminator or at end of input.
#[derive(Debug, Default)]
pub(crate) struct CommentRecognizer {
    value: String,
}

impl CommentRecognizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consumes every remaining character of the chunk.
    pub(crate) fn feed(&mut self, chunk: &[char], start: usize) -> usize {
        for c in &chunk[start..] {
            self.value.push(*c);
        }
        chunk.len() - start
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_text_stops_at_delimiter() {
        let mut recognizer = TextRecognizer::new();
        let (consumed, complete) = recognizer.feed(&chars("abc1-rest"), 0);
        assert_eq!(consumed, 4);
        assert!(complete);
        assert_eq!(recognizer.into_value(), "abc1");
    }

    #[test]
    fn test_text_waits_at_chunk_end() {
        let mut recognizer = TextRecognizer::new();
        let (consumed, complete) = recognizer.feed(&chars("abc"), 0);
        assert_eq!(consumed, 3);
        assert!(!complete);
        let (consumed, complete) = recognizer.feed(&chars("de "), 0);
        assert_eq!(consumed, 2);
        assert!(complete);
        assert_eq!(recognizer.into_value(), "abcde");
    }

    #[test]
    fn test_whitespace_run() {
        let mut recognizer = WhitespaceRecognizer::new();
        let (consumed, complete) = recognizer.feed(&chars("  \tx"), 0);
        assert_eq!(consumed, 3);
        assert!(complete);
        assert_eq!(recognizer.into_value(), "  \t");
    }

    #[test]
    fn test_comment_consumes_rest_of_chunk() {
        let mut recognizer = CommentRecognizer::new();
        assert_eq!(recognizer.feed(&chars("# a comment"), 0), 11);
        assert_eq!(recognizer.feed(&chars(" continued"), 0), 10);
        assert_eq!(recognizer.into_value(), "# a comment continued");
    }
}
