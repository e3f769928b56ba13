//! Incremental string-literal recognition.
//!
//! Recognizes JSON-style string literals: `"`-delimited, with the seven
//! single-character escapes (`\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`,
//! `\t`) and `\uXXXX` (case-insensitive hex). A UTF-16 leading
//! surrogate must be followed by a trailing surrogate; the pair may be
//! split across chunks at any point, including inside the hex digits.

use crate::chars::hex_value;
use crate::recognize::RecognizeError;

const LEADING_SURROGATE: std::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const TRAILING_SURROGATE: std::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Decoding state between chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Waiting for the opening quote.
    Open,
    /// Inside the literal body.
    Body,
    /// Just consumed a backslash.
    Escape,
    /// Accumulating the four hex digits of a `\uXXXX` escape.
    Hex,
    /// The closing quote has been consumed.
    Complete,
}

/// An incremental recognizer for one string literal.
#[derive(Debug)]
pub struct StringRecognizer {
    state: State,
    value: String,
    hex: String,
    pending_leading: Option<u32>,
}

impl StringRecognizer {
    /// Creates a recognizer positioned before the opening quote.
    pub fn new() -> Self {
        Self {
            state: State::Open,
            value: String::new(),
            hex: String::with_capacity(4),
            pending_leading: None,
        }
    }

    /// Consumes characters from `chunk` starting at `start`.
    ///
    /// Returns the number of characters consumed. The recognizer is
    /// complete once the closing quote has been consumed; if `is_end`
    /// is true and the literal is still open, recognition fails.
    pub fn recognize(
        &mut self,
        chunk: &[char],
        start: usize,
        is_end: bool,
    ) -> Result<usize, RecognizeError> {
        let mut i = start;

        while i < chunk.len() && self.state != State::Complete {
            let c = chunk[i];
            let column = i + 1;

            match self.state {
                State::Open => {
                    if c != '"' {
                        return Err(RecognizeError::new(
                            format!("Expected opening '\"', found: {}", printable(c)),
                            column,
                        ));
                    }
                    self.state = State::Body;
                    i += 1;
                }
                State::Body => {
                    if self.pending_leading.is_some() && c != '\\' {
                        return Err(RecognizeError::new(
                            format!("Expected trailing surrogate, found: {}", printable(c)),
                            column,
                        ));
                    }
                    if c == '\\' {
                        self.state = State::Escape;
                    } else if c == '"' {
                        self.state = State::Complete;
                    } else if c.is_control() {
                        return Err(RecognizeError::new(
                            "Unescaped control character in string literal",
                            column,
                        ));
                    } else {
                        self.value.push(c);
                    }
                    i += 1;
                }
                State::Escape => {
                    if self.pending_leading.is_some() && c != 'u' {
                        return Err(RecognizeError::new(
                            format!("Expected trailing surrogate, found: \\{}", c),
                            column,
                        ));
                    }
                    match c {
                        '"' | '\\' | '/' => self.value.push(c),
                        'b' => self.value.push('\u{0008}'),
                        'f' => self.value.push('\u{000C}'),
                        'n' => self.value.push('\n'),
                        'r' => self.value.push('\r'),
                        't' => self.value.push('\t'),
                        'u' => {
                            self.hex.clear();
                            self.state = State::Hex;
                            i += 1;
                            continue;
                        }
                        other => {
                            return Err(RecognizeError::new(
                                format!("Unsupported escape sequence: \\{}", other),
                                column,
                            ));
                        }
                    }
                    self.state = State::Body;
                    i += 1;
                }
                State::Hex => {
                    if hex_value(c).is_none() {
                        return Err(RecognizeError::new(
                            format!("Invalid hex digit in escape sequence: {}", printable(c)),
                            column,
                        ));
                    }
                    self.hex.push(c);
                    i += 1;
                    if self.hex.len() == 4 {
                        self.decode_code_unit(column)?;
                        self.state = State::Body;
                    }
                }
                State::Complete => {}
            }
        }

        if is_end && self.state != State::Complete {
            if self.pending_leading.is_some() {
                // The escape that produced the leading surrogate ended
                // at the last consumed character.
                return Err(RecognizeError::new(
                    "Expected trailing surrogate, found: end of input",
                    i,
                ));
            }
            return Err(RecognizeError::new("Unterminated string literal", i + 1));
        }

        Ok(i - start)
    }

    /// Decodes four accumulated hex digits into a code unit, resolving
    /// surrogate pairing.
    fn decode_code_unit(&mut self, column: usize) -> Result<(), RecognizeError> {
        let mut code: u32 = 0;
        for digit in self.hex.chars() {
            // Only hex digits reach the accumulator.
            code = code * 16 + hex_value(digit).unwrap_or(0);
        }

        if let Some(leading) = self.pending_leading.take() {
            if !TRAILING_SURROGATE.contains(&code) {
                return Err(RecognizeError::new(
                    format!("Expected trailing surrogate, found: \\u{}", self.hex),
                    column,
                ));
            }
            let combined =
                0x10000 + ((leading - 0xD800) << 10) + (code - 0xDC00);
            match char::from_u32(combined) {
                Some(decoded) => self.value.push(decoded),
                None => {
                    return Err(RecognizeError::new(
                        format!("Invalid surrogate pair: \\u{}", self.hex),
                        column,
                    ));
                }
            }
            return Ok(());
        }

        if LEADING_SURROGATE.contains(&code) {
            self.pending_leading = Some(code);
            return Ok(());
        }
        if TRAILING_SURROGATE.contains(&code) {
            return Err(RecognizeError::new(
                format!(
                    "Trailing surrogate \\u{} is not preceded by a leading surrogate",
                    self.hex
                ),
                column,
            ));
        }

        match char::from_u32(code) {
            Some(decoded) => self.value.push(decoded),
            None => {
                return Err(RecognizeError::new(
                    format!("Invalid code point: \\u{}", self.hex),
                    column,
                ));
            }
        }
        Ok(())
    }

    /// Returns true once the closing quote has been consumed.
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Returns the decoded string content (valid once complete).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the recognizer, returning the decoded content.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl Default for StringRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn printable(c: char) -> String {
    if c.is_control() {
        format!("\\u{:04X}", c as u32)
    } else {
        c.to_string()
    }
}
