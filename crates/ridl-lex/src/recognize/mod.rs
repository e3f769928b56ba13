//! Incremental recognizers for string and number literals.
//!
//! A recognizer is a resumable state machine for a single token. It
//! consumes one chunk of text at a time via
//! `recognize(chunk, start, is_end)` and reports how many characters it
//! consumed. Internal state (partially-built output, escape-decoding
//! mode, pending surrogate, sign and digit flags) persists across
//! calls, so a token may be split arbitrarily across chunks - down to
//! one character per call - without the caller ever buffering the whole
//! token.
//!
//! `is_end` means end of *input*, not end of token: when it is false
//! and the chunk runs out mid-token, the recognizer simply waits for
//! the next chunk. Recognizers never look ahead past what they are
//! given.

mod number;
mod string;

pub use number::{NumberOptions, NumberRecognizer, NumberValue};
pub use string::StringRecognizer;

/// A recognizer failure: a message plus a column local to the chunk
/// that was being consumed when recognition failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizeError {
    /// What could not be recognized.
    pub message: String,

    /// 1-based column within the current chunk of the first character
    /// that could not be validly consumed.
    pub column: usize,
}

impl RecognizeError {
    pub(crate) fn new(message: impl Into<String>, column: usize) -> Self {
        Self {
            message: message.into(),
            column,
        }
    }
}
