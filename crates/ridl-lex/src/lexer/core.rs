//! Core lexer implementation.
//!
//! The lexer owns a single "current recognizer" slot. On each `update`
//! call it walks the chunk: with no recognizer active it classifies the
//! next character into a token family and installs the matching
//! recognizer; the recognizer then consumes characters until it
//! completes (flush to sink, reset) or the chunk runs out (state is
//! kept for the next call). The slot is replaced, never mutated in
//! place, on each transition.

use std::sync::Arc;

use ridl_util::{SourceLocation, SyntaxError};

use crate::chars::is_identifiable_start;
use crate::lexer::literal::{LiteralMatcher, LiteralStep};
use crate::lexer::text::{CommentRecognizer, TextRecognizer, WhitespaceRecognizer};
use crate::recognize::{NumberRecognizer, NumberValue, RecognizeError, StringRecognizer};
use crate::token::{SpecialLiteral, Token, TokenValue};

/// The recognizer currently in progress, one variant per token family.
enum Active {
    Number(NumberRecognizer),
    Str(StringRecognizer),
    Text(TextRecognizer),
    Whitespace(WhitespaceRecognizer),
    Comment(CommentRecognizer),
    Literal(LiteralMatcher),
}

/// An incremental lexer for RIDL source text.
///
/// Input is pushed in arbitrary chunks via [`Lexer::update`]; completed
/// tokens are delivered to the caller-supplied sink within the same
/// call stack. The token stream is identical for every partitioning of
/// the same input, down to one-character chunks.
pub struct Lexer<F: FnMut(Token)> {
    /// Token sink, invoked once per completed token.
    sink: F,

    /// Name of the input, stamped into every location.
    source: Arc<str>,

    /// Current line (1-based); advances only on a terminator signal.
    line: u32,

    /// Current column (1-based, in characters).
    column: u32,

    /// Location where the in-progress token began.
    token_start: SourceLocation,

    /// The current recognizer, if a token is in progress.
    active: Option<Active>,
}

impl<F: FnMut(Token)> Lexer<F> {
    /// Creates a lexer for the named input.
    pub fn new(source: impl Into<Arc<str>>, sink: F) -> Self {
        let source = source.into();
        let token_start = SourceLocation::start(Arc::clone(&source));
        Self {
            sink,
            source,
            line: 1,
            column: 1,
            token_start,
            active: None,
        }
    }

    /// Feeds one chunk of input.
    ///
    /// `has_terminator` marks the end of a logical line: it closes any
    /// token that may end at a line boundary, advances the line
    /// counter, and resets the column to 1. The chunk may be any size,
    /// including empty; chunk boundaries never affect the token stream.
    pub fn update(&mut self, chunk: &str, has_terminator: bool) -> Result<(), SyntaxError> {
        let chars: Vec<char> = chunk.chars().collect();
        let chunk_start_column = self.column;
        let mut i = 0;

        while i < chars.len() {
            if self.active.is_none() {
                self.token_start = self.here();
                self.active = Some(self.classify(chars[i])?);
            }

            // Replace the slot on every transition rather than
            // mutating it in place.
            let active = match self.active.take() {
                Some(active) => active,
                None => break,
            };

            match active {
                Active::Number(mut recognizer) => {
                    let consumed = recognizer
                        .recognize(&chars, i, false)
                        .map_err(|e| self.chunk_error(e, chunk_start_column))?;
                    i += consumed;
                    self.column += consumed as u32;
                    if recognizer.is_complete() {
                        self.emit_number(&recognizer, chunk_start_column, i)?;
                    } else {
                        self.active = Some(Active::Number(recognizer));
                    }
                }
                Active::Str(mut recognizer) => {
                    let consumed = recognizer
                        .recognize(&chars, i, false)
                        .map_err(|e| self.chunk_error(e, chunk_start_column))?;
                    i += consumed;
                    self.column += consumed as u32;
                    if recognizer.is_complete() {
                        self.emit(TokenValue::Str(recognizer.into_value()));
                    } else {
                        self.active = Some(Active::Str(recognizer));
                    }
                }
                Active::Text(mut recognizer) => {
                    let (consumed, complete) = recognizer.feed(&chars, i);
                    i += consumed;
                    self.column += consumed as u32;
                    if complete {
                        self.emit(TokenValue::Text(recognizer.into_value()));
                    } else {
                        self.active = Some(Active::Text(recognizer));
                    }
                }
                Active::Whitespace(mut recognizer) => {
                    let (consumed, complete) = recognizer.feed(&chars, i);
                    i += consumed;
                    self.column += consumed as u32;
                    if complete {
                        self.emit(TokenValue::Whitespace(recognizer.into_value()));
                    } else {
                        self.active = Some(Active::Whitespace(recognizer));
                    }
                }
                Active::Comment(mut recognizer) => {
                    let consumed = recognizer.feed(&chars, i);
                    i += consumed;
                    self.column += consumed as u32;
                    self.active = Some(Active::Comment(recognizer));
                }
                Active::Literal(mut matcher) => {
                    let mut matched = None;
                    while i < chars.len() {
                        let step = matcher.step(chars[i]).map_err(|message| {
                            SyntaxError::new(
                                message,
                                self.token_start.clone(),
                            )
                        })?;
                        match step {
                            LiteralStep::Pending => {
                                i += 1;
                                self.column += 1;
                            }
                            LiteralStep::Complete { literal, consumed } => {
                                if consumed {
                                    i += 1;
                                    self.column += 1;
                                }
                                matched = Some(literal);
                                break;
                            }
                        }
                    }
                    match matched {
                        Some(literal) => self.emit(TokenValue::Literal(literal)),
                        None => self.active = Some(Active::Literal(matcher)),
                    }
                }
            }
        }

        if has_terminator {
            self.flush()?;
            self.line += 1;
            self.column = 1;
        }

        Ok(())
    }

    /// Signals end of input, closing any token still in progress.
    pub fn finish(&mut self) -> Result<(), SyntaxError> {
        self.flush()
    }

    /// Closes the in-progress token at a line terminator or at end of
    /// input. Text, whitespace, comment, and number tokens may
    /// legitimately end here; an open string literal may not.
    fn flush(&mut self) -> Result<(), SyntaxError> {
        match self.active.take() {
            None => Ok(()),
            Some(Active::Text(recognizer)) => {
                self.emit(TokenValue::Text(recognizer.into_value()));
                Ok(())
            }
            Some(Active::Whitespace(recognizer)) => {
                self.emit(TokenValue::Whitespace(recognizer.into_value()));
                Ok(())
            }
            Some(Active::Comment(recognizer)) => {
                self.emit(TokenValue::Comment(recognizer.into_value()));
                Ok(())
            }
            Some(Active::Number(mut recognizer)) => {
                recognizer
                    .recognize(&[], 0, true)
                    .map_err(|e| self.chunk_error(e, self.column))?;
                self.emit_number(&recognizer, self.column, 0)
            }
            Some(Active::Str(_)) => Err(SyntaxError::new(
                "Unterminated string literal",
                self.here(),
            )),
            Some(Active::Literal(matcher)) => {
                let literal = matcher
                    .finalize()
                    .map_err(|message| SyntaxError::new(message, self.token_start.clone()))?;
                self.emit(TokenValue::Literal(literal));
                Ok(())
            }
        }
    }

    /// Classifies the first character of a not-yet-started token.
    fn classify(&self, c: char) -> Result<Active, SyntaxError> {
        if c.is_ascii_digit() {
            Ok(Active::Number(NumberRecognizer::new()))
        } else if is_identifiable_start(c) {
            Ok(Active::Text(TextRecognizer::new()))
        } else if c.is_whitespace() {
            Ok(Active::Whitespace(WhitespaceRecognizer::new()))
        } else if c == '#' {
            Ok(Active::Comment(CommentRecognizer::new()))
        } else if c == '"' {
            Ok(Active::Str(StringRecognizer::new()))
        } else if SpecialLiteral::starts_any(c) {
            Ok(Active::Literal(LiteralMatcher::new()))
        } else {
            Err(SyntaxError::new(
                format!("Unexpected token start: '{}'", c),
                self.here(),
            ))
        }
    }

    /// Emits a completed number token.
    fn emit_number(
        &mut self,
        recognizer: &NumberRecognizer,
        chunk_start_column: u32,
        position: usize,
    ) -> Result<(), SyntaxError> {
        let value = match recognizer.value() {
            Some(NumberValue::Integer(v)) => TokenValue::Integer(v),
            Some(NumberValue::Float(v)) => TokenValue::Float(v),
            // A complete recognizer always carries a value.
            None => {
                return Err(self.chunk_error(
                    RecognizeError::new("Number literal not recognized", position + 1),
                    chunk_start_column,
                ));
            }
        };
        self.emit(value);
        Ok(())
    }

    /// Sends a completed token to the sink, stamped with the position
    /// where it began.
    fn emit(&mut self, value: TokenValue) {
        let token = Token::new(value, self.token_start.clone());
        (self.sink)(token);
    }

    /// The current position.
    fn here(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.source), self.line, self.column)
    }

    /// Converts a chunk-local recognizer error into an absolute one.
    fn chunk_error(&self, error: RecognizeError, chunk_start_column: u32) -> SyntaxError {
        let column = chunk_start_column + error.column as u32 - 1;
        SyntaxError::new(
            error.message,
            SourceLocation::new(Arc::clone(&self.source), self.line, column),
        )
    }
}

/// Tokenizes a whole string, feeding the lexer line by line.
pub fn tokenize(source: &str, name: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    {
        let mut lexer = Lexer::new(name, |token| tokens.push(token));
        let mut lines = source.split('\n').peekable();
        while let Some(line) = lines.next() {
            lexer.update(line, lines.peek().is_some())?;
        }
        lexer.finish()?;
    }
    Ok(tokens)
}
