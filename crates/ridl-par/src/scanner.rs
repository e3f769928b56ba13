//! Token-queue reader used by the grammar productions.
//!
//! A [`Scanner`] owns a queue of tokens produced by `ridl-lex` and
//! exposes the small set of primitives the recursive-descent grammar
//! is written against: peek, remove, expect-by-kind, and
//! consume-if-match polling. Every failing primitive reports a
//! [`SyntaxError`] anchored at the offending token, or at the last
//! consumed token when the queue ran out.

use std::collections::VecDeque;

use ridl_lex::{SpecialLiteral, Token, TokenValue};
use ridl_util::error::SyntaxError;
use ridl_util::location::SourceLocation;

/// A reader over a queue of tokens.
///
/// The scanner never reorders or re-lexes; it only consumes from the
/// front. Whitespace and comment tokens stay in the queue and are
/// skipped explicitly where the grammar tolerates them.
#[derive(Debug)]
pub struct Scanner {
    queue: VecDeque<Token>,
    last_location: SourceLocation,
}

impl Scanner {
    /// Creates a scanner over the given tokens.
    pub fn new(tokens: Vec<Token>) -> Self {
        let last_location = tokens
            .first()
            .map(|token| token.location().clone())
            .unwrap_or_else(|| SourceLocation::start("input"));
        Self {
            queue: tokens.into(),
            last_location,
        }
    }

    /// Returns whether the queue is exhausted.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the head token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.queue.front()
    }

    /// Returns the location parsing is currently at: the head token's
    /// location, or the last consumed token's when the queue is empty.
    pub fn location(&self) -> SourceLocation {
        self.queue
            .front()
            .map(|token| token.location().clone())
            .unwrap_or_else(|| self.last_location.clone())
    }

    /// Fails with "Unexpected end of input" if the queue is empty.
    pub fn ensure_not_empty(&self) -> Result<(), SyntaxError> {
        if self.queue.is_empty() {
            Err(SyntaxError::new(
                "Unexpected end of input".to_string(),
                self.last_location.clone(),
            ))
        } else {
            Ok(())
        }
    }

    /// Removes and returns the head token.
    ///
    /// # Errors
    ///
    /// Fails with "Unexpected end of input" on an empty queue.
    pub fn remove(&mut self) -> Result<Token, SyntaxError> {
        self.ensure_not_empty()?;
        let token = self.queue.pop_front().ok_or_else(|| {
            SyntaxError::new(
                "Unexpected end of input".to_string(),
                self.last_location.clone(),
            )
        })?;
        self.last_location = token.location().clone();
        Ok(token)
    }

    /// Removes the head token, which must be identifiable text.
    ///
    /// # Returns
    ///
    /// The text and its location.
    pub fn expect_text(&mut self) -> Result<(String, SourceLocation), SyntaxError> {
        let token = self.remove()?;
        let location = token.location().clone();
        match token.into_value() {
            TokenValue::Text(text) => Ok((text, location)),
            other => Err(Self::mismatch("text", &other, location)),
        }
    }

    /// Removes the head token, which must be a string literal.
    pub fn expect_string(&mut self) -> Result<(String, SourceLocation), SyntaxError> {
        let token = self.remove()?;
        let location = token.location().clone();
        match token.into_value() {
            TokenValue::Str(text) => Ok((text, location)),
            other => Err(Self::mismatch("string", &other, location)),
        }
    }

    /// Removes the head token, which must be the given special literal.
    ///
    /// # Returns
    ///
    /// The literal's location.
    pub fn expect_literal(
        &mut self,
        literal: SpecialLiteral,
    ) -> Result<SourceLocation, SyntaxError> {
        let token = self.remove()?;
        let location = token.location().clone();
        match token.value() {
            TokenValue::Literal(found) if *found == literal => Ok(location),
            other => Err(Self::mismatch(
                &format!("literal '{}'", literal.text()),
                other,
                location,
            )),
        }
    }

    /// Consumes the head token if it is the given special literal.
    ///
    /// # Returns
    ///
    /// The literal's location when it matched, `None` otherwise.
    pub fn poll_literal(&mut self, literal: SpecialLiteral) -> Option<SourceLocation> {
        if self.peek_literal(literal) {
            let token = self.queue.pop_front()?;
            self.last_location = token.location().clone();
            Some(self.last_location.clone())
        } else {
            None
        }
    }

    /// Returns whether the head token is the given special literal,
    /// without consuming it.
    pub fn peek_literal(&self, literal: SpecialLiteral) -> bool {
        matches!(
            self.queue.front().map(Token::value),
            Some(TokenValue::Literal(found)) if *found == literal
        )
    }

    /// Consumes any run of whitespace and comment tokens at the head
    /// of the queue.
    pub fn poll_trivia(&mut self) {
        while matches!(
            self.queue.front().map(Token::value),
            Some(TokenValue::Whitespace(_)) | Some(TokenValue::Comment(_))
        ) {
            if let Some(token) = self.queue.pop_front() {
                self.last_location = token.location().clone();
            }
        }
    }

    fn mismatch(expected: &str, found: &TokenValue, location: SourceLocation) -> SyntaxError {
        SyntaxError::new(
            format!("Expected {expected} but got {}", Self::describe(found)),
            location,
        )
    }

    fn describe(value: &TokenValue) -> String {
        match value {
            TokenValue::Literal(literal) => format!("literal '{}'", literal.text()),
            other => other.kind().to_string(),
        }
    }
}
