//! Token type definitions.
//!
//! A token is an immutable pair of semantic value and source location.
//! Tokens are produced once by the lexer and never mutated.

use std::fmt;

use ridl_util::SourceLocation;

/// A fixed-vocabulary operator token.
///
/// The special-literal alphabet is closed: the lexer matches these by
/// longest unambiguous prefix, so `-` and `->` may share input without
/// lookahead beyond the chunk in hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialLiteral {
    /// `:` - namespace part separator
    Colon,
    /// `@` - namespace version marker
    At,
    /// `/` - type name path separator
    Slash,
    /// `~` - restriction introducer
    Tilde,
    /// `*` - possibly-empty list quantifier
    Star,
    /// `+` - non-empty list quantifier
    Plus,
    /// `?` - nullable quantifier
    Question,
    /// `(` - exclusive range delimiter (left)
    LeftParen,
    /// `)` - exclusive range delimiter (right)
    RightParen,
    /// `[` - inclusive range delimiter (left)
    LeftBracket,
    /// `]` - inclusive range delimiter (right)
    RightBracket,
    /// `,` - range bound separator
    Comma,
    /// `.` - member / object path separator
    Dot,
    /// `-` - identifier separator, numeric negation
    Hyphen,
    /// `_` - identifier separator
    Underscore,
    /// `->` - operation result marker
    Arrow,
}

impl SpecialLiteral {
    /// Every literal in the operator alphabet.
    pub const ALL: [SpecialLiteral; 16] = [
        SpecialLiteral::Colon,
        SpecialLiteral::At,
        SpecialLiteral::Slash,
        SpecialLiteral::Tilde,
        SpecialLiteral::Star,
        SpecialLiteral::Plus,
        SpecialLiteral::Question,
        SpecialLiteral::LeftParen,
        SpecialLiteral::RightParen,
        SpecialLiteral::LeftBracket,
        SpecialLiteral::RightBracket,
        SpecialLiteral::Comma,
        SpecialLiteral::Dot,
        SpecialLiteral::Hyphen,
        SpecialLiteral::Underscore,
        SpecialLiteral::Arrow,
    ];

    /// Returns the literal's spelling in source text.
    pub fn text(self) -> &'static str {
        match self {
            SpecialLiteral::Colon => ":",
            SpecialLiteral::At => "@",
            SpecialLiteral::Slash => "/",
            SpecialLiteral::Tilde => "~",
            SpecialLiteral::Star => "*",
            SpecialLiteral::Plus => "+",
            SpecialLiteral::Question => "?",
            SpecialLiteral::LeftParen => "(",
            SpecialLiteral::RightParen => ")",
            SpecialLiteral::LeftBracket => "[",
            SpecialLiteral::RightBracket => "]",
            SpecialLiteral::Comma => ",",
            SpecialLiteral::Dot => ".",
            SpecialLiteral::Hyphen => "-",
            SpecialLiteral::Underscore => "_",
            SpecialLiteral::Arrow => "->",
        }
    }

    /// Returns true if some literal's spelling starts with `c`.
    pub fn starts_any(c: char) -> bool {
        Self::ALL
            .iter()
            .any(|lit| lit.text().starts_with(c))
    }
}

impl fmt::Display for SpecialLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The semantic value of a token.
///
/// Literal numbers and strings arrive already converted to their
/// semantic type; text-family tokens carry the exact source fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// A run of bare alphanumeric "identifiable" text.
    Text(String),
    /// A run of whitespace.
    Whitespace(String),
    /// A `#` line comment (marker included, terminator excluded).
    Comment(String),
    /// A special-literal operator.
    Literal(SpecialLiteral),
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Float(f64),
    /// A string literal, escapes already decoded.
    Str(String),
}

impl TokenValue {
    /// Returns a short name for the token family, used in
    /// "Expected ... but got ..." messages.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenValue::Text(_) => "text",
            TokenValue::Whitespace(_) => "whitespace",
            TokenValue::Comment(_) => "comment",
            TokenValue::Literal(_) => "literal",
            TokenValue::Integer(_) => "integer",
            TokenValue::Float(_) => "double",
            TokenValue::Str(_) => "string",
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(text) => f.write_str(text),
            TokenValue::Whitespace(text) => f.write_str(text),
            TokenValue::Comment(text) => f.write_str(text),
            TokenValue::Literal(lit) => write!(f, "'{}'", lit),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
            TokenValue::Str(text) => write!(f, "\"{}\"", text),
        }
    }
}

/// A classified, source-located fragment of input.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    value: TokenValue,
    location: SourceLocation,
}

impl Token {
    /// Creates a token at the location where it began.
    pub fn new(value: TokenValue, location: SourceLocation) -> Self {
        Self { value, location }
    }

    /// Returns the semantic value.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Returns the location where the token began.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Consumes the token, returning its value.
    pub fn into_value(self) -> TokenValue {
        self.value
    }
}
