//! ridl-lex - Incremental Lexical Analyzer for the RIDL Interface
//! Description Language
//!
//! This crate tokenizes RIDL source text. Its defining property is
//! incrementality: input arrives in arbitrary, caller-chosen chunks
//! (single characters up to whole files) and the lexer produces exactly
//! the same token stream regardless of where chunk boundaries fall,
//! including boundaries that split a string escape sequence, a
//! multi-digit number, or a surrogate pair.
//!
//! # Example Usage
//!
//! ```
//! use ridl_lex::{tokenize, TokenValue};
//!
//! let tokens = tokenize("foo:bar@v1/Baz", "input").unwrap();
//! assert_eq!(tokens[0].value(), &TokenValue::Text("foo".to_string()));
//! ```
//!
//! Streaming use feeds chunks one at a time:
//!
//! ```
//! use ridl_lex::{Lexer, Token};
//!
//! let mut tokens: Vec<Token> = Vec::new();
//! let mut lexer = Lexer::new("input", |token| tokens.push(token));
//! lexer.update("foo:b", false).unwrap();
//! lexer.update("ar@v1", false).unwrap();
//! lexer.finish().unwrap();
//! drop(lexer);
//! assert_eq!(tokens.len(), 5);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and special-literal definitions
//! - [`recognize`] - Incremental string/number recognizers
//! - [`lexer`] - The chunk-fed lexer
//! - [`chars`] - Character classification helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod lexer;
pub mod recognize;
pub mod token;

// Re-export main types for convenience
pub use lexer::{tokenize, Lexer};
pub use recognize::{
    NumberOptions, NumberRecognizer, NumberValue, RecognizeError, StringRecognizer,
};
pub use token::{SpecialLiteral, Token, TokenValue};
