//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused
//! components:
//! - `core` - Main Lexer struct, dispatch, and line/column tracking
//! - `literal` - Incremental special-literal matcher
//! - `text` - Identifiable-text, whitespace, and comment recognizers

mod core;
mod literal;
mod text;

pub use core::{tokenize, Lexer};
