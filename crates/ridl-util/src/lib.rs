//! ridl-util - Foundation Types for the RIDL Front End
//!
//! This crate provides the small set of types shared by the lexer and
//! parser crates: source locations, the common syntax error type, and
//! precondition helpers for builder validation.
//!
//! # Module Structure
//!
//! - [`location`] - Source location tracking
//! - [`error`] - Error types
//! - [`check`] - Precondition helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod check;
pub mod error;
pub mod location;

// Re-export main types for convenience
pub use check::{require, required};
pub use error::{BuildError, SyntaxError};
pub use location::SourceLocation;
