//! Source location tracking.
//!
//! Every token the lexer emits and every error either layer reports
//! carries a [`SourceLocation`]: the input name plus 1-based line and
//! column numbers.

use std::fmt;
use std::sync::Arc;

/// A location inside a named input.
///
/// Locations advance monotonically as the lexer consumes input; the
/// column resets to 1 when the caller signals a line terminator. The
/// input name is shared (`Arc<str>`), so cloning a location is cheap
/// even though every token carries one.
///
/// # Example
///
/// ```
/// use ridl_util::SourceLocation;
///
/// let loc = SourceLocation::new("model.ridl", 3, 14);
/// assert_eq!(loc.to_string(), "model.ridl:3:14");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Name of the input (file name, or a label for in-memory input).
    source: Arc<str>,

    /// Line number (1-based).
    line: u32,

    /// Column number (1-based, in characters).
    column: u32,
}

impl SourceLocation {
    /// Creates a location at the given line and column.
    pub fn new(source: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            source: source.into(),
            line,
            column,
        }
    }

    /// Creates a location at the start of the named input.
    pub fn start(source: impl Into<Arc<str>>) -> Self {
        Self::new(source, 1, 1)
    }

    /// Returns the input name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns a location in the same input at the given line/column.
    pub fn at(&self, line: u32, column: u32) -> Self {
        Self {
            source: Arc::clone(&self.source),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let loc = SourceLocation::new("input", 2, 7);
        assert_eq!(loc.to_string(), "input:2:7");
    }

    #[test]
    fn test_start() {
        let loc = SourceLocation::start("input");
        assert_eq!(loc.line(), 1);
        assert_eq!(loc.column(), 1);
    }

    #[test]
    fn test_at_keeps_source() {
        let loc = SourceLocation::start("input");
        let moved = loc.at(4, 9);
        assert_eq!(moved.source(), "input");
        assert_eq!(moved.line(), 4);
        assert_eq!(moved.column(), 9);
    }

    #[test]
    fn test_equality() {
        let a = SourceLocation::new("input", 1, 5);
        let b = SourceLocation::new("input", 1, 5);
        let c = SourceLocation::new("other", 1, 5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
