//! Incremental special-literal matching.
//!
//! Longest-unambiguous-prefix match against the fixed operator
//! alphabet. At each character the matcher narrows the surviving
//! candidate set among all literals sharing the matched prefix; a
//! literal is emitted as soon as no longer candidate survives, so `:`
//! completes immediately while `-` waits to see whether `->` follows.

use crate::token::SpecialLiteral;

/// Result of feeding one character to the matcher.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LiteralStep {
    /// More than one candidate survives; feed another character.
    Pending,
    /// Exactly one literal matched.
    Complete {
        /// The matched literal.
        literal: SpecialLiteral,
        /// Whether the character just fed is part of the match. When
        /// false the caller must re-classify that character.
        consumed: bool,
    },
}

/// Incremental matcher state: the prefix matched so far.
#[derive(Debug, Default)]
pub(crate) struct LiteralMatcher {
    matched: String,
}

impl LiteralMatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feeds one character, narrowing the candidate set.
    pub(crate) fn step(&mut self, c: char) -> Result<LiteralStep, String> {
        let mut extended = self.matched.clone();
        extended.push(c);

        let candidates: Vec<SpecialLiteral> = SpecialLiteral::ALL
            .iter()
            .copied()
            .filter(|lit| lit.text().starts_with(&extended))
            .collect();

        if candidates.is_empty() {
            // The new character does not extend any literal; fall back
            // to the longest full match already in hand.
            let literal = self.resolve()?;
            return Ok(LiteralStep::Complete {
                literal,
                consumed: false,
            });
        }

        self.matched = extended;

        let can_grow = candidates
            .iter()
            .any(|lit| lit.text().len() > self.matched.len());
        if can_grow {
            return Ok(LiteralStep::Pending);
        }

        let literal = self.resolve()?;
        Ok(LiteralStep::Complete {
            literal,
            consumed: true,
        })
    }

    /// Resolves the matched prefix at end of line or input.
    pub(crate) fn finalize(&self) -> Result<SpecialLiteral, String> {
        self.resolve()
    }

    /// Finds the literal whose spelling equals the matched prefix.
    fn resolve(&self) -> Result<SpecialLiteral, String> {
        let full: Vec<SpecialLiteral> = SpecialLiteral::ALL
            .iter()
            .copied()
            .filter(|lit| lit.text() == self.matched)
            .collect();

        match full.len() {
            1 => Ok(full[0]),
            0 => Err(format!("Unrecognized literal '{}'", self.matched)),
            _ => Err(format!("Ambiguous literal '{}'", self.matched)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_literal_completes_immediately() {
        let mut matcher = LiteralMatcher::new();
        assert_eq!(
            matcher.step(':').unwrap(),
            LiteralStep::Complete {
                literal: SpecialLiteral::Colon,
                consumed: true,
            }
        );
    }

    #[test]
    fn test_hyphen_waits_for_arrow() {
        let mut matcher = LiteralMatcher::new();
        assert_eq!(matcher.step('-').unwrap(), LiteralStep::Pending);
        assert_eq!(
            matcher.step('>').unwrap(),
            LiteralStep::Complete {
                literal: SpecialLiteral::Arrow,
                consumed: true,
            }
        );
    }

    #[test]
    fn test_hyphen_falls_back_on_non_arrow() {
        let mut matcher = LiteralMatcher::new();
        assert_eq!(matcher.step('-').unwrap(), LiteralStep::Pending);
        assert_eq!(
            matcher.step('x').unwrap(),
            LiteralStep::Complete {
                literal: SpecialLiteral::Hyphen,
                consumed: false,
            }
        );
    }

    #[test]
    fn test_hyphen_finalizes_at_end() {
        let mut matcher = LiteralMatcher::new();
        assert_eq!(matcher.step('-').unwrap(), LiteralStep::Pending);
        assert_eq!(matcher.finalize().unwrap(), SpecialLiteral::Hyphen);
    }
}
