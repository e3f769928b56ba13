//! Incremental number-literal recognition.
//!
//! Recognizes JSON-style numbers: optional leading `-`, an integer
//! part, an optional fractional part, and an optional exponent. The
//! recognizer stops cleanly at a delimiter without consuming it, so the
//! caller learns how much of the chunk remains.

use rustc_hash::FxHashSet;

use crate::recognize::RecognizeError;

/// Per-invocation options for number recognition.
#[derive(Clone, Debug, Default)]
pub struct NumberOptions {
    /// Permit leading zeroes in a multi-digit integer part.
    pub allow_leading_zeroes: bool,

    /// Characters that terminate the number. When `None` (the
    /// default), any character that cannot extend the number - any
    /// non-digit other than `.`, `e`, or `E` in positions where those
    /// continue the literal - terminates it.
    pub delimiters: Option<FxHashSet<char>>,
}

/// The semantic value of a completed number literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberValue {
    /// No fractional part and no exponent.
    Integer(i64),
    /// Fractional part or exponent present.
    Float(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet.
    Start,
    /// Sign consumed, first integer digit still required.
    IntegerStart,
    /// Inside the integer part.
    Integer,
    /// `.` consumed, first fraction digit still required.
    FractionStart,
    /// Inside the fractional part.
    Fraction,
    /// `e`/`E` consumed, sign or first digit still required.
    ExponentStart,
    /// Exponent sign consumed, first digit still required.
    ExponentSign,
    /// Inside the exponent digits.
    Exponent,
    /// Terminated by a delimiter or end of input.
    Complete,
}

/// An incremental recognizer for one number literal.
#[derive(Debug)]
pub struct NumberRecognizer {
    options: NumberOptions,
    state: State,
    negative: bool,
    integer: String,
    fraction: String,
    exponent: String,
    exponent_negative: bool,
    value: Option<NumberValue>,
}

impl NumberRecognizer {
    /// Creates a recognizer with default options.
    pub fn new() -> Self {
        Self::with_options(NumberOptions::default())
    }

    /// Creates a recognizer with the given options.
    pub fn with_options(options: NumberOptions) -> Self {
        Self {
            options,
            state: State::Start,
            negative: false,
            integer: String::new(),
            fraction: String::new(),
            exponent: String::new(),
            exponent_negative: false,
            value: None,
        }
    }

    /// Consumes characters from `chunk` starting at `start`.
    ///
    /// Returns the number of characters consumed. A delimiter is never
    /// consumed; the unconsumed tail is `chunk.len() - start` minus the
    /// returned count. When `is_end` is false and the chunk runs out
    /// mid-token, the recognizer waits for the next chunk.
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
                State::Start => {
                    if c == '-' {
                        self.negative = true;
                        self.state = State::IntegerStart;
                    } else if c.is_ascii_digit() {
                        self.integer.push(c);
                        self.state = State::Integer;
                    } else {
                        return Err(RecognizeError::new(
                            "Expected digit in integer part",
                            column,
                        ));
                    }
                    i += 1;
                }
                State::IntegerStart => {
                    if !c.is_ascii_digit() {
                        return Err(RecognizeError::new(
                            "Expected digit in integer part",
                            column,
                        ));
                    }
                    self.integer.push(c);
                    self.state = State::Integer;
                    i += 1;
                }
                State::Integer => {
                    if c.is_ascii_digit() {
                        if self.integer == "0" && !self.options.allow_leading_zeroes {
                            return Err(RecognizeError::new(
                                "Illegal leading zero(es) in integer part",
                                column,
                            ));
                        }
                        self.integer.push(c);
                        i += 1;
                    } else if c == '.' {
                        self.state = State::FractionStart;
                        i += 1;
                    } else if c == 'e' || c == 'E' {
                        self.state = State::ExponentStart;
                        i += 1;
                    } else if self.is_delimiter(c) {
                        self.complete(column)?;
                    } else {
                        return Err(unexpected(c, column));
                    }
                }
                State::FractionStart => {
                    if !c.is_ascii_digit() {
                        return Err(RecognizeError::new(
                            "Expected digit in fraction part",
                            column,
                        ));
                    }
                    self.fraction.push(c);
                    self.state = State::Fraction;
                    i += 1;
                }
                State::Fraction => {
                    if c.is_ascii_digit() {
                        self.fraction.push(c);
                        i += 1;
                    } else if c == 'e' || c == 'E' {
                        self.state = State::ExponentStart;
                        i += 1;
                    } else if self.is_delimiter(c) {
                        self.complete(column)?;
                    } else {
                        return Err(unexpected(c, column));
                    }
                }
                State::ExponentStart => {
                    if c == '+' || c == '-' {
                        self.exponent_negative = c == '-';
                        self.state = State::ExponentSign;
                        i += 1;
                    } else if c.is_ascii_digit() {
                        self.exponent.push(c);
                        self.state = State::Exponent;
                        i += 1;
                    } else {
                        return Err(RecognizeError::new(
                            "Expected digit in exponent part",
                            column,
                        ));
                    }
                }
                State::ExponentSign => {
                    if !c.is_ascii_digit() {
                        return Err(RecognizeError::new(
                            "Expected digit in exponent part",
                            column,
                        ));
                    }
                    self.exponent.push(c);
                    self.state = State::Exponent;
                    i += 1;
                }
                State::Exponent => {
                    if c.is_ascii_digit() {
                        self.exponent.push(c);
                        i += 1;
                    } else if self.is_delimiter(c) {
                        self.complete(column)?;
                    } else {
                        return Err(unexpected(c, column));
                    }
                }
                State::Complete => {}
            }
        }

        if is_end && self.state != State::Complete {
            let column = i + 1;
            match self.state {
                State::Start | State::IntegerStart => {
                    return Err(RecognizeError::new(
                        "Expected digit in integer part",
                        column,
                    ));
                }
                State::FractionStart => {
                    return Err(RecognizeError::new(
                        "Expected digit in fraction part",
                        column,
                    ));
                }
                State::ExponentStart | State::ExponentSign => {
                    return Err(RecognizeError::new(
                        "Expected digit in exponent part",
                        column,
                    ));
                }
                _ => self.complete(column)?,
            }
        }

        Ok(i - start)
    }

    /// Delimiter test for the current options.
    fn is_delimiter(&self, c: char) -> bool {
        match &self.options.delimiters {
            Some(set) => set.contains(&c),
            // Default: any character that cannot extend the number.
            None => true,
        }
    }

    /// Converts the accumulated parts into a semantic value.
    fn complete(&mut self, column: usize) -> Result<(), RecognizeError> {
        let value = if self.fraction.is_empty() && self.exponent.is_empty() {
            let mut text = String::with_capacity(self.integer.len() + 1);
            if self.negative {
                text.push('-');
            }
            text.push_str(&self.integer);
            match text.parse::<i64>() {
                Ok(parsed) => NumberValue::Integer(parsed),
                Err(_) => {
                    return Err(RecognizeError::new(
                        format!("Integer literal '{}' out of range", text),
                        column,
                    ));
                }
            }
        } else {
            let mut text = String::new();
            if self.negative {
                text.push('-');
            }
            text.push_str(&self.integer);
            if !self.fraction.is_empty() {
                text.push('.');
                text.push_str(&self.fraction);
            }
            if !self.exponent.is_empty() {
                text.push('e');
                if self.exponent_negative {
                    text.push('-');
                }
                text.push_str(&self.exponent);
            }
            match text.parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => NumberValue::Float(parsed),
                _ => {
                    return Err(RecognizeError::new(
                        format!("Number literal '{}' out of range", text),
                        column,
                    ));
                }
            }
        };

        self.value = Some(value);
        self.state = State::Complete;
        Ok(())
    }

    /// Returns true once a delimiter or end of input closed the token.
    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// Returns the semantic value (present once complete).
    pub fn value(&self) -> Option<NumberValue> {
        self.value
    }

    /// Returns true if the literal carries a leading `-`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the integer-part digits exactly as written.
    pub fn integer_part(&self) -> &str {
        &self.integer
    }

    /// Returns the fraction digits, if a fractional part was written.
    pub fn fraction_part(&self) -> Option<&str> {
        if self.fraction.is_empty() {
            None
        } else {
            Some(&self.fraction)
        }
    }

    /// Returns the exponent digits, if an exponent was written.
    pub fn exponent_part(&self) -> Option<&str> {
        if self.exponent.is_empty() {
            None
        } else {
            Some(&self.exponent)
        }
    }

    /// Returns true if the exponent carries an explicit `-`.
    pub fn is_exponent_negative(&self) -> bool {
        self.exponent_negative
    }
}

impl Default for NumberRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn unexpected(c: char, column: usize) -> RecognizeError {
    RecognizeError::new(
        format!("Unexpected character '{}' in number literal", c),
        column,
    )
}
