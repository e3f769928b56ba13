//! Character classification helpers.

/// Returns true if `c` may start an identifiable-text token.
#[inline]
pub fn is_identifiable_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns true if `c` may continue an identifiable-text token.
#[inline]
pub fn is_identifiable_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns the value of a hex digit, case-insensitive.
#[inline]
pub fn hex_value(c: char) -> Option<u32> {
    c.to_digit(16)
}
