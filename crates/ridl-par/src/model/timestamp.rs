//! Timestamps in the RFC 3339-like shape the language accepts.

use std::fmt;

/// The UTC offset of a [`Timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOffset {
    /// The `Z` marker: UTC itself.
    Utc,
    /// An explicit `+hh:mm` or `-hh:mm` offset.
    Offset {
        /// Whether the offset is negative (west of UTC).
        negative: bool,
        /// Offset hours.
        hours: u8,
        /// Offset minutes.
        minutes: u8,
    },
}

impl fmt::Display for TimestampOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => write!(f, "Z"),
            Self::Offset {
                negative,
                hours,
                minutes,
            } => write!(
                f,
                "{}{hours:02}:{minutes:02}",
                if *negative { "-" } else { "+" }
            ),
        }
    }
}

/// A timestamp such as `2013-05-02T12:00:00.123+05:00`.
///
/// Only the textual shape is validated; calendar validity (month
/// lengths, leap years) is out of scope here. The fraction keeps its
/// source digits so rendering is lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Option<String>,
    offset: TimestampOffset,
}

impl Timestamp {
    /// Creates a timestamp from its fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        fraction: Option<String>,
        offset: TimestampOffset,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            fraction,
            offset,
        }
    }

    /// Returns the four-digit year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month, 1-12 by shape.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the hour.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second.
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the sub-second digits as written, if present.
    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Returns the UTC offset.
    pub fn offset(&self) -> TimestampOffset {
        self.offset
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{fraction}")?;
        }
        write!(f, "{}", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_fraction_and_offset() {
        let timestamp = Timestamp::new(
            2013,
            5,
            2,
            12,
            0,
            0,
            Some("123".to_string()),
            TimestampOffset::Offset {
                negative: false,
                hours: 5,
                minutes: 0,
            },
        );
        assert_eq!(timestamp.to_string(), "2013-05-02T12:00:00.123+05:00");
    }

    #[test]
    fn renders_utc_marker() {
        let timestamp = Timestamp::new(2013, 5, 2, 12, 0, 0, None, TimestampOffset::Utc);
        assert_eq!(timestamp.to_string(), "2013-05-02T12:00:00Z");
    }
}
