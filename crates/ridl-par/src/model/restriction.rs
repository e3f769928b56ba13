//! Value restrictions attached to type references with `~`.

use std::fmt;

use thiserror::Error;

/// The built-in primitive types a restriction can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit IEEE 754 floating point.
    Double,
    /// 32-bit IEEE 754 floating point.
    Float,
    /// An instant in time with a UTC offset.
    Timestamp,
}

impl PrimitiveType {
    /// Looks up a primitive type by its source-text name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Int32" => Some(Self::Int32),
            "Int64" => Some(Self::Int64),
            "Double" => Some(Self::Double),
            "Float" => Some(Self::Float),
            "Timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Returns the source-text name of this primitive type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Timestamp => "Timestamp",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error raised when a restriction cannot bind to a primitive type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestrictionError {
    /// A regex restriction was applied to a non-string type.
    #[error("Regex restriction cannot apply to {0}")]
    RegexNotApplicable(PrimitiveType),
    /// A range restriction was applied to a type with no ordering.
    #[error("Range restriction cannot apply to {0}")]
    RangeNotApplicable(PrimitiveType),
    /// A range bound does not fit the primitive type it restricts.
    #[error("Range bound {bound} is not a valid {primitive} literal")]
    InvalidBound {
        /// The offending bound, rendered as source text.
        bound: String,
        /// The primitive type the range was bound to.
        primitive: PrimitiveType,
    },
}

/// A literal value used as a range bound.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeValue {
    /// An integer bound, e.g. `0` in `[0,100)`.
    Integer(i64),
    /// A floating-point bound, e.g. `0.5`.
    Double(f64),
    /// A quoted text bound, used for timestamp ranges.
    Text(String),
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => {
                // Keep a decimal point so the rendering re-parses as a
                // floating-point literal.
                if value.is_finite() && value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Text(value) => write!(f, "\"{value}\""),
        }
    }
}

/// One end of a range restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEnd {
    value: RangeValue,
    inclusive: bool,
}

impl RangeEnd {
    /// Creates a range end.
    pub fn new(value: RangeValue, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    /// Returns the bound value.
    pub fn value(&self) -> &RangeValue {
        &self.value
    }

    /// Returns whether the bound itself is part of the range.
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

/// A range restriction such as `[0,100)`.
///
/// A missing end means the range is unbounded on that side; an
/// unbounded end is always exclusive, which the grammar enforces at
/// parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRestriction {
    low: Option<RangeEnd>,
    high: Option<RangeEnd>,
}

impl RangeRestriction {
    /// Creates a range restriction from its ends.
    pub fn new(low: Option<RangeEnd>, high: Option<RangeEnd>) -> Self {
        Self { low, high }
    }

    /// Returns the low end, or `None` when unbounded below.
    pub fn low(&self) -> Option<&RangeEnd> {
        self.low.as_ref()
    }

    /// Returns the high end, or `None` when unbounded above.
    pub fn high(&self) -> Option<&RangeEnd> {
        self.high.as_ref()
    }

    fn check_bound(
        end: Option<&RangeEnd>,
        primitive: PrimitiveType,
    ) -> Result<(), RestrictionError> {
        let Some(end) = end else {
            return Ok(());
        };
        let valid = match primitive {
            PrimitiveType::Int32 => match end.value() {
                RangeValue::Integer(value) => i32::try_from(*value).is_ok(),
                _ => false,
            },
            PrimitiveType::Int64 => matches!(end.value(), RangeValue::Integer(_)),
            PrimitiveType::Double | PrimitiveType::Float => matches!(
                end.value(),
                RangeValue::Integer(_) | RangeValue::Double(_)
            ),
            PrimitiveType::Timestamp => matches!(end.value(), RangeValue::Text(_)),
            PrimitiveType::String => false,
        };
        if valid {
            Ok(())
        } else {
            Err(RestrictionError::InvalidBound {
                bound: end.value().to_string(),
                primitive,
            })
        }
    }
}

impl fmt::Display for RangeRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.low {
            Some(end) if end.is_inclusive() => write!(f, "[{}", end.value())?,
            Some(end) => write!(f, "({}", end.value())?,
            None => write!(f, "(")?,
        }
        write!(f, ",")?;
        match &self.high {
            Some(end) if end.is_inclusive() => write!(f, "{}]", end.value()),
            Some(end) => write!(f, "{})", end.value()),
            None => write!(f, ")"),
        }
    }
}

/// A value restriction: either a regular expression over string values
/// or a range over ordered values.
#[derive(Debug, Clone, PartialEq)]
pub enum Restriction {
    /// A regular expression the restricted value must match.
    Regex(String),
    /// A range the restricted value must fall within.
    Range(RangeRestriction),
}

impl Restriction {
    /// Validates this restriction against the primitive type it
    /// restricts and returns the bound restriction.
    ///
    /// Binding is idempotent: binding the result to the same primitive
    /// yields an equal value.
    ///
    /// # Errors
    ///
    /// Returns a [`RestrictionError`] when the restriction kind does
    /// not apply to the primitive or a range bound does not fit it.
    pub fn bind(&self, primitive: PrimitiveType) -> Result<Restriction, RestrictionError> {
        match self {
            Self::Regex(_) => {
                if primitive != PrimitiveType::String {
                    return Err(RestrictionError::RegexNotApplicable(primitive));
                }
            }
            Self::Range(range) => {
                if primitive == PrimitiveType::String {
                    return Err(RestrictionError::RangeNotApplicable(primitive));
                }
                RangeRestriction::check_bound(range.low(), primitive)?;
                RangeRestriction::check_bound(range.high(), primitive)?;
            }
        }
        Ok(self.clone())
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex(pattern) => write!(f, "\"{pattern}\""),
            Self::Range(range) => write!(f, "{range}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: Option<RangeEnd>, high: Option<RangeEnd>) -> Restriction {
        Restriction::Range(RangeRestriction::new(low, high))
    }

    #[test]
    fn integer_range_binds_to_integer_types() {
        let restriction = range(
            Some(RangeEnd::new(RangeValue::Integer(0), true)),
            Some(RangeEnd::new(RangeValue::Integer(100), false)),
        );
        assert!(restriction.bind(PrimitiveType::Int64).is_ok());
        assert!(restriction.bind(PrimitiveType::Int32).is_ok());
        assert!(restriction.bind(PrimitiveType::Double).is_ok());
    }

    #[test]
    fn fractional_bound_rejected_for_integer_types() {
        let restriction = range(
            Some(RangeEnd::new(RangeValue::Double(0.5), true)),
            Some(RangeEnd::new(RangeValue::Integer(100), false)),
        );
        let error = restriction.bind(PrimitiveType::Int64).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Range bound 0.5 is not a valid Int64 literal"
        );
    }

    #[test]
    fn int32_bound_must_fit() {
        let restriction = range(
            None,
            Some(RangeEnd::new(RangeValue::Integer(1 << 40), false)),
        );
        assert!(restriction.bind(PrimitiveType::Int64).is_ok());
        assert!(restriction.bind(PrimitiveType::Int32).is_err());
    }

    #[test]
    fn regex_binds_only_to_string() {
        let restriction = Restriction::Regex("^[a-z]+$".to_string());
        assert!(restriction.bind(PrimitiveType::String).is_ok());
        assert_eq!(
            restriction.bind(PrimitiveType::Int32).unwrap_err().to_string(),
            "Regex restriction cannot apply to Int32"
        );
    }

    #[test]
    fn binding_is_idempotent() {
        let restriction = range(
            Some(RangeEnd::new(RangeValue::Integer(0), true)),
            None,
        );
        let bound = restriction.bind(PrimitiveType::Int64).unwrap();
        let rebound = bound.bind(PrimitiveType::Int64).unwrap();
        assert_eq!(bound, rebound);
    }

    #[test]
    fn range_rendering_keeps_delimiters() {
        let restriction = range(
            Some(RangeEnd::new(RangeValue::Integer(0), true)),
            Some(RangeEnd::new(RangeValue::Integer(100), false)),
        );
        assert_eq!(restriction.to_string(), "[0,100)");

        let open = range(None, Some(RangeEnd::new(RangeValue::Double(1.0), false)));
        assert_eq!(open.to_string(), "(,1.0)");
    }
}
