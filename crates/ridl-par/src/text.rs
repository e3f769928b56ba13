//! Whole-string convenience entry points.
//!
//! Each function lexes its input, runs exactly one grammar production,
//! and fails with "Trailing input" if any non-trivia token is left
//! over. Errors are re-wrapped into a single descriptive
//! `invalid syntax in input '<original>': <message>` form so callers
//! that only care about the offending input get it in the message; the
//! original location is preserved.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use ridl_lex::tokenize;
use ridl_util::error::SyntaxError;
use ridl_util::location::SourceLocation;

use crate::model::{
    EnumValue, Identifier, Namespace, ObjectPath, PathElement, QualifiedTypeName,
    RelativeTypeName, Timestamp, TimestampOffset, TypeReference,
};
use crate::scanner::Scanner;

const SOURCE_NAME: &str = "input";

/// Parses a whole string as exactly one identifier.
///
/// # Example
///
/// ```
/// use ridl_par::parse_identifier;
///
/// let id = parse_identifier("my-field").unwrap();
/// assert_eq!(id.parts(), ["my", "field"]);
/// ```
pub fn parse_identifier(input: &str) -> Result<Identifier, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_identifier())
}

/// Parses a whole string as exactly one namespace, requiring an
/// explicit `@version`.
pub fn parse_namespace(input: &str) -> Result<Namespace, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_namespace(None))
}

/// Parses a whole string as exactly one namespace, adopting the given
/// version when the input omits `@version`.
pub fn parse_namespace_scoped(
    input: &str,
    scoped_version: &Identifier,
) -> Result<Namespace, SyntaxError> {
    parse_whole(input, |scanner| {
        scanner.parse_namespace(Some(scoped_version))
    })
}

/// Parses a whole string as exactly one qualified type name.
pub fn parse_qualified_type_name(input: &str) -> Result<QualifiedTypeName, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_qualified_type_name(None))
}

/// Parses a whole string as exactly one relative type name.
pub fn parse_relative_type_name(input: &str) -> Result<RelativeTypeName, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_relative_type_name())
}

/// Parses a whole string as exactly one type reference, including any
/// restriction and quantifier suffix.
pub fn parse_type_reference(input: &str) -> Result<TypeReference, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_type_reference(None))
}

/// Parses a whole string as exactly one enum literal.
pub fn parse_enum_value(input: &str) -> Result<EnumValue, SyntaxError> {
    parse_whole(input, |scanner| scanner.parse_enum_value(None))
}

/// Runs one production over the tokenized input and checks nothing but
/// trivia remains, re-wrapping any failure with the original input.
fn parse_whole<T>(
    input: &str,
    production: impl FnOnce(&mut Scanner) -> Result<T, SyntaxError>,
) -> Result<T, SyntaxError> {
    let run = |input: &str| -> Result<T, SyntaxError> {
        let mut scanner = Scanner::new(tokenize(input, SOURCE_NAME)?);
        scanner.poll_trivia();
        let value = production(&mut scanner)?;
        scanner.poll_trivia();
        if let Some(token) = scanner.peek() {
            return Err(SyntaxError::new(
                "Trailing input".to_string(),
                token.location().clone(),
            ));
        }
        Ok(value)
    };
    run(input).map_err(|error| rewrap(input, error))
}

fn rewrap(input: &str, error: SyntaxError) -> SyntaxError {
    SyntaxError::new(
        format!("invalid syntax in input '{input}': {}", error.message),
        error.location,
    )
}

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})(?:\.(\d+))?(Z|[+-]\d{2}:\d{2})$",
        )
        .expect("timestamp pattern is valid")
    })
}

/// Parses a whole string as a timestamp.
///
/// Only the textual shape is validated against an RFC 3339-like
/// pattern; calendar validity is not checked here.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, SyntaxError> {
    timestamp(input.trim()).map_err(|error| rewrap(input, error))
}

fn timestamp(text: &str) -> Result<Timestamp, SyntaxError> {
    let location = SourceLocation::start(SOURCE_NAME);
    let invalid = || SyntaxError::new("Invalid timestamp".to_string(), location.clone());

    let captures = timestamp_pattern().captures(text).ok_or_else(&invalid)?;
    let fraction = captures.get(7).map(|m| m.as_str().to_string());
    let offset = match captures.get(8).map(|m| m.as_str()) {
        Some("Z") => TimestampOffset::Utc,
        Some(text) => TimestampOffset::Offset {
            negative: text.starts_with('-'),
            hours: text[1..3].parse().map_err(|_| invalid())?,
            minutes: text[4..6].parse().map_err(|_| invalid())?,
        },
        None => return Err(invalid()),
    };

    Ok(Timestamp::new(
        capture(&captures, 1, &invalid)?,
        capture(&captures, 2, &invalid)?,
        capture(&captures, 3, &invalid)?,
        capture(&captures, 4, &invalid)?,
        capture(&captures, 5, &invalid)?,
        capture(&captures, 6, &invalid)?,
        fraction,
        offset,
    ))
}

fn capture<T: FromStr>(
    captures: &Captures<'_>,
    index: usize,
    invalid: &impl Fn() -> SyntaxError,
) -> Result<T, SyntaxError> {
    captures
        .get(index)
        .ok_or_else(invalid)?
        .as_str()
        .parse()
        .map_err(|_| invalid())
}

fn path_element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([^\[\]]+)(?:\[(\d+)\])?$").expect("path element pattern is valid")
    })
}

/// Parses a whole string as an object path such as
/// `parameters.items[3].name`.
///
/// All whitespace is stripped before splitting on `.`; each element is
/// a valid identifier with an optional `[index]` suffix.
pub fn parse_object_path(input: &str) -> Result<ObjectPath, SyntaxError> {
    object_path(input).map_err(|error| rewrap(input, error))
}

fn object_path(input: &str) -> Result<ObjectPath, SyntaxError> {
    let location = SourceLocation::start(SOURCE_NAME);
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(SyntaxError::new(
            "Unexpected end of input".to_string(),
            location,
        ));
    }

    let mut elements = Vec::new();
    for piece in stripped.split('.') {
        let captures = path_element_pattern().captures(piece).ok_or_else(|| {
            SyntaxError::new(
                format!("Invalid object path element '{piece}'"),
                location.clone(),
            )
        })?;
        let name_text = captures
            .get(1)
            .map(|m| m.as_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                SyntaxError::new(
                    format!("Invalid object path element '{piece}'"),
                    location.clone(),
                )
            })?;
        let index = match captures.get(2) {
            None => None,
            Some(digits) => Some(digits.as_str().parse().map_err(|_| {
                SyntaxError::new(
                    format!("Invalid object path element '{piece}'"),
                    location.clone(),
                )
            })?),
        };

        let mut scanner = Scanner::new(tokenize(name_text, SOURCE_NAME)?);
        let name = scanner.parse_identifier()?;
        if !scanner.is_empty() {
            return Err(SyntaxError::new(
                format!("Invalid object path element '{piece}'"),
                location.clone(),
            ));
        }
        elements.push(PathElement::new(name, index));
    }
    Ok(ObjectPath::new(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdentifierFormat;

    #[test]
    fn identifier_round_trips_in_every_format() {
        let cases = [
            ("my-field", IdentifierFormat::Hyphenated),
            ("my_field", IdentifierFormat::Underscored),
            ("myField", IdentifierFormat::CamelCapped),
        ];
        for (source, format) in cases {
            let identifier = parse_identifier(source).unwrap();
            assert_eq!(identifier.format(), Some(format));
            assert_eq!(identifier.format_as(format), source);
            // Re-parsing the rendering yields an equal value.
            assert_eq!(parse_identifier(&identifier.to_string()).unwrap(), identifier);
        }
    }

    #[test]
    fn type_reference_round_trips() {
        for source in [
            "foo:bar@v1/Baz",
            "foo:bar@v1/Baz/Quux",
            "Baz/Quux",
            "foo:bar@v1/Baz*+?",
            "Int64~[0,100)",
            "Int64~(,100)",
            "Double~[0.5,100)",
            "String~\"^[a-z]+$\"",
        ] {
            let reference = parse_type_reference(source).unwrap();
            let rendered = reference.to_string();
            assert_eq!(rendered, source);
            assert_eq!(parse_type_reference(&rendered).unwrap(), reference);
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let identifier = parse_identifier("  my-field\t").unwrap();
        assert_eq!(identifier.parts(), ["my", "field"]);
    }

    #[test]
    fn trailing_input_is_rejected() {
        let error = parse_identifier("foo bar").unwrap_err();
        assert_eq!(
            error.message,
            "invalid syntax in input 'foo bar': Trailing input"
        );
        assert_eq!(error.location.column(), 5);
    }

    #[test]
    fn errors_carry_the_original_input() {
        let error = parse_type_reference("Int64~[0.5,100)").unwrap_err();
        assert_eq!(
            error.message,
            "invalid syntax in input 'Int64~[0.5,100)': \
             Range bound 0.5 is not a valid Int64 literal"
        );
    }

    #[test]
    fn enum_value_parses_and_renders() {
        let value = parse_enum_value("foo:bar@v1/Color.Red").unwrap();
        assert_eq!(value.to_string(), "foo:bar@v1/Color.Red");
    }

    #[test]
    fn namespace_entry_points_cover_scoping() {
        assert_eq!(
            parse_namespace("foo:bar@v1").unwrap().to_string(),
            "foo:bar@v1"
        );
        let scoped = parse_identifier("v2").unwrap();
        assert_eq!(
            parse_namespace_scoped("foo:bar", &scoped)
                .unwrap()
                .to_string(),
            "foo:bar@v2"
        );
        assert!(parse_namespace("foo:bar").is_err());
    }

    #[test]
    fn timestamp_accepts_utc_and_explicit_offsets() {
        let utc = parse_timestamp("2013-05-02T12:00:00Z").unwrap();
        assert_eq!(utc.offset(), TimestampOffset::Utc);
        assert_eq!(utc.fraction(), None);

        let offset = parse_timestamp("2013-05-02T12:00:00.123+05:00").unwrap();
        assert_eq!(offset.year(), 2013);
        assert_eq!(offset.fraction(), Some("123"));
        assert_eq!(
            offset.offset(),
            TimestampOffset::Offset {
                negative: false,
                hours: 5,
                minutes: 0
            }
        );
        assert_eq!(offset.to_string(), "2013-05-02T12:00:00.123+05:00");
    }

    #[test]
    fn timestamp_rejects_malformed_shapes() {
        for source in [
            "2013-5-02T12:00:00Z",
            "2013-05-02 12:00:00Z",
            "2013-05-02T12:00:00",
            "2013-05-02T12:00:00+5:00",
            "not a timestamp",
        ] {
            let error = parse_timestamp(source).unwrap_err();
            assert!(
                error.message.contains("Invalid timestamp"),
                "source: {source}, message: {}",
                error.message
            );
        }
    }

    #[test]
    fn object_path_parses_names_and_indexes() {
        let path = parse_object_path("parameters.items[3].name").unwrap();
        assert_eq!(path.elements().len(), 3);
        assert_eq!(path.elements()[1].index(), Some(3));
        assert_eq!(path.to_string(), "parameters.items[3].name");
    }

    #[test]
    fn object_path_strips_whitespace() {
        let path = parse_object_path(" parameters . items[3] ").unwrap();
        assert_eq!(path.to_string(), "parameters.items[3]");
    }

    #[test]
    fn object_path_rejects_empty_and_malformed_elements() {
        assert!(parse_object_path("").is_err());
        assert!(parse_object_path("a..b").is_err());
        assert!(parse_object_path("a[x]").is_err());
        assert!(parse_object_path("a[1]b").is_err());
    }
}
