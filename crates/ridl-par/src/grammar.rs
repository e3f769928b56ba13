//! Grammar productions - identifiers, namespaces, type names, type
//! references, restrictions, and enum literals.
//!
//! Each production consumes tokens from the front of a [`Scanner`] and
//! either returns a finished model value or fails with a located
//! [`SyntaxError`]. There is no error recovery; the first failure
//! aborts the parse.

use ridl_lex::{SpecialLiteral, Token, TokenValue};
use ridl_util::error::SyntaxError;
use ridl_util::location::SourceLocation;

use crate::model::{
    EnumValue, Identifier, IdentifierFormat, Namespace, QualifiedTypeName, RangeEnd,
    RangeRestriction, RangeValue, RelativeTypeName, Restriction, TypeName, TypeRefName,
    TypeReference,
};
use crate::scanner::Scanner;

/// How an identifier scan treats an upper-case letter in the leading
/// position of a text token.
#[derive(Clone, Copy, PartialEq)]
enum LeadingUpper {
    /// Reject with "Identifier must start with a lower case char".
    Reject,
    /// Treat as a camel-capped part boundary, as enum member names do.
    Camel,
}

impl Scanner {
    /// Parses an identifier: one text token plus any directly adjacent
    /// `-part` or `_part` continuations.
    ///
    /// Separator styles and camel transitions must be consistent
    /// within one identifier; mixing them fails with
    /// "Mixed identifier formats". A separator with no following text
    /// token fails with "Trailing separator".
    pub fn parse_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        self.parse_identifier_with(LeadingUpper::Reject)
    }

    fn parse_identifier_with(
        &mut self,
        leading: LeadingUpper,
    ) -> Result<Identifier, SyntaxError> {
        self.ensure_not_empty()?;
        let (text, location) = self.expect_text()?;

        let mut parts = Vec::new();
        let mut format = None;
        scan_identifier_text(&text, &location, leading, &mut format, &mut parts)?;

        loop {
            let separator = if let Some(at) = self.poll_literal(SpecialLiteral::Hyphen) {
                Some((IdentifierFormat::Hyphenated, at))
            } else if let Some(at) = self.poll_literal(SpecialLiteral::Underscore) {
                Some((IdentifierFormat::Underscored, at))
            } else {
                None
            };
            let Some((style, at)) = separator else {
                break;
            };
            merge_format(&mut format, style, &at)?;

            if !matches!(self.peek().map(Token::value), Some(TokenValue::Text(_))) {
                return Err(SyntaxError::new("Trailing separator".to_string(), at));
            }
            let (text, location) = self.expect_text()?;
            scan_identifier_text(&text, &location, LeadingUpper::Camel, &mut format, &mut parts)?;
        }

        Ok(Identifier::new(parts, format))
    }

    /// Parses a namespace: colon-separated identifiers plus a version
    /// introduced by `@`.
    ///
    /// With a scoped version in hand the `@version` suffix may be
    /// omitted, in which case the scoped version is adopted.
    pub fn parse_namespace(
        &mut self,
        scoped_version: Option<&Identifier>,
    ) -> Result<Namespace, SyntaxError> {
        let start = self.location();
        let mut builder = Namespace::builder().part(self.parse_identifier()?);
        while self.poll_literal(SpecialLiteral::Colon).is_some() {
            builder = builder.part(self.parse_identifier()?);
        }

        let version = match scoped_version {
            None => {
                self.expect_literal(SpecialLiteral::At)?;
                self.parse_identifier()?
            }
            Some(version) => {
                if self.poll_literal(SpecialLiteral::At).is_some() {
                    self.parse_identifier()?
                } else {
                    version.clone()
                }
            }
        };

        builder
            .version(version)
            .build()
            .map_err(|error| SyntaxError::new(error.to_string(), start))
    }

    /// Parses a relative type name: slash-separated capitalized names.
    pub fn parse_relative_type_name(&mut self) -> Result<RelativeTypeName, SyntaxError> {
        self.ensure_not_empty()?;
        let (text, location) = self.expect_text()?;
        let mut path = vec![type_name_from_text(&text, &location)?];
        while self.poll_literal(SpecialLiteral::Slash).is_some() {
            let (text, location) = self.expect_text()?;
            path.push(type_name_from_text(&text, &location)?);
        }
        Ok(RelativeTypeName::new(path))
    }

    /// Parses a qualified type name: a namespace, `/`, and a name
    /// path.
    pub fn parse_qualified_type_name(
        &mut self,
        scoped_version: Option<&Identifier>,
    ) -> Result<QualifiedTypeName, SyntaxError> {
        let namespace = self.parse_namespace(scoped_version)?;
        if self.poll_literal(SpecialLiteral::Slash).is_none() {
            return Err(SyntaxError::new(
                "Missing name path".to_string(),
                self.location(),
            ));
        }
        let relative = self.parse_relative_type_name()?;
        Ok(QualifiedTypeName::new(namespace, relative.path().to_vec()))
    }

    /// Parses the name part of a type reference.
    ///
    /// The first character of the head text token decides the route:
    /// lower-case means namespace-qualified, upper-case means
    /// relative. Anything else fails with
    /// "Expected type reference start".
    pub fn parse_type_ref_name(
        &mut self,
        scoped_version: Option<&Identifier>,
    ) -> Result<TypeRefName, SyntaxError> {
        self.ensure_not_empty()?;
        let starts_lower = match self.peek().map(Token::value) {
            Some(TokenValue::Text(text)) => text
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_lowercase()),
            _ => {
                return Err(SyntaxError::new(
                    "Expected type reference start".to_string(),
                    self.location(),
                ))
            }
        };
        if starts_lower {
            Ok(TypeRefName::Qualified(
                self.parse_qualified_type_name(scoped_version)?,
            ))
        } else {
            Ok(TypeRefName::Relative(self.parse_relative_type_name()?))
        }
    }

    /// Parses a full type reference: an atomic name, an optional `~`
    /// restriction, and any quantifier suffix.
    ///
    /// Quantifiers apply in encounter order, so `Baz*+?` builds a
    /// nullable, non-empty list of lists of `Baz`. When the atomic
    /// name denotes a primitive type the restriction is bound to it
    /// immediately, so `Int64~[0.5,100)` fails here.
    pub fn parse_type_reference(
        &mut self,
        scoped_version: Option<&Identifier>,
    ) -> Result<TypeReference, SyntaxError> {
        let name = self.parse_type_ref_name(scoped_version)?;

        let restriction = match self.poll_literal(SpecialLiteral::Tilde) {
            None => None,
            Some(at) => {
                let restriction = self.parse_restriction()?;
                match name.primitive() {
                    Some(primitive) => Some(
                        restriction
                            .bind(primitive)
                            .map_err(|error| SyntaxError::new(error.to_string(), at))?,
                    ),
                    None => Some(restriction),
                }
            }
        };

        let mut reference = TypeReference::Named { name, restriction };
        loop {
            self.poll_trivia();
            if self.poll_literal(SpecialLiteral::Star).is_some() {
                reference = TypeReference::List {
                    member: Box::new(reference),
                    non_empty: false,
                };
            } else if self.poll_literal(SpecialLiteral::Plus).is_some() {
                reference = TypeReference::List {
                    member: Box::new(reference),
                    non_empty: true,
                };
            } else if self.poll_literal(SpecialLiteral::Question).is_some() {
                reference = TypeReference::Nullable(Box::new(reference));
            } else {
                break;
            }
        }
        Ok(reference)
    }

    /// Parses the restriction body following a `~`: either a quoted
    /// regex or a bracketed range.
    pub fn parse_restriction(&mut self) -> Result<Restriction, SyntaxError> {
        self.ensure_not_empty()?;
        match self.peek().map(Token::value) {
            Some(TokenValue::Str(_)) => {
                let (pattern, _) = self.expect_string()?;
                Ok(Restriction::Regex(pattern))
            }
            Some(TokenValue::Literal(SpecialLiteral::LeftBracket))
            | Some(TokenValue::Literal(SpecialLiteral::LeftParen)) => {
                self.parse_range_restriction()
            }
            _ => Err(SyntaxError::new(
                "Expected restriction".to_string(),
                self.location(),
            )),
        }
    }

    fn parse_range_restriction(&mut self) -> Result<Restriction, SyntaxError> {
        let (low_inclusive, open_at) =
            match self.poll_literal(SpecialLiteral::LeftBracket) {
                Some(at) => (true, at),
                None => (false, self.expect_literal(SpecialLiteral::LeftParen)?),
            };

        self.poll_trivia();
        let low_value = if self.peek_literal(SpecialLiteral::Comma) {
            None
        } else {
            Some(self.parse_range_value()?)
        };
        if low_value.is_none() && low_inclusive {
            return Err(SyntaxError::new(
                "Infinite low range must be open".to_string(),
                open_at,
            ));
        }

        self.poll_trivia();
        self.expect_literal(SpecialLiteral::Comma)?;
        self.poll_trivia();

        let high_value = if self.peek_literal(SpecialLiteral::RightParen)
            || self.peek_literal(SpecialLiteral::RightBracket)
        {
            None
        } else {
            Some(self.parse_range_value()?)
        };
        self.poll_trivia();

        let (high_inclusive, close_at) =
            match self.poll_literal(SpecialLiteral::RightBracket) {
                Some(at) => (true, at),
                None => (false, self.expect_literal(SpecialLiteral::RightParen)?),
            };
        if high_value.is_none() && high_inclusive {
            return Err(SyntaxError::new(
                "Infinite high range must be open".to_string(),
                close_at,
            ));
        }

        let low = low_value.map(|value| RangeEnd::new(value, low_inclusive));
        let high = high_value.map(|value| RangeEnd::new(value, high_inclusive));
        Ok(Restriction::Range(RangeRestriction::new(low, high)))
    }

    fn parse_range_value(&mut self) -> Result<RangeValue, SyntaxError> {
        let token = self.remove()?;
        let location = token.location().clone();
        match token.into_value() {
            TokenValue::Integer(value) => Ok(RangeValue::Integer(value)),
            TokenValue::Float(value) => Ok(RangeValue::Double(value)),
            TokenValue::Str(value) => Ok(RangeValue::Text(value)),
            TokenValue::Literal(SpecialLiteral::Hyphen) => {
                let token = self.remove()?;
                let location = token.location().clone();
                match token.into_value() {
                    TokenValue::Integer(value) => Ok(RangeValue::Integer(-value)),
                    TokenValue::Float(value) => Ok(RangeValue::Double(-value)),
                    _ => Err(SyntaxError::new(
                        "Expected range bound value".to_string(),
                        location,
                    )),
                }
            }
            _ => Err(SyntaxError::new(
                "Expected range bound value".to_string(),
                location,
            )),
        }
    }

    /// Parses an enum literal: a type reference, `.`, and a member
    /// name.
    pub fn parse_enum_value(
        &mut self,
        scoped_version: Option<&Identifier>,
    ) -> Result<EnumValue, SyntaxError> {
        let reference = self.parse_type_reference(scoped_version)?;
        self.expect_literal(SpecialLiteral::Dot)?;
        let member = self.parse_identifier_with(LeadingUpper::Camel)?;
        Ok(EnumValue::new(reference, member))
    }
}

/// Scans one text token into lower-cased identifier parts, merging any
/// camel transitions into the running format.
fn scan_identifier_text(
    text: &str,
    location: &SourceLocation,
    leading: LeadingUpper,
    format: &mut Option<IdentifierFormat>,
    parts: &mut Vec<String>,
) -> Result<(), SyntaxError> {
    let mut current = String::new();
    for (index, c) in text.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if index == 0 && leading == LeadingUpper::Reject {
                return Err(SyntaxError::new(
                    "Identifier must start with a lower case char".to_string(),
                    location.clone(),
                ));
            }
            merge_format(format, IdentifierFormat::CamelCapped, location)?;
            if !current.is_empty() {
                parts.push(current);
                current = String::new();
            }
            current.push(c.to_ascii_lowercase());
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(())
}

fn merge_format(
    current: &mut Option<IdentifierFormat>,
    found: IdentifierFormat,
    location: &SourceLocation,
) -> Result<(), SyntaxError> {
    match current {
        None => {
            *current = Some(found);
            Ok(())
        }
        Some(existing) if *existing == found => Ok(()),
        Some(_) => Err(SyntaxError::new(
            "Mixed identifier formats".to_string(),
            location.clone(),
        )),
    }
}

/// Splits a text token into capitalized type name segments.
///
/// Each segment starts at an upper-case letter; a token that begins
/// lower-case has no valid first segment and is rejected.
fn type_name_from_text(
    text: &str,
    location: &SourceLocation,
) -> Result<TypeName, SyntaxError> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_uppercase() {
            if !current.is_empty() {
                segments.push(current);
                current = String::new();
            }
            current.push(c);
        } else {
            if current.is_empty() {
                return Err(SyntaxError::new(
                    "Type name segments must start with an upper case char".to_string(),
                    location.clone(),
                ));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    Ok(TypeName::new(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrimitiveType;
    use ridl_lex::tokenize;

    fn scanner(source: &str) -> Scanner {
        Scanner::new(tokenize(source, "test").unwrap())
    }

    fn parts(identifier: &Identifier) -> Vec<&str> {
        identifier.parts().iter().map(String::as_str).collect()
    }

    #[test]
    fn identifier_formats_normalize_to_the_same_parts() {
        for source in ["my-field", "my_field", "myField"] {
            let identifier = scanner(source).parse_identifier().unwrap();
            assert_eq!(parts(&identifier), ["my", "field"], "source: {source}");
        }
    }

    #[test]
    fn identifier_remembers_its_format() {
        let identifier = scanner("my_field").parse_identifier().unwrap();
        assert_eq!(identifier.format(), Some(IdentifierFormat::Underscored));
        let single = scanner("foo").parse_identifier().unwrap();
        assert_eq!(single.format(), None);
    }

    #[test]
    fn identifier_rejects_mixed_formats() {
        for source in ["my-field_name", "my_fieldName", "myField-name"] {
            let error = scanner(source).parse_identifier().unwrap_err();
            assert_eq!(error.message, "Mixed identifier formats", "source: {source}");
        }
    }

    #[test]
    fn identifier_rejects_leading_upper_case() {
        let error = scanner("Foo").parse_identifier().unwrap_err();
        assert_eq!(error.message, "Identifier must start with a lower case char");
    }

    #[test]
    fn identifier_rejects_trailing_separator() {
        let error = scanner("my-").parse_identifier().unwrap_err();
        assert_eq!(error.message, "Trailing separator");
        assert_eq!(error.location.column(), 3);
    }

    #[test]
    fn identifier_stops_before_whitespace() {
        let mut scanner = scanner("foo -bar");
        let identifier = scanner.parse_identifier().unwrap();
        assert_eq!(parts(&identifier), ["foo"]);
        assert!(!scanner.is_empty());
    }

    #[test]
    fn namespace_requires_version_without_scope() {
        let namespace = scanner("foo:bar@v1").parse_namespace(None).unwrap();
        assert_eq!(namespace.to_string(), "foo:bar@v1");

        let error = scanner("foo:bar").parse_namespace(None).unwrap_err();
        assert_eq!(error.message, "Unexpected end of input");
    }

    #[test]
    fn namespace_adopts_scoped_version() {
        let scoped = scanner("v2").parse_identifier().unwrap();
        let namespace = scanner("foo:bar")
            .parse_namespace(Some(&scoped))
            .unwrap();
        assert_eq!(namespace.to_string(), "foo:bar@v2");

        // An explicit version still wins over the scope.
        let namespace = scanner("foo:bar@v1")
            .parse_namespace(Some(&scoped))
            .unwrap();
        assert_eq!(namespace.to_string(), "foo:bar@v1");
    }

    #[test]
    fn relative_type_name_splits_segments_on_case() {
        let name = scanner("HttpRequest/Baz")
            .parse_relative_type_name()
            .unwrap();
        assert_eq!(name.path().len(), 2);
        assert_eq!(name.path()[0].segments(), ["Http", "Request"]);
        assert_eq!(name.to_string(), "HttpRequest/Baz");
    }

    #[test]
    fn type_name_must_start_upper_case() {
        let error = scanner("Baz/quux").parse_relative_type_name().unwrap_err();
        assert_eq!(
            error.message,
            "Type name segments must start with an upper case char"
        );
        assert_eq!(error.location.column(), 5);
    }

    #[test]
    fn qualified_type_name_requires_a_path() {
        let qualified = scanner("foo:bar@v1/Baz/Quux")
            .parse_qualified_type_name(None)
            .unwrap();
        assert_eq!(qualified.to_string(), "foo:bar@v1/Baz/Quux");

        let error = scanner("foo:bar@v1")
            .parse_qualified_type_name(None)
            .unwrap_err();
        assert_eq!(error.message, "Missing name path");
    }

    #[test]
    fn type_ref_name_routes_on_first_character() {
        let qualified = scanner("foo:bar@v1/Baz").parse_type_ref_name(None).unwrap();
        assert!(matches!(qualified, TypeRefName::Qualified(_)));

        let relative = scanner("Baz/Quux").parse_type_ref_name(None).unwrap();
        assert!(matches!(relative, TypeRefName::Relative(_)));

        let error = scanner("42").parse_type_ref_name(None).unwrap_err();
        assert_eq!(error.message, "Expected type reference start");
    }

    #[test]
    fn quantifiers_nest_left_to_right() {
        let reference = scanner("foo:bar@v1/Baz*+?")
            .parse_type_reference(None)
            .unwrap();
        let TypeReference::Nullable(non_empty) = &reference else {
            panic!("expected nullable at the outside: {reference:?}");
        };
        let TypeReference::List {
            member: inner_list,
            non_empty: true,
        } = non_empty.as_ref()
        else {
            panic!("expected non-empty list: {non_empty:?}");
        };
        assert!(matches!(
            inner_list.as_ref(),
            TypeReference::List {
                non_empty: false,
                ..
            }
        ));
    }

    #[test]
    fn quantifiers_tolerate_whitespace_between_them() {
        let reference = scanner("Baz * + ?").parse_type_reference(None).unwrap();
        assert_eq!(reference.to_string(), "Baz*+?");
    }

    #[test]
    fn range_restriction_keeps_bound_openness() {
        let reference = scanner("Int64~[0,100)").parse_type_reference(None).unwrap();
        let TypeReference::Named {
            restriction: Some(Restriction::Range(range)),
            ..
        } = &reference
        else {
            panic!("expected a range restriction: {reference:?}");
        };
        assert!(range.low().unwrap().is_inclusive());
        assert!(!range.high().unwrap().is_inclusive());
        assert_eq!(range.low().unwrap().value(), &RangeValue::Integer(0));
    }

    #[test]
    fn fractional_bound_fails_for_integer_primitive() {
        let error = scanner("Int64~[0.5,100)")
            .parse_type_reference(None)
            .unwrap_err();
        assert_eq!(
            error.message,
            "Range bound 0.5 is not a valid Int64 literal"
        );
    }

    #[test]
    fn fractional_bound_allowed_for_double() {
        let reference = scanner("Double~[0.5,100)")
            .parse_type_reference(None)
            .unwrap();
        assert_eq!(reference.to_string(), "Double~[0.5,100)");
    }

    #[test]
    fn unbounded_end_must_be_open() {
        let error = scanner("Int64~[,100)").parse_type_reference(None).unwrap_err();
        assert_eq!(error.message, "Infinite low range must be open");

        let error = scanner("Int64~(0,]").parse_type_reference(None).unwrap_err();
        assert_eq!(error.message, "Infinite high range must be open");

        let reference = scanner("Int64~(,100)").parse_type_reference(None).unwrap();
        assert_eq!(reference.to_string(), "Int64~(,100)");
    }

    #[test]
    fn negative_bounds_are_accepted() {
        let reference = scanner("Int64~[-10,10]").parse_type_reference(None).unwrap();
        let TypeReference::Named {
            restriction: Some(Restriction::Range(range)),
            ..
        } = &reference
        else {
            panic!("expected a range restriction");
        };
        assert_eq!(range.low().unwrap().value(), &RangeValue::Integer(-10));
    }

    #[test]
    fn regex_restriction_binds_to_string() {
        let reference = scanner("String~\"^[a-z]+$\"")
            .parse_type_reference(None)
            .unwrap();
        assert_eq!(reference.to_string(), "String~\"^[a-z]+$\"");

        let error = scanner("Int32~\"^[a-z]+$\"")
            .parse_type_reference(None)
            .unwrap_err();
        assert_eq!(error.message, "Regex restriction cannot apply to Int32");
    }

    #[test]
    fn restriction_on_custom_type_stays_unbound() {
        // Not a primitive, so binding is deferred to a later phase.
        let reference = scanner("foo:bar@v1/Baz~[0,1)")
            .parse_type_reference(None)
            .unwrap();
        assert_eq!(reference.to_string(), "foo:bar@v1/Baz~[0,1)");
    }

    #[test]
    fn enum_value_pairs_reference_and_member() {
        let value = scanner("foo:bar@v1/Color.Red")
            .parse_enum_value(None)
            .unwrap();
        assert_eq!(value.member().parts(), ["red"]);
        assert_eq!(value.to_string(), "foo:bar@v1/Color.Red");
    }

    #[test]
    fn binding_a_parsed_restriction_again_is_idempotent() {
        let reference = scanner("Int64~[0,100)").parse_type_reference(None).unwrap();
        let TypeReference::Named {
            restriction: Some(restriction),
            ..
        } = &reference
        else {
            panic!("expected a restriction");
        };
        let rebound = restriction.bind(PrimitiveType::Int64).unwrap();
        assert_eq!(&rebound, restriction);
    }
}
