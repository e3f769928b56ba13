//! Multi-part identifiers and their surface formats.

use std::fmt;

/// Surface format an identifier was written in.
///
/// An identifier is a sequence of lower-cased parts; the format records
/// how the parts were joined in source text so the identifier can be
/// rendered back in the same style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierFormat {
    /// Parts joined with `-`, e.g. `my-field`.
    Hyphenated,
    /// Parts joined with `_`, e.g. `my_field`.
    Underscored,
    /// Parts joined by capitalizing each part after the first,
    /// e.g. `myField`.
    CamelCapped,
}

/// A parsed identifier: one or more lower-cased parts plus the format
/// they were written in.
///
/// Equality is part-wise, so `my-field`, `my_field`, and `myField` all
/// compare equal. The format only matters for rendering.
#[derive(Debug, Clone, Eq)]
pub struct Identifier {
    parts: Vec<String>,
    format: Option<IdentifierFormat>,
}

impl Identifier {
    /// Creates an identifier from its lower-cased parts.
    ///
    /// # Arguments
    ///
    /// * `parts` - The identifier parts, already lower-cased
    /// * `format` - The surface format, or `None` for a single part
    ///   that never exhibited a separator style
    pub fn new(parts: Vec<String>, format: Option<IdentifierFormat>) -> Self {
        Self { parts, format }
    }

    /// Returns the lower-cased parts of this identifier.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the format the identifier was written in, if any.
    ///
    /// Single-part identifiers such as `foo` carry no format because no
    /// separator style was ever observed.
    pub fn format(&self) -> Option<IdentifierFormat> {
        self.format
    }

    /// Renders this identifier in the given format.
    ///
    /// # Example
    ///
    /// ```
    /// use ridl_par::{parse_identifier, IdentifierFormat};
    ///
    /// let id = parse_identifier("my-field").unwrap();
    /// assert_eq!(id.format_as(IdentifierFormat::CamelCapped), "myField");
    /// assert_eq!(id.format_as(IdentifierFormat::Underscored), "my_field");
    /// ```
    pub fn format_as(&self, format: IdentifierFormat) -> String {
        match format {
            IdentifierFormat::Hyphenated => self.parts.join("-"),
            IdentifierFormat::Underscored => self.parts.join("_"),
            IdentifierFormat::CamelCapped => {
                let mut out = String::new();
                for (index, part) in self.parts.iter().enumerate() {
                    if index == 0 {
                        out.push_str(part);
                    } else {
                        let mut chars = part.chars();
                        if let Some(first) = chars.next() {
                            out.extend(first.to_uppercase());
                            out.push_str(chars.as_str());
                        }
                    }
                }
                out
            }
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl std::hash::Hash for Identifier {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
    }
}

impl fmt::Display for Identifier {
    /// Renders the identifier in its source format, defaulting to the
    /// hyphenated style when no format was recorded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.format.unwrap_or(IdentifierFormat::Hyphenated);
        write!(f, "{}", self.format_as(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(parts: &[&str], format: Option<IdentifierFormat>) -> Identifier {
        Identifier::new(parts.iter().map(|p| p.to_string()).collect(), format)
    }

    #[test]
    fn equality_ignores_format() {
        let hyphenated = id(&["my", "field"], Some(IdentifierFormat::Hyphenated));
        let camel = id(&["my", "field"], Some(IdentifierFormat::CamelCapped));
        assert_eq!(hyphenated, camel);
    }

    #[test]
    fn formats_render_from_the_same_parts() {
        let identifier = id(&["my", "field", "name"], None);
        assert_eq!(
            identifier.format_as(IdentifierFormat::Hyphenated),
            "my-field-name"
        );
        assert_eq!(
            identifier.format_as(IdentifierFormat::Underscored),
            "my_field_name"
        );
        assert_eq!(
            identifier.format_as(IdentifierFormat::CamelCapped),
            "myFieldName"
        );
    }

    #[test]
    fn display_uses_source_format() {
        let identifier = id(&["my", "field"], Some(IdentifierFormat::Underscored));
        assert_eq!(identifier.to_string(), "my_field");
    }

    #[test]
    fn single_part_renders_as_itself_in_every_format() {
        let identifier = id(&["foo"], None);
        assert_eq!(identifier.format_as(IdentifierFormat::Hyphenated), "foo");
        assert_eq!(identifier.format_as(IdentifierFormat::CamelCapped), "foo");
    }
}
