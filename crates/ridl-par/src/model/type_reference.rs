//! Type references: named types with optional restrictions, wrapped by
//! list and nullability quantifiers.

use std::fmt;

use super::restriction::{PrimitiveType, Restriction};
use super::type_name::{QualifiedTypeName, RelativeTypeName};

/// The name part of a type reference: either fully qualified with a
/// namespace or relative to the enclosing context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRefName {
    /// A namespace-anchored name such as `foo:bar@v1/Baz`.
    Qualified(QualifiedTypeName),
    /// A context-relative name such as `Baz/Quux`.
    Relative(RelativeTypeName),
}

impl TypeRefName {
    /// Returns the primitive type this name denotes, if any.
    ///
    /// Only a relative, single-element, single-segment name can denote
    /// a primitive.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        let TypeRefName::Relative(relative) = self else {
            return None;
        };
        let [name] = relative.path() else {
            return None;
        };
        let [segment] = name.segments() else {
            return None;
        };
        PrimitiveType::from_name(segment)
    }
}

impl fmt::Display for TypeRefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Qualified(name) => write!(f, "{name}"),
            Self::Relative(name) => write!(f, "{name}"),
        }
    }
}

/// A type reference as written in source text.
///
/// Quantifiers nest outward in the order they were applied:
/// `Baz*+?` is a nullable, non-empty list of lists of `Baz`, i.e.
/// `Nullable(NonEmptyList(List(Baz)))`.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeReference {
    /// A named type, optionally restricted with `~`.
    Named {
        /// The referenced name.
        name: TypeRefName,
        /// The attached restriction, if any.
        restriction: Option<Restriction>,
    },
    /// A list of the member type; `non_empty` distinguishes `+` from
    /// `*`.
    List {
        /// The member type of the list.
        member: Box<TypeReference>,
        /// Whether the list must contain at least one member (`+`).
        non_empty: bool,
    },
    /// A value of the member type that may also be absent (`?`).
    Nullable(Box<TypeReference>),
}

impl TypeReference {
    /// Creates an unrestricted named reference.
    pub fn named(name: TypeRefName) -> Self {
        Self::Named {
            name,
            restriction: None,
        }
    }

    /// Returns the innermost named reference.
    pub fn base(&self) -> &TypeReference {
        match self {
            Self::Named { .. } => self,
            Self::List { member, .. } => member.base(),
            Self::Nullable(member) => member.base(),
        }
    }
}

impl fmt::Display for TypeReference {
    /// Renders the reference as canonical source text; the result
    /// re-parses to an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, restriction } => {
                write!(f, "{name}")?;
                if let Some(restriction) = restriction {
                    write!(f, "~{restriction}")?;
                }
                Ok(())
            }
            Self::List { member, non_empty } => {
                write!(f, "{member}{}", if *non_empty { "+" } else { "*" })
            }
            Self::Nullable(member) => write!(f, "{member}?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::type_name::TypeName;

    fn relative(name: &str) -> TypeRefName {
        TypeRefName::Relative(RelativeTypeName::new(vec![TypeName::new(vec![
            name.to_string()
        ])]))
    }

    #[test]
    fn primitive_lookup_covers_relative_single_names() {
        assert_eq!(relative("Int64").primitive(), Some(PrimitiveType::Int64));
        assert_eq!(relative("Baz").primitive(), None);
    }

    #[test]
    fn quantifiers_render_in_application_order() {
        let reference = TypeReference::Nullable(Box::new(TypeReference::List {
            member: Box::new(TypeReference::List {
                member: Box::new(TypeReference::named(relative("Baz"))),
                non_empty: false,
            }),
            non_empty: true,
        }));
        assert_eq!(reference.to_string(), "Baz*+?");
        assert_eq!(
            reference.base(),
            &TypeReference::named(relative("Baz"))
        );
    }
}
