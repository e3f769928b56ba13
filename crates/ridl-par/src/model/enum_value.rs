//! Enum literals: a type reference paired with a member name.

use std::fmt;

use super::identifier::{Identifier, IdentifierFormat};
use super::type_reference::TypeReference;

/// An enum literal such as `foo:bar@v1/Color.Red`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    reference: TypeReference,
    member: Identifier,
}

impl EnumValue {
    /// Creates an enum value from its type reference and member name.
    pub fn new(reference: TypeReference, member: Identifier) -> Self {
        Self { reference, member }
    }

    /// Returns the enum type being referenced.
    pub fn reference(&self) -> &TypeReference {
        &self.reference
    }

    /// Returns the member name, e.g. `red` for `Color.Red`.
    pub fn member(&self) -> &Identifier {
        &self.member
    }
}

impl fmt::Display for EnumValue {
    /// Renders the literal with the member in its source convention:
    /// camel-capped with a leading capital.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let camel = self.member.format_as(IdentifierFormat::CamelCapped);
        let mut chars = camel.chars();
        write!(f, "{}.", self.reference)?;
        if let Some(first) = chars.next() {
            for upper in first.to_uppercase() {
                write!(f, "{upper}")?;
            }
            write!(f, "{}", chars.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::type_name::{RelativeTypeName, TypeName};
    use crate::model::type_reference::TypeRefName;

    #[test]
    fn renders_member_with_leading_capital() {
        let reference = TypeReference::named(TypeRefName::Relative(RelativeTypeName::new(
            vec![TypeName::new(vec!["Color".to_string()])],
        )));
        let member = Identifier::new(
            vec!["out".to_string(), "of".to_string(), "stock".to_string()],
            Some(IdentifierFormat::CamelCapped),
        );
        let value = EnumValue::new(reference, member);
        assert_eq!(value.to_string(), "Color.OutOfStock");
    }
}
