//! Namespaces: colon-separated identifier paths with a version.

use std::fmt;

use ridl_util::check::{require, required};
use ridl_util::error::BuildError;

use super::identifier::Identifier;

/// A namespace such as `foo:bar@v1`: one or more identifier parts
/// joined with `:`, plus a version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    parts: Vec<Identifier>,
    version: Identifier,
}

impl Namespace {
    /// Returns a builder for incremental construction.
    pub fn builder() -> NamespaceBuilder {
        NamespaceBuilder::default()
    }

    /// Returns the colon-separated identifier parts.
    pub fn parts(&self) -> &[Identifier] {
        &self.parts
    }

    /// Returns the version identifier, e.g. `v1` in `foo:bar@v1`.
    pub fn version(&self) -> &Identifier {
        &self.version
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, part) in self.parts.iter().enumerate() {
            if index > 0 {
                write!(f, ":")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, "@{}", self.version)
    }
}

/// Incremental builder for [`Namespace`].
///
/// Validation happens in [`build`](NamespaceBuilder::build): a
/// namespace requires at least one part and a version.
#[derive(Debug, Default)]
pub struct NamespaceBuilder {
    parts: Vec<Identifier>,
    version: Option<Identifier>,
}

impl NamespaceBuilder {
    /// Appends an identifier part.
    pub fn part(mut self, part: Identifier) -> Self {
        self.parts.push(part);
        self
    }

    /// Sets the version identifier.
    pub fn version(mut self, version: Identifier) -> Self {
        self.version = Some(version);
        self
    }

    /// Builds the namespace.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if no parts were added or the version
    /// is missing.
    pub fn build(self) -> Result<Namespace, BuildError> {
        require(!self.parts.is_empty(), "parts", "must not be empty")?;
        let version = required(self.version, "version")?;
        Ok(Namespace {
            parts: self.parts,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> Identifier {
        Identifier::new(vec![text.to_string()], None)
    }

    #[test]
    fn builds_and_renders() {
        let namespace = Namespace::builder()
            .part(id("foo"))
            .part(id("bar"))
            .version(id("v1"))
            .build()
            .unwrap();
        assert_eq!(namespace.to_string(), "foo:bar@v1");
        assert_eq!(namespace.parts().len(), 2);
        assert_eq!(namespace.version(), &id("v1"));
    }

    #[test]
    fn rejects_missing_version() {
        let result = Namespace::builder().part(id("foo")).build();
        assert!(matches!(result, Err(BuildError::MissingField(_))));
    }

    #[test]
    fn rejects_empty_parts() {
        let result = Namespace::builder().version(id("v1")).build();
        assert!(matches!(result, Err(BuildError::InvalidField { .. })));
    }
}
