//! Type names and the qualified/relative paths built from them.

use std::fmt;

use super::namespace::Namespace;

/// A single type name such as `Baz` or `HttpRequest`.
///
/// A type name is one or more segments, each beginning with an
/// upper-case letter. `HttpRequest` has segments `Http` and `Request`;
/// the segments are stored as written and render back by simple
/// concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    segments: Vec<String>,
}

impl TypeName {
    /// Creates a type name from its segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Returns the segments of this type name.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// A type name anchored in an explicit namespace, such as
/// `foo:bar@v1/Baz/Quux`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedTypeName {
    namespace: Namespace,
    path: Vec<TypeName>,
}

impl QualifiedTypeName {
    /// Creates a qualified type name.
    ///
    /// The path must contain at least one type name; the grammar
    /// enforces this before construction.
    pub fn new(namespace: Namespace, path: Vec<TypeName>) -> Self {
        Self { namespace, path }
    }

    /// Returns the namespace the name is anchored in.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the slash-separated name path.
    pub fn path(&self) -> &[TypeName] {
        &self.path
    }
}

impl fmt::Display for QualifiedTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.namespace)?;
        for name in &self.path {
            write!(f, "/{name}")?;
        }
        Ok(())
    }
}

/// A type name path with no namespace, resolved against the enclosing
/// context, such as `Baz` or `Baz/Quux`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeTypeName {
    path: Vec<TypeName>,
}

impl RelativeTypeName {
    /// Creates a relative type name from a non-empty path.
    pub fn new(path: Vec<TypeName>) -> Self {
        Self { path }
    }

    /// Returns the slash-separated name path.
    pub fn path(&self) -> &[TypeName] {
        &self.path
    }
}

impl fmt::Display for RelativeTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, name) in self.path.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::identifier::Identifier;

    fn id(text: &str) -> Identifier {
        Identifier::new(vec![text.to_string()], None)
    }

    fn name(segments: &[&str]) -> TypeName {
        TypeName::new(segments.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn type_name_concatenates_segments() {
        assert_eq!(name(&["Http", "Request"]).to_string(), "HttpRequest");
        assert_eq!(name(&["Baz"]).to_string(), "Baz");
    }

    #[test]
    fn qualified_name_renders_namespace_and_path() {
        let namespace = Namespace::builder()
            .part(id("foo"))
            .part(id("bar"))
            .version(id("v1"))
            .build()
            .unwrap();
        let qualified =
            QualifiedTypeName::new(namespace, vec![name(&["Baz"]), name(&["Quux"])]);
        assert_eq!(qualified.to_string(), "foo:bar@v1/Baz/Quux");
    }

    #[test]
    fn relative_name_joins_with_slash() {
        let relative = RelativeTypeName::new(vec![name(&["Baz"]), name(&["Quux"])]);
        assert_eq!(relative.to_string(), "Baz/Quux");
    }
}
