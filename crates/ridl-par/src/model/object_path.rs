//! Object paths: dotted member access with optional indexing.

use std::fmt;

use super::identifier::Identifier;

/// One element of an object path: a member name plus an optional
/// zero-based index, e.g. `items[3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    name: Identifier,
    index: Option<usize>,
}

impl PathElement {
    /// Creates a path element.
    pub fn new(name: Identifier, index: Option<usize>) -> Self {
        Self { name, index }
    }

    /// Returns the member name.
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// Returns the index, if the element selects into a list.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// A dotted path into a structured value, such as
/// `parameters.items[3].name`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPath {
    elements: Vec<PathElement>,
}

impl ObjectPath {
    /// Creates an object path from a non-empty element sequence.
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Returns the elements of this path, outermost first.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(f, ".")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_names_and_indexes() {
        let path = ObjectPath::new(vec![
            PathElement::new(Identifier::new(vec!["parameters".to_string()], None), None),
            PathElement::new(Identifier::new(vec!["items".to_string()], None), Some(3)),
        ]);
        assert_eq!(path.to_string(), "parameters.items[3]");
    }
}
