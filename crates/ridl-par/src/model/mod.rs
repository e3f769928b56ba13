//! Immutable semantic value types produced by the parser.
//!
//! Every type in this module is a plain value: construction validates,
//! accessors borrow, and rendering via [`std::fmt::Display`] produces
//! canonical source text that re-parses to an equal value.

mod enum_value;
mod identifier;
mod namespace;
mod object_path;
mod restriction;
mod timestamp;
mod type_name;
mod type_reference;

pub use enum_value::EnumValue;
pub use identifier::{Identifier, IdentifierFormat};
pub use namespace::{Namespace, NamespaceBuilder};
pub use object_path::{ObjectPath, PathElement};
pub use restriction::{
    PrimitiveType, RangeEnd, RangeRestriction, RangeValue, Restriction, RestrictionError,
};
pub use timestamp::{Timestamp, TimestampOffset};
pub use type_name::{QualifiedTypeName, RelativeTypeName, TypeName};
pub use type_reference::{TypeRefName, TypeReference};
