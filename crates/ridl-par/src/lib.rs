//! ridl-par - Syntax Scanner and Parser for the RIDL Interface
//! Description Language
//!
//! This crate consumes the token stream produced by `ridl-lex` and
//! builds the semantic entities of the language: identifiers,
//! namespaces, qualified and relative type names, type references with
//! quantifiers and restrictions, enum values, object paths, and
//! timestamps.
//!
//! The parser is a hand-written recursive-descent layer over a queue of
//! already-produced tokens. It never touches the lexer directly, so it
//! can be driven by whole-string convenience entry points or by an
//! externally streamed token source.
//!
//! # Example Usage
//!
//! ```
//! use ridl_par::parse_type_reference;
//!
//! let reference = parse_type_reference("foo:bar@v1/Baz*+?").unwrap();
//! assert_eq!(reference.to_string(), "foo:bar@v1/Baz*+?");
//! ```
//!
//! # Module Structure
//!
//! - [`model`] - Immutable semantic value types
//! - [`scanner`] - Token-queue reader primitives
//! - [`grammar`] - Grammar productions
//! - [`text`] - Whole-string convenience entry points

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod grammar;
pub mod model;
pub mod scanner;
pub mod text;

// Re-export main types for convenience
pub use model::{
    EnumValue, Identifier, IdentifierFormat, Namespace, ObjectPath, PathElement, PrimitiveType,
    QualifiedTypeName, RangeEnd, RangeRestriction, RangeValue, RelativeTypeName, Restriction,
    RestrictionError, Timestamp, TimestampOffset, TypeName, TypeRefName, TypeReference,
};
pub use scanner::Scanner;
pub use text::{
    parse_enum_value, parse_identifier, parse_namespace, parse_namespace_scoped,
    parse_object_path, parse_qualified_type_name, parse_relative_type_name, parse_timestamp,
    parse_type_reference,
};
