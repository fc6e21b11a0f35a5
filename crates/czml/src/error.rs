//! Error types.
//!
//! [`SchemaError`] is raised while compiling schema definitions and is fatal
//! to generation. [`ValueError`] is raised by canonical value constructors
//! before they know which field they belong to. [`Error`] covers everything
//! that can fail when constructing, validating or rendering documents.

use thiserror::Error;

/// A malformed schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// An attribute without a declared type.
    #[error("{class}.{field}: no declared type")]
    MissingType {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
    },
    /// An attribute that is both required and defaulted.
    #[error("{class}.{field}: a required field cannot have a default")]
    RequiredWithDefault {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
    },
    /// Two attributes with the same name, possibly one inherited from a capability.
    #[error("{class}: duplicate field `{field}`")]
    DuplicateField {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
    },
    /// A rule mentioning an attribute the class does not have.
    #[error("{class}: rule names unknown field `{field}`")]
    UnknownRuleField {
        /// Class name.
        class: &'static str,
        /// The unknown name.
        field: &'static str,
    },
    /// A default whose type does not match the declared type.
    #[error("{class}.{field}: default does not match declared type `{ty}`")]
    DefaultTypeMismatch {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
        /// The declared (rewritten) type.
        ty: &'static str,
    },
    /// An enumeration default that is not one of the members.
    #[error("{class}.{field}: default `{value}` is not a member of {enumeration}")]
    InvalidEnumDefault {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
        /// The offending default.
        value: &'static str,
        /// Enumeration name.
        enumeration: &'static str,
    },
    /// A defaulted attribute inside a mutually exclusive group.
    #[error("{class}.{field}: a field of an exclusive group cannot have a default")]
    DefaultInExclusiveGroup {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
    },
    /// An annotation that cannot be rewritten to a bare type name.
    #[error("{class}.{field}: malformed type annotation `{annotation}`")]
    MalformedAnnotation {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
        /// The annotation as written.
        annotation: &'static str,
    },
    /// An annotation naming a different enumeration than the descriptor.
    #[error("{class}.{field}: annotation `{annotation}` does not name enumeration {enumeration}")]
    EnumerationMismatch {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
        /// The rewritten annotation.
        annotation: &'static str,
        /// The descriptor's enumeration.
        enumeration: &'static str,
    },
    /// A nested type naming no compiled class.
    #[error("{class}.{field}: unknown type `{ty}`")]
    UnknownType {
        /// Class name.
        class: &'static str,
        /// Attribute name.
        field: &'static str,
        /// The unresolved type name.
        ty: &'static str,
    },
    /// Two definitions with the same class name.
    #[error("duplicate class `{class}`")]
    DuplicateClass {
        /// Class name.
        class: &'static str,
    },
}

/// A canonical value that failed its own normalization rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Wrong number of numeric components.
    #[error("expected {expected} numbers, got {found}")]
    Shape {
        /// Description of the accepted lengths.
        expected: String,
        /// The length given.
        found: usize,
    },
    /// A well-shaped value outside its domain.
    #[error("{0}")]
    Invalid(String),
    /// An input of the wrong kind.
    #[error("expected {expected}, got {found}")]
    Mismatch {
        /// What the field accepts.
        expected: &'static str,
        /// What was given.
        found: &'static str,
    },
}

impl ValueError {
    /// Attaches the class and field the value was given for.
    #[must_use]
    pub fn at(self, class: &'static str, field: &'static str) -> Error {
        match self {
            ValueError::Shape { expected, found } => Error::Shape {
                class,
                field,
                expected,
                found,
            },
            ValueError::Invalid(reason) => Error::Invalid {
                class,
                field,
                reason,
            },
            ValueError::Mismatch { expected, found } => Error::TypeMismatch {
                class,
                field,
                expected,
                found,
            },
        }
    }
}

/// Construction, validation, document and rendering failures.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry could not be compiled.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// No class of that name is registered.
    #[error("unknown class `{0}`")]
    UnknownClass(String),
    /// The class has no field of that name.
    #[error("{class} has no field `{field}`")]
    UnknownField {
        /// Class name.
        class: &'static str,
        /// The name given.
        field: String,
    },
    /// The same field was given twice.
    #[error("{class}.{field} given more than once")]
    DuplicateField {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// The input kind does not fit the field.
    #[error("{class}.{field}: expected {expected}, got {found}")]
    TypeMismatch {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
        /// What the field accepts.
        expected: &'static str,
        /// What was given.
        found: &'static str,
    },
    /// A fixed-arity value with the wrong number of components.
    #[error("{class}.{field}: expected {expected} numbers, got {found}")]
    Shape {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
        /// Description of the accepted lengths.
        expected: String,
        /// The length given.
        found: usize,
    },
    /// A value outside its domain.
    #[error("{class}.{field}: {reason}")]
    Invalid {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
    /// More than one field of an exclusive group was set.
    #[error("{class}: fields {} are mutually exclusive", fields.join(", "))]
    ConflictingFields {
        /// Class name.
        class: &'static str,
        /// The fields that were set together.
        fields: Vec<&'static str>,
    },
    /// A field was set without the field it depends on.
    #[error("{class}.{field} requires {sibling} to be set")]
    MissingDependency {
        /// Class name.
        class: &'static str,
        /// The dependent field.
        field: &'static str,
        /// The missing field.
        sibling: &'static str,
    },
    /// A required field was not given.
    #[error("{class}.{field} is required")]
    MissingField {
        /// Class name.
        class: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// None of an exactly-one group was set.
    #[error("{class}: exactly one of {} must be set", fields.join(", "))]
    MissingAlternative {
        /// Class name.
        class: &'static str,
        /// The group.
        fields: Vec<&'static str>,
    },
    /// A preamble that is not the first packet of a document.
    #[error("the preamble must be the first packet, found at index {index}")]
    DocumentOrder {
        /// Position of the misplaced preamble.
        index: usize,
    },
    /// JSON rendering failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Rendered output was not UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
