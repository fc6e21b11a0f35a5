//! Compiled value classes.
//!
//! A [`ValueClass`] is the compiled form of one schema definition: its
//! fields in emission order, each with a resolved [`FieldKind`], plus the
//! cross-field rules checked at construction.

mod compiler;

use std::collections::HashMap;

pub use compiler::{compile_class, rewrite_annotation};
pub use czml_spec::model::{Capability, DefaultValue, Enumeration, Rule};

use crate::values::{ListShape, TupleShape};

/// What a field holds, resolved from its declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// `bool`.
    Boolean,
    /// Any real number.
    Number,
    /// Free text.
    Text,
    /// A URI or data URL.
    Uri,
    /// A reference to another property, `id#property`.
    Reference,
    /// A point in time.
    Instant,
    /// A time interval, or a list of them.
    Interval,
    /// A fixed-arity numeric tuple.
    Tuple(TupleShape),
    /// A flat list of coordinate triples.
    List(ListShape),
    /// A member of an enumeration.
    Enumerated(&'static Enumeration),
    /// An instance of another value class.
    Nested(&'static str),
    /// An open bag of custom properties.
    Properties,
}

impl FieldKind {
    /// Short description used in type-mismatch errors.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "a boolean",
            FieldKind::Number => "a number",
            FieldKind::Text => "text",
            FieldKind::Uri => "a URI",
            FieldKind::Reference => "a reference",
            FieldKind::Instant => "an instant",
            FieldKind::Interval => "a time interval",
            FieldKind::Tuple(shape) => shape.name(),
            FieldKind::List(shape) => shape.name(),
            FieldKind::Enumerated(e) => e.name,
            FieldKind::Nested(class) => class,
            FieldKind::Properties => "custom properties",
        }
    }
}

/// One compiled field.
#[derive(Debug, Clone)]
pub struct CompiledField {
    /// Output name.
    pub name: &'static str,
    /// The declared type after rewriting, e.g. `Cartesian3`.
    pub type_name: &'static str,
    /// The resolved kind.
    pub kind: FieldKind,
    /// Default; [`DefaultValue::None`] means unset.
    pub default: DefaultValue,
    /// Whether construction fails without it.
    pub required: bool,
    /// Whether values are stored as time-tagged samples.
    pub interpolatable: bool,
    /// Description.
    pub description: &'static str,
    /// The capability that contributed the field, if any.
    pub origin: Option<Capability>,
}

/// A compiled value class.
#[derive(Debug)]
pub struct ValueClass {
    /// Class name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Capabilities the class participates in.
    pub capabilities: Vec<Capability>,
    /// Fields in emission order.
    pub fields: Vec<CompiledField>,
    /// Capability rules followed by the class's own.
    pub rules: Vec<Rule>,
    index: HashMap<&'static str, usize>,
}

impl ValueClass {
    pub(crate) fn new(
        name: &'static str,
        description: &'static str,
        capabilities: Vec<Capability>,
        fields: Vec<CompiledField>,
        rules: Vec<Rule>,
    ) -> Self {
        let index = fields.iter().enumerate().map(|(i, f)| (f.name, i)).collect();
        Self {
            name,
            description,
            capabilities,
            fields,
            rules,
            index,
        }
    }

    /// Position of a field in emission order.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// The exclusive groups (at most one or exactly one) of the class.
    pub fn exclusive_groups(&self) -> impl Iterator<Item = &'static [&'static str]> + '_ {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Exclusive(fields) | Rule::OneOf(fields) => Some(*fields),
            Rule::Requires { .. } => None,
        })
    }
}
