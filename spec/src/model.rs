//! Schema model types.
//!
//! These types describe the property catalogue as typed Rust data. A
//! [`SchemaDefinition`] is authored once per property kind and read only when
//! the engine compiles it into a value class. Nothing here validates; the
//! compiler in the `czml` crate rejects malformed definitions.

/// A capability a generated class participates in.
///
/// Capabilities contribute shared attributes (and sometimes rules) that are
/// merged ahead of the class's own attributes, in the order the capabilities
/// are listed on the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The property's data may be deleted by the client (`delete`).
    Deletable,
    /// The property's value may be interpolated over time-tagged samples.
    Interpolatable,
    /// The property can be horizontally and vertically aligned.
    Aligned,
}

impl Capability {
    /// Returns the capability's display name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Deletable => "Deletable",
            Capability::Interpolatable => "Interpolatable",
            Capability::Aligned => "Aligned",
        }
    }
}

/// Default value of an attribute.
///
/// `None` is the "unset" sentinel: the field is optional and omitted from
/// output until a caller supplies a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// Unset.
    None,
    /// A boolean default.
    Bool(bool),
    /// A numeric default.
    Number(f64),
    /// A textual default (also used for enumeration raw values).
    Str(&'static str),
}

impl DefaultValue {
    /// Returns true for the unset sentinel.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, DefaultValue::None)
    }
}

/// A closed set of raw string values backing an enumeration-typed field.
#[derive(Debug, PartialEq, Eq)]
pub struct Enumeration {
    /// Enumeration name as it appears in type annotations.
    pub name: &'static str,
    /// Doc comment.
    pub description: &'static str,
    /// Members as `(variant, raw)` pairs, in declaration order.
    pub members: &'static [(&'static str, &'static str)],
}

impl Enumeration {
    /// Returns true if `raw` is the raw value of one of the members.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.members.iter().any(|(_, r)| *r == raw)
    }

    /// Iterates over the raw member values.
    pub fn raw_values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|(_, r)| *r)
    }
}

/// Descriptor of one attribute of a schema definition.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Textual type annotation, e.g. `"Option<czml::values::Cartesian3>"`.
    /// `None` means the author forgot to declare a type.
    pub ty: Option<&'static str>,
    /// Default value; [`DefaultValue::None`] means unset.
    pub default: DefaultValue,
    /// Whether the field must be supplied at construction.
    pub required: bool,
    /// Whether a single value is stored as a one-sample time-tagged sequence.
    pub interpolatable: bool,
    /// Description, used for generated doc comments.
    pub description: &'static str,
    /// Enumeration backing the field, if any.
    pub enumeration: Option<&'static Enumeration>,
}

/// A named attribute of a schema definition.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Field name as emitted in output (camelCase).
    pub name: &'static str,
    /// The field descriptor.
    pub field: FieldDescriptor,
}

impl Attribute {
    /// An optional attribute of type `ty` defaulting to unset.
    #[must_use]
    pub fn new(name: &'static str, ty: &'static str, description: &'static str) -> Self {
        Self {
            name,
            field: FieldDescriptor {
                ty: Some(ty),
                default: DefaultValue::None,
                required: false,
                interpolatable: false,
                description,
                enumeration: None,
            },
        }
    }

    /// An optional attribute backed by `enumeration`.
    #[must_use]
    pub fn enumerated(
        name: &'static str,
        enumeration: &'static Enumeration,
        description: &'static str,
    ) -> Self {
        let mut attr = Self::new(name, enumeration.name, description);
        attr.field.enumeration = Some(enumeration);
        attr
    }

    /// Marks the attribute as interpolatable.
    #[must_use]
    pub fn interpolatable(mut self) -> Self {
        self.field.interpolatable = true;
        self
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.field.required = true;
        self
    }

    /// Sets the attribute's default.
    #[must_use]
    pub fn default(mut self, default: DefaultValue) -> Self {
        self.field.default = default;
        self
    }
}

/// A cross-field rule checked once at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// At most one of the fields may be set.
    Exclusive(&'static [&'static str]),
    /// Exactly one of the fields must be set.
    OneOf(&'static [&'static str]),
    /// `field` may only be set when `sibling` is set too.
    Requires {
        /// The dependent field.
        field: &'static str,
        /// The field it depends on.
        sibling: &'static str,
    },
}

impl Rule {
    /// Returns every field name the rule mentions.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Rule::Exclusive(fields) | Rule::OneOf(fields) => fields.to_vec(),
            Rule::Requires { field, sibling } => vec![field, sibling],
        }
    }
}

/// Static description of one generated value class.
#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    /// Class name, e.g. `"Position"`.
    pub class_name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Capabilities whose attributes are merged ahead of `attributes`.
    pub bases: &'static [Capability],
    /// Attributes in declaration order.
    pub attributes: Vec<Attribute>,
    /// Cross-field rules.
    pub rules: &'static [Rule],
}

/// The complete property catalogue.
#[derive(Debug)]
pub struct Catalogue {
    /// Document format version the catalogue describes.
    pub version: &'static str,
    /// Every schema definition, in compilation order.
    pub definitions: Vec<SchemaDefinition>,
    /// Every enumeration referenced by the definitions.
    pub enumerations: Vec<&'static Enumeration>,
}

impl Catalogue {
    /// Looks up a definition by class name.
    #[must_use]
    pub fn definition(&self, class_name: &str) -> Option<&SchemaDefinition> {
        self.definitions.iter().find(|d| d.class_name == class_name)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.definitions.len()
    }

    /// Returns the number of attributes across all definitions, counting
    /// capability attributes once per class that inherits them.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.definitions
            .iter()
            .map(|d| {
                d.attributes.len()
                    + d.bases
                        .iter()
                        .map(|c| capability_attributes(*c).len())
                        .sum::<usize>()
            })
            .sum()
    }
}

/// Attributes contributed by a capability, in emission order.
#[must_use]
pub fn capability_attributes(capability: Capability) -> Vec<Attribute> {
    use crate::enums::{EXTRAPOLATION_TYPES, HORIZONTAL_ORIGINS, INTERPOLATION_ALGORITHMS, VERTICAL_ORIGINS};
    match capability {
        Capability::Deletable => vec![Attribute::new(
            "delete",
            "Option<bool>",
            "Whether the client should delete existing samples or interval data for this \
             property. If true, all other properties in this property will be ignored.",
        )],
        Capability::Interpolatable => vec![
            Attribute::new(
                "epoch",
                "Option<Instant>",
                "The epoch to use for times specified as seconds since an epoch.",
            ),
            Attribute::enumerated(
                "interpolationAlgorithm",
                &INTERPOLATION_ALGORITHMS,
                "The interpolation algorithm to use when interpolating.",
            ),
            Attribute::new(
                "interpolationDegree",
                "Option<f64>",
                "The degree of interpolation to use when interpolating.",
            ),
            Attribute::enumerated(
                "forwardExtrapolationType",
                &EXTRAPOLATION_TYPES,
                "The type of extrapolation to perform when a value is requested at a time \
                 after any available samples.",
            ),
            Attribute::new(
                "forwardExtrapolationDuration",
                "Option<f64>",
                "The amount of time to extrapolate forward before the property becomes \
                 undefined.",
            ),
            Attribute::enumerated(
                "backwardExtrapolationType",
                &EXTRAPOLATION_TYPES,
                "The type of extrapolation to perform when a value is requested at a time \
                 before any available samples.",
            ),
            Attribute::new(
                "backwardExtrapolationDuration",
                "Option<f64>",
                "The amount of time to extrapolate backward before the property becomes \
                 undefined.",
            ),
        ],
        Capability::Aligned => vec![
            Attribute::enumerated(
                "horizontalOrigin",
                &HORIZONTAL_ORIGINS,
                "Whether the object is left-, center-, or right-aligned with the position.",
            ),
            Attribute::enumerated(
                "verticalOrigin",
                &VERTICAL_ORIGINS,
                "Whether the object is bottom-, center-, or top-aligned with the position.",
            ),
        ],
    }
}

/// Rules contributed by a capability.
#[must_use]
pub fn capability_rules(capability: Capability) -> &'static [Rule] {
    match capability {
        Capability::Interpolatable => &[
            Rule::Requires {
                field: "interpolationDegree",
                sibling: "interpolationAlgorithm",
            },
            Rule::Requires {
                field: "forwardExtrapolationDuration",
                sibling: "forwardExtrapolationType",
            },
            Rule::Requires {
                field: "backwardExtrapolationDuration",
                sibling: "backwardExtrapolationType",
            },
        ],
        Capability::Deletable | Capability::Aligned => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::HORIZONTAL_ORIGINS;

    #[test]
    fn enumeration_membership_is_by_raw_value() {
        assert!(HORIZONTAL_ORIGINS.contains("LEFT"));
        assert!(!HORIZONTAL_ORIGINS.contains("Left"));
    }

    #[test]
    fn interpolatable_rules_only_name_contributed_attributes() {
        let names: Vec<&str> = capability_attributes(Capability::Interpolatable)
            .iter()
            .map(|a| a.name)
            .collect();
        for rule in capability_rules(Capability::Interpolatable) {
            for field in rule.fields() {
                assert!(names.contains(&field), "rule names unknown field {field}");
            }
        }
    }

    #[test]
    fn attribute_helpers_compose() {
        let attr = Attribute::new("version", "String", "Version.")
            .default(DefaultValue::Str("1.0"))
            .interpolatable();
        assert_eq!(attr.field.default, DefaultValue::Str("1.0"));
        assert!(attr.field.interpolatable);
        assert!(!attr.field.required);
    }
}
