//! Compiles a schema definition into a value class.

use std::collections::HashSet;

use czml_spec::model::{
    capability_attributes, capability_rules, Attribute, Capability, DefaultValue, Rule,
    SchemaDefinition,
};
use tracing::trace;

use super::{CompiledField, FieldKind, ValueClass};
use crate::error::SchemaError;
use crate::values::{ListShape, TupleShape};

/// Rewrites a textual type annotation to its bare, unqualified name.
///
/// Strips `Option<...>`, `Optional[...]` and `typing.Optional[...]` wrappers
/// and module paths separated by `::` or `.`. Returns `None` for an empty or
/// unbalanced annotation.
#[must_use]
pub fn rewrite_annotation(annotation: &'static str) -> Option<&'static str> {
    let mut ty = annotation.trim();
    loop {
        if let Some(inner) = ty.strip_prefix("Option<") {
            ty = inner.strip_suffix('>')?.trim();
        } else if let Some(inner) = ty
            .strip_prefix("typing.Optional[")
            .or_else(|| ty.strip_prefix("Optional["))
        {
            ty = inner.strip_suffix(']')?.trim();
        } else {
            break;
        }
    }
    let bare = ty.rsplit("::").next()?.rsplit('.').next()?;
    let well_formed = !bare.is_empty()
        && bare.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !bare.starts_with(|c: char| c.is_ascii_digit());
    well_formed.then_some(bare)
}

fn resolve_kind(attr: &Attribute, bare: &'static str) -> Option<FieldKind> {
    if let Some(enumeration) = attr.field.enumeration {
        return (bare == enumeration.name).then_some(FieldKind::Enumerated(enumeration));
    }
    Some(match bare {
        "bool" => FieldKind::Boolean,
        "f64" | "f32" | "i32" | "i64" | "u32" | "number" => FieldKind::Number,
        "String" | "str" => FieldKind::Text,
        "Uri" => FieldKind::Uri,
        "Reference" => FieldKind::Reference,
        "Instant" => FieldKind::Instant,
        "TimeInterval" => FieldKind::Interval,
        "Properties" => FieldKind::Properties,
        other => TupleShape::from_name(other)
            .map(FieldKind::Tuple)
            .or_else(|| ListShape::from_name(other).map(FieldKind::List))
            .unwrap_or(FieldKind::Nested(other)),
    })
}

fn check_default(
    class: &'static str,
    attr: &Attribute,
    kind: FieldKind,
    ty: &'static str,
) -> Result<(), SchemaError> {
    let field = attr.name;
    let mismatch = SchemaError::DefaultTypeMismatch { class, field, ty };
    match (attr.field.default, kind) {
        (DefaultValue::None, _)
        | (DefaultValue::Bool(_), FieldKind::Boolean)
        | (DefaultValue::Number(_), FieldKind::Number)
        | (
            DefaultValue::Str(_),
            FieldKind::Text | FieldKind::Uri | FieldKind::Reference | FieldKind::Instant
            | FieldKind::Interval,
        ) => Ok(()),
        (DefaultValue::Str(value), FieldKind::Enumerated(enumeration)) => {
            if enumeration.contains(value) {
                Ok(())
            } else {
                Err(SchemaError::InvalidEnumDefault {
                    class,
                    field,
                    value,
                    enumeration: enumeration.name,
                })
            }
        }
        _ => Err(mismatch),
    }
}

fn compile_field(
    class: &'static str,
    attr: &Attribute,
    origin: Option<Capability>,
) -> Result<CompiledField, SchemaError> {
    let field = attr.name;
    let annotation = attr
        .field
        .ty
        .ok_or(SchemaError::MissingType { class, field })?;
    if attr.field.required && !attr.field.default.is_none() {
        return Err(SchemaError::RequiredWithDefault { class, field });
    }
    let bare = rewrite_annotation(annotation).ok_or(SchemaError::MalformedAnnotation {
        class,
        field,
        annotation,
    })?;
    let kind = resolve_kind(attr, bare).ok_or_else(|| SchemaError::EnumerationMismatch {
        class,
        field,
        annotation: bare,
        enumeration: attr.field.enumeration.map_or("", |e| e.name),
    })?;
    check_default(class, attr, kind, bare)?;
    Ok(CompiledField {
        name: field,
        type_name: bare,
        kind,
        default: attr.field.default,
        required: attr.field.required,
        interpolatable: attr.field.interpolatable,
        description: attr.field.description,
        origin,
    })
}

/// Compiles one definition.
///
/// Capability attributes come first, in the order the capabilities are
/// listed, followed by the definition's own attributes. Nested class names
/// are not resolved here; the registry checks them once every class is
/// known.
///
/// # Errors
///
/// Any [`SchemaError`] other than `UnknownType` and `DuplicateClass`.
pub fn compile_class(def: &SchemaDefinition) -> Result<ValueClass, SchemaError> {
    let class = def.class_name;
    let mut fields = Vec::new();
    let mut seen = HashSet::new();
    let inherited = def
        .bases
        .iter()
        .flat_map(|c| capability_attributes(*c).into_iter().map(move |a| (a, Some(*c))));
    let own = def.attributes.iter().cloned().map(|a| (a, None));
    for (attr, origin) in inherited.chain(own) {
        if !seen.insert(attr.name) {
            return Err(SchemaError::DuplicateField {
                class,
                field: attr.name,
            });
        }
        fields.push(compile_field(class, &attr, origin)?);
    }

    let mut rules: Vec<Rule> = def
        .bases
        .iter()
        .flat_map(|c| capability_rules(*c).iter().copied())
        .collect();
    rules.extend_from_slice(def.rules);
    for rule in &rules {
        for name in rule.fields() {
            if !seen.contains(name) {
                return Err(SchemaError::UnknownRuleField { class, field: name });
            }
        }
        if let Rule::Exclusive(group) | Rule::OneOf(group) = rule {
            for name in *group {
                let defaulted = fields
                    .iter()
                    .any(|f| f.name == *name && !f.default.is_none());
                if defaulted {
                    return Err(SchemaError::DefaultInExclusiveGroup {
                        class,
                        field: *name,
                    });
                }
            }
        }
    }

    trace!(class, fields = fields.len(), rules = rules.len(), "compiled value class");
    Ok(ValueClass::new(
        class,
        def.description,
        def.bases.to_vec(),
        fields,
        rules,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use czml_spec::enums::{HORIZONTAL_ORIGINS, VERTICAL_ORIGINS};
    use czml_spec::model::FieldDescriptor;

    fn definition(attributes: Vec<Attribute>, rules: &'static [Rule]) -> SchemaDefinition {
        SchemaDefinition {
            class_name: "Thing",
            description: "A test class.",
            bases: &[],
            attributes,
            rules,
        }
    }

    #[test]
    fn annotations_are_rewritten_to_bare_names() {
        assert_eq!(rewrite_annotation("Option<czml::values::Cartesian3>"), Some("Cartesian3"));
        assert_eq!(rewrite_annotation("typing.Optional[types.Cartesian3]"), Some("Cartesian3"));
        assert_eq!(rewrite_annotation("Optional[bool]"), Some("bool"));
        assert_eq!(rewrite_annotation("  Rgba "), Some("Rgba"));
        assert_eq!(rewrite_annotation("Option<Rgba"), None);
        assert_eq!(rewrite_annotation(""), None);
        assert_eq!(rewrite_annotation("Vec<f64>"), None);
    }

    #[test]
    fn capability_fields_come_first() {
        let def = SchemaDefinition {
            class_name: "Thing",
            description: "",
            bases: &[Capability::Deletable, Capability::Aligned],
            attributes: vec![Attribute::new("show", "Option<bool>", "")],
            rules: &[],
        };
        let class = compile_class(&def).unwrap();
        let names: Vec<&str> = class.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, ["delete", "horizontalOrigin", "verticalOrigin", "show"]);
        assert_eq!(class.fields[0].origin, Some(Capability::Deletable));
        assert_eq!(class.fields[3].origin, None);
    }

    #[test]
    fn missing_type_is_rejected() {
        let mut attr = Attribute::new("show", "bool", "");
        attr.field.ty = None;
        assert_eq!(
            compile_class(&definition(vec![attr], &[])).unwrap_err(),
            SchemaError::MissingType {
                class: "Thing",
                field: "show"
            }
        );
    }

    #[test]
    fn required_with_default_is_rejected() {
        let attr = Attribute::new("version", "String", "")
            .required()
            .default(DefaultValue::Str("1.0"));
        assert!(matches!(
            compile_class(&definition(vec![attr], &[])),
            Err(SchemaError::RequiredWithDefault { .. })
        ));
    }

    #[test]
    fn duplicate_inherited_field_is_rejected() {
        let def = SchemaDefinition {
            class_name: "Thing",
            description: "",
            bases: &[Capability::Deletable],
            attributes: vec![Attribute::new("delete", "bool", "")],
            rules: &[],
        };
        assert!(matches!(
            compile_class(&def),
            Err(SchemaError::DuplicateField { field: "delete", .. })
        ));
    }

    #[test]
    fn defaults_must_match_their_type() {
        let attr = Attribute::new("show", "bool", "").default(DefaultValue::Number(1.0));
        assert!(matches!(
            compile_class(&definition(vec![attr], &[])),
            Err(SchemaError::DefaultTypeMismatch { ty: "bool", .. })
        ));
        let attr = Attribute::enumerated("origin", &HORIZONTAL_ORIGINS, "")
            .default(DefaultValue::Str("MIDDLE"));
        assert!(matches!(
            compile_class(&definition(vec![attr], &[])),
            Err(SchemaError::InvalidEnumDefault { value: "MIDDLE", .. })
        ));
    }

    #[test]
    fn rules_must_name_fields() {
        let attrs = vec![Attribute::new("a", "f64", "")];
        assert!(matches!(
            compile_class(&definition(attrs, &[Rule::Exclusive(&["a", "b"])])),
            Err(SchemaError::UnknownRuleField { field: "b", .. })
        ));
    }

    #[test]
    fn exclusive_fields_cannot_default() {
        let attrs = vec![
            Attribute::new("a", "f64", "").default(DefaultValue::Number(0.0)),
            Attribute::new("b", "f64", ""),
        ];
        assert!(matches!(
            compile_class(&definition(attrs, &[Rule::Exclusive(&["a", "b"])])),
            Err(SchemaError::DefaultInExclusiveGroup { field: "a", .. })
        ));
    }

    #[test]
    fn enumeration_must_match_annotation() {
        let attr = Attribute {
            name: "origin",
            field: FieldDescriptor {
                ty: Some("Option<HorizontalOrigins>"),
                default: DefaultValue::None,
                required: false,
                interpolatable: false,
                description: "",
                enumeration: Some(&VERTICAL_ORIGINS),
            },
        };
        assert!(matches!(
            compile_class(&definition(vec![attr], &[])),
            Err(SchemaError::EnumerationMismatch { .. })
        ));
    }

    #[test]
    fn kinds_resolve_from_bare_names() {
        let attrs = vec![
            Attribute::new("a", "Option<f32>", ""),
            Attribute::new("b", "Option<czml::values::Rgba>", ""),
            Attribute::new("c", "CartographicDegreesList", ""),
            Attribute::new("d", "Option<Material>", ""),
            Attribute::enumerated("e", &HORIZONTAL_ORIGINS, ""),
        ];
        let class = compile_class(&definition(attrs, &[])).unwrap();
        let kinds: Vec<FieldKind> = class.fields.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            [
                FieldKind::Number,
                FieldKind::Tuple(TupleShape::Rgba),
                FieldKind::List(ListShape::CartographicDegrees),
                FieldKind::Nested("Material"),
                FieldKind::Enumerated(&HORIZONTAL_ORIGINS),
            ]
        );
        assert_eq!(class.fields[1].type_name, "Rgba");
    }
}
