//! Catalogue → Rust mapping tables.
//!
//! Deterministic mappings from compiled fields to Rust identifiers and
//! types.

use czml::schema::{CompiledField, DefaultValue, Enumeration, FieldKind};
use czml::values::TupleShape;

/// Rust keywords that cannot be used as plain field identifiers.
const KEYWORDS: &[&str] = &[
    "as", "box", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where", "while",
];

/// Converts a camelCase name to a snake_case identifier.
///
/// Keywords become raw identifiers (`box` → `r#box`).
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }
    if KEYWORDS.contains(&result.as_str()) {
        format!("r#{result}")
    } else {
        result
    }
}

/// Strips a raw-identifier prefix.
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}

/// The Rust enum name for an enumeration table (`ClockSteps` → `ClockStep`).
pub fn enum_type_name(enumeration: &Enumeration) -> &'static str {
    enumeration
        .name
        .strip_suffix('s')
        .unwrap_or(enumeration.name)
}

/// The Rust type stored for a field, before `Option` wrapping.
pub fn base_type(field: &CompiledField) -> String {
    match field.kind {
        FieldKind::Boolean => "bool".to_string(),
        FieldKind::Number => "f64".to_string(),
        FieldKind::Text
        | FieldKind::Uri
        | FieldKind::Reference
        | FieldKind::Instant
        | FieldKind::Interval => "String".to_string(),
        FieldKind::Tuple(shape) if !field.interpolatable => tuple_type(shape),
        FieldKind::Tuple(_) | FieldKind::List(_) => "Vec<f64>".to_string(),
        FieldKind::Enumerated(e) => enum_type_name(e).to_string(),
        FieldKind::Nested(class) => class.to_string(),
        FieldKind::Properties => "serde_json::Map<String, serde_json::Value>".to_string(),
    }
}

fn tuple_type(shape: TupleShape) -> String {
    format!("[f64; {}]", shape.arity())
}

/// The full field type: `Option<…>` unless the field is required.
pub fn rust_type(field: &CompiledField) -> String {
    let base = base_type(field);
    if field.required {
        base
    } else {
        format!("Option<{base}>")
    }
}

/// The `#[serde(...)]` attribute for a field, if one is needed.
pub fn serde_attribute(field: &CompiledField) -> Option<String> {
    let mut parts = Vec::new();
    if unraw(&to_snake_case(field.name)) != field.name {
        parts.push(format!("rename = \"{}\"", field.name));
    }
    if !field.required {
        parts.push("skip_serializing_if = \"Option::is_none\"".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("#[serde({})]", parts.join(", ")))
    }
}

/// Renders a default for a doc note, e.g. `` `1.0` ``.
pub fn describe_default(default: &DefaultValue) -> Option<String> {
    match default {
        DefaultValue::None => None,
        DefaultValue::Bool(b) => Some(format!("`{b}`")),
        DefaultValue::Number(n) => Some(format!("`{n:?}`")),
        DefaultValue::Str(s) => Some(format!("`\"{s}\"`")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use czml::Registry;

    #[test]
    fn snake_case_conversion() {
        assert_eq!(to_snake_case("cartographicDegrees"), "cartographic_degrees");
        assert_eq!(to_snake_case("rgbaf"), "rgbaf");
        assert_eq!(to_snake_case("wsenDegrees"), "wsen_degrees");
        assert_eq!(to_snake_case("distanceDisplayCondition"), "distance_display_condition");
    }

    #[test]
    fn keywords_become_raw_identifiers() {
        assert_eq!(to_snake_case("box"), "r#box");
        assert_eq!(to_snake_case("type"), "r#type");
        assert_eq!(unraw("r#box"), "box");
    }

    #[test]
    fn enum_names_are_singular() {
        assert_eq!(enum_type_name(&czml::enums::CLOCK_STEPS), "ClockStep");
        assert_eq!(enum_type_name(&czml::enums::REFERENCE_FRAMES), "ReferenceFrame");
    }

    #[test]
    fn field_types() {
        let registry = Registry::standard().unwrap();
        let label = registry.class("Label").unwrap();
        assert_eq!(
            rust_type(label.field("horizontalOrigin").unwrap()),
            "Option<HorizontalOrigin>"
        );
        let polygon = registry.class("Polygon").unwrap();
        assert_eq!(rust_type(polygon.field("positions").unwrap()), "PositionList");

        let position = registry.class("Position").unwrap();
        assert_eq!(rust_type(position.field("cartesian").unwrap()), "Option<Vec<f64>>");
    }

    #[test]
    fn serde_attributes() {
        let registry = Registry::standard().unwrap();
        let packet = registry.class("Packet").unwrap();
        assert_eq!(
            serde_attribute(packet.field("box").unwrap()).unwrap(),
            "#[serde(skip_serializing_if = \"Option::is_none\")]"
        );
        let label = registry.class("Label").unwrap();
        assert_eq!(
            serde_attribute(label.field("outlineWidth").unwrap()).unwrap(),
            "#[serde(rename = \"outlineWidth\", skip_serializing_if = \"Option::is_none\")]"
        );
        let polygon = registry.class("Polygon").unwrap();
        assert_eq!(serde_attribute(polygon.field("positions").unwrap()), None);
    }
}
