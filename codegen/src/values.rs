//! Struct generation: one serde struct per value class.

use std::fmt::Write as FmtWrite;

use czml::schema::{Rule, ValueClass};

use crate::emit::{normalize_comment, RustFile};
use crate::mapping::{describe_default, rust_type, serde_attribute, to_snake_case};

/// Generates the `values.rs` file content.
///
/// Returns the source and the number of fields emitted.
pub fn generate_values_file<'a>(classes: impl IntoIterator<Item = &'a ValueClass>) -> (String, usize) {
    let mut f = RustFile::new(
        "Value classes of the property catalogue as plain serde structs.\n\
         \n\
         These mirror the runtime registry. They do not validate; build through\n\
         `czml::Registry` to get checked, normalized values.",
    );
    let mut field_count = 0;

    f.line("use serde::Serialize;");
    f.blank();
    f.line("use super::enums::*;");
    f.blank();

    for class in classes {
        field_count += class.fields.len();
        generate_struct(&mut f, class);
    }

    (f.finish(), field_count)
}

fn generate_struct(f: &mut RustFile, class: &ValueClass) {
    f.doc_comment(&normalize_comment(class.description));
    if !class.capabilities.is_empty() {
        let names: Vec<&str> = class.capabilities.iter().map(|c| c.as_str()).collect();
        f.doc_comment("");
        f.doc_comment(&format!("Capabilities: {}.", names.join(", ")));
    }
    let notes: Vec<String> = class.rules.iter().map(rule_note).collect();
    if !notes.is_empty() {
        f.doc_comment("");
        f.doc_comment("# Rules");
        f.doc_comment("");
        for note in &notes {
            f.doc_comment(&format!("- {note}"));
        }
    }
    f.line("#[derive(Debug, Clone, PartialEq, Serialize)]");
    let _ = writeln!(f.buf, "pub struct {} {{", class.name);
    for field in &class.fields {
        f.indented_doc_comment(&normalize_comment(field.description));
        if let Some(default) = describe_default(&field.default) {
            f.indented_doc_comment("");
            f.indented_doc_comment(&format!("Defaults to {default}."));
        }
        if let Some(attr) = serde_attribute(field) {
            let _ = writeln!(f.buf, "    {attr}");
        }
        let _ = writeln!(
            f.buf,
            "    pub {}: {},",
            to_snake_case(field.name),
            rust_type(field)
        );
    }
    f.line("}");
    f.blank();
}

fn rule_note(rule: &Rule) -> String {
    let list = |fields: &[&str]| {
        fields
            .iter()
            .map(|n| format!("`{n}`"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    match rule {
        Rule::Exclusive(fields) => format!("At most one of {} may be set.", list(fields)),
        Rule::OneOf(fields) => format!("Exactly one of {} must be set.", list(fields)),
        Rule::Requires { field, sibling } => format!("`{field}` requires `{sibling}`."),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use czml::Registry;

    #[test]
    fn label_struct() {
        let registry = Registry::standard().unwrap();
        let label = registry.class("Label").unwrap();
        let (out, fields) = generate_values_file([label.as_ref()]);
        assert_eq!(fields, label.fields.len());
        assert!(out.contains("pub struct Label {"));
        assert!(out.contains("/// Capabilities: Aligned."));
        assert!(out.contains("    pub horizontal_origin: Option<HorizontalOrigin>,"));
        assert!(out.contains("    #[serde(rename = \"outlineWidth\", skip_serializing_if = \"Option::is_none\")]"));
    }

    #[test]
    fn exclusive_groups_are_noted() {
        let registry = Registry::standard().unwrap();
        let position = registry.class("Position").unwrap();
        let (out, _) = generate_values_file([position.as_ref()]);
        assert!(out.contains("/// - At most one of `cartesian`"));
        assert!(out.contains("/// - `interpolationDegree` requires `interpolationAlgorithm`."));
    }

    #[test]
    fn structs_are_write_only() {
        let registry = Registry::standard().unwrap();
        let (out, _) = generate_values_file(registry.classes());
        assert!(out.contains("use serde::Serialize;"));
        assert!(out.contains("#[derive(Debug, Clone, PartialEq, Serialize)]\npub struct Packet {"));
        assert!(!out.contains("Deserialize"));
    }

    #[test]
    fn packet_box_is_a_raw_identifier() {
        let registry = Registry::standard().unwrap();
        let packet = registry.class("Packet").unwrap();
        let (out, _) = generate_values_file([packet.as_ref()]);
        assert!(out.contains("    pub r#box: Option<Box>,"));
    }

    #[test]
    fn defaults_are_documented() {
        let registry = Registry::standard().unwrap();
        let preamble = registry.class("Preamble").unwrap();
        let (out, _) = generate_values_file([preamble.as_ref()]);
        assert!(out.contains("Defaults to `\"1.0\"`."));
    }
}
