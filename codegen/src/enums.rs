//! Enum generation: one Rust enum per enumeration table.

use std::fmt::Write as FmtWrite;

use czml::schema::Enumeration;

use crate::emit::{normalize_comment, RustFile};
use crate::mapping::enum_type_name;

/// Generates the `enums.rs` file content.
pub fn generate_enums_file(enumerations: &[&'static Enumeration]) -> String {
    let mut f = RustFile::new("Enumerations referenced by the property catalogue.");

    f.line("use serde::Serialize;");
    f.blank();

    for e in enumerations {
        let name = enum_type_name(e);
        f.doc_comment(&normalize_comment(e.description));
        f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]");
        let _ = writeln!(f.buf, "pub enum {name} {{");
        for (variant, raw) in e.members {
            f.indented_doc_comment(&format!("`{raw}`."));
            let _ = writeln!(f.buf, "    #[serde(rename = \"{raw}\")]");
            let _ = writeln!(f.buf, "    {variant},");
        }
        f.line("}");
        f.blank();

        let _ = writeln!(f.buf, "impl {name} {{");
        f.indented_doc_comment("The raw value emitted in documents.");
        f.line("    pub fn as_str(self) -> &'static str {");
        f.line("        match self {");
        for (variant, raw) in e.members {
            let _ = writeln!(f.buf, "            Self::{variant} => \"{raw}\",");
        }
        f.line("        }");
        f.line("    }");
        f.line("}");
        f.blank();
    }

    f.finish()
}
