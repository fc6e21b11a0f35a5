//! CZML code generator.
//!
//! Reads the compiled value classes from a `czml::Registry` and generates a
//! static Rust mirror of the property catalogue: one serde struct per class
//! and one enum per enumeration. The runtime engine never needs this output;
//! it exists for callers who want plain typed structs to fill in and write
//! out. The mirror is write-only: it derives `Serialize` and nothing reads
//! documents back into it.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod enums;
pub mod mapping;
pub mod values;

use std::path::Path;

use anyhow::Result;
use czml::Registry;
use tracing::debug;

use emit::RustFile;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of structs generated.
    pub struct_count: usize,
    /// Number of struct fields generated.
    pub field_count: usize,
    /// Number of enums generated.
    pub enum_count: usize,
    /// Files written.
    pub files: Vec<String>,
}

/// Generates the mirror module (`mod.rs`, `enums.rs`, `values.rs`) into
/// `out_dir`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(registry: &Registry, out_dir: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();

    // 1. Generate enums.rs
    let enumerations = registry.enumerations();
    report.enum_count = enumerations.len();
    emit::write_file(
        &out_dir.join("enums.rs"),
        &enums::generate_enums_file(&enumerations),
    )?;
    report.files.push("enums.rs".to_string());

    // 2. Generate values.rs
    let (content, field_count) = values::generate_values_file(registry.classes());
    report.struct_count = registry.classes().count();
    report.field_count = field_count;
    emit::write_file(&out_dir.join("values.rs"), &content)?;
    report.files.push("values.rs".to_string());

    // 3. Generate mod.rs
    emit::write_file(&out_dir.join("mod.rs"), &generate_mod_rs())?;
    report.files.push("mod.rs".to_string());

    debug!(
        structs = report.struct_count,
        fields = report.field_count,
        enums = report.enum_count,
        "generated catalogue mirror"
    );
    Ok(report)
}

/// Generates the module root re-exporting both files.
fn generate_mod_rs() -> String {
    let mut f = RustFile::new(&format!(
        "Static mirror of the CZML {} property catalogue.",
        czml::spec::CZML_VERSION
    ));
    f.line("pub mod enums;");
    f.line("pub mod values;");
    f.blank();
    f.line("pub use enums::*;");
    f.line("pub use values::*;");
    f.finish()
}
