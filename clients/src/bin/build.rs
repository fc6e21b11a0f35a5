//! `czml-build` — Compiles the CZML property catalogue and writes its static
//! Rust mirror to the output directory.
//!
//! **Outputs:**
//! - `<out>/enums.rs` — one enum per enumeration
//! - `<out>/values.rs` — one serde struct per value class
//! - `<out>/mod.rs` — module root
//!
//! **Usage:**
//! ```
//! czml-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use czml::spec::Catalogue;
use czml::Registry;
use tracing_subscriber::EnvFilter;

/// Generate the static catalogue mirror.
#[derive(Parser)]
#[command(name = "czml-build", about = "Generate the CZML catalogue mirror module")]
struct Args {
    /// Output directory for generated sources.
    #[arg(long, default_value = "generated")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let out = &args.out;

    let catalogue = Catalogue::full();
    let registry = Registry::standard().context("Failed to compile the property catalogue")?;

    // Print summary
    println!(
        "CZML catalogue v{}: {} classes, {} attributes, {} enumerations",
        catalogue.version,
        catalogue.class_count(),
        catalogue.attribute_count(),
        catalogue.enumerations.len()
    );

    let report = czml_codegen::generate(registry, out)
        .with_context(|| format!("Failed to generate into {}", out.display()))?;
    for file in &report.files {
        println!("  Written: {}", out.join(file).display());
    }
    println!(
        "  {} structs, {} fields, {} enums",
        report.struct_count, report.field_count, report.enum_count
    );

    println!("Build complete.");
    Ok(())
}
