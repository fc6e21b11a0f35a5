//! Minimal Rust source emitter.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Width generated doc comments are wrapped at, excluding the prefix.
const DOC_WIDTH: usize = 80;

/// An in-progress generated Rust source file.
#[derive(Debug, Default)]
pub struct RustFile {
    /// Accumulated source text.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with the generated-code banner and a module doc comment.
    #[must_use]
    pub fn new(module_doc: &str) -> Self {
        let mut buf = String::new();
        buf.push_str("// @generated by czml-codegen. Do not edit by hand.\n\n");
        for line in module_doc.lines() {
            if line.is_empty() {
                buf.push_str("//!\n");
            } else {
                let _ = writeln!(buf, "//! {line}");
            }
        }
        buf.push('\n');
        Self { buf }
    }

    /// Appends one line.
    pub fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a top-level `///` comment, wrapped.
    pub fn doc_comment(&mut self, text: &str) {
        self.doc_with_indent("", text);
    }

    /// Appends a `///` comment indented one level, wrapped.
    pub fn indented_doc_comment(&mut self, text: &str) {
        self.doc_with_indent("    ", text);
    }

    fn doc_with_indent(&mut self, indent: &str, text: &str) {
        if text.trim().is_empty() {
            let _ = writeln!(self.buf, "{indent}///");
            return;
        }
        for line in wrap(text, DOC_WIDTH) {
            let _ = writeln!(self.buf, "{indent}/// {line}");
        }
    }

    /// Returns the finished source, ending in exactly one newline.
    #[must_use]
    pub fn finish(self) -> String {
        let mut out = self.buf.trim_end().to_string();
        out.push('\n');
        out
    }
}

/// Collapses whitespace runs and makes sure the text ends a sentence.
#[must_use]
pub fn normalize_comment(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !out.is_empty() && !out.ends_with(['.', '!', '?', ':']) {
        out.push('.');
    }
    out
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Writes `content` to `path`, creating parent directories first.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
