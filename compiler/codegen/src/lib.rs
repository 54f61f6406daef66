#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for the typed attribute model.
//!
//! This crate turns an [`AttributeCatalog`] and its [`ApplicabilityGroups`]
//! into one self-contained Rust module: an `Attribute` enum covering every
//! attribute name and one `<Kind>Attributes` collection type per element kind.
//!
//! Fetching, table extraction and grouping live in companion crates; this one
//! only renders text and writes it to disk.

pub mod generators;

use std::fs;
use std::path::Path;
use std::process::Command;

use catalog::{ApplicabilityGroups, AttributeCatalog};
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::generators::{AttributeEnumGenerator, AttributeSetsGenerator, PreludeGenerator};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Underlying I/O error while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Formatting error when building generated source.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
    /// The catalog has no attributes, so no enum can be emitted.
    #[error("attribute catalog is empty")]
    EmptyCatalog,
    /// A name cannot be turned into a Rust identifier.
    #[error("`{name}` cannot be used as an identifier: {reason}")]
    InvalidIdentifier {
        /// Attribute name or element-kind label.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Two distinct names map onto the same generated identifier.
    #[error("`{first}` and `{second}` both generate identifier `{identifier}`")]
    IdentifierCollision {
        /// The generated identifier.
        identifier: String,
        /// Name that claimed the identifier first.
        first: String,
        /// Name that collided with it.
        second: String,
    },
    /// The temporary output file could not be moved over the destination.
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Default ordered-set type backing the generated collections.
pub const DEFAULT_SET_TYPE: &str = "indexmap::IndexSet";
/// Default base URL of the per-attribute documentation pages.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://graphviz.org/docs/attrs/";
/// Format of the generation timestamp in the header comment.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Knobs that change the emitted text without changing its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Path of the ordered-set type, imported by the prelude.
    ///
    /// Must be `indexmap::IndexSet` or an alias of it.
    pub set_type: String,
    /// Base URL for `Read more` links on enum variants.
    pub docs_base_url: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { set_type: DEFAULT_SET_TYPE.into(), docs_base_url: DEFAULT_DOCS_BASE_URL.into() }
    }
}

/// Everything a section generator reads.
#[derive(Debug, Clone, Copy)]
pub struct AttributeModel<'a> {
    /// All attributes, in document order.
    pub catalog: &'a AttributeCatalog,
    /// Attribute names per normalized element-kind label.
    pub groups: &'a ApplicabilityGroups,
    /// Emission options.
    pub options: &'a EmitOptions,
}

/// Defines the core interface for rendering one section of the attribute
/// module. Implementors return the section text and may reject a model they
/// cannot render into compilable code.
pub trait CodeGenerator {
    /// Render this generator's section.
    fn generate(&self, model: &AttributeModel<'_>) -> Result<String>;

    /// Optional validation step before generation (default is no-op).
    fn validate(&self, _model: &AttributeModel<'_>) -> Result<()> { Ok(()) }
}

/// Header comment recording when the module was generated.
pub fn header(generated_at: NaiveDateTime) -> String {
    format!("// Automatically generated on: {} .\n", generated_at.format(TIMESTAMP_FORMAT))
}

/// Render the complete attribute module.
///
/// The output is a pure function of the inputs: the same catalog, groups,
/// options and timestamp always yield byte-identical text.
pub fn render_module(
    catalog: &AttributeCatalog,
    groups: &ApplicabilityGroups,
    options: &EmitOptions,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let model = AttributeModel { catalog, groups, options };
    let generators: [&dyn CodeGenerator; 3] =
        [&PreludeGenerator, &AttributeEnumGenerator, &AttributeSetsGenerator];

    for generator in generators {
        generator.validate(&model)?;
    }

    let mut sections = vec![header(generated_at)];
    for generator in generators {
        let section = generator.generate(&model)?;
        if !section.is_empty() {
            sections.push(section);
        }
    }

    logging::trace(
        "CODEGEN",
        &format!(
            "rendered {} variants and {} collection types",
            catalog.len(),
            groups.len()
        ),
    );
    Ok(clean_generated_source(&sections.join("\n")))
}

/// Formats a Rust source file in place using rustfmt.
///
/// A missing `rustfmt` binary is reported as an error; a non-zero exit
/// status is reported as a message.
pub fn format_with_rustfmt(path: &Path) -> Result<()> {
    let status = Command::new("rustfmt").arg("--edition=2021").arg(path).status()?;
    if !status.success() {
        return Err(CodegenError::Message(format!(
            "rustfmt exited with {status} for {}",
            path.display()
        )));
    }
    Ok(())
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
pub fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<String> = src.lines().map(|l| l.trim_end().to_string()).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Persist generated source at `path`, replacing any existing file.
///
/// The text is written to a temporary file in the destination directory and
/// renamed over `path`, so readers never observe a partially written module.
/// Parent directories are created as needed.
pub fn write_generated<P: AsRef<Path>>(path: P, src: &str) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    std::io::Write::write_all(&mut tmp, src.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    logging::trace("CODEGEN", &format!("wrote {} bytes to {}", src.len(), path.display()));
    Ok(())
}

/// Sub-crate: **`utils`**
///
/// Name transforms and the value quoting helper.
pub mod utils;

#[cfg(test)]
mod tests {
    use catalog::RawAttributeRow;
    use chrono::NaiveDate;

    use super::*;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 2, 1)
            .and_then(|d| d.and_hms_micro_opt(7, 56, 16, 127_273))
            .expect("valid timestamp")
    }

    fn sample() -> (AttributeCatalog, ApplicabilityGroups) {
        let catalog = AttributeCatalog::from_rows(vec![
            RawAttributeRow::new("_background", "Arbitrary background.", "Graphs"),
            RawAttributeRow::new("area", "Preferred area.", "Nodes, Clusters"),
            RawAttributeRow::new("arrowhead", "Style of arrowhead.", "Edges"),
        ]);
        let mut groups = ApplicabilityGroups::new();
        groups.insert("Graphs", "_background");
        groups.insert("Vertexs", "area");
        groups.insert("Clusters", "area");
        groups.insert("Edges", "arrowhead");
        (catalog, groups)
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header(timestamp()),
            "// Automatically generated on: 2023-02-01 07:56:16.127273 .\n"
        );
    }

    #[test]
    fn test_render_module_layout() {
        let (catalog, groups) = sample();
        let out = render_module(&catalog, &groups, &EmitOptions::default(), timestamp())
            .expect("render");

        assert!(out.starts_with(
            "// Automatically generated on: 2023-02-01 07:56:16.127273 .\n\n\
             use std::hash::{Hash, Hasher};\n\nuse indexmap::IndexSet;\n\n/// Quote string if necessary.\n"
        ));
        let quote_fn = out.find("fn quote(").expect("quote");
        let attribute = out.find("pub enum Attribute {").expect("enum");
        let graph = out.find("pub struct GraphAttributes {").expect("graph");
        let edge = out.find("pub struct EdgeAttributes {").expect("edge");
        assert!(quote_fn < attribute && attribute < graph && graph < edge);
        assert!(out.ends_with("        self.attributes.into_iter()\n    }\n}\n"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn test_render_module_is_deterministic() {
        let (catalog, groups) = sample();
        let options = EmitOptions::default();
        let a = render_module(&catalog, &groups, &options, timestamp()).expect("render");
        let b = render_module(&catalog, &groups, &options, timestamp()).expect("render");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_set_type() {
        let (catalog, groups) = sample();
        let options = EmitOptions {
            set_type: "crate::types::FxIndexSet".into(),
            docs_base_url: "https://example.org/attrs/".into(),
        };
        let out = render_module(&catalog, &groups, &options, timestamp()).expect("render");
        assert!(out.contains("use crate::types::FxIndexSet;"));
        assert!(out.contains("    attributes: FxIndexSet<Attribute>,"));
        assert!(out.contains("<a href=\"https://example.org/attrs/background/\""));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let result = render_module(
            &AttributeCatalog::new(),
            &ApplicabilityGroups::new(),
            &EmitOptions::default(),
            timestamp(),
        );
        assert!(matches!(result, Err(CodegenError::EmptyCatalog)));
    }

    #[test]
    fn test_format_with_rustfmt() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("attributes.rs");
        write_generated(&path, "pub   fn   f( ) {}\n").expect("write");

        match format_with_rustfmt(&path) {
            Ok(()) => assert_eq!(fs::read_to_string(&path).expect("read"), "pub fn f() {}\n"),
            // rustfmt is not installed
            Err(CodegenError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => panic!("rustfmt failed: {e}"),
        }
    }

    #[test]
    fn test_format_with_rustfmt_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(format_with_rustfmt(&dir.path().join("missing.rs")).is_err());
    }

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("a  \nb\n\n\n"), "a\nb\n");
        assert_eq!(clean_generated_source("\n\n"), "");
    }
}
