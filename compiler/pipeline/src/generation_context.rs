//! Generation context for code generation pipeline.
//!
//! This module provides a unified context that encapsulates all inputs needed
//! for one generation run.

use std::path::PathBuf;

use attrgen_config::CodegenConfig;
use catalog::{ApplicabilityGroups, AttributeCatalog};
use chrono::NaiveDateTime;
use codegen::EmitOptions;

use crate::PipelineError;

/// Context containing all inputs needed for code generation
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Every scraped attribute, in document order
    pub catalog: AttributeCatalog,
    /// Attribute names grouped by normalized element-kind label
    pub groups: ApplicabilityGroups,
    /// Emission options for the generated module
    pub options: EmitOptions,
    /// Timestamp recorded in the header comment
    pub generated_at: NaiveDateTime,
    /// Where the generated module is written
    pub output_path: PathBuf,
    /// Run rustfmt over the written module
    pub rustfmt: bool,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Render the module text for this context
    pub fn render(&self) -> codegen::Result<String> {
        codegen::render_module(&self.catalog, &self.groups, &self.options, self.generated_at)
    }
}

#[derive(Default)]
/// Builder for GenerationContext
pub struct GenerationContextBuilder {
    catalog: Option<AttributeCatalog>,
    groups: Option<ApplicabilityGroups>,
    options: Option<EmitOptions>,
    generated_at: Option<NaiveDateTime>,
    output_path: Option<PathBuf>,
    rustfmt: bool,
}

impl GenerationContextBuilder {
    /// Set the attribute catalog
    pub fn catalog(mut self, catalog: AttributeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the applicability groups (derived from the catalog when omitted)
    pub fn groups(mut self, groups: ApplicabilityGroups) -> Self {
        self.groups = Some(groups);
        self
    }

    /// Set the emission options
    pub fn options(mut self, options: EmitOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the header timestamp
    pub fn generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Set the output file
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    /// Enable or disable the rustfmt pass
    pub fn rustfmt(mut self, rustfmt: bool) -> Self {
        self.rustfmt = rustfmt;
        self
    }

    /// Take emission options, output path and rustfmt flag from `config`
    pub fn codegen_config(self, config: &CodegenConfig) -> Self {
        self.options(EmitOptions {
            set_type: config.set_type.clone(),
            docs_base_url: config.docs_base_url.clone(),
        })
        .output_path(config.output_path.clone())
        .rustfmt(config.rustfmt)
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        let catalog = self
            .catalog
            .ok_or_else(|| PipelineError::Message("catalog is required".to_string()))?;
        let groups = self.groups.unwrap_or_else(|| semantics::group_by_applicability(&catalog));

        Ok(GenerationContext {
            catalog,
            groups,
            options: self.options.unwrap_or_default(),
            generated_at: self
                .generated_at
                .ok_or_else(|| PipelineError::Message("generated_at is required".to_string()))?,
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from(attrgen_config::DEFAULT_OUTPUT_PATH)),
            rustfmt: self.rustfmt,
        })
    }
}
