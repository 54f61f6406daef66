//! Pipeline orchestration for the main entry points.
//!
//! This module contains the entry points that coordinate fetching, table
//! extraction, grouping and code generation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use attrgen_config::{CodegenConfig, Config, SourceConfig};
use catalog::AttributeCatalog;
use chrono::NaiveDateTime;
use fetch::{DynFetcher, Fetcher, FileFetcher};
use http::HttpFetcher;

use crate::generation_context::GenerationContext;
use crate::PipelineError;

/// Pick the document source described by `source`.
///
/// A configured local `input` file wins over the `url`.
pub fn fetcher_for(source: &SourceConfig) -> DynFetcher {
    match &source.input {
        Some(path) => Arc::new(FileFetcher::new(path)),
        None => Arc::new(HttpFetcher::new(source.url.clone())),
    }
}

/// Extract the attribute catalog from the HTML of the attribute page.
///
/// Schema findings are logged, or returned as an error when `strict`.
pub fn scrape_catalog(html: &str, strict: bool) -> Result<AttributeCatalog, PipelineError> {
    logging::trace("PIPELINE", "extracting attribute table");
    let rows = scrape::extract_rows(html)?;
    let row_count = rows.len();
    tracing::info!("extracted {} rows", row_count);

    let catalog = AttributeCatalog::from_rows(rows);
    if catalog.len() < row_count {
        tracing::warn!(
            "{} duplicate attribute names, later rows replaced earlier ones",
            row_count - catalog.len()
        );
    }
    tracing::info!("catalog has {} attributes", catalog.len());

    semantics::enforce(semantics::check_schema(&catalog), strict)?;
    Ok(catalog)
}

/// Build the generation context for `html` under `config`.
pub fn build_context(
    html: &str,
    config: &CodegenConfig,
    generated_at: NaiveDateTime,
) -> Result<GenerationContext, PipelineError> {
    let catalog = scrape_catalog(html, config.strict)?;
    let groups = semantics::group_by_applicability(&catalog);
    tracing::info!("{} applicability groups", groups.len());

    GenerationContext::builder()
        .catalog(catalog)
        .groups(groups)
        .generated_at(generated_at)
        .codegen_config(config)
        .build()
}

/// Generate the module text for `html` without touching the filesystem.
pub fn generate_source(
    html: &str,
    config: &CodegenConfig,
    generated_at: NaiveDateTime,
) -> Result<String, PipelineError> {
    Ok(build_context(html, config, generated_at)?.render()?)
}

/// Run the whole pipeline: fetch, extract, group, render and write.
///
/// # Returns
///
/// The path of the written module.
pub async fn run(
    config: &Config,
    fetcher: &dyn Fetcher,
    generated_at: NaiveDateTime,
) -> Result<PathBuf, PipelineError> {
    let html = fetcher.fetch().await?;
    tracing::info!("fetched {} bytes from {}", html.len(), fetcher.source());

    let ctx = build_context(&html, &config.codegen, generated_at)?;
    let src = ctx.render()?;
    logging::trace(
        "PIPELINE",
        &format!("rendered {} bytes for {}", src.len(), ctx.output_path.display()),
    );

    codegen::write_generated(&ctx.output_path, &src)?;
    if ctx.rustfmt {
        codegen::format_with_rustfmt(&ctx.output_path)?;
    }
    tracing::info!("wrote {}", ctx.output_path.display());

    Ok(ctx.output_path)
}

/// Fetch and extract the catalog, then save it as JSON at `path`.
///
/// # Returns
///
/// The number of attributes written.
pub async fn dump_catalog(
    fetcher: &dyn Fetcher,
    strict: bool,
    path: &Path,
) -> Result<usize, PipelineError> {
    let html = fetcher.fetch().await?;
    tracing::info!("fetched {} bytes from {}", html.len(), fetcher.source());

    let catalog = scrape_catalog(&html, strict)?;
    catalog
        .to_file(path)
        .map_err(|e| PipelineError::Message(format!("Failed to write catalog: {}", e)))?;
    tracing::info!("wrote {}", path.display());

    Ok(catalog.len())
}
